// SPDX-License-Identifier: MIT
//
// tincture-color: the color value underneath tincture.
//
// One small `Copy` type (`Color`, 8-bit sRGB + alpha) plus the math to move
// it through the working spaces palette generation needs: HSL and HSV for
// color-wheel arithmetic, CIE Lab and LCH for perceptual arithmetic.
// Parsing accepts hex and every CSS color notation; output is always
// lowercase `#rrggbb`.

pub mod color;
pub mod parse;
pub mod space;

pub use color::Color;
pub use parse::ParseColorError;
pub use space::{Hsl, Hsv, Lab, Lch};
