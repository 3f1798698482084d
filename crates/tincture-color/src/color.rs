// SPDX-License-Identifier: MIT
//
// tincture color value.
//
// A `Color` is an 8-bit sRGB triple with an 8-bit alpha channel. That is
// the precision every downstream consumer (CSS, SVG, swatch files) works
// at, so storing it directly means `to_hex` is exact and two colors that
// print the same compare equal.
//
// Operations reach into a working space only for the duration of a call:
//
//   HSL  → color-wheel arithmetic (hue rotation, lightness sweeps)
//   LCH  → perceptual arithmetic (tints, shades, blends, tonal scales)
//
// Results come back to 8-bit sRGB. LCH results that fall outside sRGB are
// brought in by reducing chroma, which keeps lightness and hue intact.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

use crate::parse::{ParseColorError, parse};
use crate::space::{
    Hsl, Hsv, Lab, Lch, hsl_to_rgb, hsv_to_rgb, in_gamut, interpolate_hue, lab_to_lch, lab_to_rgb,
    lch_to_rgb, normalize_hue, rgb_to_hsl, rgb_to_hsv, rgb_to_lab,
};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable sRGB color with alpha.
///
/// # Examples
///
/// ```
/// use tincture_color::Color;
///
/// let coral = Color::parse("#ff7f50").unwrap();
/// assert_eq!(coral, Color::rgb(255, 127, 80));
///
/// // Color-wheel arithmetic happens in HSL.
/// let opposite = coral.complement();
/// assert_eq!(opposite.to_hex(), "#50d0ff");
///
/// // Perceptual mixing happens in LCH.
/// let halfway = coral.mix_lch(&Color::WHITE, 0.5);
/// assert!(halfway.to_lch().l > coral.to_lch().l);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha, 255 = fully opaque.
    pub a: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from 8-bit channels with alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a color from text.
    ///
    /// Accepts hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `#` optional,
    /// any case) and CSS forms such as `rgb(…)`, `hsl(…)` or `rebeccapurple`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if the text is empty or not a color.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        parse(s)
    }

    /// Create an opaque color from normalized sRGB channels.
    ///
    /// Channels are clamped to 0.0–1.0 and rounded to the nearest 8-bit step.
    #[must_use]
    pub fn from_rgb_f64(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Create an opaque color from HSL.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl);
        Self::from_rgb_f64(r, g, b)
    }

    /// Create an opaque color from HSV.
    #[must_use]
    pub fn from_hsv(hsv: Hsv) -> Self {
        let (r, g, b) = hsv_to_rgb(hsv);
        Self::from_rgb_f64(r, g, b)
    }

    /// Create an opaque color from CIE Lab. Out-of-gamut input is clipped
    /// per channel; use [`from_lch`](Self::from_lch) for hue-preserving
    /// gamut mapping.
    #[must_use]
    pub fn from_lab(lab: Lab) -> Self {
        let (r, g, b) = lab_to_rgb(lab);
        Self::from_rgb_f64(r, g, b)
    }

    /// Create an opaque color from CIE LCH.
    ///
    /// Lightness is clamped to 0–100. If the result is outside sRGB, chroma
    /// is reduced until it fits, so lightness and hue are preserved.
    #[must_use]
    pub fn from_lch(lch: Lch) -> Self {
        let (r, g, b) = gamut_map(lch);
        Self::from_rgb_f64(r, g, b)
    }

    /// Replace the alpha channel.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Normalized sRGB channels (0.0–1.0), alpha excluded.
    #[must_use]
    pub fn to_rgb_f64(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_rgb_f64();
        rgb_to_hsl(r, g, b)
    }

    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        let (r, g, b) = self.to_rgb_f64();
        rgb_to_hsv(r, g, b)
    }

    #[must_use]
    pub fn to_lab(self) -> Lab {
        let (r, g, b) = self.to_rgb_f64();
        rgb_to_lab(r, g, b)
    }

    #[must_use]
    pub fn to_lch(self) -> Lch {
        lab_to_lch(self.to_lab())
    }

    /// Lowercase `#rrggbb`. Alpha is never emitted.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    // ─── Color-wheel operations (HSL) ────────────────────────────────────

    /// Rotate the HSL hue by `degrees` (wraps around 360°).
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        let hsl = self.to_hsl();
        self.rebuild_hsl(Hsl { h: normalize_hue(hsl.h + degrees), ..hsl })
    }

    /// Set the HSL hue to an absolute angle.
    #[must_use]
    pub fn with_hue(self, h: f64) -> Self {
        let hsl = self.to_hsl();
        self.rebuild_hsl(Hsl { h: normalize_hue(h), ..hsl })
    }

    /// Set HSL lightness (clamped to 0.0–1.0), keeping hue and saturation.
    #[must_use]
    pub fn with_hsl_lightness(self, l: f64) -> Self {
        let hsl = self.to_hsl();
        self.rebuild_hsl(Hsl { l: l.clamp(0.0, 1.0), ..hsl })
    }

    /// Increase HSL lightness by `amount` (clamped to 1.0).
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        self.with_hsl_lightness(self.to_hsl().l + amount)
    }

    /// Decrease HSL lightness by `amount` (clamped to 0.0).
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.with_hsl_lightness(self.to_hsl().l - amount)
    }

    /// The color opposite on the HSL wheel (hue + 180°).
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        self.rotate_hue(180.0)
    }

    fn rebuild_hsl(self, hsl: Hsl) -> Self {
        Self::from_hsl(hsl).with_alpha(self.a)
    }

    // ─── Perceptual operations (LCH) ─────────────────────────────────────

    /// Set LCH lightness (0–100), keeping chroma and hue where the gamut
    /// allows.
    #[must_use]
    pub fn with_lch_lightness(self, l: f64) -> Self {
        let lch = self.to_lch();
        Self::from_lch(Lch { l, ..lch }).with_alpha(self.a)
    }

    /// Mix with another color in LCH space.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`. Hue takes the
    /// shortest path around the wheel; a gray endpoint has no hue of its own
    /// and borrows the other endpoint's.
    #[must_use]
    pub fn mix_lch(self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let a = self.to_lch();
        let b = other.to_lch();

        let h = match (a.is_achromatic(), b.is_achromatic()) {
            (true, true) => 0.0,
            (true, false) => b.h,
            (false, true) => a.h,
            (false, false) => interpolate_hue(a.h, b.h, t),
        };

        let mixed = Lch {
            l: (b.l - a.l).mul_add(t, a.l),
            c: (b.c - a.c).mul_add(t, a.c),
            h,
        };
        let alpha = (f64::from(other.a) - f64::from(self.a)).mul_add(t, f64::from(self.a));
        Self::from_lch(mixed).with_alpha(to_u8(alpha / 255.0))
    }

    /// CIE76 color difference (Euclidean distance in Lab).
    ///
    /// Around 2.3 is a just-noticeable difference.
    #[must_use]
    pub fn distance(self, other: &Self) -> f64 {
        let p = self.to_lab();
        let q = other.to_lab();
        let dl = p.l - q.l;
        let da = p.a - q.a;
        let db = p.b - q.b;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color({})", self.to_hex())
        } else {
            write!(f, "Color({}{:02x})", self.to_hex(), self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(de::Error::custom)
    }
}

// ─── Gamut mapping ───────────────────────────────────────────────────────────

/// Resolve an LCH color to sRGB, reducing chroma until it fits the gamut.
fn gamut_map(lch: Lch) -> (f64, f64, f64) {
    let lch = Lch {
        l: lch.l.clamp(0.0, 100.0),
        c: lch.c.max(0.0),
        h: lch.h,
    };

    let direct = lch_to_rgb(lch);
    if in_gamut(direct) {
        return direct;
    }

    // Binary search for the maximum in-gamut chroma.
    let mut lo = 0.0;
    let mut hi = lch.c;
    for _ in 0..24 {
        let mid = (lo + hi) * 0.5;
        if in_gamut(lch_to_rgb(Lch { c: mid, ..lch })) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lch_to_rgb(Lch { c: lo, ..lch })
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
