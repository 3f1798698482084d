//! # tincture-palette: harmony and accessibility engine
//!
//! Builds related color sets from a single seed and judges whether
//! foreground/background pairs are readable.
//!
//! # Architecture
//!
//! ```text
//!            &str input
//!                │
//!                ▼
//! api.rs:       parse once → typed core, or fixed fallback on bad input
//!                │
//!        ┌───────┴─────────────┐
//!        ▼                     ▼
//! harmony.rs:  hue rotations   contrast.rs: luminance, ratio, WCAG tier
//! scale.rs:    tints, shades,  vision.rs:   color-blindness filters
//!              blends, ramps   suggest.rs:  accessible alternatives
//!                              audit.rs:    every pair of a palette (rayon)
//! ```
//!
//! # Color Space
//!
//! Hue arithmetic happens in HSL, the wheel designers expect. Anything that
//! moves lightness or blends two colors goes through CIE LCH so equal steps
//! look equal, and results are gamut-mapped back to sRGB by reducing chroma.
//! Contrast is always measured on the final 8-bit color.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Loop indices and counts become interpolation fractions.
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod api;
pub mod audit;
pub mod contrast;
pub mod harmony;
pub mod scale;
pub mod suggest;
pub mod vision;

pub use audit::{PairReport, audit_palette};
pub use contrast::{ContrastResult, TierResult, WcagLevel, check_compliance, contrast_ratio, relative_luminance};
pub use harmony::{ColorHarmony, HarmonyKind};
pub use scale::{ScaleStep, TintsAndShades};
pub use suggest::{
    AccessibilitySuggestion, SuggestionKind, ensure_readability, find_best_accessible_color,
    readable_text_color, suggest_accessible_alternatives,
};
pub use tincture_color::{Color, ParseColorError};
pub use vision::{ColorBlindnessFilter, FILTERS, filter_by_name, filters, simulate_all, simulate_color_blindness};
