//! Color-wheel harmonies: hue arithmetic in HSL.
//!
//! Each harmony takes a base color and returns related colors in a fixed,
//! deterministic order. Hue rotations keep saturation and lightness; the
//! monochromatic sweep keeps hue and saturation.

use serde::Serialize;
use tincture_color::Color;

/// Hue step between neighbours in an analogous harmony.
const ANALOGOUS_STEP: f64 = 30.0;

/// Lightness range swept by the monochromatic harmony.
const MONO_MIN_L: f64 = 0.1;
const MONO_SPAN_L: f64 = 0.8;

/// The six color-wheel relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    /// One hue, lightness swept from dark to light.
    Monochromatic,
    /// Neighbouring hues 30° apart, centered on the base.
    Analogous,
    /// Three hues 120° apart.
    Triadic,
    /// The base and its opposite.
    Complementary,
    /// The base and the two neighbours of its opposite.
    SplitComplementary,
    /// Four hues 90° apart.
    Tetradic,
}

impl HarmonyKind {
    /// Display name, as shown to users and written into exports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "Monochromatic",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::Complementary => "Complementary",
            Self::SplitComplementary => "Split Complementary",
            Self::Tetradic => "Tetradic",
        }
    }

    /// Command-line / config identifier.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Tetradic => "tetradic",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Monochromatic => "Variations of a single hue with different lightness",
            Self::Analogous => "Colors adjacent to each other on the color wheel",
            Self::Triadic => "Three colors evenly spaced around the color wheel",
            Self::Complementary => "Colors opposite each other on the color wheel",
            Self::SplitComplementary => "Base color plus the two colors adjacent to its complement",
            Self::Tetradic => "Four colors evenly spaced around the color wheel",
        }
    }

    /// Parse from a slug or display name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|k| k.slug() == lower || k.name().to_lowercase() == lower)
            .copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochromatic,
            Self::Analogous,
            Self::Triadic,
            Self::Complementary,
            Self::SplitComplementary,
            Self::Tetradic,
        ]
    }

    /// Generate this harmony. `count` only affects the monochromatic and
    /// analogous harmonies; the others have a fixed size.
    #[must_use]
    pub fn generate(self, base: Color, count: usize) -> Vec<Color> {
        match self {
            Self::Monochromatic => monochromatic(base, count),
            Self::Analogous => analogous(base, count),
            Self::Triadic => triadic(base),
            Self::Complementary => complementary(base),
            Self::SplitComplementary => split_complementary(base),
            Self::Tetradic => tetradic(base),
        }
    }
}

/// A named harmony ready for rendering or export.
///
/// `colors` holds lowercase `#rrggbb` strings and is never empty. A
/// single-entry harmony can mean the input did not parse; check
/// `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorHarmony {
    pub name: String,
    pub colors: Vec<String>,
    pub description: String,
}

impl ColorHarmony {
    /// Generate `kind` from `base` and package it.
    #[must_use]
    pub fn build(kind: HarmonyKind, base: Color, count: usize) -> Self {
        Self {
            name: kind.name().to_owned(),
            colors: kind.generate(base, count).into_iter().map(Color::to_hex).collect(),
            description: kind.description().to_owned(),
        }
    }

    /// The degenerate harmony returned for text that is not a color: the
    /// input echoed back as the only entry.
    #[must_use]
    pub fn invalid(kind: HarmonyKind, input: &str) -> Self {
        Self {
            name: kind.name().to_owned(),
            colors: vec![input.to_owned()],
            description: format!("Invalid color: {input}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Hue and saturation fixed, HSL lightness swept linearly from 0.10 to 0.90.
///
/// The first color is the 10% point, not `base` itself. A single-color
/// sweep lands on the 0.5 midpoint; `count == 0` is treated as 1.
#[must_use]
pub fn monochromatic(base: Color, count: usize) -> Vec<Color> {
    let count = count.max(1);
    if count == 1 {
        return vec![base.with_hsl_lightness(0.5)];
    }

    let last = (count - 1) as f64;
    (0..count)
        .map(|i| base.with_hsl_lightness(MONO_SPAN_L.mul_add(i as f64 / last, MONO_MIN_L)))
        .collect()
}

/// Hues 30° apart centered on the base: offset `(i - count/2) * 30°`.
#[must_use]
pub fn analogous(base: Color, count: usize) -> Vec<Color> {
    let count = count.max(1);
    let center = (count / 2) as f64;
    (0..count)
        .map(|i| base.rotate_hue((i as f64 - center) * ANALOGOUS_STEP))
        .collect()
}

/// Offsets 0°, 120°, 240°.
#[must_use]
pub fn triadic(base: Color) -> Vec<Color> {
    rotations(base, &[0.0, 120.0, 240.0])
}

/// The base and its 180° opposite.
#[must_use]
pub fn complementary(base: Color) -> Vec<Color> {
    rotations(base, &[0.0, 180.0])
}

/// The base, complement + 30°, complement − 30°.
#[must_use]
pub fn split_complementary(base: Color) -> Vec<Color> {
    rotations(base, &[0.0, 210.0, 150.0])
}

/// Offsets 0°, 90°, 180°, 270°.
#[must_use]
pub fn tetradic(base: Color) -> Vec<Color> {
    rotations(base, &[0.0, 90.0, 180.0, 270.0])
}

fn rotations(base: Color, offsets: &[f64]) -> Vec<Color> {
    offsets.iter().map(|&deg| base.rotate_hue(deg)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
