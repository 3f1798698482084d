//! Text-in, text-out entry points.
//!
//! Each function parses its color arguments once and hands them to the typed
//! core. Input that is not a color never produces an error here: it is logged
//! at debug level and the function returns its fixed fallback value (usually
//! the input echoed back), so callers only ever need to recognize degenerate
//! output such as a one-entry harmony or a ratio of exactly 1.

use log::debug;
use tincture_color::{Color, ParseColorError};

use crate::contrast::{self, ContrastResult};
use crate::harmony::{ColorHarmony, HarmonyKind};
use crate::scale::{self, ScaleStep, TintsAndShades};
use crate::suggest::{self, AccessibilitySuggestion};
use crate::vision;

/// Key used for the single step of a fallback design-system scale.
const FALLBACK_SCALE_KEY: u16 = 500;

fn parse(input: &str) -> Result<Color, ParseColorError> {
    Color::parse(input).inspect_err(|e| debug!("falling back: {e}"))
}

fn parse_pair(a: &str, b: &str) -> Result<(Color, Color), ParseColorError> {
    Ok((parse(a)?, parse(b)?))
}

// ---------------------------------------------------------------------------
// Harmonies
// ---------------------------------------------------------------------------

/// Any harmony by kind.
#[must_use]
pub fn harmony(kind: HarmonyKind, base: &str, count: usize) -> ColorHarmony {
    match parse(base) {
        Ok(color) => ColorHarmony::build(kind, color, count),
        Err(_) => ColorHarmony::invalid(kind, base),
    }
}

#[must_use]
pub fn monochromatic(base: &str, count: usize) -> ColorHarmony {
    harmony(HarmonyKind::Monochromatic, base, count)
}

#[must_use]
pub fn analogous(base: &str, count: usize) -> ColorHarmony {
    harmony(HarmonyKind::Analogous, base, count)
}

#[must_use]
pub fn triadic(base: &str) -> ColorHarmony {
    harmony(HarmonyKind::Triadic, base, 0)
}

#[must_use]
pub fn complementary(base: &str) -> ColorHarmony {
    harmony(HarmonyKind::Complementary, base, 0)
}

#[must_use]
pub fn split_complementary(base: &str) -> ColorHarmony {
    harmony(HarmonyKind::SplitComplementary, base, 0)
}

#[must_use]
pub fn tetradic(base: &str) -> ColorHarmony {
    harmony(HarmonyKind::Tetradic, base, 0)
}

// ---------------------------------------------------------------------------
// Scales
// ---------------------------------------------------------------------------

/// Fallback: both lists hold just the input.
#[must_use]
pub fn tints_and_shades(base: &str, count: usize) -> TintsAndShades {
    parse(base).map_or_else(
        |_| TintsAndShades {
            tints: vec![base.to_owned()],
            shades: vec![base.to_owned()],
        },
        |color| scale::tints_and_shades(color, count),
    )
}

/// Fallback: the two inputs, unchanged.
#[must_use]
pub fn shades_between(from: &str, to: &str, count: usize) -> Vec<String> {
    parse_pair(from, to).map_or_else(
        |_| vec![from.to_owned(), to.to_owned()],
        |(a, b)| {
            scale::shades_between(a, b, count)
                .into_iter()
                .map(Color::to_hex)
                .collect()
        },
    )
}

fn fallback_scale(base: &str) -> Vec<ScaleStep> {
    vec![ScaleStep {
        key: FALLBACK_SCALE_KEY,
        color: base.to_owned(),
    }]
}

/// Fallback: a single step keyed 500 holding the input.
#[must_use]
pub fn tailwind_scale(base: &str) -> Vec<ScaleStep> {
    parse(base).map_or_else(|_| fallback_scale(base), scale::tailwind_scale)
}

/// Fallback: a single step keyed 500 holding the input.
#[must_use]
pub fn material_design(base: &str) -> Vec<ScaleStep> {
    parse(base).map_or_else(|_| fallback_scale(base), scale::material_design)
}

// ---------------------------------------------------------------------------
// Accessibility
// ---------------------------------------------------------------------------

/// Fallback: `0.0`.
#[must_use]
pub fn relative_luminance(color: &str) -> f64 {
    parse(color).map_or(0.0, contrast::relative_luminance)
}

/// Fallback: `1.0`, as if both colors were identical.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    parse_pair(a, b).map_or(1.0, |(a, b)| contrast::contrast_ratio(a, b))
}

/// Fallback: the failing result for a ratio of 1.
#[must_use]
pub fn check_compliance(foreground: &str, background: &str, is_large_text: bool) -> ContrastResult {
    parse_pair(foreground, background).map_or_else(
        |_| ContrastResult::from_ratio(1.0, is_large_text),
        |(fg, bg)| contrast::check_compliance(fg, bg, is_large_text),
    )
}

/// Simulate by filter name. Fallback: the input echoed unchanged. An
/// unknown filter name leaves the (normalized) color untouched.
#[must_use]
pub fn simulate_color_blindness(color: &str, filter_name: &str) -> String {
    let Ok(parsed) = parse(color) else {
        return color.to_owned();
    };
    match vision::filter_by_name(filter_name) {
        Some(filter) => vision::simulate_color_blindness(parsed, filter).to_hex(),
        None => {
            debug!("unknown filter {filter_name:?}; color unchanged");
            parsed.to_hex()
        }
    }
}

/// Fallback: no suggestions.
#[must_use]
pub fn suggest_accessible_alternatives(
    foreground: &str,
    background: &str,
    is_large_text: bool,
) -> Vec<AccessibilitySuggestion> {
    parse_pair(foreground, background).map_or_else(
        |_| Vec::new(),
        |(fg, bg)| suggest::suggest_accessible_alternatives(fg, bg, is_large_text),
    )
}

/// Fallback: `None`.
#[must_use]
pub fn find_best_accessible_color(
    foreground: &str,
    background: &str,
    is_large_text: bool,
) -> Option<String> {
    let (fg, bg) = parse_pair(foreground, background).ok()?;
    suggest::find_best_accessible_color(fg, bg, is_large_text).map(Color::to_hex)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::WcagLevel;
    use pretty_assertions::assert_eq;

    const BAD: &str = "invalid";

    #[test]
    fn harmonies_echo_invalid_input() {
        for h in [
            monochromatic(BAD, 5),
            analogous(BAD, 5),
            triadic(BAD),
            complementary(BAD),
            split_complementary(BAD),
            tetradic(BAD),
        ] {
            assert_eq!(h.colors, vec![BAD.to_owned()], "{}", h.name);
            assert_eq!(h.description, "Invalid color: invalid");
        }
    }

    #[test]
    fn scales_fall_back() {
        let ts = tints_and_shades(BAD, 5);
        assert_eq!(ts.tints, vec![BAD.to_owned()]);
        assert_eq!(ts.shades, vec![BAD.to_owned()]);

        assert_eq!(
            shades_between("#ff0000", BAD, 5),
            vec!["#ff0000".to_owned(), BAD.to_owned()]
        );

        let expected = vec![ScaleStep { key: 500, color: BAD.to_owned() }];
        assert_eq!(tailwind_scale(BAD), expected);
        assert_eq!(material_design(BAD), expected);
    }

    #[test]
    fn accessibility_falls_back() {
        assert_eq!(relative_luminance(BAD), 0.0);
        assert_eq!(contrast_ratio(BAD, "#ffffff"), 1.0);
        assert_eq!(contrast_ratio("#ffffff", BAD), 1.0);

        let result = check_compliance(BAD, "#ffffff", false);
        assert_eq!(result.ratio, 1.0);
        assert_eq!(result.level, WcagLevel::Fail);

        assert_eq!(simulate_color_blindness(BAD, "Protanopia"), BAD);
        assert!(suggest_accessible_alternatives(BAD, "#ffffff", false).is_empty());
        assert_eq!(find_best_accessible_color(BAD, "#ffffff", false), None);
    }

    #[test]
    fn valid_input_reaches_the_core() {
        assert_eq!(monochromatic("#ff0000", 5).colors.len(), 5);
        assert_eq!(triadic("#ff0000").colors.len(), 3);
        assert_eq!(tailwind_scale("#3b82f6").len(), 19);
        assert!(contrast_ratio("#000000", "#ffffff") > 20.0);
        assert_eq!(check_compliance("#000000", "#ffffff", false).level, WcagLevel::Aaa);
    }

    #[test]
    fn outputs_are_normalized_hex() {
        assert_eq!(complementary("#FF0000").colors, vec!["#ff0000", "#00ffff"]);
        assert_eq!(simulate_color_blindness("F00", "normal vision"), "#ff0000");
        assert_eq!(shades_between("#000", "#FFF", 2), vec!["#000000", "#ffffff"]);
    }

    #[test]
    fn unknown_filter_keeps_color() {
        assert_eq!(simulate_color_blindness("#3B82F6", "Monochromacy"), "#3b82f6");
    }

    #[test]
    fn best_color_for_large_text() {
        assert_eq!(
            find_best_accessible_color("#ff0000", "#808080", true).as_deref(),
            Some("#660000")
        );
    }
}
