//! Accessible-alternative search.
//!
//! Two strategies:
//!
//! - **Suggestions**: three fixed candidate edits of the foreground (lighten,
//!   darken, swap to the opposite hue), kept only when they improve contrast.
//!   Cheap and predictable; what a picker UI shows as one-click fixes.
//! - **Readability search**: binary search on HSL lightness for the smallest
//!   change that reaches a target ratio. Precise; used when a palette must
//!   be forced into compliance.

use log::{debug, trace};
use serde::Serialize;
use tincture_color::Color;

use crate::contrast::{contrast_ratio, threshold};

/// HSL lightness step used by the lighten/darken suggestions.
const LIGHTNESS_STEP: f64 = 0.3;

/// How a suggestion was derived from the original foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Lighten,
    Darken,
    AdjustHue,
    /// Replace the foreground with its complement. Part of the fixed
    /// vocabulary consumers match on; the candidate search emits
    /// `AdjustHue` for its hue swap.
    Complement,
}

impl SuggestionKind {
    /// Wire name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lighten => "lighten",
            Self::Darken => "darken",
            Self::AdjustHue => "adjust_hue",
            Self::Complement => "complement",
        }
    }
}

/// One candidate replacement foreground.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub description: String,
    pub suggested_color: Color,
    /// Contrast ratio gained over the original foreground. Always > 0.
    pub improvement: f64,
}

/// Candidate foregrounds with better contrast against `background`.
///
/// Returns an empty list when the pair already meets AA for the text size.
/// Otherwise tries, in order: HSL lightness +0.3, HSL lightness −0.3, hue
/// +180°. Candidates that do not strictly improve the ratio are dropped; the
/// rest are sorted by improvement, largest first, keeping that order on ties.
#[must_use]
pub fn suggest_accessible_alternatives(
    foreground: Color,
    background: Color,
    is_large_text: bool,
) -> Vec<AccessibilitySuggestion> {
    let current = contrast_ratio(foreground, background);
    if current >= threshold::aa(is_large_text) {
        return Vec::new();
    }

    let l = foreground.to_hsl().l;
    let candidates = [
        (
            SuggestionKind::Lighten,
            foreground.with_hsl_lightness((l + LIGHTNESS_STEP).min(1.0)),
            "Lighten the text color",
        ),
        (
            SuggestionKind::Darken,
            foreground.with_hsl_lightness((l - LIGHTNESS_STEP).max(0.0)),
            "Darken the text color",
        ),
        (
            SuggestionKind::AdjustHue,
            foreground.rotate_hue(180.0),
            "Switch the text to the opposite hue",
        ),
    ];

    let mut suggestions: Vec<AccessibilitySuggestion> = candidates
        .into_iter()
        .filter_map(|(kind, color, action)| {
            let ratio = contrast_ratio(color, background);
            let improvement = ratio - current;
            (improvement > 0.0).then(|| AccessibilitySuggestion {
                kind,
                description: format!("{action} to {} ({ratio:.2}:1)", color.to_hex()),
                suggested_color: color,
                improvement,
            })
        })
        .collect();

    // Stable: ties keep generation order.
    suggestions.sort_by(|a, b| b.improvement.total_cmp(&a.improvement));
    debug!(
        "{} on {}: ratio {current:.2}, {} suggestion(s)",
        foreground,
        background,
        suggestions.len()
    );
    suggestions
}

/// The highest-improvement suggestion that actually reaches AA for the
/// text size, if any does.
#[must_use]
pub fn find_best_accessible_color(
    foreground: Color,
    background: Color,
    is_large_text: bool,
) -> Option<Color> {
    let target = threshold::aa(is_large_text);
    suggest_accessible_alternatives(foreground, background, is_large_text)
        .into_iter()
        .map(|s| s.suggested_color)
        .find(|&c| contrast_ratio(c, background) >= target)
}

/// Black or white, whichever contrasts more with `background`.
#[must_use]
pub fn readable_text_color(background: Color) -> Color {
    if contrast_ratio(Color::BLACK, background) >= contrast_ratio(Color::WHITE, background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Adjust `fg`'s HSL lightness until it meets `min_ratio` against `bg`.
///
/// Both directions are searched; the passing color closest to the original
/// lightness wins. Hue and saturation are kept. If neither direction can
/// reach the target, the lightness extreme with the higher ratio is
/// returned.
#[must_use]
pub fn ensure_readability(fg: Color, bg: Color, min_ratio: f64) -> Color {
    // Already readable?
    if contrast_ratio(fg, bg) >= min_ratio {
        return fg;
    }

    let l0 = fg.to_hsl().l;
    let lighter = search_lightness(fg, bg, min_ratio, true);
    let darker = search_lightness(fg, bg, min_ratio, false);

    match (lighter, darker) {
        (Some(up), Some(down)) => {
            if (up.to_hsl().l - l0).abs() <= (l0 - down.to_hsl().l).abs() {
                up
            } else {
                down
            }
        }
        (Some(c), None) | (None, Some(c)) => c,
        (None, None) => {
            let white = fg.with_hsl_lightness(1.0);
            let black = fg.with_hsl_lightness(0.0);
            if contrast_ratio(white, bg) >= contrast_ratio(black, bg) {
                white
            } else {
                black
            }
        }
    }
}

/// Binary search on HSL lightness in one direction.
///
/// Luminance rises monotonically with HSL lightness, so along one direction
/// the pass/fail predicate flips at most once.
fn search_lightness(fg: Color, bg: Color, min_ratio: f64, toward_light: bool) -> Option<Color> {
    let extreme = fg.with_hsl_lightness(if toward_light { 1.0 } else { 0.0 });
    if contrast_ratio(extreme, bg) < min_ratio {
        return None;
    }

    let l0 = fg.to_hsl().l;
    let (mut lo, mut hi) = if toward_light { (l0, 1.0) } else { (0.0, l0) };

    let mut best = extreme;
    for _ in 0..32 {
        let mid = (lo + hi) * 0.5;
        let candidate = fg.with_hsl_lightness(mid);
        let ratio = contrast_ratio(candidate, bg);
        trace!("lightness {mid:.4} -> {candidate} ({ratio:.3}:1)");
        if ratio >= min_ratio {
            best = candidate;
            // Try to stay closer to original lightness.
            if toward_light {
                hi = mid;
            } else {
                lo = mid;
            }
        } else if toward_light {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Some(best)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
