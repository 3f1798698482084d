//! WCAG 2.1 contrast computation and compliance classification.
//!
//! - Normal text: AA needs 4.5:1, AAA needs 7:1
//! - Large text (18pt, or 14pt bold): AA needs 3:1, AAA needs 4.5:1
//!
//! Luminance uses the WCAG document's sRGB linearization (knee at 0.03928),
//! not the IEC one used for color-space conversion. The difference is below
//! 8-bit resolution but keeps ratios identical to other WCAG checkers.

use std::fmt;

use serde::Serialize;
use tincture_color::Color;

/// WCAG contrast thresholds.
pub mod threshold {
    pub const AA_NORMAL: f64 = 4.5;
    pub const AA_LARGE: f64 = 3.0;
    pub const AAA_NORMAL: f64 = 7.0;
    pub const AAA_LARGE: f64 = 4.5;

    /// The AA threshold that applies to the given text size.
    #[must_use]
    pub const fn aa(is_large_text: bool) -> f64 {
        if is_large_text { AA_LARGE } else { AA_NORMAL }
    }
}

/// WCAG linearization of one 0.0–1.0 sRGB channel.
#[inline]
fn channel_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance: the Rec. 709 weighted sum of the linearized
/// channels, `0.2126 R + 0.7152 G + 0.0722 B`.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white. Alpha is
/// ignored.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_rgb_f64();
    let (r, g, b) = (channel_to_linear(r), channel_to_linear(g), channel_to_linear(b));
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG contrast ratio of two colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_hi` + 0.05) / (`L_lo` + 0.05)
///
/// The result does not depend on argument order and is exactly 1.0 for
/// identical colors.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

// ---------------------------------------------------------------------------
// Compliance
// ---------------------------------------------------------------------------

/// Highest WCAG tier a color pair reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WcagLevel {
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "FAIL",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pass/fail for one tier at both text sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierResult {
    pub normal: bool,
    pub large: bool,
}

/// Full WCAG evaluation of a foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub aa: TierResult,
    pub aaa: TierResult,
    pub level: WcagLevel,
    pub recommendation: String,
}

impl ContrastResult {
    /// Classify an already computed ratio.
    ///
    /// A tier is reached when its normal-text threshold is met, or when
    /// `is_large_text` is set and its large-text threshold is met.
    #[must_use]
    pub fn from_ratio(ratio: f64, is_large_text: bool) -> Self {
        let aa = TierResult {
            normal: ratio >= threshold::AA_NORMAL,
            large: ratio >= threshold::AA_LARGE,
        };
        let aaa = TierResult {
            normal: ratio >= threshold::AAA_NORMAL,
            large: ratio >= threshold::AAA_LARGE,
        };

        let reaches = |tier: TierResult| tier.normal || (is_large_text && tier.large);
        let level = if reaches(aaa) {
            WcagLevel::Aaa
        } else if reaches(aa) {
            WcagLevel::Aa
        } else {
            WcagLevel::Fail
        };

        Self {
            ratio,
            aa,
            aaa,
            level,
            recommendation: recommendation(level, ratio),
        }
    }

    /// Whether the pair meets AA at the text size it was evaluated for.
    #[must_use]
    pub const fn passes(&self) -> bool {
        !matches!(self.level, WcagLevel::Fail)
    }
}

fn recommendation(level: WcagLevel, ratio: f64) -> String {
    match level {
        WcagLevel::Aaa => "Excellent contrast! Meets WCAG AAA standards.".to_owned(),
        WcagLevel::Aa => {
            "Good contrast. Meets WCAG AA standards; increase contrast further for AAA.".to_owned()
        }
        WcagLevel::Fail => format!(
            "Poor contrast ({ratio:.2}:1). Does not meet WCAG standards; choose colors with higher contrast."
        ),
    }
}

/// Evaluate `foreground` text on `background` against WCAG AA and AAA.
#[must_use]
pub fn check_compliance(foreground: Color, background: Color, is_large_text: bool) -> ContrastResult {
    ContrastResult::from_ratio(contrast_ratio(foreground, background), is_large_text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Color::BLACK);
        assert!(approx_eq(lum, 0.0, 1e-12), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Color::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-12), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_channels_match_weights() {
        assert!(approx_eq(relative_luminance(hex("#ff0000")), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(hex("#00ff00")), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(hex("#0000ff")), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_mid_gray() {
        // sRGB 0x80 linearizes to ~0.216
        let lum = relative_luminance(hex("#808080"));
        assert!(approx_eq(lum, 0.2159, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_ignores_alpha() {
        let opaque = relative_luminance(hex("#336699"));
        let translucent = relative_luminance(hex("#33669900"));
        assert!(approx_eq(opaque, translucent, 1e-12));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_exactly_one() {
        for s in ["#000000", "#ffffff", "#3b82f6", "#777777"] {
            let c = hex(s);
            assert_eq!(contrast_ratio(c, c), 1.0, "{s}");
        }
    }

    #[test]
    fn contrast_is_symmetric() {
        let samples = ["#cc3344", "#1a1a66", "#ffffff", "#767676", "#00ff00"];
        for a in samples {
            for b in samples {
                assert_eq!(contrast_ratio(hex(a), hex(b)), contrast_ratio(hex(b), hex(a)), "{a}/{b}");
            }
        }
    }

    #[test]
    fn contrast_known_values() {
        // Reference values from established WCAG checkers.
        assert!(approx_eq(contrast_ratio(hex("#767676"), Color::WHITE), 4.54, 0.01));
        assert!(approx_eq(contrast_ratio(hex("#ff0000"), Color::WHITE), 4.0, 0.01));
        assert!(approx_eq(contrast_ratio(hex("#1e293b"), Color::WHITE), 14.63, 0.02));
    }

    // ── Compliance ──────────────────────────────────────────────────

    #[test]
    fn black_on_white_is_aaa() {
        let r = check_compliance(Color::BLACK, Color::WHITE, false);
        assert!(r.ratio > 20.0);
        assert_eq!(r.level, WcagLevel::Aaa);
        assert!(r.aa.normal && r.aa.large && r.aaa.normal && r.aaa.large);
    }

    #[test]
    fn close_grays_fail() {
        let r = check_compliance(hex("#888888"), hex("#999999"), false);
        assert!(!r.aa.normal);
        assert_eq!(r.level, WcagLevel::Fail);
    }

    #[test]
    fn large_text_relaxes_aa() {
        // ~4.48:1, short of AA for normal text, enough for large text.
        let r = check_compliance(hex("#777777"), Color::WHITE, true);
        assert!(r.aa.large);
        assert!(!r.aa.normal);
        assert_eq!(r.level, WcagLevel::Aa);

        let normal = check_compliance(hex("#777777"), Color::WHITE, false);
        assert_eq!(normal.level, WcagLevel::Fail);
    }

    #[test]
    fn large_text_can_reach_aaa_at_4_5() {
        let r = ContrastResult::from_ratio(5.0, true);
        assert_eq!(r.level, WcagLevel::Aaa);
        let r = ContrastResult::from_ratio(5.0, false);
        assert_eq!(r.level, WcagLevel::Aa);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(ContrastResult::from_ratio(7.0, false).level, WcagLevel::Aaa);
        assert_eq!(ContrastResult::from_ratio(4.5, false).level, WcagLevel::Aa);
        assert_eq!(ContrastResult::from_ratio(3.0, true).level, WcagLevel::Aa);
        assert_eq!(ContrastResult::from_ratio(2.999, true).level, WcagLevel::Fail);
    }

    #[test]
    fn classification_is_monotonic_in_ratio() {
        let mut ratio: f64 = 1.0;
        let mut previous = WcagLevel::Fail;
        while ratio <= 21.0 {
            let r = ContrastResult::from_ratio(ratio, false);
            assert!(r.level >= previous, "Level dropped at {ratio}");
            if ratio >= 7.0 {
                assert_eq!(r.level, WcagLevel::Aaa);
            }
            if ratio < 4.5 {
                assert_ne!(r.level, WcagLevel::Aaa);
                assert!(!r.aa.normal);
            }
            previous = r.level;
            ratio += 0.05;
        }
    }

    #[test]
    fn fail_recommendation_embeds_ratio() {
        let r = check_compliance(hex("#888888"), hex("#999999"), false);
        let expected = format!("{:.2}:1", r.ratio);
        assert!(r.recommendation.contains(&expected), "{}", r.recommendation);
    }

    #[test]
    fn passes_reflects_level() {
        assert!(ContrastResult::from_ratio(4.5, false).passes());
        assert!(!ContrastResult::from_ratio(4.4, false).passes());
    }

    #[test]
    fn level_serializes_as_wcag_label() {
        let json = serde_json::to_value(ContrastResult::from_ratio(21.0, false)).unwrap();
        assert_eq!(json["level"], "AAA");
        assert_eq!(json["aa"]["normal"], true);
        let json = serde_json::to_value(ContrastResult::from_ratio(1.0, false)).unwrap();
        assert_eq!(json["level"], "FAIL");
    }
}
