//! Lightness scales: tints, shades, blends, and design-system tonal ramps.
//!
//! Tints, shades, blends and the Tailwind ramp move through CIE LCH so equal
//! steps look equal. The Material ramp follows the HSL curve design tools
//! use for it.

use serde::Serialize;
use tincture_color::{Color, Lch};

/// Tailwind keys: 50, 100, 150, … 950.
const TAILWIND_FIRST: u16 = 50;
const TAILWIND_LAST: u16 = 950;
const TAILWIND_STEP: u16 = 50;

/// Material keys.
const MATERIAL_KEYS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];
const MATERIAL_LIGHTEST: f64 = 0.95;
/// Fraction of the base lightness removed by key 900.
const MATERIAL_DARKENING: f64 = 0.5;

/// Parallel lists of lighter and darker variants of one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TintsAndShades {
    /// Progressively lighter, nearest to the base first.
    pub tints: Vec<String>,
    /// Progressively darker, nearest to the base first.
    pub shades: Vec<String>,
}

/// One entry of a keyed design-system scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleStep {
    pub key: u16,
    pub color: String,
}

impl ScaleStep {
    fn new(key: u16, color: Color) -> Self {
        Self { key, color: color.to_hex() }
    }
}

/// `count` tints and `count` shades of `base`.
///
/// Tint `i` (1-based) moves LCH lightness `i / (count + 1)` of the way from
/// the base to 100; shade `i` the same fraction of the way to 0. Chroma and
/// hue are held, reduced only where sRGB cannot show them.
#[must_use]
pub fn tints_and_shades(base: Color, count: usize) -> TintsAndShades {
    let lch = base.to_lch();
    let steps = (count + 1) as f64;

    let at = |l: f64| Color::from_lch(Lch { l, ..lch }).to_hex();

    let tints = (1..=count)
        .map(|i| at((100.0 - lch.l).mul_add(i as f64 / steps, lch.l)))
        .collect();
    let shades = (1..=count)
        .map(|i| at((-lch.l).mul_add(i as f64 / steps, lch.l)))
        .collect();

    TintsAndShades { tints, shades }
}

/// `count` colors from `from` to `to` inclusive, evenly spaced in LCH.
///
/// `count == 1` yields just `from`; `count == 0` is treated as 1.
#[must_use]
pub fn shades_between(from: Color, to: Color, count: usize) -> Vec<Color> {
    let count = count.max(1);
    if count == 1 {
        return vec![from];
    }

    let last = (count - 1) as f64;
    (0..count).map(|i| from.mix_lch(&to, i as f64 / last)).collect()
}

/// Tailwind-style 19-step ramp, keys 50 through 950.
///
/// Key `k` gets LCH lightness `100 × (1 − (k − 50) / 900)`, so 50 is the
/// lightest and 950 the darkest; chroma and hue come from `base`.
#[must_use]
pub fn tailwind_scale(base: Color) -> Vec<ScaleStep> {
    let lch = base.to_lch();
    (TAILWIND_FIRST..=TAILWIND_LAST)
        .step_by(usize::from(TAILWIND_STEP))
        .map(|key| {
            let lightness = 1.0 - f64::from(key - TAILWIND_FIRST) / 900.0;
            ScaleStep::new(key, Color::from_lch(Lch { l: lightness * 100.0, ..lch }))
        })
        .collect()
}

/// Material-style 10-step tonal palette, keys 50, 100, 200, … 900.
///
/// Up to key 500 the HSL lightness eases linearly from 0.95 down to the
/// base lightness (key 500 is the base's own lightness). Past 500 it keeps
/// falling, reaching half the base lightness at key 900.
#[must_use]
pub fn material_design(base: Color) -> Vec<ScaleStep> {
    let base_l = base.to_hsl().l;
    MATERIAL_KEYS
        .iter()
        .map(|&key| {
            let lightness = if key <= 500 {
                let t = f64::from(key) / 500.0;
                (base_l - MATERIAL_LIGHTEST).mul_add(t, MATERIAL_LIGHTEST)
            } else {
                let t = f64::from(key - 500) / 400.0;
                base_l * (1.0 - MATERIAL_DARKENING * t)
            };
            ScaleStep::new(key, base.with_hsl_lightness(lightness))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    fn lch_l(s: &str) -> f64 {
        hex(s).to_lch().l
    }

    // ── Tints & shades ──────────────────────────────────────────────

    #[test]
    fn tints_and_shades_have_count_entries() {
        let ts = tints_and_shades(hex("#3b82f6"), 5);
        assert_eq!(ts.tints.len(), 5);
        assert_eq!(ts.shades.len(), 5);
    }

    #[test]
    fn tints_are_lighter_and_shades_darker() {
        for base in ["#3b82f6", "#ff0000", "#777777", "#2e7d32", "#fde047"] {
            let base_l = lch_l(base);
            let ts = tints_and_shades(hex(base), 5);
            for t in &ts.tints {
                assert!(lch_l(t) >= base_l, "{base}: tint {t} darker than base");
            }
            for s in &ts.shades {
                assert!(lch_l(s) <= base_l, "{base}: shade {s} lighter than base");
            }
        }
    }

    #[test]
    fn tints_progress_monotonically() {
        let ts = tints_and_shades(hex("#3b82f6"), 5);
        let tints: Vec<f64> = ts.tints.iter().map(|t| lch_l(t)).collect();
        let shades: Vec<f64> = ts.shades.iter().map(|s| lch_l(s)).collect();
        assert!(tints.windows(2).all(|w| w[1] > w[0]), "{tints:?}");
        assert!(shades.windows(2).all(|w| w[1] < w[0]), "{shades:?}");
    }

    #[test]
    fn tint_steps_follow_headroom_fraction() {
        // Gray: no chroma to lose, so lightness lands exactly on the step.
        let base_l = lch_l("#777777");
        let ts = tints_and_shades(hex("#777777"), 3);
        let expected = (100.0 - base_l).mul_add(0.25, base_l);
        assert!((lch_l(&ts.tints[0]) - expected).abs() < 0.5);
    }

    #[test]
    fn white_tints_clamp_to_white() {
        let ts = tints_and_shades(Color::WHITE, 2);
        assert_eq!(ts.tints, vec!["#ffffff".to_owned(), "#ffffff".to_owned()]);
    }

    #[test]
    fn zero_count_is_empty() {
        let ts = tints_and_shades(hex("#3b82f6"), 0);
        assert!(ts.tints.is_empty() && ts.shades.is_empty());
    }

    // ── Blends ──────────────────────────────────────────────────────

    #[test]
    fn shades_between_includes_both_ends() {
        let a = hex("#ff0000");
        let b = hex("#0000ff");
        let blend = shades_between(a, b, 5);
        assert_eq!(blend.len(), 5);
        assert_eq!(blend[0], a);
        assert_eq!(blend[4], b);
    }

    #[test]
    fn shades_between_lightness_is_monotonic() {
        let blend = shades_between(Color::BLACK, Color::WHITE, 6);
        let l: Vec<f64> = blend.iter().map(|c| c.to_lch().l).collect();
        assert!(l.windows(2).all(|w| w[1] > w[0]), "{l:?}");
    }

    #[test]
    fn shades_between_single_is_start() {
        let a = hex("#123456");
        assert_eq!(shades_between(a, Color::WHITE, 1), vec![a]);
        assert_eq!(shades_between(a, Color::WHITE, 0), vec![a]);
    }

    // ── Tailwind ────────────────────────────────────────────────────

    #[test]
    fn tailwind_has_19_keys() {
        let scale = tailwind_scale(hex("#3b82f6"));
        let keys: Vec<u16> = scale.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), 19);
        assert_eq!(keys[0], 50);
        assert_eq!(keys[18], 950);
        assert!(keys.windows(2).all(|w| w[1] - w[0] == 50));
    }

    #[test]
    fn tailwind_gets_darker_with_key() {
        let scale = tailwind_scale(hex("#3b82f6"));
        assert_eq!(scale[0].color, "#ffffff");
        assert_eq!(scale[18].color, "#000000");
        let l: Vec<f64> = scale.iter().map(|s| lch_l(&s.color)).collect();
        assert!(l.windows(2).all(|w| w[1] < w[0]), "{l:?}");
    }

    #[test]
    fn tailwind_midpoint_lightness() {
        // Key 500 → 1 − 450/900 = 0.5
        let scale = tailwind_scale(hex("#3b82f6"));
        let mid = scale.iter().find(|s| s.key == 500).unwrap();
        assert!((lch_l(&mid.color) - 50.0).abs() < 0.5);
    }

    // ── Material ────────────────────────────────────────────────────

    #[test]
    fn material_has_10_keys() {
        let keys: Vec<u16> = material_design(hex("#3b82f6")).iter().map(|s| s.key).collect();
        assert_eq!(keys, MATERIAL_KEYS.to_vec());
    }

    #[test]
    fn material_500_is_base_lightness() {
        let base = hex("#2196f3");
        let scale = material_design(base);
        let mid = scale.iter().find(|s| s.key == 500).unwrap();
        assert_eq!(mid.color, base.to_hex());
    }

    #[test]
    fn material_darkens_with_key() {
        let scale = material_design(hex("#2196f3"));
        let l: Vec<f64> = scale.iter().map(|s| hex(&s.color).to_hsl().l).collect();
        assert!(l.windows(2).all(|w| w[1] < w[0]), "{l:?}");
        assert!((l[9] - hex("#2196f3").to_hsl().l * 0.5).abs() < 0.01);
    }
}
