//! Color-vision deficiency simulation.
//!
//! Each filter is a linear transform over normalized (gamma-encoded) sRGB,
//! stored as a 4×4 matrix whose last row and column carry alpha unchanged.
//! Only the top-left 3×3 block acts on color. The table is fixed at compile
//! time, always holds 8 entries, and starts with Normal Vision (identity).

use serde::Serialize;
use tincture_color::Color;

/// A named color-vision simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorBlindnessFilter {
    pub name: &'static str,
    pub description: &'static str,
    pub matrix: [[f64; 4]; 4],
}

/// Embed a 3×3 color transform in a 4×4 matrix with an identity alpha row.
const fn rgb_matrix(m: [[f64; 3]; 3]) -> [[f64; 4]; 4] {
    [
        [m[0][0], m[0][1], m[0][2], 0.0],
        [m[1][0], m[1][1], m[1][2], 0.0],
        [m[2][0], m[2][1], m[2][2], 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// All simulations, in display order.
pub static FILTERS: [ColorBlindnessFilter; 8] = [
    ColorBlindnessFilter {
        name: "Normal Vision",
        description: "Typical trichromatic color vision",
        matrix: rgb_matrix([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
    },
    ColorBlindnessFilter {
        name: "Protanopia",
        description: "Red-blind: missing long-wavelength cones",
        matrix: rgb_matrix([[0.567, 0.433, 0.0], [0.558, 0.442, 0.0], [0.0, 0.242, 0.758]]),
    },
    ColorBlindnessFilter {
        name: "Deuteranopia",
        description: "Green-blind: missing medium-wavelength cones",
        matrix: rgb_matrix([[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]]),
    },
    ColorBlindnessFilter {
        name: "Tritanopia",
        description: "Blue-blind: missing short-wavelength cones",
        matrix: rgb_matrix([[0.95, 0.05, 0.0], [0.0, 0.433, 0.567], [0.0, 0.475, 0.525]]),
    },
    ColorBlindnessFilter {
        name: "Achromatopsia",
        description: "Total color blindness: only brightness is perceived",
        matrix: rgb_matrix([
            [0.299, 0.587, 0.114],
            [0.299, 0.587, 0.114],
            [0.299, 0.587, 0.114],
        ]),
    },
    ColorBlindnessFilter {
        name: "Protanomaly",
        description: "Red-weak: shifted long-wavelength sensitivity",
        matrix: rgb_matrix([[0.817, 0.183, 0.0], [0.333, 0.667, 0.0], [0.0, 0.125, 0.875]]),
    },
    ColorBlindnessFilter {
        name: "Deuteranomaly",
        description: "Green-weak: shifted medium-wavelength sensitivity",
        matrix: rgb_matrix([[0.8, 0.2, 0.0], [0.258, 0.742, 0.0], [0.0, 0.142, 0.858]]),
    },
    ColorBlindnessFilter {
        name: "Tritanomaly",
        description: "Blue-weak: shifted short-wavelength sensitivity",
        matrix: rgb_matrix([[0.967, 0.033, 0.0], [0.0, 0.733, 0.267], [0.0, 0.183, 0.817]]),
    },
];

/// The filter table.
#[must_use]
pub fn filters() -> &'static [ColorBlindnessFilter] {
    &FILTERS
}

/// Look a filter up by name, ignoring case and surrounding whitespace.
#[must_use]
pub fn filter_by_name(name: &str) -> Option<&'static ColorBlindnessFilter> {
    let name = name.trim();
    FILTERS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

impl ColorBlindnessFilter {
    /// Apply this filter to one color. Alpha passes through.
    #[must_use]
    pub fn apply(&self, color: Color) -> Color {
        let (r, g, b) = color.to_rgb_f64();
        let m = &self.matrix;
        let row = |i: usize| m[i][2].mul_add(b, m[i][0].mul_add(r, m[i][1] * g));
        Color::from_rgb_f64(row(0), row(1), row(2)).with_alpha(color.a)
    }
}

/// Simulate how `color` appears under `filter`.
#[must_use]
pub fn simulate_color_blindness(color: Color, filter: &ColorBlindnessFilter) -> Color {
    filter.apply(color)
}

/// `color` under every filter, in table order.
#[must_use]
pub fn simulate_all(color: Color) -> Vec<(&'static str, Color)> {
    FILTERS.iter().map(|f| (f.name, f.apply(color))).collect()
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

    #[test]
    fn table_has_eight_filters_in_order() {
        let names: Vec<&str> = filters().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "Normal Vision",
                "Protanopia",
                "Deuteranopia",
                "Tritanopia",
                "Achromatopsia",
                "Protanomaly",
                "Deuteranomaly",
                "Tritanomaly",
            ]
        );
    }

    #[test]
    fn alpha_row_and_column_are_identity() {
        for f in filters() {
            assert_eq!(f.matrix[3], [0.0, 0.0, 0.0, 1.0], "{}", f.name);
            for row in &f.matrix[..3] {
                assert_eq!(row[3], 0.0, "{}", f.name);
            }
        }
    }

    #[test]
    fn rows_preserve_white() {
        // Every simulation row sums to 1, so white stays white.
        for f in filters() {
            assert_eq!(f.apply(Color::WHITE), Color::WHITE, "{}", f.name);
            assert_eq!(f.apply(Color::BLACK), Color::BLACK, "{}", f.name);
        }
    }

    #[test]
    fn normal_vision_is_identity() {
        let normal = &FILTERS[0];
        for s in ["#ff0000", "#3b82f6", "#abcdef", "#010203", "#ffffff"] {
            assert_eq!(normal.apply(hex(s)), hex(s), "{s}");
        }
    }

    #[test]
    fn protanopia_of_red() {
        // (0.567, 0.558, 0.0) × 255
        let f = filter_by_name("Protanopia").unwrap();
        assert_eq!(f.apply(hex("#ff0000")), Color::rgb(145, 142, 0));
    }

    #[test]
    fn achromatopsia_is_gray() {
        let f = filter_by_name("achromatopsia").unwrap();
        let out = f.apply(hex("#3b82f6"));
        assert!(out.r == out.g && out.g == out.b, "{out:?}");
    }

    #[test]
    fn alpha_passes_through() {
        let f = filter_by_name("Deuteranopia").unwrap();
        assert_eq!(f.apply(hex("#ff000080")).a, 0x80);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(filter_by_name("  TRITANOMALY ").is_some());
        assert!(filter_by_name("Monochromacy").is_none());
    }

    #[test]
    fn simulate_all_covers_every_filter() {
        let all = simulate_all(hex("#3b82f6"));
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], ("Normal Vision", hex("#3b82f6")));
    }
}
