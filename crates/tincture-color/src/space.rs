// SPDX-License-Identifier: MIT
//
// Color space math for tincture.
//
// Single-character variable names (r, g, b, h, s, l, v, c, a) are the
// standard mathematical convention in color science and are kept so the
// code can be compared against reference formulas.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::excessive_precision)]
//
// Conversion pipeline:
//
//   sRGB ↔ HSL / HSV          (cylindrical reshapes of gamma-encoded sRGB)
//   sRGB ↔ linear sRGB ↔ XYZ (D65) ↔ CIE Lab ↔ CIE LCH
//
// Every function works on normalized f64 channels (0.0–1.0) and does no
// clamping. Callers decide how to bring results back into gamut.

// ─── Coordinate types ────────────────────────────────────────────────────────

/// Hue, saturation, lightness. Hue in degrees [0, 360), the rest 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue, saturation, value. Hue in degrees [0, 360), the rest 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// CIE L*a*b* relative to the D65 white point. `l` runs 0–100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Cylindrical CIE Lab.
///
/// - `l`: lightness, 0 (black) to 100 (white)
/// - `c`: chroma, 0 for grays, roughly 0–132 inside the sRGB gamut
/// - `h`: hue angle in degrees, [0, 360)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Lch {
    /// Chroma below this is treated as gray and its hue as undefined.
    pub const ACHROMATIC: f64 = 1e-4;

    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c < Self::ACHROMATIC
    }
}

// ─── Hue helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
#[must_use]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Interpolate between two hue angles taking the shortest path.
#[inline]
#[must_use]
pub fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

// ─── sRGB ↔ HSL ──────────────────────────────────────────────────────────────

/// Convert normalized sRGB to HSL. Grays get hue 0 and saturation 0.
#[must_use]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) * 0.5;
    let d = max - min;

    if d <= f64::EPSILON {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = d / (1.0 - 2.0f64.mul_add(l, -1.0).abs());
    Hsl { h: hue_from_rgb(r, g, b, max, d), s, l }
}

/// Convert HSL to normalized sRGB.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> (f64, f64, f64) {
    let h = normalize_hue(hsl.h);
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        a.mul_add(-(k - 3.0).min(9.0 - k).clamp(-1.0, 1.0), l)
    };
    (f(0.0), f(8.0), f(4.0))
}

// ─── sRGB ↔ HSV ──────────────────────────────────────────────────────────────

/// Convert normalized sRGB to HSV.
#[must_use]
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max <= f64::EPSILON { 0.0 } else { d / max };
    let h = if d <= f64::EPSILON { 0.0 } else { hue_from_rgb(r, g, b, max, d) };
    Hsv { h, s, v: max }
}

/// Convert HSV to normalized sRGB.
#[must_use]
pub fn hsv_to_rgb(hsv: Hsv) -> (f64, f64, f64) {
    let h = normalize_hue(hsv.h);
    let s = hsv.s.clamp(0.0, 1.0);
    let v = hsv.v.clamp(0.0, 1.0);
    let f = |n: f64| {
        let k = (n + h / 60.0) % 6.0;
        (v * s).mul_add(-k.min(4.0 - k).clamp(0.0, 1.0), v)
    };
    (f(5.0), f(3.0), f(1.0))
}

/// Shared hue computation for HSL and HSV. `d` must be non-zero.
fn hue_from_rgb(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if (max - r).abs() <= f64::EPSILON {
        ((g - b) / d).rem_euclid(6.0)
    } else if (max - g).abs() <= f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    normalize_hue(h * 60.0)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── sRGB ↔ CIE Lab ──────────────────────────────────────────────────────────

// D65 reference white.
const D65_XN: f64 = 0.95047;
const D65_YN: f64 = 1.00000;
const D65_ZN: f64 = 1.08883;

const DELTA: f64 = 6.0 / 29.0;

fn lab_f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// Convert normalized sRGB to CIE Lab (D65).
#[must_use]
pub fn rgb_to_lab(r: f64, g: f64, b: f64) -> Lab {
    let r = srgb_to_linear(r);
    let g = srgb_to_linear(g);
    let b = srgb_to_linear(b);

    let x = r * 0.4124564 + g * 0.3575761 + b * 0.1804375;
    let y = r * 0.2126729 + g * 0.7151522 + b * 0.0721750;
    let z = r * 0.0193339 + g * 0.1191920 + b * 0.9503041;

    let fx = lab_f(x / D65_XN);
    let fy = lab_f(y / D65_YN);
    let fz = lab_f(z / D65_ZN);

    Lab {
        l: 116.0f64.mul_add(fy, -16.0),
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert CIE Lab (D65) to normalized sRGB. The result may fall outside
/// 0.0–1.0 when the Lab color is out of the sRGB gamut.
#[must_use]
pub fn lab_to_rgb(lab: Lab) -> (f64, f64, f64) {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    let x = D65_XN * lab_f_inv(fx);
    let y = D65_YN * lab_f_inv(fy);
    let z = D65_ZN * lab_f_inv(fz);

    let r = x * 3.2404542 - y * 1.5371385 - z * 0.4985314;
    let g = -x * 0.9692660 + y * 1.8760108 + z * 0.0415560;
    let b = x * 0.0556434 - y * 0.2040259 + z * 1.0572252;

    (linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
}

// ─── Lab ↔ LCH ───────────────────────────────────────────────────────────────

#[must_use]
pub fn lab_to_lch(lab: Lab) -> Lch {
    let c = lab.a.hypot(lab.b);
    let h = if c < Lch::ACHROMATIC {
        0.0 // Achromatic: hue is undefined, default to 0
    } else {
        normalize_hue(lab.b.atan2(lab.a).to_degrees())
    };
    Lch { l: lab.l, c, h }
}

#[must_use]
pub fn lch_to_lab(lch: Lch) -> Lab {
    let h = lch.h.to_radians();
    Lab {
        l: lch.l,
        a: lch.c * h.cos(),
        b: lch.c * h.sin(),
    }
}

/// Convert LCH straight to normalized sRGB (unclamped).
#[must_use]
pub fn lch_to_rgb(lch: Lch) -> (f64, f64, f64) {
    lab_to_rgb(lch_to_lab(lch))
}

/// Whether all three channels land inside 0.0–1.0 (with rounding slack).
#[must_use]
pub fn in_gamut((r, g, b): (f64, f64, f64)) -> bool {
    const SLACK: f64 = 1e-4;
    let ok = |c: f64| (-SLACK..=1.0 + SLACK).contains(&c);
    ok(r) && ok(g) && ok(b)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
