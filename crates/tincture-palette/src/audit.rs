//! Whole-palette contrast audit.
//!
//! Evaluates every ordered (foreground, background) pair of distinct palette
//! entries. Pairs are independent, so they are checked on the rayon pool;
//! the output keeps row-major input order.

use rayon::prelude::*;
use serde::Serialize;
use tincture_color::Color;

use crate::contrast::{ContrastResult, check_compliance};

/// One foreground/background combination and its WCAG evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairReport {
    pub foreground: Color,
    pub background: Color,
    pub result: ContrastResult,
}

/// Check all ordered pairs `(colors[i], colors[j])` with `i != j`.
#[must_use]
pub fn audit_palette(colors: &[Color], is_large_text: bool) -> Vec<PairReport> {
    let pairs: Vec<(Color, Color)> = colors
        .iter()
        .enumerate()
        .flat_map(|(i, &fg)| {
            colors
                .iter()
                .enumerate()
                .filter(move |&(j, _)| j != i)
                .map(move |(_, &bg)| (fg, bg))
        })
        .collect();

    pairs
        .into_par_iter()
        .map(|(foreground, background)| PairReport {
            foreground,
            background,
            result: check_compliance(foreground, background, is_large_text),
        })
        .collect()
}

/// Only the pairs that reach at least AA for the text size.
#[must_use]
pub fn passing_pairs(colors: &[Color], is_large_text: bool) -> Vec<PairReport> {
    audit_palette(colors, is_large_text)
        .into_iter()
        .filter(|p| p.result.passes())
        .collect()
}
