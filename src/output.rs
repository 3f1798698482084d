// SPDX-License-Identifier: MIT
//
// Result rendering.
//
// Every command produces one serializable value. `--format json` prints it
// with serde_json; `--format text` goes through `Render`, which lays the
// same data out as aligned lines for a terminal.

use std::io::{self, Write};

use serde::Serialize;
use tincture_palette::{
    AccessibilitySuggestion, Color, ColorBlindnessFilter, ColorHarmony, ContrastResult, PairReport,
    ScaleStep, TierResult, TintsAndShades,
};

use crate::config::OutputFormat;

/// Plain-text layout of a command result.
pub trait Render: Serialize {
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Write `value` in the requested format, followed by a newline for JSON.
pub fn emit<T: Render + ?Sized>(format: OutputFormat, value: &T, out: &mut dyn Write) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => value.render(out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn join_colors(colors: &[String]) -> String {
    colors.join("  ")
}

const fn pass(ok: bool) -> &'static str {
    if ok { "pass" } else { "fail" }
}

// ─── Palettes ───────────────────────────────────────────────────────────────

impl Render for [ColorHarmony] {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for (i, harmony) in self.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}: {}", harmony.name, harmony.description)?;
            writeln!(out, "  {}", join_colors(&harmony.colors))?;
        }
        Ok(())
    }
}

impl Render for TintsAndShades {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "tints   {}", join_colors(&self.tints))?;
        writeln!(out, "shades  {}", join_colors(&self.shades))
    }
}

impl Render for [ScaleStep] {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for step in self {
            writeln!(out, "{:>4}  {}", step.key, step.color)?;
        }
        Ok(())
    }
}

impl Render for [Color] {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for color in self {
            writeln!(out, "{color}")?;
        }
        Ok(())
    }
}

// ─── Accessibility ──────────────────────────────────────────────────────────

/// `contrast` command result: the evaluation plus fixes when it fails.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    pub foreground: Color,
    pub background: Color,
    #[serde(flatten)]
    pub result: ContrastResult,
    pub suggestions: Vec<AccessibilitySuggestion>,
    pub best: Option<Color>,
    /// Nearest lightness adjustment of the foreground that reaches AA.
    pub adjusted: Option<Color>,
}

fn render_tier(out: &mut dyn Write, label: &str, tier: TierResult) -> io::Result<()> {
    writeln!(out, "{label:<8}normal {}  large {}", pass(tier.normal), pass(tier.large))
}

impl Render for ContrastReport {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} on {}", self.foreground, self.background)?;
        writeln!(out, "ratio   {:.2}:1", self.result.ratio)?;
        writeln!(out, "level   {}", self.result.level)?;
        render_tier(out, "AA", self.result.aa)?;
        render_tier(out, "AAA", self.result.aaa)?;
        writeln!(out, "{}", self.result.recommendation)?;

        if !self.suggestions.is_empty() {
            writeln!(out)?;
            writeln!(out, "suggestions")?;
            for s in &self.suggestions {
                writeln!(
                    out,
                    "  {:<11} {}  +{:.2}  {}",
                    s.kind.as_str(),
                    s.suggested_color,
                    s.improvement,
                    s.description
                )?;
            }
        }
        if let Some(best) = self.best {
            writeln!(out, "best    {best}")?;
        }
        if let Some(adjusted) = self.adjusted {
            writeln!(out, "nearest {adjusted}")?;
        }
        Ok(())
    }
}

/// One row of the `simulate` command.
#[derive(Debug, Serialize)]
pub struct Simulation {
    pub filter: &'static str,
    pub color: Color,
}

impl Render for [Simulation] {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for sim in self {
            writeln!(out, "{:<14} {}", sim.filter, sim.color)?;
        }
        Ok(())
    }
}

impl Render for [PairReport] {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for pair in self {
            writeln!(
                out,
                "{} on {}  {:>6.2}:1  {}",
                pair.foreground, pair.background, pair.result.ratio, pair.result.level
            )?;
        }
        Ok(())
    }
}

impl Render for [ColorBlindnessFilter] {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        for filter in self {
            writeln!(out, "{:<14} {}", filter.name, filter.description)?;
        }
        Ok(())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
