// SPDX-License-Identifier: MIT
//
// Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tincture_palette::HarmonyKind;

use crate::config::OutputFormat;

/// Color harmonies, tonal scales and WCAG accessibility checks.
#[derive(Parser, Debug)]
#[command(name = "tincture", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Color-wheel harmonies of a base color (all six unless --kind is given)
    Harmony {
        color: String,

        /// monochromatic, analogous, triadic, complementary,
        /// split-complementary or tetradic
        #[arg(short, long, value_parser = parse_kind)]
        kind: Option<HarmonyKind>,

        /// Colors in monochromatic and analogous harmonies
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Lighter and darker variants of a color
    Tints {
        color: String,

        /// Tints and shades to generate, each
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Perceptual blend between two colors, both ends included
    Blend {
        from: String,
        to: String,

        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Tailwind-style 50–950 ramp
    Tailwind { color: String },

    /// Material-style 50–900 tonal palette
    Material { color: String },

    /// WCAG contrast of text on a background, with suggestions on failure
    Contrast {
        foreground: String,
        background: String,

        /// Use the large-text thresholds (18pt, or 14pt bold)
        #[arg(long)]
        large: bool,
    },

    /// How a color looks under color-vision deficiencies
    Simulate {
        color: String,

        /// Only this filter (see `tincture filters`)
        #[arg(long)]
        filter: Option<String>,
    },

    /// Contrast of every foreground/background pair in a palette
    Audit {
        #[arg(required = true, num_args = 1..)]
        colors: Vec<String>,

        /// Use the large-text thresholds
        #[arg(long)]
        large: bool,
    },

    /// List the color-vision filters
    Filters,
}

fn parse_kind(s: &str) -> Result<HarmonyKind, String> {
    HarmonyKind::from_name(s).ok_or_else(|| {
        let known: Vec<&str> = HarmonyKind::all().iter().map(|k| k.slug()).collect();
        format!("unknown harmony {s:?} (expected one of: {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn harmony_kind_accepts_slugs_and_names() {
        let args = Args::try_parse_from(["tincture", "harmony", "#ff0000", "--kind", "split-complementary"])
            .unwrap();
        assert!(matches!(
            args.command,
            Command::Harmony { kind: Some(HarmonyKind::SplitComplementary), .. }
        ));
        assert!(parse_kind("Triadic").is_ok());
        assert!(parse_kind("pentadic").unwrap_err().contains("tetradic"));
    }

    #[test]
    fn globals_after_subcommand() {
        let args = Args::try_parse_from(["tincture", "tailwind", "#3b82f6", "--format", "json"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn audit_needs_colors() {
        assert!(Args::try_parse_from(["tincture", "audit"]).is_err());
        let args = Args::try_parse_from(["tincture", "audit", "#000", "#fff", "--large"]).unwrap();
        assert!(matches!(args.command, Command::Audit { ref colors, large: true } if colors.len() == 2));
    }
}
