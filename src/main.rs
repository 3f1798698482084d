// SPDX-License-Identifier: MIT
//
// tincture: color harmony and accessibility from the command line.
//
// This is the binary that wires the library crates to a terminal:
//
//   tincture-color   → Color value, parsing, color-space math
//   tincture-palette → harmonies, scales, WCAG checks, vision simulation
//
// Each invocation flows through:
//
//   argv → clap → config file (+ flag overrides) → logger
//        → parse color arguments → typed palette call → text/JSON output
//
// Color arguments are validated up front, so a typo is reported as an error
// instead of silently producing the library's fallback output.

mod args;
mod config;
mod output;

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use env_logger::Env;
use log::{LevelFilter, debug, warn};

use tincture_palette::{
    Color, ColorHarmony, HarmonyKind, audit_palette, check_compliance, ensure_readability,
    filter_by_name, filters, find_best_accessible_color, scale, simulate_all,
    suggest_accessible_alternatives,
};
use tincture_palette::contrast::threshold;

use args::{Args, Command};
use config::{Config, ConfigError, OutputFormat};
use output::{ContrastReport, Simulation, emit};

// ─── Settings ───────────────────────────────────────────────────────────────

/// Config file values with command-line overrides applied.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    count: usize,
    large_text: bool,
}

impl Settings {
    fn new(config: &Config, args: &Args) -> Self {
        Self {
            format: args.format.unwrap_or(config.output.format),
            count: config.harmony.count,
            large_text: config.accessibility.large_text,
        }
    }
}

/// Read the config file. A broken file is not fatal: the error is handed
/// back so it can be logged once the logger exists, and defaults are used.
fn load_config(args: &Args) -> (Config, Option<ConfigError>) {
    let loaded = match &args.config {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}

/// `--log-level` wins outright; otherwise `RUST_LOG`, falling back to the
/// config file's level.
fn init_logger(config: &Config, args: &Args) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(&config.logging.level));
    if let Some(level) = args.log_level.as_deref().and_then(parse_level) {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn color_arg(s: &str) -> Result<Color> {
    Color::parse(s).with_context(|| format!("invalid color argument {s:?}"))
}

fn run(command: &Command, settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let fmt = settings.format;
    match command {
        Command::Harmony { color, kind, count } => {
            let base = color_arg(color)?;
            let count = count.unwrap_or(settings.count);
            let kinds: &[HarmonyKind] = match kind {
                Some(kind) => std::slice::from_ref(kind),
                None => HarmonyKind::all(),
            };
            let harmonies: Vec<ColorHarmony> = kinds
                .iter()
                .map(|&kind| ColorHarmony::build(kind, base, count))
                .collect();
            emit(fmt, harmonies.as_slice(), out)
        }

        Command::Tints { color, count } => {
            let base = color_arg(color)?;
            let ts = scale::tints_and_shades(base, count.unwrap_or(settings.count));
            emit(fmt, &ts, out)
        }

        Command::Blend { from, to, count } => {
            let (a, b) = (color_arg(from)?, color_arg(to)?);
            let blend = scale::shades_between(a, b, count.unwrap_or(settings.count));
            emit(fmt, blend.as_slice(), out)
        }

        Command::Tailwind { color } => {
            let steps = scale::tailwind_scale(color_arg(color)?);
            emit(fmt, steps.as_slice(), out)
        }

        Command::Material { color } => {
            let steps = scale::material_design(color_arg(color)?);
            emit(fmt, steps.as_slice(), out)
        }

        Command::Contrast { foreground, background, large } => {
            let (fg, bg) = (color_arg(foreground)?, color_arg(background)?);
            let large = *large || settings.large_text;
            let result = check_compliance(fg, bg, large);
            let adjusted = (!result.passes()).then(|| ensure_readability(fg, bg, threshold::aa(large)));
            let report = ContrastReport {
                foreground: fg,
                background: bg,
                suggestions: suggest_accessible_alternatives(fg, bg, large),
                best: find_best_accessible_color(fg, bg, large),
                adjusted,
                result,
            };
            emit(fmt, &report, out)
        }

        Command::Simulate { color, filter } => {
            let color = color_arg(color)?;
            let rows: Vec<Simulation> = match filter {
                Some(name) => {
                    let Some(f) = filter_by_name(name) else {
                        bail!("unknown filter {name:?} (see `tincture filters`)");
                    };
                    vec![Simulation { filter: f.name, color: f.apply(color) }]
                }
                None => simulate_all(color)
                    .into_iter()
                    .map(|(filter, color)| Simulation { filter, color })
                    .collect(),
            };
            emit(fmt, rows.as_slice(), out)
        }

        Command::Audit { colors, large } => {
            let palette = colors.iter().map(|c| color_arg(c)).collect::<Result<Vec<_>>>()?;
            let report = audit_palette(&palette, *large || settings.large_text);
            debug!("audited {} pairs", report.len());
            emit(fmt, report.as_slice(), out)
        }

        Command::Filters => emit(fmt, filters(), out),
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_error) = load_config(&args);
    init_logger(&config, &args);
    if let Some(e) = config_error {
        warn!("{e}; using defaults");
    }

    let settings = Settings::new(&config, &args);
    debug!("settings: {settings:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args.command, &settings, &mut out)?;
    out.flush()?;
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings(format: OutputFormat) -> Settings {
        Settings { format, count: 5, large_text: false }
    }

    fn run_text(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv)?;
        let mut buf = Vec::new();
        run(&args.command, &settings(OutputFormat::Text), &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    fn run_json(argv: &[&str]) -> serde_json::Value {
        let args = Args::try_parse_from(argv).unwrap();
        let mut buf = Vec::new();
        run(&args.command, &settings(OutputFormat::Json), &mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.harmony.count = 8;
        let args = Args::try_parse_from(["tincture", "--format", "text", "filters"]).unwrap();
        assert_eq!(
            Settings::new(&config, &args),
            Settings { format: OutputFormat::Text, count: 8, large_text: false }
        );
    }

    #[test]
    fn log_levels_parse() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn harmony_defaults_to_all_kinds() {
        let value = run_json(&["tincture", "harmony", "#ff0000"]);
        assert_eq!(value.as_array().unwrap().len(), 6);
        assert_eq!(value[0]["colors"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn harmony_single_kind() {
        let value = run_json(&["tincture", "harmony", "#ff0000", "--kind", "triadic"]);
        assert_eq!(value[0]["colors"], serde_json::json!(["#ff0000", "#00ff00", "#0000ff"]));
    }

    #[test]
    fn invalid_color_is_an_error() {
        let err = run_text(&["tincture", "tailwind", "not-a-color"]).unwrap_err();
        assert!(err.to_string().contains("invalid color argument"), "{err}");
    }

    #[test]
    fn unknown_filter_is_an_error() {
        assert!(run_text(&["tincture", "simulate", "#ff0000", "--filter", "nope"]).is_err());
    }

    #[test]
    fn simulate_single_filter() {
        let out = run_text(&["tincture", "simulate", "#ff0000", "--filter", "protanopia"]).unwrap();
        assert_eq!(out, "Protanopia     #918e00\n");
    }

    #[test]
    fn contrast_failure_includes_fixes() {
        let value = run_json(&["tincture", "contrast", "#777777", "#ffffff"]);
        assert_eq!(value["level"], "FAIL");
        assert_eq!(value["suggestions"][0]["type"], "darken");
        assert!(value["adjusted"].is_string());
    }

    #[test]
    fn contrast_pass_has_no_fixes() {
        let value = run_json(&["tincture", "contrast", "#000", "#fff"]);
        assert_eq!(value["level"], "AAA");
        assert_eq!(value["suggestions"], serde_json::json!([]));
        assert!(value["adjusted"].is_null());
    }

    #[test]
    fn audit_lists_ordered_pairs() {
        let out = run_text(&["tincture", "audit", "#000000", "#ffffff"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("#000000 on #ffffff"));
        assert!(lines[1].starts_with("#ffffff on #000000"));
    }

    #[test]
    fn blend_includes_ends() {
        let out = run_text(&["tincture", "blend", "#000", "#fff", "-n", "3"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.first(), Some(&"#000000"));
        assert_eq!(lines.last(), Some(&"#ffffff"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let args = Args::try_parse_from(["tincture", "--config", path.to_str().unwrap(), "filters"]).unwrap();
        let (config, err) = load_config(&args);
        assert_eq!(config, Config::default());
        assert!(matches!(err, Some(ConfigError::NotFound(_))));
    }
}
