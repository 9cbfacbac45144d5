//! How `bv` writes boards, preferences and errors.
//!
//! Each command builds one serializable view and hands it to [`render_mode`]
//! with a text renderer and a pretty renderer. JSON comes straight from the
//! view's `Serialize` impl, so the three formats always describe the same
//! board.
//!
//! The format is picked in this order:
//! 1. `--format <MODE>`, then `--json`
//! 2. `FORMAT` env var (`pretty`, `text` or `json`, any case)
//! 3. [`OutputMode::Pretty`] on a terminal, [`OutputMode::Text`] otherwise

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

/// Width of the rule drawn under column headings.
pub const PRETTY_RULE_WIDTH: usize = 72;

/// Column heading with a rule underneath, e.g. `Todo (2)`.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    writeln!(w, "{}", "-".repeat(PRETTY_RULE_WIDTH))
}

/// One indented `Field:  value` line of a card.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "  {:<10} {}", format!("{key}:"), value.as_ref())
}

/// Output format for every `bv` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Columns of cards for reading in a terminal.
    Pretty,
    /// One tab-separated row per card.
    Text,
    /// The view as pretty-printed JSON.
    Json,
}

fn pick_mode(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    format_env: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    format_flag
        .or_else(|| json_flag.then_some(OutputMode::Json))
        .or_else(|| format_env.and_then(|raw| OutputMode::from_str(raw.trim(), true).ok()))
        .unwrap_or(if is_tty {
            OutputMode::Pretty
        } else {
            OutputMode::Text
        })
}

/// Pick the output format from flags, `FORMAT` and whether stdout is a terminal.
#[must_use]
pub fn resolve_output_mode(format_flag: Option<OutputMode>, json_flag: bool) -> OutputMode {
    let format_env = std::env::var("FORMAT").ok();
    pick_mode(
        format_flag,
        json_flag,
        format_env.as_deref(),
        io::stdout().is_terminal(),
    )
}

/// Write `value` to stdout in `mode`.
///
/// # Errors
///
/// Returns an error if serialization or writing to stdout fails.
pub fn render_mode<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    render_mode_to(&mut io::stdout().lock(), mode, value, text_fn, pretty_fn)
}

/// [`render_mode`] into any writer; tests render into a `Vec<u8>`.
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails.
pub fn render_mode_to<T: Serialize>(
    out: &mut dyn Write,
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => text_fn(value, out)?,
        OutputMode::Pretty => pretty_fn(value, out)?,
    }
    Ok(())
}

/// A fatal `bv` failure as shown on stderr.
#[derive(Debug, Serialize)]
pub struct CliError {
    pub message: String,
    /// What to try next, e.g. fixing the config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Stable `E####` code from [`BoardError::error_code`](board_core::error::BoardError::error_code).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CliError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            error_code: None,
        }
    }
}

impl From<&board_core::error::BoardError> for CliError {
    fn from(err: &board_core::error::BoardError) -> Self {
        Self {
            message: err.to_string(),
            suggestion: Some(err.suggestion()),
            error_code: Some(err.error_code().to_string()),
        }
    }
}

/// Report a fatal error on stderr. JSON mode wraps it as `{"error": {...}}`.
///
/// # Errors
///
/// Returns an error if writing to stderr fails.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let mut out = io::stderr().lock();
    if mode == OutputMode::Json {
        serde_json::to_writer_pretty(&mut out, &serde_json::json!({ "error": error }))?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "error: {}", error.message)?;
    if let Some(suggestion) = &error.suggestion {
        writeln!(out, "  suggestion: {suggestion}")?;
    }
    Ok(())
}
