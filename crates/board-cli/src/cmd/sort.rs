use super::{Context, normalize_mode_arg};
use crate::cmd::prefs::{PreferencesReport, render_preferences};
use board_core::{ModeLabel, SortMode};
use clap::Args;
use tracing::info;

/// Arguments for `bv sort`.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Ordering inside each column: priority or title.
    #[arg(value_name = "MODE", value_parser = parse_sort_mode)]
    pub mode: SortMode,
}

/// # Errors
///
/// Returns a message naming the accepted spellings for unknown input.
pub fn parse_sort_mode(raw: &str) -> Result<SortMode, String> {
    SortMode::from_label(raw)
        .or_else(|| match normalize_mode_arg(raw).as_str() {
            "priority" | "by-priority" => Some(SortMode::Priority),
            "title" | "by-title" => Some(SortMode::Title),
            _ => None,
        })
        .ok_or_else(|| format!("unknown ordering '{raw}' (expected priority or title)"))
}

/// Switch the in-column ordering and persist it.
///
/// # Errors
///
/// Returns an error if writing the confirmation to stdout fails.
pub fn run_sort(args: &SortArgs, ctx: &Context) -> anyhow::Result<()> {
    let mut controller = ctx.controller();
    controller.set_sort_by(args.mode);
    info!(sort_by = %args.mode, "ordering changed");

    if ctx.quiet {
        return Ok(());
    }
    render_preferences(ctx.output, &PreferencesReport::from_controller(&controller))
}
