use super::{Context, normalize_mode_arg};
use crate::cmd::prefs::{PreferencesReport, render_preferences};
use board_core::{GroupMode, ModeLabel};
use clap::Args;
use tracing::info;

/// Arguments for `bv group`.
#[derive(Args, Debug)]
pub struct GroupArgs {
    /// Grouping: by-status, by-user or by-priority (stored labels such as "By User" also work).
    #[arg(value_name = "MODE", value_parser = parse_group_mode)]
    pub mode: GroupMode,
}

/// Accept either the stored label or a command-line spelling of it.
///
/// # Errors
///
/// Returns a message naming the accepted spellings for anything else.
pub fn parse_group_mode(raw: &str) -> Result<GroupMode, String> {
    if let Some(mode) = GroupMode::from_label(raw) {
        return Ok(mode);
    }
    match normalize_mode_arg(raw).as_str() {
        "by-status" | "status" => Ok(GroupMode::ByStatus),
        "by-user" | "user" => Ok(GroupMode::ByUser),
        "by-priority" | "priority" => Ok(GroupMode::ByPriority),
        _ => Err(format!(
            "unknown grouping '{raw}' (expected by-status, by-user or by-priority)"
        )),
    }
}

/// Switch the board grouping and persist it.
///
/// # Errors
///
/// Returns an error if writing the confirmation to stdout fails.
pub fn run_group(args: &GroupArgs, ctx: &Context) -> anyhow::Result<()> {
    let mut controller = ctx.controller();
    controller.set_group_by(args.mode);
    info!(group_by = %args.mode, "grouping changed");

    if ctx.quiet {
        return Ok(());
    }
    render_preferences(ctx.output, &PreferencesReport::from_controller(&controller))
}
