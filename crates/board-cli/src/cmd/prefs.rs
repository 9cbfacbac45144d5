use super::{Context, PrefsBackend};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};
use board_core::{ViewController, ViewPreferences};
use serde::Serialize;
use std::io::{self, Write};

/// What `bv prefs`, `bv group` and `bv sort` print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferencesReport {
    pub group_by: String,
    pub sort_by: String,
    pub group_by_recognized: bool,
    pub sort_by_recognized: bool,
    /// Preference file, or `None` for an in-memory store.
    pub storage: Option<String>,
}

impl PreferencesReport {
    #[must_use]
    pub fn new(prefs: &ViewPreferences, backend: &PrefsBackend) -> Self {
        Self {
            group_by: prefs.group_by.as_label().to_string(),
            sort_by: prefs.sort_by.as_label().to_string(),
            group_by_recognized: prefs.group_by.known().is_some(),
            sort_by_recognized: prefs.sort_by.known().is_some(),
            storage: backend.location().map(|path| path.display().to_string()),
        }
    }

    #[must_use]
    pub fn from_controller(controller: &ViewController<PrefsBackend>) -> Self {
        Self::new(
            controller.preferences(),
            controller.preference_store().store(),
        )
    }
}

/// Show the persisted preferences, defaults applied.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run_prefs(ctx: &Context) -> anyhow::Result<()> {
    let controller = ctx.controller();
    render_preferences(ctx.output, &PreferencesReport::from_controller(&controller))
}

/// Render a preferences report in the requested format.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn render_preferences(output: OutputMode, report: &PreferencesReport) -> anyhow::Result<()> {
    render_mode(output, report, render_text, render_pretty)
}

fn render_text(report: &PreferencesReport, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "group_by\t{}", report.group_by)?;
    writeln!(w, "sort_by\t{}", report.sort_by)?;
    writeln!(w, "storage\t{}", report.storage.as_deref().unwrap_or("memory"))
}

fn render_pretty(report: &PreferencesReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "View preferences")?;
    pretty_kv(w, "Group by", annotate(&report.group_by, report.group_by_recognized))?;
    pretty_kv(w, "Sort by", annotate(&report.sort_by, report.sort_by_recognized))?;
    pretty_kv(
        w,
        "Storage",
        report.storage.as_deref().unwrap_or("memory (not persisted)"),
    )
}

fn annotate(label: &str, recognized: bool) -> String {
    if recognized {
        label.to_string()
    } else {
        format!("{label} (unrecognized)")
    }
}
