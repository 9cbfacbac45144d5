use super::Context;
use crate::cmd::group::parse_group_mode;
use crate::cmd::sort::parse_sort_mode;
use crate::output::{pretty_kv, pretty_section, render_mode};
use crate::source::DataSource;
use board_core::config::resolve_endpoint;
use board_core::{GroupMode, Grouped, SortMode, Ticket, ViewPreferences, priority};
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

/// Arguments for `bv board`.
#[derive(Args, Debug, Default)]
pub struct BoardArgs {
    /// Read the `{ tickets, users }` document from a JSON file.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Fetch the document from this URL instead of the configured endpoint.
    #[arg(long, value_name = "URL", conflicts_with = "input")]
    pub endpoint: Option<String>,

    /// Change (and persist) the grouping before rendering.
    #[arg(long, value_name = "MODE", value_parser = parse_group_mode)]
    pub group_by: Option<GroupMode>,

    /// Change (and persist) the ordering before rendering.
    #[arg(long, value_name = "MODE", value_parser = parse_sort_mode)]
    pub sort_by: Option<SortMode>,
}

#[derive(Debug, Serialize)]
struct BoardView {
    group_by: String,
    sort_by: String,
    groups: Vec<ColumnView>,
}

#[derive(Debug, Serialize)]
struct ColumnView {
    name: String,
    #[serde(skip)]
    heading: String,
    tickets: Vec<CardView>,
}

#[derive(Debug, Serialize)]
struct CardView {
    id: String,
    title: String,
    status: String,
    priority: Option<i64>,
    priority_label: &'static str,
    tags: Vec<String>,
    user_id: String,
    #[serde(skip)]
    tags_line: String,
}

impl BoardView {
    fn new(prefs: &ViewPreferences, grouped: &Grouped) -> Self {
        let by_priority = prefs.group_by.known() == Some(GroupMode::ByPriority);
        let groups = grouped
            .iter()
            .map(|(name, tickets)| ColumnView {
                name: name.clone(),
                heading: if by_priority {
                    column_priority_label(name).to_string()
                } else {
                    name.clone()
                },
                tickets: tickets.iter().map(CardView::from).collect(),
            })
            .collect();

        Self {
            group_by: prefs.group_by.as_label().to_string(),
            sort_by: prefs.sort_by.as_label().to_string(),
            groups,
        }
    }

    const fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl From<&Ticket> for CardView {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            status: ticket.status.clone(),
            priority: ticket.priority,
            priority_label: ticket.priority_label(),
            tags: ticket.tag.clone(),
            user_id: ticket.user_id.clone(),
            tags_line: ticket.tags_display(),
        }
    }
}

/// Group keys under `By Priority` are decimal strings, or
/// [`NO_PRIORITY_KEY`](board_core::NO_PRIORITY_KEY) for tickets without one.
fn column_priority_label(key: &str) -> &'static str {
    key.parse().map_or(priority::NO_PRIORITY, priority::label)
}

/// Load board data, derive the view from the persisted preferences and render it.
///
/// A data-source failure is logged and the board renders from empty
/// collections.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run_board(args: &BoardArgs, ctx: &Context) -> anyhow::Result<()> {
    let mut controller = ctx.controller();
    if let Some(mode) = args.group_by {
        controller.set_group_by(mode);
    }
    if let Some(mode) = args.sort_by {
        controller.set_sort_by(mode);
    }

    let endpoint = resolve_endpoint(args.endpoint.as_deref(), &ctx.config);
    let source = DataSource::select(
        args.input.as_deref(),
        endpoint,
        ctx.config.source.timeout_secs,
    );
    match source.fetch() {
        Ok(data) => controller.replace_data(data),
        Err(err) => warn!(
            code = %err.error_code(),
            origin = %source.origin(),
            error = %err,
            "failed to load board data; showing an empty board"
        ),
    }

    let view = BoardView::new(controller.preferences(), &controller.current_view());
    render_mode(ctx.output, &view, render_text, render_pretty)
}

fn render_text(view: &BoardView, w: &mut dyn Write) -> io::Result<()> {
    if view.is_empty() {
        return Ok(());
    }
    writeln!(w, "GROUP\tID\tPRIORITY\tSTATUS\tTITLE\tTAGS")?;
    for column in &view.groups {
        for card in &column.tickets {
            writeln!(
                w,
                "{}\t{}\t{}\t{}\t{}\t{}",
                column.name, card.id, card.priority_label, card.status, card.title, card.tags_line
            )?;
        }
    }
    Ok(())
}

fn render_pretty(view: &BoardView, w: &mut dyn Write) -> io::Result<()> {
    if view.is_empty() {
        return writeln!(w, "No tickets to show.");
    }

    for (index, column) in view.groups.iter().enumerate() {
        if index > 0 {
            writeln!(w)?;
        }
        pretty_section(w, &format!("{} ({})", column.heading, column.tickets.len()))?;
        for (card_index, card) in column.tickets.iter().enumerate() {
            if card_index > 0 {
                writeln!(w)?;
            }
            writeln!(w, "{}", card.title)?;
            pretty_kv(w, "ID", &card.id)?;
            pretty_kv(w, "Priority", card.priority_label)?;
            pretty_kv(w, "Status", &card.status)?;
            pretty_kv(w, "Tags", &card.tags_line)?;
        }
    }
    Ok(())
}
