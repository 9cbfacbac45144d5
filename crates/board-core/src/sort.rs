//! Order tickets within a single column.

use crate::collate::compare_titles;
use crate::mode::{ModeChoice, SortChoice, SortMode};
use crate::model::Ticket;
use tracing::trace;

/// Sort one group's tickets in place.
///
/// Both orders are stable, so tickets with equal keys keep their input order.
/// Tickets without a priority sort after every numbered one.
/// An unrecognized mode leaves the slice untouched.
pub fn sort(tickets: &mut [Ticket], mode: &SortChoice) {
    match mode {
        ModeChoice::Known(SortMode::Priority) => {
            tickets.sort_by(|a, b| b.priority.cmp(&a.priority));
        }
        ModeChoice::Known(SortMode::Title) => {
            tickets.sort_by(|a, b| compare_titles(&a.title, &b.title));
        }
        ModeChoice::Unrecognized(raw) => {
            trace!(mode = %raw, "unrecognized sort mode; order unchanged");
        }
    }
}
