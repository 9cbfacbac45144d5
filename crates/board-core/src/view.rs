//! The board controller: current data, current preferences, derived view.

use crate::group::{Grouped, group};
use crate::mode::{GroupChoice, SortChoice, ViewPreferences};
use crate::model::BoardData;
use crate::prefs::{KeyValueStore, PreferenceStore};
use crate::sort::sort;
use tracing::info;

/// Everything the derived view is computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub data: BoardData,
    pub preferences: ViewPreferences,
}

impl ViewState {
    /// Group by the current mode, then sort every group by the current sort.
    #[must_use]
    pub fn derive(&self) -> Grouped {
        let mut grouped = group(
            &self.data.tickets,
            &self.data.users,
            &self.preferences.group_by,
        );
        for tickets in grouped.values_mut() {
            sort(tickets, &self.preferences.sort_by);
        }
        grouped
    }
}

/// Owns the board state and persists every preference change immediately.
#[derive(Debug)]
pub struct ViewController<S> {
    state: ViewState,
    prefs: PreferenceStore<S>,
}

impl<S: KeyValueStore> ViewController<S> {
    /// Start with empty data and preferences loaded from `store`.
    pub fn new(store: S) -> Self {
        let prefs = PreferenceStore::new(store);
        let preferences = prefs.load();
        Self {
            state: ViewState {
                data: BoardData::default(),
                preferences,
            },
            prefs,
        }
    }

    /// Swap in a freshly fetched ticket/user collection.
    pub fn replace_data(&mut self, data: BoardData) {
        info!(
            tickets = data.tickets.len(),
            users = data.users.len(),
            "board data replaced"
        );
        self.state.data = data;
    }

    /// Change the grouping mode and persist both preferences.
    pub fn set_group_by(&mut self, mode: impl Into<GroupChoice>) {
        self.state.preferences.group_by = mode.into();
        self.prefs.save(&self.state.preferences);
    }

    /// Change the sort mode and persist both preferences.
    pub fn set_sort_by(&mut self, mode: impl Into<SortChoice>) {
        self.state.preferences.sort_by = mode.into();
        self.prefs.save(&self.state.preferences);
    }

    /// The ready-to-render board, recomputed on every call.
    #[must_use]
    pub fn current_view(&self) -> Grouped {
        self.state.derive()
    }

    #[must_use]
    pub const fn preferences(&self) -> &ViewPreferences {
        &self.state.preferences
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub const fn preference_store(&self) -> &PreferenceStore<S> {
        &self.prefs
    }
}
