//! board-core library.
//!
//! Derives a grouped, sorted board from a flat list of tickets and keeps the
//! user's view preferences across sessions.
//!
//! # Conventions
//!
//! - **Errors**: [`error::BoardError`] at the storage, config, and data-source
//!   edges. The derivation engine itself never fails; unknown modes and
//!   priorities degrade to documented fallbacks.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod collate;
pub mod config;
pub mod error;
pub mod group;
pub mod mode;
pub mod model;
pub mod prefs;
pub mod priority;
pub mod sort;
pub mod view;

pub use group::{Grouped, NO_PRIORITY_KEY, UNKNOWN_USER, group};
pub use mode::{GroupChoice, GroupMode, ModeChoice, ModeLabel, SortChoice, SortMode, ViewPreferences};
pub use model::{BoardData, Ticket, User};
pub use prefs::{FileStore, KeyValueStore, MemoryStore, PreferenceStore};
pub use sort::sort;
pub use view::{ViewController, ViewState};
