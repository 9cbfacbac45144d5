//! Grouping and sort modes, and the labels they persist as.
//!
//! Each mode type owns exactly one label table ([`ModeLabel::LABELS`]) that is
//! used both to render a mode for storage and to parse it back. A stored
//! string that matches no row is kept verbatim as
//! [`ModeChoice::Unrecognized`] so the engines can apply their fallbacks.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Dimension used to partition tickets into board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupMode {
    ByStatus,
    ByUser,
    ByPriority,
}

/// Key used to order tickets inside a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMode {
    Priority,
    Title,
}

/// A closed set of modes with a single bidirectional label table.
pub trait ModeLabel: Copy + Eq + 'static {
    /// Every variant paired with its persisted label.
    const LABELS: &'static [(Self, &'static str)];

    /// The persisted label for this mode.
    fn label(self) -> &'static str {
        Self::LABELS
            .iter()
            .find(|(mode, _)| *mode == self)
            .map_or("", |(_, label)| *label)
    }

    /// Exact, case-sensitive lookup of a persisted label.
    fn from_label(raw: &str) -> Option<Self> {
        Self::LABELS
            .iter()
            .find(|(_, label)| *label == raw)
            .map(|(mode, _)| *mode)
    }
}

impl ModeLabel for GroupMode {
    const LABELS: &'static [(Self, &'static str)] = &[
        (Self::ByStatus, "By Status"),
        (Self::ByUser, "By User"),
        (Self::ByPriority, "By Priority"),
    ];
}

impl ModeLabel for SortMode {
    const LABELS: &'static [(Self, &'static str)] =
        &[(Self::Priority, "priority"), (Self::Title, "title")];
}

impl fmt::Display for GroupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A mode as it arrived from storage or a caller: either a known variant or
/// the raw string that failed to match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModeChoice<M> {
    Known(M),
    Unrecognized(String),
}

pub type GroupChoice = ModeChoice<GroupMode>;
pub type SortChoice = ModeChoice<SortMode>;

impl<M: ModeLabel> ModeChoice<M> {
    /// Parse a label without validation; unknown strings are preserved.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        M::from_label(raw).map_or_else(|| Self::Unrecognized(raw.to_string()), Self::Known)
    }

    /// The string written to storage. Unknown values round-trip verbatim.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            Self::Known(mode) => mode.label(),
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    #[must_use]
    pub const fn known(&self) -> Option<M> {
        match self {
            Self::Known(mode) => Some(*mode),
            Self::Unrecognized(_) => None,
        }
    }
}

impl<M> From<M> for ModeChoice<M> {
    fn from(mode: M) -> Self {
        Self::Known(mode)
    }
}

impl<M: ModeLabel> fmt::Display for ModeChoice<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl<M: ModeLabel> Serialize for ModeChoice<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

impl<'de, M: ModeLabel> Deserialize<'de> for ModeChoice<M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// The persisted pair of view preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPreferences {
    pub group_by: GroupChoice,
    pub sort_by: SortChoice,
}

impl ViewPreferences {
    pub const DEFAULT_GROUP_BY: GroupMode = GroupMode::ByStatus;
    pub const DEFAULT_SORT_BY: SortMode = SortMode::Priority;

    #[must_use]
    pub fn new(group_by: impl Into<GroupChoice>, sort_by: impl Into<SortChoice>) -> Self {
        Self {
            group_by: group_by.into(),
            sort_by: sort_by.into(),
        }
    }
}

impl Default for ViewPreferences {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GROUP_BY, Self::DEFAULT_SORT_BY)
    }
}
