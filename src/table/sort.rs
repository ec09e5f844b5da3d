//! Sort state and the three-state header cycle.

use log::debug;

use super::column::{find_column, Column};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header indicator for a sorted column.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActiveSort {
    pub key: String,
    pub direction: SortDirection,
}

/// Current sort request. Either unsorted, or a column key with a direction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortState(Option<ActiveSort>);

impl SortState {
    pub fn unsorted() -> Self {
        Self(None)
    }

    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self(Some(ActiveSort {
            key: key.into(),
            direction,
        }))
    }

    pub fn active(&self) -> Option<&ActiveSort> {
        self.0.as_ref()
    }

    pub fn key(&self) -> Option<&str> {
        self.0.as_ref().map(|s| s.key.as_str())
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.0.as_ref().map(|s| s.direction)
    }

    pub fn is_sorted(&self) -> bool {
        self.0.is_some()
    }

    /// Direction if `key` is the active column.
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        self.0
            .as_ref()
            .filter(|s| s.key == key)
            .map(|s| s.direction)
    }

    /// Next state after activating `key`: ascending, then descending, then
    /// cleared. A different column always starts at ascending.
    pub fn cycle(&self, key: &str) -> SortState {
        match &self.0 {
            Some(active) if active.key == key => match active.direction {
                SortDirection::Ascending => SortState::by(key, SortDirection::Descending),
                SortDirection::Descending => SortState::unsorted(),
            },
            _ => SortState::by(key, SortDirection::Ascending),
        }
    }
}

/// Owns the sort state and applies header activations to it.
#[derive(Clone, Debug, Default)]
pub struct SortController {
    state: SortState,
}

impl SortController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Replace the state directly, e.g. an initial sort from configuration.
    pub fn set_state(&mut self, state: SortState) {
        self.state = state;
    }

    /// Handle a header click or keyboard activation.
    ///
    /// Returns the new state, or `None` when the key names no sortable column.
    pub fn activate<T>(&mut self, columns: &[Column<T>], key: &str) -> Option<&SortState> {
        if !is_sortable(columns, key) {
            return None;
        }
        self.state = self.state.cycle(key);
        debug!("sort cycled on {key}: {:?}", self.state);
        Some(&self.state)
    }
}

/// Whether `key` names a column that accepts sorting.
pub fn is_sortable<T>(columns: &[Column<T>], key: &str) -> bool {
    find_column(columns, key).is_some_and(|column| column.sortable)
}
