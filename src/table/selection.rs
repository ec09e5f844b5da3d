//! Row identities and the selection set.
//!
//! Identity is positional by default: the row displayed at position `i` is
//! `row-<i>`. Re-sorting therefore changes which record a stored identity
//! points at; a selection made before a sort follows the position, not the
//! record. Use [`KeyedIdentity`] to tie selection to record content instead.

use std::collections::HashSet;
use std::fmt;

/// Strategy that names a row for selection purposes.
pub trait RowIdentity<T> {
    /// Identity of `record`, displayed (or stored) at `position`.
    fn row_id(&self, position: usize, record: &T) -> String;
}

/// `row-<position>`, ignoring record content.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionalIdentity;

impl<T> RowIdentity<T> for PositionalIdentity {
    fn row_id(&self, position: usize, _record: &T) -> String {
        positional_id(position)
    }
}

pub fn positional_id(position: usize) -> String {
    format!("row-{position}")
}

/// Identity derived from record content, stable across re-sorts.
///
/// Keys must be unique within the data. Records sharing a key share one
/// selection entry, so the selection can never cover every row and
/// select-all keeps selecting instead of clearing.
pub struct KeyedIdentity<T> {
    key: Box<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> KeyedIdentity<T> {
    pub fn new(key: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self { key: Box::new(key) }
    }
}

impl<T> RowIdentity<T> for KeyedIdentity<T> {
    fn row_id(&self, _position: usize, record: &T) -> String {
        (self.key)(record)
    }
}

impl<T> fmt::Debug for KeyedIdentity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedIdentity").finish_non_exhaustive()
    }
}

/// Set of selected row identities.
#[derive(Clone, Debug, Default)]
pub struct SelectionTracker {
    selected: HashSet<String>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected identities, sorted for deterministic output.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Flip membership of `id`. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Replace the selection with exactly `ids`.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = String>) {
        self.selected = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// True when the selection holds exactly `total` identities.
    pub fn covers(&self, total: usize) -> bool {
        self.selected.len() == total
    }

    /// Drop identities not in `valid`. Returns how many were dropped.
    pub fn retain_valid(&mut self, valid: &HashSet<String>) -> usize {
        let before = self.selected.len();
        self.selected.retain(|id| valid.contains(id));
        before - self.selected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_ids() {
        assert_eq!(PositionalIdentity.row_id(0, &"anything"), "row-0");
        assert_eq!(RowIdentity::<()>::row_id(&PositionalIdentity, 12, &()), "row-12");
    }

    #[test]
    fn keyed_ids_ignore_position() {
        let identity = KeyedIdentity::new(|n: &u32| format!("user-{n}"));
        assert_eq!(identity.row_id(0, &7), "user-7");
        assert_eq!(identity.row_id(5, &7), "user-7");
    }

    #[test]
    fn toggle_flips_membership() {
        let mut sel = SelectionTracker::new();
        assert!(sel.toggle("row-1"));
        assert!(sel.is_selected("row-1"));
        assert!(!sel.toggle("row-1"));
        assert!(sel.is_empty());
    }

    #[test]
    fn select_all_replaces_and_covers() {
        let mut sel = SelectionTracker::new();
        sel.toggle("stale");
        sel.select_all((0..3).map(positional_id));
        assert_eq!(sel.ids(), ["row-0", "row-1", "row-2"]);
        assert!(sel.covers(3));
        assert!(!sel.covers(4));
        sel.clear();
        assert!(sel.covers(0));
    }

    #[test]
    fn retain_drops_stale_ids() {
        let mut sel = SelectionTracker::new();
        sel.select_all((0..4).map(positional_id));
        let valid: HashSet<String> = (0..2).map(positional_id).collect();
        assert_eq!(sel.retain_valid(&valid), 2);
        assert_eq!(sel.ids(), ["row-0", "row-1"]);
    }
}
