//! Table state engine: sort controller, derived view and selection tracker
//! behind one owner that handles header and checkbox commands.

pub mod column;
pub mod model;
pub mod selection;
pub mod sort;
pub mod value;
pub mod view;

use std::collections::HashSet;
use std::fmt;

use log::{debug, warn};

pub use column::Column;
pub use model::{CheckboxModel, GridModel, HeaderModel, Presentation, RowModel, StatusModel, TableModel};
pub use selection::{KeyedIdentity, PositionalIdentity, RowIdentity, SelectionTracker};
pub use sort::{ActiveSort, SortController, SortDirection, SortState};
pub use value::{Record, Value};
pub use view::{project, DerivedView};

/// Callback receiving the visible selection, in display order.
pub type RowSelectCallback<T> = Box<dyn FnMut(&[&T])>;

/// An interaction routed to the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableCommand {
    /// Header clicked, or Enter/Space on a focused header.
    HeaderActivate(String),
    /// Row checkbox toggled.
    RowToggle(String),
    /// Select-all checkbox toggled.
    SelectAllToggle,
}

/// What a command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Ignored,
    Sorted(SortState),
    SelectionChanged { selected: usize },
}

/// Generic table state over caller-defined records.
pub struct DataTable<T> {
    data: Vec<T>,
    columns: Vec<Column<T>>,
    loading: bool,
    selectable: bool,
    sort: SortController,
    selection: SelectionTracker,
    identity: Box<dyn RowIdentity<T>>,
    view: DerivedView,
    data_revision: u64,
    columns_revision: u64,
    on_row_select: Option<RowSelectCallback<T>>,
}

impl<T> DataTable<T> {
    pub fn new(data: Vec<T>, columns: Vec<Column<T>>) -> Self {
        let mut table = Self {
            data,
            columns,
            loading: false,
            selectable: false,
            sort: SortController::new(),
            selection: SelectionTracker::new(),
            identity: Box::new(PositionalIdentity),
            view: DerivedView::new(),
            data_revision: 0,
            columns_revision: 0,
            on_row_select: None,
        };
        table.sync_view();
        table
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Replace the positional row identity strategy.
    pub fn with_identity(mut self, identity: impl RowIdentity<T> + 'static) -> Self {
        self.identity = Box::new(identity);
        self.selection.clear();
        self
    }

    /// Start with a sort already applied. A sort naming an unknown or
    /// non-sortable column is dropped.
    pub fn with_sort(mut self, sort: SortState) -> Self {
        if let Some(key) = sort.key() {
            if !sort::is_sortable(&self.columns, key) {
                warn!("ignoring initial sort on {key}: not a sortable column");
                return self;
            }
        }
        self.sort.set_state(sort);
        self.sync_view();
        self
    }

    /// Register the selection-changed notifier.
    pub fn on_row_select(mut self, callback: impl FnMut(&[&T]) + 'static) -> Self {
        self.on_row_select = Some(Box::new(callback));
        self
    }

    // ---- inputs ----

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Replace the records. The sort state is kept; selected identities that
    /// no longer name a row are dropped.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.data_revision = self.data_revision.wrapping_add(1);
        let valid = self.input_ids().into_iter().collect::<HashSet<_>>();
        let dropped = self.selection.retain_valid(&valid);
        if dropped > 0 {
            debug!("dropped {dropped} stale selected rows after data change");
        }
        self.sync_view();
    }

    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        self.columns = columns;
        self.columns_revision = self.columns_revision.wrapping_add(1);
        self.sync_view();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // ---- derived state ----

    pub fn sort_state(&self) -> &SortState {
        self.sort.state()
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::resolve(self.loading, self.data.len())
    }

    /// Rows in display order.
    pub fn rows(&self) -> Vec<&T> {
        self.view.rows(&self.data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Identity of the row displayed at `position`.
    pub fn row_id(&self, position: usize) -> Option<String> {
        let source = self.view.source_index(position);
        self.data
            .get(source)
            .map(|record| self.identity.row_id(position, record))
    }

    /// Identities of the displayed rows, in display order.
    pub fn row_ids(&self) -> Vec<String> {
        self.view
            .rows(&self.data)
            .into_iter()
            .enumerate()
            .map(|(position, record)| self.identity.row_id(position, record))
            .collect()
    }

    pub fn is_row_selected(&self, position: usize) -> bool {
        self.row_id(position)
            .is_some_and(|id| self.selection.is_selected(&id))
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Select-all checked state: selection size equals the row count.
    pub fn all_selected(&self) -> bool {
        self.selection.covers(self.data.len())
    }

    /// Selected records in display order.
    pub fn selected_records(&self) -> Vec<&T> {
        visible_selection(&self.data, &self.view, &self.selection, self.identity.as_ref())
    }

    // ---- commands ----

    pub fn handle(&mut self, command: TableCommand) -> CommandOutcome {
        match command {
            TableCommand::HeaderActivate(key) => self.on_header_activate(&key),
            TableCommand::RowToggle(id) => self.on_row_toggle(&id),
            TableCommand::SelectAllToggle => self.on_select_all_toggle(),
        }
    }

    /// Cycle the sort on `key`. Ignored while loading or when the column is
    /// unknown or not sortable.
    pub fn on_header_activate(&mut self, key: &str) -> CommandOutcome {
        if self.loading {
            return CommandOutcome::Ignored;
        }
        let Some(state) = self.sort.activate(&self.columns, key).cloned() else {
            return CommandOutcome::Ignored;
        };
        self.sync_view();
        CommandOutcome::Sorted(state)
    }

    /// Flip the selection of `row_id` and notify.
    pub fn on_row_toggle(&mut self, row_id: &str) -> CommandOutcome {
        if self.loading || !self.selectable {
            return CommandOutcome::Ignored;
        }
        let now_selected = self.selection.toggle(row_id);
        debug!(
            "row {row_id} {}",
            if now_selected { "selected" } else { "deselected" }
        );
        self.notify_selection();
        CommandOutcome::SelectionChanged {
            selected: self.selection.len(),
        }
    }

    /// Clear the selection if every row is selected, otherwise select every
    /// row. Notifies either way.
    pub fn on_select_all_toggle(&mut self) -> CommandOutcome {
        if self.loading || !self.selectable {
            return CommandOutcome::Ignored;
        }
        if self.all_selected() {
            self.selection.clear();
            debug!("selection cleared");
        } else {
            let ids = self.input_ids();
            self.selection.select_all(ids);
            debug!("selected all {} rows", self.data.len());
        }
        self.notify_selection();
        CommandOutcome::SelectionChanged {
            selected: self.selection.len(),
        }
    }

    // ---- internals ----

    fn sync_view(&mut self) {
        self.view.refresh(
            &self.data,
            self.data_revision,
            &self.columns,
            self.columns_revision,
            self.sort.state(),
        );
    }

    // Identities of the unsorted input
    fn input_ids(&self) -> Vec<String> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, record)| self.identity.row_id(i, record))
            .collect()
    }

    fn notify_selection(&mut self) {
        let Some(callback) = self.on_row_select.as_mut() else {
            return;
        };
        let rows = visible_selection(&self.data, &self.view, &self.selection, self.identity.as_ref());
        callback(rows.as_slice());
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("rows", &self.data.len())
            .field("columns", &self.columns)
            .field("loading", &self.loading)
            .field("selectable", &self.selectable)
            .field("sort", self.sort.state())
            .field("selected", &self.selection.len())
            .finish_non_exhaustive()
    }
}

// Displayed rows whose identity is in the selection, in display order.
fn visible_selection<'a, T>(
    data: &'a [T],
    view: &DerivedView,
    selection: &SelectionTracker,
    identity: &dyn RowIdentity<T>,
) -> Vec<&'a T> {
    view.rows(data)
        .into_iter()
        .enumerate()
        .filter(|(position, record)| selection.is_selected(&identity.row_id(*position, record)))
        .map(|(_, record)| record)
        .collect()
}
