//! Render-independent description of what the table shows.
//!
//! Renderers draw a [`TableModel`]; they never read engine state directly.

use super::sort::SortDirection;
use super::DataTable;

pub const TABLE_LABEL: &str = "Data table";
pub const SELECT_ALL_LABEL: &str = "Select all rows";

/// Which of the three presentations applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    Loading,
    Empty,
    Populated,
}

impl Presentation {
    /// Loading wins over everything; otherwise no rows means empty.
    pub fn resolve(loading: bool, row_count: usize) -> Self {
        if loading {
            Presentation::Loading
        } else if row_count == 0 {
            Presentation::Empty
        } else {
            Presentation::Populated
        }
    }
}

/// A status region shown instead of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusModel {
    /// Accessible label of the status region.
    pub label: &'static str,
    pub message: &'static str,
    pub hint: Option<&'static str>,
}

impl StatusModel {
    pub fn loading() -> Self {
        Self {
            label: "Loading data",
            message: "Loading...",
            hint: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            label: "No data available",
            message: "No data available",
            hint: Some("Try adjusting your search or filters"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckboxModel {
    pub checked: bool,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderModel {
    pub key: String,
    pub title: String,
    /// Sortable headers act as buttons and take keyboard focus.
    pub sortable: bool,
    /// `Sort by <title>` for sortable headers.
    pub button_label: Option<String>,
    /// Set only on the active sort column.
    pub sort: Option<SortDirection>,
}

impl HeaderModel {
    /// Title with the sort arrow appended when this column is sorted.
    pub fn text(&self) -> String {
        match self.sort {
            Some(direction) => format!("{} {}", self.title, direction.arrow()),
            None => self.title.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowModel {
    pub id: String,
    pub position: usize,
    pub selected: bool,
    pub checkbox: Option<CheckboxModel>,
    pub cells: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridModel {
    pub label: &'static str,
    pub select_all: Option<CheckboxModel>,
    pub headers: Vec<HeaderModel>,
    pub rows: Vec<RowModel>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableModel {
    Loading(StatusModel),
    Empty(StatusModel),
    Populated(GridModel),
}

impl TableModel {
    pub fn presentation(&self) -> Presentation {
        match self {
            TableModel::Loading(_) => Presentation::Loading,
            TableModel::Empty(_) => Presentation::Empty,
            TableModel::Populated(_) => Presentation::Populated,
        }
    }

    pub fn grid(&self) -> Option<&GridModel> {
        match self {
            TableModel::Populated(grid) => Some(grid),
            _ => None,
        }
    }
}

impl<T> DataTable<T> {
    /// Build the presentation model for the current state.
    pub fn model(&self) -> TableModel {
        match self.presentation() {
            Presentation::Loading => TableModel::Loading(StatusModel::loading()),
            Presentation::Empty => TableModel::Empty(StatusModel::empty()),
            Presentation::Populated => TableModel::Populated(self.grid_model()),
        }
    }

    fn grid_model(&self) -> GridModel {
        let sort = self.sort_state();
        let headers = self
            .columns()
            .iter()
            .map(|column| HeaderModel {
                key: column.key.clone(),
                title: column.title.clone(),
                sortable: column.sortable,
                button_label: column
                    .sortable
                    .then(|| format!("Sort by {}", column.title)),
                sort: if column.sortable {
                    sort.direction_for(&column.key)
                } else {
                    None
                },
            })
            .collect();

        let ids = self.row_ids();
        let rows = self
            .rows()
            .into_iter()
            .zip(ids)
            .enumerate()
            .map(|(position, (record, id))| {
                let selected = self.selection().is_selected(&id);
                RowModel {
                    checkbox: self.is_selectable().then(|| CheckboxModel {
                        checked: selected,
                        label: format!("Select row {}", position + 1),
                    }),
                    id,
                    position,
                    selected,
                    cells: self
                        .columns()
                        .iter()
                        .map(|column| column.display(record))
                        .collect(),
                }
            })
            .collect();

        GridModel {
            label: TABLE_LABEL,
            select_all: self.is_selectable().then(|| CheckboxModel {
                checked: self.all_selected(),
                label: SELECT_ALL_LABEL.to_string(),
            }),
            headers,
            rows,
        }
    }
}
