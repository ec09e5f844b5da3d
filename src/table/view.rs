//! Derived view: the sorted projection of the input rows.

use std::cmp::Ordering;

use log::trace;

use super::column::{find_column, Column};
use super::sort::{SortDirection, SortState};
use super::value::Value;

/// Compare two cell values for sorting.
///
/// Null sorts after any value before the direction is applied, so nulls end
/// up last when ascending and first when descending.
pub fn compare_values(a: &Value, b: &Value, direction: SortDirection) -> Ordering {
    let ordering = if a == b {
        Ordering::Equal
    } else if a.is_null() {
        Ordering::Greater
    } else if b.is_null() {
        Ordering::Less
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Indices into `data` in display order, or `None` when the view is the
/// input order unchanged (no sort, or the sort key names no column).
pub fn sorted_order<T>(
    data: &[T],
    columns: &[Column<T>],
    sort: &SortState,
) -> Option<Vec<usize>> {
    let active = sort.active()?;
    let column = find_column(columns, &active.key)?;

    // Extract keys once instead of calling the accessor in the comparator
    let keys: Vec<Value> = data.iter().map(|record| column.value(record)).collect();
    let mut order: Vec<usize> = (0..data.len()).collect();
    // sort_by is stable: equal keys keep their input order
    order.sort_by(|&a, &b| compare_values(&keys[a], &keys[b], active.direction));
    Some(order)
}

/// Project `data` through the sort state. Never mutates `data`.
pub fn project<'a, T>(data: &'a [T], columns: &[Column<T>], sort: &SortState) -> Vec<&'a T> {
    match sorted_order(data, columns, sort) {
        Some(order) => order.into_iter().map(|i| &data[i]).collect(),
        None => data.iter().collect(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct CacheKey {
    data_revision: u64,
    columns_revision: u64,
    sort: SortState,
}

/// Memoized display order.
///
/// The cache is keyed on the data and column revisions the owner bumps on
/// every replacement, plus the sort state.
#[derive(Clone, Debug, Default)]
pub struct DerivedView {
    key: Option<CacheKey>,
    order: Option<Vec<usize>>,
}

impl DerivedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached order; the next `refresh` recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.order = None;
    }

    pub fn is_cached(&self) -> bool {
        self.key.is_some()
    }

    /// Recompute the order if any input changed since the last call.
    pub fn refresh<T>(
        &mut self,
        data: &[T],
        data_revision: u64,
        columns: &[Column<T>],
        columns_revision: u64,
        sort: &SortState,
    ) {
        let key = CacheKey {
            data_revision,
            columns_revision,
            sort: sort.clone(),
        };
        if self.key.as_ref() == Some(&key) {
            return;
        }
        trace!(
            "recomputing derived view: {} rows, sort {:?}",
            data.len(),
            sort
        );
        self.order = sorted_order(data, columns, sort);
        self.key = Some(key);
    }

    /// Input index of the row displayed at `position`.
    pub fn source_index(&self, position: usize) -> usize {
        match &self.order {
            Some(order) => order.get(position).copied().unwrap_or(position),
            None => position,
        }
    }

    /// Rows in display order. Call `refresh` first.
    pub fn rows<'a, T>(&self, data: &'a [T]) -> Vec<&'a T> {
        match &self.order {
            Some(order) => order.iter().filter_map(|&i| data.get(i)).collect(),
            None => data.iter().collect(),
        }
    }

    /// Input indices in display order. Call `refresh` first.
    pub fn indices(&self, len: usize) -> Vec<usize> {
        match &self.order {
            Some(order) => order.clone(),
            None => (0..len).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Person {
        name: &'static str,
        age: Option<i64>,
    }

    fn people() -> Vec<Person> {
        vec![
            Person { name: "Alice", age: Some(25) },
            Person { name: "Bob", age: None },
            Person { name: "Charlie", age: Some(20) },
            Person { name: "Dana", age: Some(25) },
        ]
    }

    fn columns() -> Vec<Column<Person>> {
        vec![
            Column::new("name", "Name", |p: &Person| p.name.into()).sortable(),
            Column::new("age", "Age", |p: &Person| p.age.into()).sortable(),
        ]
    }

    fn names(rows: &[&Person]) -> Vec<&'static str> {
        rows.iter().map(|p| p.name).collect()
    }

    #[test]
    fn unsorted_is_pass_through() {
        let data = people();
        let rows = project(&data, &columns(), &SortState::unsorted());
        assert_eq!(rows.len(), data.len());
        for (row, original) in rows.iter().zip(&data) {
            assert!(std::ptr::eq(*row, original));
        }
    }

    #[test]
    fn unknown_key_is_pass_through() {
        let data = people();
        let sort = SortState::by("salary", SortDirection::Ascending);
        assert!(sorted_order(&data, &columns(), &sort).is_none());
        assert_eq!(names(&project(&data, &columns(), &sort)), ["Alice", "Bob", "Charlie", "Dana"]);
    }

    #[test]
    fn ascending_is_stable_with_nulls_last() {
        let data = people();
        let sort = SortState::by("age", SortDirection::Ascending);
        let rows = project(&data, &columns(), &sort);
        assert_eq!(names(&rows), ["Charlie", "Alice", "Dana", "Bob"]);
    }

    #[test]
    fn descending_puts_nulls_first() {
        let data = people();
        let sort = SortState::by("age", SortDirection::Descending);
        let rows = project(&data, &columns(), &sort);
        assert_eq!(names(&rows), ["Bob", "Alice", "Dana", "Charlie"]);
    }

    #[test]
    fn compare_fold() {
        let asc = SortDirection::Ascending;
        let desc = SortDirection::Descending;
        assert_eq!(compare_values(&Value::Null, &Value::Null, asc), Ordering::Equal);
        assert_eq!(compare_values(&Value::Null, &Value::Int(1), asc), Ordering::Greater);
        assert_eq!(compare_values(&Value::Int(1), &Value::Null, asc), Ordering::Less);
        assert_eq!(compare_values(&Value::Null, &Value::Int(1), desc), Ordering::Less);
        assert_eq!(compare_values(&Value::Int(1), &Value::Int(2), desc), Ordering::Greater);
    }

    #[test]
    fn input_is_not_mutated() {
        let data = people();
        let _ = project(&data, &columns(), &SortState::by("name", SortDirection::Descending));
        assert_eq!(data, people());
    }

    #[test]
    fn cache_recomputes_only_on_change() {
        let data = people();
        let cols = columns();
        let mut view = DerivedView::new();
        assert!(!view.is_cached());

        let sort = SortState::by("age", SortDirection::Ascending);
        view.refresh(&data, 1, &cols, 1, &sort);
        assert_eq!(view.indices(data.len()), [2, 0, 3, 1]);
        assert_eq!(view.source_index(0), 2);

        // Same key: stays cached even though the sort argument is a new value
        view.refresh(&data, 1, &cols, 1, &sort.clone());
        assert_eq!(names(&view.rows(&data)), ["Charlie", "Alice", "Dana", "Bob"]);

        view.refresh(&data, 1, &cols, 1, &SortState::unsorted());
        assert_eq!(view.indices(data.len()), [0, 1, 2, 3]);

        view.invalidate();
        assert!(!view.is_cached());
    }
}
