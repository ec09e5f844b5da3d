//! Column schema: key, title, accessor and sortability.

use std::fmt;
use std::sync::Arc;

use super::value::{Record, Value};

type Accessor<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// A table column definition.
///
/// The accessor is the only way the table reads a record, so the table never
/// needs to know the record's shape.
///
/// ```ignore
/// let columns = vec![
///     Column::field("id", "ID", "id").sortable(),
///     Column::new("name", "Name", |u: &User| u.name.as_str().into()).sortable(),
///     Column::field("email", "Email", "email"),
/// ];
/// ```
pub struct Column<T> {
    /// Unique identifier among the table's columns; the sort key.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Whether activating the header cycles the sort.
    pub sortable: bool,
    accessor: Accessor<T>,
}

impl<T> Column<T> {
    /// Create a column reading its value with `accessor`.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        accessor: impl Fn(&T) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            accessor: Arc::new(accessor),
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Extract this column's value from a record.
    pub fn value(&self, record: &T) -> Value {
        (self.accessor)(record)
    }

    /// Display string for this column's cell. Null and missing become "".
    pub fn display(&self, record: &T) -> String {
        self.value(record).display()
    }
}

impl<T: Record> Column<T> {
    /// Create a column reading the named field through [`Record::field`].
    pub fn field(
        key: impl Into<String>,
        title: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        let field_name = field_name.into();
        Self::new(key, title, move |record: &T| record.field(&field_name))
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            sortable: self.sortable,
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

/// Find a column by key.
pub fn find_column<'a, T>(columns: &'a [Column<T>], key: &str) -> Option<&'a Column<T>> {
    columns.iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    struct User {
        name: String,
        age: Option<u32>,
    }

    #[test]
    fn closure_accessor() {
        let col = Column::new("age", "Age", |u: &User| u.age.into()).sortable();
        let user = User {
            name: "Alice".to_string(),
            age: Some(25),
        };
        assert!(col.sortable);
        assert_eq!(col.value(&user), Value::Int(25));
        assert_eq!(col.display(&user), "25");

        let name = Column::new("name", "Name", |u: &User| u.name.as_str().into());
        assert!(!name.sortable);
        assert_eq!(name.display(&user), "Alice");
    }

    #[test]
    fn missing_value_displays_empty() {
        let col = Column::new("age", "Age", |u: &User| u.age.into());
        let user = User {
            name: "Bob".to_string(),
            age: None,
        };
        assert_eq!(col.display(&user), "");
    }

    #[test]
    fn field_accessor_on_map_record() {
        let col: Column<BTreeMap<String, Value>> = Column::field("email", "Email", "email");
        let mut row = BTreeMap::new();
        row.insert("email".to_string(), Value::from("a@x.com"));
        assert_eq!(col.display(&row), "a@x.com");
        assert_eq!(col.display(&BTreeMap::new()), "");
    }

    #[test]
    fn find_by_key() {
        let columns: Vec<Column<BTreeMap<String, Value>>> = vec![
            Column::field("id", "ID", "id"),
            Column::field("name", "Name", "name"),
        ];
        assert_eq!(find_column(&columns, "name").map(|c| c.title.as_str()), Some("Name"));
        assert!(find_column(&columns, "nope").is_none());
    }
}
