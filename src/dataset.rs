//! Loading records from JSON and deriving a column schema from them.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use thiserror::Error;

use crate::table::Column;

/// A record loaded from a JSON object.
pub type JsonRecord = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected a JSON array of objects at the top level")]
    NotAnArray,
    #[error("element {index} is not a JSON object")]
    NotAnObject { index: usize },
}

/// Read a JSON array of objects from `path`.
pub fn load_file(path: &Path) -> Result<Vec<JsonRecord>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parse a JSON array of objects.
pub fn parse(text: &str) -> Result<Vec<JsonRecord>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Array(items) = value else {
        return Err(LoadError::NotAnArray);
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            serde_json::Value::Object(map) => Ok(map),
            _ => Err(LoadError::NotAnObject { index }),
        })
        .collect()
}

/// Field names in first-seen order across all records.
pub fn field_names(records: &[JsonRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !names.iter().any(|n| n == key) {
                names.push(key.clone());
            }
        }
    }
    names
}

/// Build one column per field. `only` restricts and orders the fields;
/// fields listed in `fixed` are not sortable.
pub fn infer_columns(
    records: &[JsonRecord],
    only: Option<&[String]>,
    fixed: &[String],
) -> Vec<Column<JsonRecord>> {
    let names = match only {
        Some(names) => names.to_vec(),
        None => field_names(records),
    };
    names
        .into_iter()
        .map(|name| {
            let sortable = !fixed.contains(&name);
            Column::field(name.clone(), title_case(&name), name).with_sortable(sortable)
        })
        .collect()
}

/// `lastLogin` and `last_login` become `Last Login`; `id` becomes `ID`.
pub fn title_case(field: &str) -> String {
    if field.len() <= 2 {
        return field.to_uppercase();
    }
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in field.chars() {
        if ch == '_' || ch == '-' || ch == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Built-in records shown when no file is given.
pub fn sample_users() -> Vec<JsonRecord> {
    let users = json!([
        { "id": 1, "name": "John Doe", "email": "john@example.com", "role": "Admin", "status": "active", "lastLogin": "2024-01-15" },
        { "id": 2, "name": "Jane Smith", "email": "jane@example.com", "role": "User", "status": "active", "lastLogin": "2024-01-14" },
        { "id": 3, "name": "Bob Johnson", "email": "bob@example.com", "role": "User", "status": "inactive", "lastLogin": "2024-01-10" },
        { "id": 4, "name": "Alice Brown", "email": "alice@example.com", "role": "Moderator", "status": "active", "lastLogin": "2024-01-13" },
        { "id": 5, "name": "Charlie Wilson", "email": "charlie@example.com", "role": "User", "status": "active", "lastLogin": null },
    ]);
    match users {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
