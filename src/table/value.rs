//! Cell values extracted from records by column accessors.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A comparable, displayable cell value.
///
/// `Null` covers both an explicit null and a field the record does not have.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Display string for a table cell. Null renders as the empty string.
    pub fn display(&self) -> String {
        self.to_string()
    }

    // bool < number < text; null never reaches the relational compare
    fn kind_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Text(_) => 3,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

// `i as f64` rounds monotonically, so only a tie needs a second look. A tie
// means `f` is integral with magnitude at most 2^63, which fits in i128.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    match (i as f64).total_cmp(&f) {
        Ordering::Equal => i128::from(i).cmp(&(f as i128)),
        other => other,
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(v: Option<V>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Text(s.clone()),
            // Nested structures display as their JSON text
            other => Value::Text(other.to_string()),
        }
    }
}

/// By-name field access for map-shaped records.
///
/// Columns built with [`Column::field`](super::Column::field) go through this
/// trait. A missing field yields [`Value::Null`].
pub trait Record {
    fn field(&self, name: &str) -> Value;
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Value {
        self.get(name).map(Value::from).unwrap_or_default()
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl Record for HashMap<String, Value> {
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_displays_empty() {
        assert_eq!(Value::Null.display(), "");
        assert_eq!(Value::from(None::<i64>).display(), "");
    }

    #[test]
    fn display_matches_natural_text() {
        assert_eq!(Value::Int(25).display(), "25");
        assert_eq!(Value::Float(1.5).display(), "1.5");
        assert_eq!(Value::Bool(true).display(), "true");
        assert_eq!(Value::from("Alice").display(), "Alice");
    }

    #[test]
    fn large_ints_stay_ordered_against_floats() {
        let above = Value::Int((1 << 53) + 1);
        let float = Value::Float(9_007_199_254_740_992.0);
        let exact = Value::Int(1 << 53);

        assert_eq!(float, exact);
        assert!(above > float);
        assert!(above > exact);
        assert!(float < above);

        let mut values = vec![above.clone(), float.clone(), exact.clone()];
        values.sort();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(matches!(values[2], Value::Int(n) if n == (1 << 53) + 1));

        assert!(Value::Int(i64::MAX) < Value::Float(9_223_372_036_854_775_808.0));
        assert!(Value::Int(i64::MIN) == Value::Float(-9_223_372_036_854_775_808.0));
    }

    #[test]
    fn numbers_compare_across_int_and_float() {
        assert!(Value::Int(2) < Value::Float(2.5));
        assert!(Value::Float(-1.0) < Value::Int(0));
        assert_eq!(Value::Int(3), Value::Float(3.0));
    }

    #[test]
    fn text_compares_by_code_point() {
        assert!(Value::from("Bob") < Value::from("alice"));
        assert!(Value::from("Alice") < Value::from("Bob"));
    }

    #[test]
    fn mixed_kinds_have_fixed_rank() {
        assert!(Value::Bool(true) < Value::Int(0));
        assert!(Value::Int(1_000) < Value::from("0"));
    }

    #[test]
    fn json_conversion() {
        let json = serde_json::json!({"a": 1, "b": 2.5, "c": "x", "d": null, "e": [1, 2]});
        let map = json.as_object().cloned().unwrap_or_default();
        assert_eq!(map.field("a"), Value::Int(1));
        assert_eq!(map.field("b"), Value::Float(2.5));
        assert_eq!(map.field("c"), Value::from("x"));
        assert!(map.field("d").is_null());
        assert!(map.field("missing").is_null());
        assert_eq!(map.field("e"), Value::from("[1,2]"));
    }

    #[test]
    fn deserializes_untagged() {
        let row: BTreeMap<String, Value> =
            serde_json::from_str(r#"{"id": 1, "name": "Alice", "score": 9.5, "note": null}"#)
                .unwrap();
        assert_eq!(row.field("id"), Value::Int(1));
        assert_eq!(row.field("name"), Value::from("Alice"));
        assert_eq!(row.field("score"), Value::Float(9.5));
        assert!(row.field("note").is_null());
    }
}
