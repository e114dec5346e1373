use crate::error::MetricsError;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Boolean,
    Integer,
    Float,
    Text,
}

impl Value {
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(ValueKind::Boolean),
            Value::Integer(_) => Some(ValueKind::Integer),
            Value::Float(_) => Some(ValueKind::Float),
            Value::Text(_) => Some(ValueKind::Text),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            // Bit equality keeps NaN self-equal, so every float can be grouped.
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Null => state.write_u8(0),
            Value::Boolean(v) => {
                state.write_u8(1);
                v.hash(state);
            }
            Value::Integer(v) => {
                state.write_u8(2);
                v.hash(state);
            }
            Value::Float(v) => {
                state.write_u8(3);
                v.to_bits().hash(state);
            }
            Value::Text(v) => {
                state.write_u8(4);
                v.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// An in-memory table: named columns and an ordered sequence of records.
/// Every record has one value per column, and all non-null values of a
/// column share a single kind. Both invariants are checked at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, MetricsError> {
        for (index, column) in columns.iter().enumerate() {
            if columns[..index].contains(column) {
                return Err(MetricsError::DuplicateColumn(column.clone()));
            }
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(MetricsError::RecordWidthMismatch {
                    record: index,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }

        let mut kinds: Vec<Option<ValueKind>> = vec![None; columns.len()];
        for (row_index, row) in rows.iter().enumerate() {
            for (column_index, value) in row.iter().enumerate() {
                let kind = match value.kind() {
                    Some(kind) => kind,
                    None => continue,
                };

                match kinds[column_index] {
                    None => kinds[column_index] = Some(kind),
                    Some(expected) if expected != kind => {
                        return Err(MetricsError::MixedColumnKinds {
                            column: columns[column_index].clone(),
                            record: row_index,
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(Table { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_records(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Result<usize, MetricsError> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| MetricsError::ColumnNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rejects_duplicate_columns() {
        let result = Table::new(
            vec!["age".to_string(), "age".to_string()],
            vec![vec![Value::Integer(1), Value::Integer(2)]],
        );

        assert!(matches!(result, Err(MetricsError::DuplicateColumn(_))));
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = Table::new(
            vec!["age".to_string(), "profession".to_string()],
            vec![vec![Value::Integer(30)]],
        );

        assert!(matches!(
            result,
            Err(MetricsError::RecordWidthMismatch {
                record: 0,
                expected: 2,
                found: 1,
            })
        ));
    }

    #[test]
    fn rejects_mixed_kinds_in_a_column() {
        let result = Table::new(
            vec!["age".to_string()],
            vec![vec![Value::Integer(30)], vec![Value::Text("30".to_string())]],
        );

        assert!(matches!(
            result,
            Err(MetricsError::MixedColumnKinds { record: 1, .. })
        ));
    }

    #[test]
    fn nulls_are_admissible_in_any_column() {
        let table = Table::new(
            vec!["age".to_string()],
            vec![
                vec![Value::Null],
                vec![Value::Integer(30)],
                vec![Value::Null],
            ],
        )
        .unwrap();

        assert_eq!(table.num_records(), 3);
    }

    #[test]
    fn unknown_column_lookup_fails() {
        let table = Table::new(vec!["age".to_string()], vec![]).unwrap();
        let result = table.column_index("profession");

        assert!(matches!(result, Err(MetricsError::ColumnNotFound(_))));
    }

    #[test]
    fn nan_is_self_equal() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_ne!(Value::Float(0.0), Value::Float(-0.0));

        let mut set = HashSet::new();
        set.insert(Value::Float(f64::NAN));
        set.insert(Value::Float(f64::NAN));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn null_equals_only_null() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Null, Value::Integer(0));
        assert_ne!(Value::Null, Value::Text(String::new()));
    }
}
