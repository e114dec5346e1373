use crate::error::MetricsError;
use crate::table::{Table, Value};
use std::collections::HashMap;

/// One equivalence class: the quasi-identifier value tuple shared by its
/// members, and the indices of the member records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub key: Vec<Value>,
    pub row_indices: Vec<usize>,
}

fn resolve_quasi_identifiers(
    table: &Table,
    quasi_identifiers: &[&str],
) -> Result<Vec<usize>, MetricsError> {
    if quasi_identifiers.is_empty() {
        return Err(MetricsError::NoQuasiIdentifiers);
    }

    for (index, name) in quasi_identifiers.iter().enumerate() {
        if quasi_identifiers[..index].contains(name) {
            return Err(MetricsError::DuplicateQuasiIdentifier(name.to_string()));
        }
    }

    quasi_identifiers
        .iter()
        .map(|name| table.column_index(name))
        .collect()
}

/// Partitions the table into equivalence classes keyed by the value tuple at
/// the quasi-identifier columns. Classes come back in discovery order (first
/// occurrence in the table), which makes the result deterministic for a fixed
/// table and column order.
pub fn partition_table(
    table: &Table,
    quasi_identifiers: &[&str],
) -> Result<Vec<Partition>, MetricsError> {
    let column_indices = resolve_quasi_identifiers(table, quasi_identifiers)?;

    let mut partitions: Vec<Partition> = vec![];
    let mut slots: HashMap<Vec<Value>, usize> = HashMap::new();

    for (row_index, row) in table.rows().iter().enumerate() {
        let key: Vec<Value> = column_indices.iter().map(|&i| row[i].clone()).collect();

        match slots.get(&key) {
            Some(&slot) => partitions[slot].row_indices.push(row_index),
            None => {
                slots.insert(key.clone(), partitions.len());
                partitions.push(Partition {
                    key,
                    row_indices: vec![row_index],
                });
            }
        }
    }

    tracing::debug!(
        "partitioned {} records into {} equivalence classes",
        table.num_records(),
        partitions.len()
    );

    Ok(partitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Table {
        Table::new(
            vec!["age".to_string(), "profession".to_string()],
            vec![
                vec![Value::Integer(30), Value::Text("Sales".to_string())],
                vec![Value::Integer(40), Value::Text("Engineering".to_string())],
                vec![Value::Integer(30), Value::Text("Sales".to_string())],
                vec![Value::Integer(30), Value::Text("Engineering".to_string())],
            ],
        )
        .unwrap()
    }

    #[test]
    fn groups_by_value_tuples_in_discovery_order() {
        let partitions = partition_table(&people(), &["age", "profession"]).unwrap();

        assert_eq!(partitions.len(), 3);
        assert_eq!(
            partitions[0].key,
            vec![Value::Integer(30), Value::Text("Sales".to_string())]
        );
        assert_eq!(partitions[0].row_indices, vec![0, 2]);
        assert_eq!(partitions[1].row_indices, vec![1]);
        assert_eq!(partitions[2].row_indices, vec![3]);
    }

    #[test]
    fn key_order_follows_the_given_column_order() {
        let partitions = partition_table(&people(), &["profession", "age"]).unwrap();

        assert_eq!(
            partitions[0].key,
            vec![Value::Text("Sales".to_string()), Value::Integer(30)]
        );
    }

    #[test]
    fn nulls_form_their_own_class() {
        let table = Table::new(
            vec!["age".to_string()],
            vec![
                vec![Value::Null],
                vec![Value::Integer(30)],
                vec![Value::Null],
            ],
        )
        .unwrap();

        let partitions = partition_table(&table, &["age"]).unwrap();

        assert_eq!(partitions.len(), 2);
        assert_eq!(partitions[0].key, vec![Value::Null]);
        assert_eq!(partitions[0].row_indices, vec![0, 2]);
    }

    #[test]
    fn rejects_empty_quasi_identifier_list() {
        let result = partition_table(&people(), &[]);

        assert!(matches!(result, Err(MetricsError::NoQuasiIdentifiers)));
    }

    #[test]
    fn rejects_duplicate_quasi_identifiers() {
        let result = partition_table(&people(), &["age", "age"]);

        assert!(matches!(
            result,
            Err(MetricsError::DuplicateQuasiIdentifier(_))
        ));
    }

    #[test]
    fn rejects_unknown_quasi_identifiers() {
        let result = partition_table(&people(), &["age", "pay"]);

        assert!(matches!(result, Err(MetricsError::ColumnNotFound(_))));
    }

    #[test]
    fn empty_table_yields_no_partitions() {
        let table = Table::new(vec!["age".to_string()], vec![]).unwrap();
        let partitions = partition_table(&table, &["age"]).unwrap();

        assert!(partitions.is_empty());
    }
}
