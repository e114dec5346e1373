use crate::error::MetricsError;
use crate::partition::partition_table;
use crate::table::{Table, Value};
use std::collections::HashMap;

/// The minimum k for which the table satisfies k-anonymity over the given
/// quasi-identifiers, together with every equivalence class of that size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KAnonymity {
    pub k: usize,
    pub equivalence_classes: Vec<Vec<Value>>,
}

/// Per-class breakdown: equivalence classes and their record counts at
/// matching indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KAnonymityReport {
    pub equivalence_classes: Vec<Vec<Value>>,
    pub class_sizes: Vec<usize>,
}

pub fn get_k_anonymity(
    table: &Table,
    quasi_identifiers: &[&str],
) -> Result<KAnonymity, MetricsError> {
    if table.num_records() == 0 {
        return Err(MetricsError::EmptyTable);
    }

    let partitions = partition_table(table, quasi_identifiers)?;

    let k = partitions
        .iter()
        .map(|partition| partition.row_indices.len())
        .min()
        .ok_or(MetricsError::EmptyTable)?;

    let equivalence_classes = partitions
        .into_iter()
        .filter(|partition| partition.row_indices.len() == k)
        .map(|partition| partition.key)
        .collect();

    tracing::debug!("k-anonymity of {:?} is {}", quasi_identifiers, k);

    Ok(KAnonymity {
        k,
        equivalence_classes,
    })
}

/// Counts the records matching a conjunctive equality filter over a subset of
/// the columns. An empty filter matches every record; zero matches is a valid
/// answer, not an error.
pub fn get_k_reverse_membership(
    table: &Table,
    equivalence_class: &HashMap<String, Value>,
) -> Result<usize, MetricsError> {
    let mut filters: Vec<(usize, &Value)> = Vec::with_capacity(equivalence_class.len());
    for (column, value) in equivalence_class {
        filters.push((table.column_index(column)?, value));
    }

    let count = table
        .rows()
        .iter()
        .filter(|row| filters.iter().all(|&(index, value)| row[index] == *value))
        .count();

    Ok(count)
}

pub fn get_full_k_anonymity_report(
    table: &Table,
    quasi_identifiers: &[&str],
) -> Result<KAnonymityReport, MetricsError> {
    let partitions = partition_table(table, quasi_identifiers)?;

    let mut equivalence_classes = Vec::with_capacity(partitions.len());
    let mut class_sizes = Vec::with_capacity(partitions.len());
    for partition in partitions {
        class_sizes.push(partition.row_indices.len());
        equivalence_classes.push(partition.key);
    }

    Ok(KAnonymityReport {
        equivalence_classes,
        class_sizes,
    })
}
