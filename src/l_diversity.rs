use crate::error::MetricsError;
use crate::partition::{partition_table, Partition};
use crate::table::{Table, Value};
use std::collections::HashSet;

/// The minimum l for which the table satisfies l-diversity over the given
/// quasi-identifiers and sensitive attribute, together with every equivalence
/// class attaining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LDiversity {
    pub l: usize,
    pub equivalence_classes: Vec<Vec<Value>>,
}

/// Per-class breakdown: equivalence classes and their distinct
/// sensitive-value counts at matching indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LDiversityReport {
    pub equivalence_classes: Vec<Vec<Value>>,
    pub distinct_counts: Vec<usize>,
}

fn validate_sensitive_attribute(
    table: &Table,
    quasi_identifiers: &[&str],
    sensitive_attribute: &str,
) -> Result<usize, MetricsError> {
    let index = table.column_index(sensitive_attribute)?;

    if quasi_identifiers.contains(&sensitive_attribute) {
        return Err(MetricsError::SensitiveAttributeOverlap(
            sensitive_attribute.to_string(),
        ));
    }

    Ok(index)
}

// Null sensitive values carry no disclosure risk and do not add diversity,
// so they are excluded from the distinct count.
fn distinct_sensitive_values(table: &Table, partition: &Partition, column: usize) -> usize {
    partition
        .row_indices
        .iter()
        .map(|&row| &table.rows()[row][column])
        .filter(|value| **value != Value::Null)
        .collect::<HashSet<&Value>>()
        .len()
}

pub fn get_l_diversity(
    table: &Table,
    quasi_identifiers: &[&str],
    sensitive_attribute: &str,
) -> Result<LDiversity, MetricsError> {
    let sensitive_index = validate_sensitive_attribute(table, quasi_identifiers, sensitive_attribute)?;

    if table.num_records() == 0 {
        return Err(MetricsError::EmptyTable);
    }

    let partitions = partition_table(table, quasi_identifiers)?;

    let distinct_counts: Vec<usize> = partitions
        .iter()
        .map(|partition| distinct_sensitive_values(table, partition, sensitive_index))
        .collect();

    let l = distinct_counts
        .iter()
        .copied()
        .min()
        .ok_or(MetricsError::EmptyTable)?;

    let equivalence_classes = partitions
        .into_iter()
        .zip(distinct_counts)
        .filter(|(_, count)| *count == l)
        .map(|(partition, _)| partition.key)
        .collect();

    tracing::debug!(
        "l-diversity of {:?} over {:?} is {}",
        sensitive_attribute,
        quasi_identifiers,
        l
    );

    Ok(LDiversity {
        l,
        equivalence_classes,
    })
}

pub fn get_full_l_diversity_report(
    table: &Table,
    quasi_identifiers: &[&str],
    sensitive_attribute: &str,
) -> Result<LDiversityReport, MetricsError> {
    let sensitive_index = validate_sensitive_attribute(table, quasi_identifiers, sensitive_attribute)?;

    let partitions = partition_table(table, quasi_identifiers)?;

    let mut equivalence_classes = Vec::with_capacity(partitions.len());
    let mut distinct_counts = Vec::with_capacity(partitions.len());
    for partition in &partitions {
        distinct_counts.push(distinct_sensitive_values(table, partition, sensitive_index));
    }
    for partition in partitions {
        equivalence_classes.push(partition.key);
    }

    Ok(LDiversityReport {
        equivalence_classes,
        distinct_counts,
    })
}
