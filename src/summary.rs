use crate::error::MetricsError;
use crate::k_anonymity::get_k_anonymity;
use crate::l_diversity::get_l_diversity;
use crate::table::{Table, Value};
use itertools::Itertools;

/// Sweep over quasi-identifier combinations: each combination paired with the
/// minimum k it yields, at matching indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KSummary {
    pub quasi_identifier_combinations: Vec<Vec<String>>,
    pub k_values: Vec<usize>,
}

/// Sweep over quasi-identifier combinations drawn from the non-sensitive
/// columns, each paired with the minimum l it yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LSummary {
    pub quasi_identifier_combinations: Vec<Vec<String>>,
    pub l_values: Vec<usize>,
}

// Proper non-empty index subsets, smallest size first, lexicographic within
// each size.
fn proper_subsets(count: usize) -> impl Iterator<Item = Vec<usize>> {
    (1..count).flat_map(move |size| (0..count).combinations(size))
}

/// Computes k-anonymity for every proper non-empty subset of the columns.
/// The sweep visits 2^n - 2 subsets, which is only acceptable for the small
/// column counts this is meant to audit.
pub fn get_k_summary(table: &Table) -> Result<KSummary, MetricsError> {
    let columns = table.columns();

    let mut quasi_identifier_combinations = vec![];
    let mut k_values = vec![];

    for subset in proper_subsets(columns.len()) {
        let names: Vec<&str> = subset.iter().map(|&i| columns[i].as_str()).collect();
        let result = get_k_anonymity(table, &names)?;

        quasi_identifier_combinations.push(names.iter().map(|name| name.to_string()).collect());
        k_values.push(result.k);
    }

    Ok(KSummary {
        quasi_identifier_combinations,
        k_values,
    })
}

/// Same sweep as `get_k_summary`, rendered as a two-column report table.
pub fn get_k_summary_table(table: &Table) -> Result<Table, MetricsError> {
    let summary = get_k_summary(table)?;
    summary_table("k", summary.quasi_identifier_combinations, summary.k_values)
}

/// Computes l-diversity for every proper non-empty subset of the columns
/// other than the sensitive attribute.
pub fn get_l_summary(table: &Table, sensitive_attribute: &str) -> Result<LSummary, MetricsError> {
    table.column_index(sensitive_attribute)?;

    let candidates: Vec<&str> = table
        .columns()
        .iter()
        .map(|column| column.as_str())
        .filter(|column| *column != sensitive_attribute)
        .collect();

    let mut quasi_identifier_combinations = vec![];
    let mut l_values = vec![];

    for subset in proper_subsets(candidates.len()) {
        let names: Vec<&str> = subset.iter().map(|&i| candidates[i]).collect();
        let result = get_l_diversity(table, &names, sensitive_attribute)?;

        quasi_identifier_combinations.push(names.iter().map(|name| name.to_string()).collect());
        l_values.push(result.l);
    }

    Ok(LSummary {
        quasi_identifier_combinations,
        l_values,
    })
}

/// Same sweep as `get_l_summary`, rendered as a two-column report table.
pub fn get_l_summary_table(table: &Table, sensitive_attribute: &str) -> Result<Table, MetricsError> {
    let summary = get_l_summary(table, sensitive_attribute)?;
    summary_table("l", summary.quasi_identifier_combinations, summary.l_values)
}

fn summary_table(
    metric: &str,
    combinations: Vec<Vec<String>>,
    values: Vec<usize>,
) -> Result<Table, MetricsError> {
    let rows = combinations
        .into_iter()
        .zip(values)
        .map(|(combination, value)| {
            vec![
                Value::Text(combination.join(", ")),
                Value::Integer(value as i64),
            ]
        })
        .collect();

    Table::new(vec!["quasi_identifiers".to_string(), metric.to_string()], rows)
}
