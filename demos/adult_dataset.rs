use anonymity_metrics::{
    get_k_anonymity, get_k_summary_table, get_l_diversity, records_to_table,
};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let table = records_to_table(&[
        json!({"age": 30, "workclass": "Private", "education": "Bachelors", "occupation": "Sales"}),
        json!({"age": 30, "workclass": "Private", "education": "Bachelors", "occupation": "Exec-managerial"}),
        json!({"age": 30, "workclass": "Private", "education": "HS-grad", "occupation": "Handlers-cleaners"}),
        json!({"age": 45, "workclass": "Self-emp", "education": "Masters", "occupation": "Exec-managerial"}),
        json!({"age": 45, "workclass": "Self-emp", "education": "Masters", "occupation": "Prof-specialty"}),
        json!({"age": 45, "workclass": "Private", "education": "HS-grad", "occupation": "Sales"}),
    ])?;

    let quasi_identifiers = ["age", "workclass", "education"];

    let k_anonymity = get_k_anonymity(&table, &quasi_identifiers)?;
    println!(
        "k = {} with {} minimal equivalence classes",
        k_anonymity.k,
        k_anonymity.equivalence_classes.len()
    );

    let l_diversity = get_l_diversity(&table, &quasi_identifiers, "occupation")?;
    println!(
        "l = {} with {} minimal equivalence classes",
        l_diversity.l,
        l_diversity.equivalence_classes.len()
    );

    let summary = get_k_summary_table(&table)?;
    for row in summary.rows() {
        println!("{} -> k = {}", row[0], row[1]);
    }

    Ok(())
}
