use crate::error::MetricsError;
use crate::table::{Table, Value};
use serde_json::Value as JsonValue;

/// Builds a table from an array of flat JSON objects, all sharing one key
/// set. Columns follow serde_json's deterministic key order. Whole numbers
/// map to `Value::Integer`, other numbers to `Value::Float`; nested arrays
/// and objects are unsupported.
pub fn records_to_table(records: &[JsonValue]) -> Result<Table, MetricsError> {
    let columns: Vec<String> = match records.first() {
        Some(JsonValue::Object(map)) => map.keys().cloned().collect(),
        Some(_) => return Err(MetricsError::UnsupportedRecord(0)),
        None => vec![],
    };

    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let map = match record {
            JsonValue::Object(map) => map,
            _ => return Err(MetricsError::UnsupportedRecord(index)),
        };

        if map.len() != columns.len() {
            return Err(MetricsError::InconsistentRecordColumns(index));
        }

        let mut row = Vec::with_capacity(columns.len());
        for column in &columns {
            let value = map
                .get(column)
                .ok_or(MetricsError::InconsistentRecordColumns(index))?;
            row.push(json_to_value(value, column, index)?);
        }

        rows.push(row);
    }

    Table::new(columns, rows)
}

/// The inverse direction, for handing reports back to the data provider.
pub fn table_to_records(table: &Table) -> Vec<JsonValue> {
    table
        .rows()
        .iter()
        .map(|row| {
            let map: serde_json::Map<String, JsonValue> = table
                .columns()
                .iter()
                .zip(row)
                .map(|(column, value)| (column.clone(), value_to_json(value)))
                .collect();
            JsonValue::Object(map)
        })
        .collect()
}

fn json_to_value(value: &JsonValue, column: &str, record: usize) -> Result<Value, MetricsError> {
    match value {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(v) => Ok(Value::Boolean(*v)),
        JsonValue::Number(number) => match number.as_i64() {
            Some(v) => Ok(Value::Integer(v)),
            None => number
                .as_f64()
                .map(Value::Float)
                .ok_or_else(|| MetricsError::UnsupportedJsonValue {
                    column: column.to_string(),
                    record,
                }),
        },
        JsonValue::String(v) => Ok(Value::Text(v.clone())),
        JsonValue::Array(_) | JsonValue::Object(_) => Err(MetricsError::UnsupportedJsonValue {
            column: column.to_string(),
            record,
        }),
    }
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Boolean(v) => JsonValue::Bool(*v),
        Value::Integer(v) => JsonValue::from(*v),
        // NaN and infinities have no JSON representation
        Value::Float(v) => serde_json::Number::from_f64(*v)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Value::Text(v) => JsonValue::String(v.clone()),
    }
}
