use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("no quasi-identifiers given")]
    NoQuasiIdentifiers,

    #[error("duplicate quasi-identifier: {0}")]
    DuplicateQuasiIdentifier(String),

    #[error("sensitive attribute {0} is also a quasi-identifier")]
    SensitiveAttributeOverlap(String),

    #[error("table has no records")]
    EmptyTable,

    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("record {record} has {found} values, expected {expected}")]
    RecordWidthMismatch {
        record: usize,
        expected: usize,
        found: usize,
    },

    #[error("mixed value kinds in column {column} at record {record}")]
    MixedColumnKinds { column: String, record: usize },

    #[error("record {0} is not a JSON object")]
    UnsupportedRecord(usize),

    #[error("record {0} does not share the columns of the first record")]
    InconsistentRecordColumns(usize),

    #[error("unsupported JSON value in column {column} at record {record}")]
    UnsupportedJsonValue { column: String, record: usize },
}
