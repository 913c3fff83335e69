use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No mapping for value {value} in the {table} table")]
    NoMapping { table: &'static str, value: i64 },

    #[error("Lookup table '{table}' is malformed: {reason}")]
    InvalidTable { table: &'static str, reason: String },
}
