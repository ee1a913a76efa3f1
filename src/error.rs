//! Errors raised while rendering table definitions to DDL.

use thiserror::Error;

/// Failure of a single render call. No partial SQL is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DdlError {
    #[error("table has no name; give it one before rendering DDL")]
    UnnamedTable,

    #[error("type {type_spec} is not supported by the {dialect} dialect")]
    UnsupportedType { type_spec: String, dialect: String },

    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("invalid column '{column}': {reason}")]
    InvalidColumn { column: String, reason: String },

    #[error("table '{table}' declares more than one primary key")]
    MultiplePrimaryKeys { table: String },

    #[error("table '{table}' declares index '{name}' more than once")]
    DuplicateIndexName { table: String, name: String },
}

pub type DdlResult<T> = std::result::Result<T, DdlError>;
