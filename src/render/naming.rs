//! Identifier policy: default constraint names and identifier quoting.
//!
//! Default names are built from the raw (unquoted) names and then quoted as a
//! single identifier, so `IX_t1_name` becomes `"IX_t1_name"` when quoting is on.

use itertools::Itertools;

use crate::catalog::{Index, PrimaryKey, Table};
use crate::dialect::Dialect;
use crate::error::{DdlError, DdlResult};

/// Quote `ident` with the dialect's quote character, doubling any embedded
/// quote. Returned unchanged when the dialect does not quote.
pub fn quote_ident(ident: &str, dialect: &dyn Dialect) -> String {
    match dialect.identifier_quote() {
        Some(q) => {
            let escaped = ident.replace(q, &format!("{q}{q}"));
            format!("{q}{escaped}{q}")
        }
        None => ident.to_string(),
    }
}

/// Name the table is created under. Names are never derived from context.
pub fn table_name(table: &Table) -> DdlResult<&str> {
    match table.name.as_deref() {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(DdlError::UnnamedTable),
    }
}

pub fn primary_key_name(table_name: &str, pk: &PrimaryKey) -> String {
    pk.name
        .clone()
        .unwrap_or_else(|| format!("PK_{}", table_name))
}

pub fn index_name(table_name: &str, index: &Index) -> String {
    index
        .name
        .clone()
        .unwrap_or_else(|| format!("IX_{}_{}", table_name, index.columns.iter().join("_")))
}

/// Comma-separated, quoted column list without the surrounding parentheses
pub fn column_list(columns: &[String], dialect: &dyn Dialect) -> String {
    columns
        .iter()
        .map(|col| quote_ident(col, dialect))
        .join(", ")
}
