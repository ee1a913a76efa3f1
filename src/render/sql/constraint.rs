//! Primary key and index constraints of a table

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::{Constraint, Table};
use crate::dialect::Dialect;
use crate::error::{DdlError, DdlResult};
use crate::render::Statement;
use crate::render::naming::{column_list, index_name, primary_key_name, quote_ident};
use crate::render::sql::index::render_create_index;
use crate::render::sql::table::validate_table;

/// Constraints split by where they end up: the primary key inside the
/// CREATE TABLE column list, indices as their own statements.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedConstraints {
    pub primary_key: Option<String>,
    pub indices: Vec<Statement>,
}

/// Render the primary key clause and index statements of `table`.
///
/// The whole table is validated first, columns included.
pub fn render_constraints(table: &Table, dialect: &dyn Dialect) -> DdlResult<RenderedConstraints> {
    let name = validate_table(table, dialect)?;
    validate_constraint_columns(table, name)?;

    let mut primary_keys = table.primary_keys();
    let primary_key = match (primary_keys.next(), primary_keys.next()) {
        (Some(_), Some(_)) => {
            return Err(DdlError::MultiplePrimaryKeys {
                table: name.to_string(),
            });
        }
        (Some(pk), None) => Some(format!(
            "CONSTRAINT {} PRIMARY KEY ({})",
            quote_ident(&primary_key_name(name, pk), dialect),
            column_list(&pk.columns, dialect)
        )),
        (None, _) => None,
    };

    let mut seen = HashSet::new();
    let mut indices = Vec::new();
    for index in table.indices() {
        let ix_name = index_name(name, index);
        if !seen.insert(ix_name.clone()) {
            return Err(DdlError::DuplicateIndexName {
                table: name.to_string(),
                name: ix_name,
            });
        }
        indices.push(render_create_index(name, index, dialect));
    }

    debug!(
        "Rendered constraints for {}: primary key: {}, {} index(es)",
        name,
        primary_key.is_some(),
        indices.len()
    );

    Ok(RenderedConstraints {
        primary_key,
        indices,
    })
}

/// Every constraint needs at least one column, and only declared columns.
fn validate_constraint_columns(table: &Table, name: &str) -> DdlResult<()> {
    for constraint in &table.constraints {
        let kind = match constraint {
            Constraint::PrimaryKey(_) => "primary key",
            Constraint::Index(_) => "index",
        };
        let columns = constraint.columns();
        if columns.is_empty() {
            return Err(DdlError::InvalidSchema(format!(
                "{} on table '{}' has no columns",
                kind, name
            )));
        }
        if let Some(missing) = columns.iter().find(|col| !table.has_column(col)) {
            return Err(DdlError::InvalidSchema(format!(
                "{} on table '{}' references unknown column '{}'",
                kind, name, missing
            )));
        }
    }
    Ok(())
}
