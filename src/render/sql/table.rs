//! CREATE TABLE statements

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Table;
use crate::dialect::Dialect;
use crate::error::{DdlError, DdlResult};
use crate::render::naming::{quote_ident, table_name};
use crate::render::sql::column::render_column;
use crate::render::sql::constraint::render_constraints;
use crate::render::{RenderOptions, Statement};

/// Render `CREATE TABLE IF NOT EXISTS <name> (<columns>, <primary key>)`.
///
/// A table without columns renders as `CREATE TABLE IF NOT EXISTS <name>`
/// with no column list at all. Index constraints are validated here too,
/// but rendered separately by [`render_constraints`].
pub fn render_create_table(
    table: &Table,
    dialect: &dyn Dialect,
    options: &RenderOptions,
) -> DdlResult<Statement> {
    let constraints = render_constraints(table, dialect)?;
    let name = table_name(table)?;

    let mut sql = format!("CREATE TABLE IF NOT EXISTS {}", quote_ident(name, dialect));
    if table.columns.is_empty() {
        return Ok(Statement::new(sql));
    }

    let mut params = Vec::new();
    let mut definitions = table
        .columns
        .iter()
        .map(|column| render_column(column, dialect, options, &mut params))
        .collect::<DdlResult<Vec<_>>>()?;

    if let Some(pk) = constraints.primary_key {
        definitions.push(pk);
    }

    sql.push_str(" (");
    sql.push_str(&definitions.join(", "));
    sql.push(')');

    debug!("Rendered CREATE TABLE for {} ({} bound value(s))", name, params.len());

    Ok(Statement::with_params(sql, params))
}

/// Check everything CREATE TABLE depends on: the table name, unique column
/// names and every column definition. Returns the table name.
///
/// Index statements are only rendered after this passes, so a table that
/// cannot be created never yields CREATE INDEX text either.
pub fn validate_table<'a>(table: &'a Table, dialect: &dyn Dialect) -> DdlResult<&'a str> {
    let name = table_name(table)?;

    let mut seen = HashSet::new();
    for column in &table.columns {
        if column.name.trim().is_empty() {
            return Err(DdlError::InvalidSchema(format!(
                "table '{}' has a column without a name",
                name
            )));
        }
        if !seen.insert(column.name.as_str()) {
            return Err(DdlError::InvalidSchema(format!(
                "table '{}' declares column '{}' more than once",
                name, column.name
            )));
        }
    }

    // Rendering mode of text defaults does not affect validity
    let options = RenderOptions::default();
    let mut params = Vec::new();
    for column in &table.columns {
        render_column(column, dialect, &options, &mut params)?;
    }

    Ok(name)
}
