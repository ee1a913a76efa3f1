//! Standalone CREATE INDEX statements

use crate::catalog::Index;
use crate::dialect::Dialect;
use crate::render::Statement;
use crate::render::naming::{column_list, index_name, quote_ident};

/// Render `CREATE [UNIQUE] INDEX <name> ON <table> (<columns>)` for an index
/// already validated against its table.
pub fn render_create_index(table_name: &str, index: &Index, dialect: &dyn Dialect) -> Statement {
    let mut sql = String::from("CREATE ");
    if index.unique {
        sql.push_str("UNIQUE ");
    }
    sql.push_str("INDEX ");
    sql.push_str(&quote_ident(&index_name(table_name, index), dialect));

    sql.push_str(" ON ");
    sql.push_str(&quote_ident(table_name, dialect));

    sql.push_str(" (");
    sql.push_str(&column_list(&index.columns, dialect));
    sql.push(')');

    Statement::new(sql)
}
