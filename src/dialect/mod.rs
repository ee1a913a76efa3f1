//! SQL dialect capabilities.
//!
//! Everything that differs between database products (type tokens, quoting,
//! placeholders, auto-increment syntax, metadata queries) lives behind the
//! [`Dialect`] trait so the renderers never branch on the database.

pub mod h2;
pub mod postgres;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::TypeSpec;

pub use h2::H2Dialect;
pub use postgres::PostgresDialect;

pub trait Dialect: Send + Sync {
    fn name(&self) -> &'static str;

    /// Type token for `spec`, or `None` when the dialect has no mapping.
    /// Length and precision are validated before this is called.
    fn type_token(&self, spec: &TypeSpec) -> Option<String>;

    /// Quote character wrapped around every identifier, or `None` to emit
    /// identifiers unquoted.
    fn identifier_quote(&self) -> Option<char>;

    /// Placeholder for the bound parameter at 1-based `index`
    fn placeholder(&self, index: usize) -> String;

    fn auto_increment_clause(&self) -> &'static str;

    fn allows_auto_increment(&self, spec: &TypeSpec) -> bool;

    /// Query answering whether a table exists; binds the table name as its only parameter
    fn table_exists_query(&self) -> &'static str;

    /// Case the catalog stores `name` in. Quoted identifiers are stored verbatim.
    fn metadata_name(&self, name: &str) -> String;
}

/// Dialects selectable from configuration and the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    H2,
    Postgres,
}

impl DialectKind {
    pub fn build(self, quote_identifiers: bool) -> Box<dyn Dialect> {
        match self {
            DialectKind::H2 => Box::new(H2Dialect::new(quote_identifiers)),
            DialectKind::Postgres => Box::new(PostgresDialect::new(quote_identifiers)),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialectKind::H2 => write!(f, "h2"),
            DialectKind::Postgres => write!(f, "postgres"),
        }
    }
}
