//! DDL entry points: CREATE TABLE, CREATE INDEX and table existence for one dialect

use tracing::debug;

use crate::catalog::Table;
use crate::db::metadata::SchemaMetadata;
use crate::dialect::{Dialect, DialectKind};
use crate::error::DdlResult;
use crate::render::naming::table_name;
use crate::render::sql::{render_constraints, render_create_table};
use crate::render::{RenderOptions, Statement};

/// Renders table definitions for a single dialect.
///
/// Holds no per-table state: the same table rendered twice yields identical
/// statements, and one instance can be shared between threads.
pub struct SchemaDefinition {
    dialect: Box<dyn Dialect>,
    options: RenderOptions,
}

impl SchemaDefinition {
    pub fn new(dialect: Box<dyn Dialect>, options: RenderOptions) -> Self {
        Self { dialect, options }
    }

    pub fn for_kind(kind: DialectKind, quote_identifiers: bool, options: RenderOptions) -> Self {
        Self::new(kind.build(quote_identifiers), options)
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    pub fn table_sql(&self, table: &Table) -> DdlResult<Statement> {
        render_create_table(table, self.dialect(), &self.options)
    }

    /// One CREATE INDEX statement per declared index, in declaration order
    pub fn indices_sql(&self, table: &Table) -> DdlResult<Vec<Statement>> {
        Ok(render_constraints(table, self.dialect())?.indices)
    }

    /// The table statement followed by its index statements
    pub fn create_statements(&self, table: &Table) -> DdlResult<Vec<Statement>> {
        let mut statements = vec![self.table_sql(table)?];
        statements.extend(self.indices_sql(table)?);
        Ok(statements)
    }

    /// Name of `table` as the database catalog stores it, if it has one
    pub fn metadata_name(&self, table: &Table) -> Option<String> {
        table_name(table)
            .ok()
            .map(|name| self.dialect.metadata_name(name))
    }

    /// Whether `table` is present according to `metadata`. Unnamed tables are
    /// never present; lookup failures are returned as the collaborator reported them.
    pub async fn exists<M: SchemaMetadata>(
        &self,
        table: &Table,
        metadata: &M,
    ) -> Result<bool, M::Error> {
        let Some(name) = self.metadata_name(table) else {
            debug!("Unnamed table cannot exist in any schema");
            return Ok(false);
        };
        metadata.table_exists(&name).await
    }
}

impl Default for SchemaDefinition {
    fn default() -> Self {
        Self::for_kind(DialectKind::default(), false, RenderOptions::default())
    }
}
