//! Table existence lookups against database metadata

use std::collections::HashSet;
use std::convert::Infallible;
use std::future::Future;
use std::sync::RwLock;

use sqlx::PgPool;

use crate::dialect::Dialect;

/// Source of truth for which tables exist in the target schema.
///
/// `name` is already in the case the catalog stores it in. Each call is an
/// independent lookup; implementations must not cache between calls.
pub trait SchemaMetadata {
    type Error;

    fn table_exists(&self, name: &str) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}

/// Metadata read from the database behind `pool`, using the existence query of
/// the dialect the tables were rendered for
#[derive(Debug, Clone)]
pub struct PgMetadata {
    pool: PgPool,
    query: &'static str,
}

impl PgMetadata {
    pub fn new(pool: PgPool, dialect: &dyn Dialect) -> Self {
        Self {
            pool,
            query: dialect.table_exists_query(),
        }
    }

    pub fn query(&self) -> &'static str {
        self.query
    }
}

impl SchemaMetadata for PgMetadata {
    type Error = sqlx::Error;

    async fn table_exists(&self, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(self.query)
            .bind(name)
            .fetch_one(&self.pool)
            .await
    }
}

/// In-memory table registry, for callers that track creation themselves
#[derive(Debug, Default)]
pub struct MemoryMetadata {
    tables: RwLock<HashSet<String>>,
}

impl MemoryMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_table(&self, name: impl Into<String>) {
        self.tables
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(name.into());
    }

    pub fn forget_table(&self, name: &str) -> bool {
        self.tables
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(name)
    }

    fn contains(&self, name: &str) -> bool {
        self.tables
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(name)
    }
}

impl SchemaMetadata for MemoryMetadata {
    type Error = Infallible;

    async fn table_exists(&self, name: &str) -> Result<bool, Infallible> {
        Ok(self.contains(name))
    }
}
