use anyhow::{Result, anyhow};
use tracing::info;

use crate::catalog::Table;
use crate::config::Config;
use crate::db::connection::{connect, mask_url_password};
use crate::db::metadata::PgMetadata;
use crate::definition::SchemaDefinition;
use crate::dialect::PostgresDialect;

/// Look up `table_name` in the current schema of a PostgreSQL database
pub async fn cmd_exists(config: &Config, table_name: &str) -> Result<bool> {
    let url = config
        .database
        .url
        .as_deref()
        .ok_or_else(|| anyhow!("No database URL. Use --database-url or set DATABASE_URL"))?;

    let definition = SchemaDefinition::new(
        Box::new(PostgresDialect::new(config.render.quote_identifiers)),
        config.render_options(),
    );
    let pool = connect(url, &config.connection_config()).await?;
    let metadata = PgMetadata::new(pool, definition.dialect());

    let exists = definition
        .exists(&Table::named(table_name), &metadata)
        .await?;
    info!(
        "Table {} {} in {}",
        table_name,
        if exists { "exists" } else { "does not exist" },
        mask_url_password(url)
    );
    Ok(exists)
}
