use anyhow::{Context, Result, anyhow};
use console::style;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::Config;
use crate::db::connection::connect;
use crate::db::metadata::PgMetadata;
use crate::db::sql_executor::execute_statements;
use crate::definition::SchemaDefinition;
use crate::dialect::{DialectKind, PostgresDialect};
use crate::render::RenderOptions;
use crate::schema_loader::load_tables;

/// Create the modeled tables that do not exist yet in a PostgreSQL database.
///
/// PostgreSQL cannot bind parameters in DDL, so text defaults are always
/// written inline here regardless of configuration.
pub async fn cmd_apply(config: &Config, models: &[PathBuf], dry_run: bool) -> Result<()> {
    if config.dialect != DialectKind::Postgres {
        debug!(
            "Configured dialect {} ignored; apply always targets PostgreSQL",
            config.dialect
        );
    }
    let definition = SchemaDefinition::new(
        Box::new(PostgresDialect::new(config.render.quote_identifiers)),
        RenderOptions::inline_strings(),
    );

    let tables = load_tables(models)?;
    let mut plan = Vec::with_capacity(tables.len());
    for table in &tables {
        let name = table.name.as_deref().unwrap_or("<unnamed>");
        let statements = definition
            .create_statements(table)
            .with_context(|| format!("Failed to render table '{}'", name))?;
        plan.push((name, table, statements));
    }

    if dry_run {
        for (name, _, statements) in &plan {
            println!("-- {}", name);
            for statement in statements {
                println!("{};", statement.sql);
            }
        }
        return Ok(());
    }

    let url = config
        .database
        .url
        .as_deref()
        .ok_or_else(|| anyhow!("No database URL. Use --database-url or set DATABASE_URL"))?;
    let pool = connect(url, &config.connection_config()).await?;
    let metadata = PgMetadata::new(pool.clone(), definition.dialect());

    let mut created = 0;
    for (name, table, statements) in &plan {
        if definition.exists(table, &metadata).await? {
            println!("{} {} already exists", style("-").dim(), name);
            continue;
        }
        execute_statements(&pool, statements)
            .await
            .with_context(|| format!("Failed to create table '{}'", name))?;
        println!("{} created {}", style("+").green(), name);
        created += 1;
    }

    info!("Created {} of {} table(s)", created, plan.len());
    Ok(())
}
