use anyhow::Result;
use sqlx::PgPool;
use tracing::{debug, info};

use super::error_context::SqlErrorContext;
use crate::render::{BoundValue, Statement};

/// Execute rendered statements in order inside one transaction.
///
/// Bound values are sent as parameters. Nothing is committed if any
/// statement fails.
pub async fn execute_statements(pool: &PgPool, statements: &[Statement]) -> Result<()> {
    let mut tx = pool.begin().await?;

    for statement in statements {
        debug!("Executing: {}", statement.sql);

        let mut query = sqlx::query(statement.sql.as_str());
        for param in &statement.params {
            query = match param {
                BoundValue::Text(text) => query.bind(text.as_str()),
            };
        }

        if let Err(e) = query.execute(&mut *tx).await {
            return Err(format_sql_error(&e, &statement.sql));
        }
    }

    tx.commit().await?;
    info!("Executed {} statement(s)", statements.len());
    Ok(())
}

fn format_sql_error(e: &sqlx::Error, sql: &str) -> anyhow::Error {
    let ctx = SqlErrorContext::from_sqlx_error(e);
    anyhow::anyhow!("{}", ctx.format(sql))
}
