use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;

/// Mask password in database URL for display
pub fn mask_url_password(url: &str) -> String {
    let Some((protocol, rest)) = url.split_once("://") else {
        return url.to_string();
    };

    // user:pass@host
    if let Some((user_info, host_and_path)) = rest.split_once('@')
        && let Some((username, _)) = user_info.split_once(':')
    {
        return format!("{}://{}:***@{}", protocol, username, host_and_path);
    }

    url.to_string()
}

/// Database connection configuration
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Maximum number of retries for database connections
    pub max_retries: u32,
    /// Delay between connection retries
    pub retry_delay: Duration,
    pub acquire_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            retry_delay: Duration::from_millis(200),
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Connect to a database, retrying on failure as configured.
///
/// Only connecting is retried. Statements and metadata lookups run once and
/// report their errors directly.
pub async fn connect(url: &str, config: &ConnectionConfig) -> Result<PgPool> {
    let mut attempt = 0;
    loop {
        let result = PgPoolOptions::new()
            .acquire_timeout(config.acquire_timeout)
            .connect(url)
            .await;

        match result {
            Ok(pool) => {
                if attempt > 0 {
                    info!(
                        "Connected to database (after {} retry{})",
                        attempt,
                        if attempt == 1 { "" } else { "ies" }
                    );
                } else {
                    info!("Connected to database");
                }
                return Ok(pool);
            }
            Err(e) if attempt < config.max_retries => {
                if attempt == 0 {
                    info!("Database not ready ({}), retrying...", e);
                }
                attempt += 1;
                tokio::time::sleep(config.retry_delay).await;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!(
                        "Failed to connect to database at {} after {} attempt(s)",
                        mask_url_password(url),
                        attempt + 1
                    )
                });
            }
        }
    }
}
