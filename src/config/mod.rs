pub mod builder;
pub mod defaults;
pub mod merge;
pub mod types;


pub use builder::ConfigBuilder;
pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

use crate::db::connection::ConnectionConfig;
use crate::definition::SchemaDefinition;
use crate::render::RenderOptions;

/// Load the config file if it exists; a missing file means no overrides
pub fn load_config(config_file: &str) -> Result<ConfigInput> {
    let path = Path::new(config_file);
    if !path.exists() {
        return Ok(ConfigInput::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", config_file))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Invalid config file {}", config_file))
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            string_defaults: self.render.string_defaults,
        }
    }

    pub fn schema_definition(&self) -> SchemaDefinition {
        SchemaDefinition::for_kind(
            self.dialect,
            self.render.quote_identifiers,
            self.render_options(),
        )
    }

    pub fn connection_config(&self) -> ConnectionConfig {
        ConnectionConfig {
            max_retries: self.database.max_retries,
            retry_delay: Duration::from_millis(self.database.retry_delay_ms),
            ..ConnectionConfig::default()
        }
    }
}
