use clap::Args;
use serde::{Deserialize, Serialize};

use crate::dialect::DialectKind;
use crate::render::StringDefaults;

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigInput {
    pub dialect: Option<DialectKind>,
    pub render: Option<RenderInput>,
    pub database: Option<DatabaseInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub dialect: DialectKind,
    pub render: Render,
    pub database: Database,
}

// Rendering configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RenderInput {
    pub quote_identifiers: Option<bool>,
    pub string_defaults: Option<StringDefaults>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    pub quote_identifiers: bool,
    pub string_defaults: StringDefaults,
}

// Database configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseInput {
    pub url: Option<String>,
    pub max_retries: Option<u32>,
    pub retry_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    pub url: Option<String>,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

// CLI argument groups

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// SQL dialect to render for
    #[arg(long, value_enum)]
    pub dialect: Option<DialectKind>,

    /// Quote every identifier
    #[arg(long)]
    pub quote: bool,

    /// Write text defaults as string literals instead of bound placeholders
    #[arg(long)]
    pub inline_strings: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Database URL (defaults to DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,
}

impl From<RenderArgs> for RenderInput {
    fn from(args: RenderArgs) -> Self {
        RenderInput {
            quote_identifiers: args.quote.then_some(true),
            string_defaults: args.inline_strings.then_some(StringDefaults::Inline),
        }
    }
}

impl From<DatabaseArgs> for DatabaseInput {
    fn from(args: DatabaseArgs) -> Self {
        DatabaseInput {
            url: args.database_url,
            max_retries: None,
            retry_delay_ms: None,
        }
    }
}
