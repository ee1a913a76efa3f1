pub mod naming;
pub mod sql;
pub mod types;

use serde::{Deserialize, Serialize};

/// Rendered SQL text plus the values bound to its placeholders, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<BoundValue>,
}

impl Statement {
    pub fn new(sql: String) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }

    pub fn with_params(sql: String, params: Vec<BoundValue>) -> Self {
        Self { sql, params }
    }
}

/// Value bound to a placeholder instead of being written into the SQL text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BoundValue {
    Text(String),
}

/// How text column defaults are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StringDefaults {
    /// Placeholder in the SQL, value in [`Statement::params`]
    #[default]
    Bind,
    /// Escaped string literal in the SQL
    Inline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub string_defaults: StringDefaults,
}

impl RenderOptions {
    pub fn inline_strings() -> Self {
        Self {
            string_defaults: StringDefaults::Inline,
        }
    }
}

pub fn escape_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
