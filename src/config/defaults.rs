use crate::config::types::*;
use crate::render::StringDefaults;

// Config and DialectKind derive Default

impl Default for Render {
    fn default() -> Self {
        Self {
            quote_identifiers: false,
            string_defaults: StringDefaults::Bind,
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: None,
            max_retries: 0,
            retry_delay_ms: 200,
        }
    }
}
