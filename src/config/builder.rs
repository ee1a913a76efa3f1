use crate::config::{merge::Merge, types::*};

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Config {
        let defaults = Config::default();

        Config {
            dialect: self.config_input.dialect.unwrap_or(defaults.dialect),
            render: self.resolve_render(&defaults.render),
            database: self.resolve_database(&defaults.database),
        }
    }

    fn resolve_render(&self, defaults: &Render) -> Render {
        let render_input = self.config_input.render.as_ref();

        Render {
            quote_identifiers: render_input
                .and_then(|r| r.quote_identifiers)
                .unwrap_or(defaults.quote_identifiers),
            string_defaults: render_input
                .and_then(|r| r.string_defaults)
                .unwrap_or(defaults.string_defaults),
        }
    }

    fn resolve_database(&self, defaults: &Database) -> Database {
        let db_input = self.config_input.database.as_ref();

        Database {
            url: db_input
                .and_then(|d| d.url.as_ref())
                .cloned()
                .or_else(|| std::env::var("DATABASE_URL").ok())
                .or_else(|| defaults.url.clone()),
            max_retries: db_input
                .and_then(|d| d.max_retries)
                .unwrap_or(defaults.max_retries),
            retry_delay_ms: db_input
                .and_then(|d| d.retry_delay_ms)
                .unwrap_or(defaults.retry_delay_ms),
        }
    }
}
