use super::Dialect;
use crate::catalog::TypeSpec;

/// PostgreSQL. Unquoted identifiers are folded to lower case by the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect {
    quote_identifiers: bool,
}

impl PostgresDialect {
    pub fn new(quote_identifiers: bool) -> Self {
        Self { quote_identifiers }
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn type_token(&self, spec: &TypeSpec) -> Option<String> {
        let token = match spec {
            TypeSpec::Integer => "INT".to_string(),
            TypeSpec::Long => "BIGINT".to_string(),
            TypeSpec::TinyInt => return None,
            TypeSpec::Boolean => "BOOLEAN".to_string(),
            TypeSpec::Text => "TEXT".to_string(),
            TypeSpec::Varchar(length) => format!("VARCHAR({})", length),
            TypeSpec::Decimal { precision, scale } => format!("DECIMAL({}, {})", precision, scale),
            TypeSpec::Blob => "BYTEA".to_string(),
        };
        Some(token)
    }

    fn identifier_quote(&self) -> Option<char> {
        self.quote_identifiers.then_some('"')
    }

    fn placeholder(&self, index: usize) -> String {
        format!("${}", index)
    }

    fn auto_increment_clause(&self) -> &'static str {
        "GENERATED BY DEFAULT AS IDENTITY"
    }

    fn allows_auto_increment(&self, spec: &TypeSpec) -> bool {
        matches!(spec, TypeSpec::Integer | TypeSpec::Long)
    }

    fn table_exists_query(&self) -> &'static str {
        "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_schema = current_schema() AND table_name = $1)"
    }

    fn metadata_name(&self, name: &str) -> String {
        if self.quote_identifiers {
            name.to_string()
        } else {
            name.to_lowercase()
        }
    }
}
