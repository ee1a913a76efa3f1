use super::Dialect;
use crate::catalog::TypeSpec;

/// H2 database. Unquoted identifiers are folded to upper case by the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct H2Dialect {
    quote_identifiers: bool,
}

impl H2Dialect {
    pub fn new(quote_identifiers: bool) -> Self {
        Self { quote_identifiers }
    }
}

impl Dialect for H2Dialect {
    fn name(&self) -> &'static str {
        "h2"
    }

    fn type_token(&self, spec: &TypeSpec) -> Option<String> {
        let token = match spec {
            TypeSpec::Integer => "INT".to_string(),
            TypeSpec::Long => "BIGINT".to_string(),
            TypeSpec::TinyInt => "TINYINT".to_string(),
            TypeSpec::Boolean => "BOOLEAN".to_string(),
            TypeSpec::Text => "CLOB".to_string(),
            TypeSpec::Varchar(length) => format!("VARCHAR({})", length),
            TypeSpec::Decimal { precision, scale } => format!("DECIMAL({}, {})", precision, scale),
            TypeSpec::Blob => "BLOB".to_string(),
        };
        Some(token)
    }

    fn identifier_quote(&self) -> Option<char> {
        self.quote_identifiers.then_some('"')
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn auto_increment_clause(&self) -> &'static str {
        "AUTO_INCREMENT"
    }

    fn allows_auto_increment(&self, spec: &TypeSpec) -> bool {
        matches!(spec, TypeSpec::Integer | TypeSpec::Long | TypeSpec::TinyInt)
    }

    fn table_exists_query(&self) -> &'static str {
        "SELECT COUNT(*) > 0 FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_SCHEMA = SCHEMA() AND TABLE_NAME = ?"
    }

    fn metadata_name(&self, name: &str) -> String {
        if self.quote_identifiers {
            name.to_string()
        } else {
            name.to_uppercase()
        }
    }
}
