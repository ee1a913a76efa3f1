//! Abstract column types and default values

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Dialect-independent column type. Dialects map each variant to at most one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeSpec {
    Integer,
    Long,
    TinyInt,
    Boolean,
    Text,
    Varchar(i64),
    Decimal { precision: i64, scale: i64 },
    Blob,
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Integer => write!(f, "integer"),
            TypeSpec::Long => write!(f, "long"),
            TypeSpec::TinyInt => write!(f, "tinyint"),
            TypeSpec::Boolean => write!(f, "boolean"),
            TypeSpec::Text => write!(f, "text"),
            TypeSpec::Varchar(length) => write!(f, "varchar({})", length),
            TypeSpec::Decimal { precision, scale } => {
                write!(f, "decimal({}, {})", precision, scale)
            }
            TypeSpec::Blob => write!(f, "blob"),
        }
    }
}

/// Parses the type names used in model files, e.g. `integer`, `varchar(42)`, `decimal(10, 2)`.
impl FromStr for TypeSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let (base, args) = match normalized.split_once('(') {
            Some((base, rest)) => {
                let inner = rest
                    .strip_suffix(')')
                    .ok_or_else(|| format!("unterminated type arguments in '{}'", s))?;
                let args = inner
                    .split(',')
                    .map(|arg| {
                        arg.trim()
                            .parse::<i64>()
                            .map_err(|_| format!("invalid type argument '{}' in '{}'", arg.trim(), s))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                (base.trim().to_string(), args)
            }
            None => (normalized.clone(), Vec::new()),
        };

        match (base.as_str(), args.as_slice()) {
            ("integer" | "int", []) => Ok(TypeSpec::Integer),
            ("long" | "bigint", []) => Ok(TypeSpec::Long),
            ("tinyint", []) => Ok(TypeSpec::TinyInt),
            ("boolean" | "bool", []) => Ok(TypeSpec::Boolean),
            ("text" | "clob", []) => Ok(TypeSpec::Text),
            ("varchar", [length]) => Ok(TypeSpec::Varchar(*length)),
            ("decimal" | "numeric", [precision, scale]) => Ok(TypeSpec::Decimal {
                precision: *precision,
                scale: *scale,
            }),
            ("decimal" | "numeric", [precision]) => Ok(TypeSpec::Decimal {
                precision: *precision,
                scale: 0,
            }),
            ("blob" | "bytea", []) => Ok(TypeSpec::Blob),
            _ => Err(format!("unknown column type '{}'", s)),
        }
    }
}

/// Default value attached to a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
    /// Raw SQL emitted verbatim, e.g. `CURRENT_TIMESTAMP`
    Expression(String),
}

impl DefaultValue {
    pub fn expression(sql: impl Into<String>) -> Self {
        DefaultValue::Expression(sql.into())
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Integer(value)
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        DefaultValue::Integer(i64::from(value))
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        DefaultValue::Float(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Boolean(value)
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Text(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::Text(value)
    }
}
