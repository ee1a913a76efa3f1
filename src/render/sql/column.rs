//! Column definition clauses inside CREATE TABLE

use crate::catalog::{Column, DefaultValue};
use crate::dialect::Dialect;
use crate::error::{DdlError, DdlResult};
use crate::render::naming::quote_ident;
use crate::render::types::map_type;
use crate::render::{BoundValue, RenderOptions, StringDefaults, escape_string};

/// Render one column definition: identifier, type, nullability,
/// auto-increment and default, in that order.
///
/// Text defaults bound as parameters are appended to `params`; the
/// placeholder number continues from whatever `params` already holds.
pub fn render_column(
    column: &Column,
    dialect: &dyn Dialect,
    options: &RenderOptions,
    params: &mut Vec<BoundValue>,
) -> DdlResult<String> {
    let mut parts = vec![quote_ident(&column.name, dialect), map_type(&column.sql_type, dialect)?];

    parts.push(if column.nullable { "NULL" } else { "NOT NULL" }.to_string());

    if column.auto_increment {
        if !dialect.allows_auto_increment(&column.sql_type) {
            return Err(DdlError::InvalidColumn {
                column: column.name.clone(),
                reason: format!(
                    "auto-increment is not allowed on {} in the {} dialect",
                    column.sql_type,
                    dialect.name()
                ),
            });
        }
        parts.push(dialect.auto_increment_clause().to_string());
    }

    if let Some(ref default) = column.default {
        let value = match default {
            DefaultValue::Integer(n) => n.to_string(),
            DefaultValue::Float(f) if f.is_finite() => f.to_string(),
            DefaultValue::Float(f) => {
                return Err(DdlError::InvalidColumn {
                    column: column.name.clone(),
                    reason: format!("default {} is not a finite number", f),
                });
            }
            DefaultValue::Boolean(true) => "TRUE".to_string(),
            DefaultValue::Boolean(false) => "FALSE".to_string(),
            DefaultValue::Expression(expr) => expr.clone(),
            DefaultValue::Text(text) => match options.string_defaults {
                StringDefaults::Bind => {
                    params.push(BoundValue::Text(text.clone()));
                    dialect.placeholder(params.len())
                }
                StringDefaults::Inline => escape_string(text),
            },
        };
        parts.push(format!("DEFAULT {}", value));
    }

    Ok(parts.join(" "))
}
