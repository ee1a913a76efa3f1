//! Maps abstract column types to dialect type tokens

use crate::catalog::TypeSpec;
use crate::dialect::Dialect;
use crate::error::{DdlError, DdlResult};

pub fn map_type(spec: &TypeSpec, dialect: &dyn Dialect) -> DdlResult<String> {
    match spec {
        TypeSpec::Varchar(length) if *length <= 0 => {
            return Err(DdlError::InvalidSchema(format!(
                "varchar length must be positive, got {}",
                length
            )));
        }
        TypeSpec::Decimal { precision, scale } if *precision <= 0 || *scale < 0 || scale > precision => {
            return Err(DdlError::InvalidSchema(format!(
                "decimal({}, {}) needs a positive precision and a scale between 0 and the precision",
                precision, scale
            )));
        }
        _ => {}
    }

    dialect
        .type_token(spec)
        .ok_or_else(|| DdlError::UnsupportedType {
            type_spec: spec.to_string(),
            dialect: dialect.name().to_string(),
        })
}
