//! Error context for failed DDL statements, extracted from PostgreSQL errors.

use sqlx::postgres::{PgDatabaseError, PgErrorPosition};

/// Rich error context extracted from PostgreSQL errors
#[derive(Debug, Clone)]
pub struct SqlErrorContext {
    pub message: String,
    /// 1-indexed character position in the statement
    pub position: Option<usize>,
    pub detail: Option<String>,
    pub hint: Option<String>,
    /// PostgreSQL error code (e.g., "42P07" for duplicate_table)
    pub code: Option<String>,
}

impl SqlErrorContext {
    pub fn from_sqlx_error(error: &sqlx::Error) -> Self {
        if let Some(db_error) = error.as_database_error()
            && let Some(pg_error) = db_error.try_downcast_ref::<PgDatabaseError>()
        {
            let position = pg_error.position().map(|pos| match pos {
                PgErrorPosition::Original(p) => p,
                PgErrorPosition::Internal { position, .. } => position,
            });

            return Self {
                message: pg_error.message().to_string(),
                position,
                detail: pg_error.detail().map(|s| s.to_string()),
                hint: pg_error.hint().map(|s| s.to_string()),
                code: Some(pg_error.code().to_string()),
            };
        }

        Self {
            message: error.to_string(),
            position: None,
            detail: None,
            hint: None,
            code: None,
        }
    }

    /// Format the error with the failing statement and a caret under the error position
    pub fn format(&self, sql: &str) -> String {
        let mut msg = format!("Statement failed: {}", self.message);
        if let Some(code) = &self.code {
            msg.push_str(&format!(" ({})", code));
        }

        msg.push_str(&format!("\n\n  {}", sql));
        if let Some(position) = self.position {
            msg.push_str(&format!("\n  {}", caret_line(sql, position)));
        }

        if let Some(detail) = &self.detail {
            msg.push_str(&format!("\n\n  Detail: {}", detail));
        }
        if let Some(hint) = &self.hint {
            msg.push_str(&format!("\n  Hint: {}", hint));
        }

        msg
    }
}

/// Spaces followed by `^` under the 1-indexed character `position`
pub fn caret_line(sql: &str, position: usize) -> String {
    let offset = position.saturating_sub(1).min(sql.chars().count());
    format!("{}^", " ".repeat(offset))
}
