//! Table model: tables, columns, types and constraints as declared by callers

pub mod constraint;
pub mod table;
pub mod types;

pub use constraint::{Constraint, Index, PrimaryKey};
pub use table::{Column, ColumnDef, Table};
pub use types::{DefaultValue, TypeSpec};
