//! SQL rendering for table definitions
//!
//! Each function renders one kind of clause or statement; the DDL entry
//! points in [`crate::definition`] compose them.

pub mod column;
pub mod constraint;
pub mod index;
pub mod table;

pub use column::render_column;
pub use constraint::{RenderedConstraints, render_constraints};
pub use index::render_create_index;
pub use table::{render_create_table, validate_table};
