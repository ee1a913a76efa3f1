//! Typed table definitions rendered to dialect-specific DDL.
//!
//! ```
//! use tabledef::catalog::{ColumnDef, Table};
//! use tabledef::definition::SchemaDefinition;
//!
//! let table = Table::named("t1")
//!     .column(ColumnDef::integer("id").primary_key())
//!     .column(ColumnDef::varchar("name", 255).unique_index());
//!
//! let definition = SchemaDefinition::default();
//! assert_eq!(
//!     definition.table_sql(&table).unwrap().sql,
//!     "CREATE TABLE IF NOT EXISTS t1 (id INT NOT NULL, name VARCHAR(255) NOT NULL, CONSTRAINT PK_t1 PRIMARY KEY (id))"
//! );
//! assert_eq!(
//!     definition.indices_sql(&table).unwrap()[0].sql,
//!     "CREATE UNIQUE INDEX IX_t1_name ON t1 (name)"
//! );
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod db;
pub mod definition;
pub mod dialect;
pub mod error;
pub mod render;
pub mod schema_loader;

pub use definition::SchemaDefinition;
pub use error::{DdlError, DdlResult};
