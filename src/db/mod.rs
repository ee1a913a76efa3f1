pub mod connection;
pub mod error_context;
pub mod metadata;
pub mod sql_executor;

pub use metadata::{MemoryMetadata, PgMetadata, SchemaMetadata};
