//! CREATE INDEX rendering through the public API

use anyhow::Result;
use tabledef::catalog::{ColumnDef, Index, Table};
use tabledef::definition::SchemaDefinition;

#[test]
fn test_single_column_index() -> Result<()> {
    let table = Table::named("t1")
        .column(ColumnDef::integer("id").primary_key())
        .column(ColumnDef::varchar("name", 255).index());

    let indices = SchemaDefinition::default().indices_sql(&table)?;
    assert_eq!(indices.len(), 1);
    assert_eq!(indices[0].sql, "CREATE INDEX IX_t1_name ON t1 (name)");
    Ok(())
}

#[test]
fn test_single_column_unique_index() -> Result<()> {
    let table = Table::named("t1")
        .column(ColumnDef::integer("id").primary_key())
        .column(ColumnDef::varchar("name", 255).unique_index());
    let definition = SchemaDefinition::default();

    assert_eq!(
        definition.table_sql(&table)?.sql,
        "CREATE TABLE IF NOT EXISTS t1 (id INT NOT NULL, name VARCHAR(255) NOT NULL, CONSTRAINT PK_t1 PRIMARY KEY (id))"
    );
    let indices = definition.indices_sql(&table)?;
    assert_eq!(indices.len(), 1);
    assert_eq!(indices[0].sql, "CREATE UNIQUE INDEX IX_t1_name ON t1 (name)");
    Ok(())
}

#[test]
fn test_two_column_index() -> Result<()> {
    let table = Table::named("t2")
        .column(ColumnDef::integer("id").primary_key())
        .column(ColumnDef::integer("lvalue"))
        .column(ColumnDef::integer("rvalue"))
        .index(["lvalue", "rvalue"]);

    let indices = SchemaDefinition::default().indices_sql(&table)?;
    assert_eq!(indices.len(), 1);
    assert_eq!(
        indices[0].sql,
        "CREATE INDEX IX_t2_lvalue_rvalue ON t2 (lvalue, rvalue)"
    );
    Ok(())
}

#[test]
fn test_two_indices() -> Result<()> {
    let table = Table::named("t2")
        .column(ColumnDef::integer("id").primary_key())
        .column(ColumnDef::integer("lvalue").index_named("one"))
        .column(ColumnDef::integer("rvalue").index_named("two"));

    let indices = SchemaDefinition::default().indices_sql(&table)?;
    assert_eq!(indices.len(), 2);
    assert_eq!(indices[0].sql, "CREATE INDEX one ON t2 (lvalue)");
    assert_eq!(indices[1].sql, "CREATE INDEX two ON t2 (rvalue)");
    Ok(())
}

#[test]
fn test_index_order_follows_declaration() -> Result<()> {
    let table = Table::named("t3")
        .column(ColumnDef::integer("b"))
        .column(ColumnDef::integer("a"))
        .with_index(Index::new(["b"]).named("z_first"))
        .with_index(Index::new(["a", "b"]).unique())
        .with_index(Index::new(["a"]).named("a_last"));

    let sql: Vec<_> = SchemaDefinition::default()
        .indices_sql(&table)?
        .into_iter()
        .map(|s| s.sql)
        .collect();
    assert_eq!(
        sql,
        vec![
            "CREATE INDEX z_first ON t3 (b)",
            "CREATE UNIQUE INDEX IX_t3_a_b ON t3 (a, b)",
            "CREATE INDEX a_last ON t3 (a)",
        ]
    );
    Ok(())
}

#[test]
fn test_table_without_indices() -> Result<()> {
    let table = Table::named("plain").column(ColumnDef::integer("id").primary_key());
    assert!(SchemaDefinition::default().indices_sql(&table)?.is_empty());
    Ok(())
}
