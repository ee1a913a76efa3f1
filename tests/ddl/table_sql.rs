//! CREATE TABLE rendering through the public API

use anyhow::Result;
use insta::assert_snapshot;
use rstest::rstest;
use tabledef::catalog::{ColumnDef, DefaultValue, Table};
use tabledef::definition::SchemaDefinition;
use tabledef::dialect::DialectKind;
use tabledef::render::{BoundValue, RenderOptions};

#[rstest]
#[case("test_named_table")]
#[case("t")]
#[case("with_underscores_123")]
fn test_named_empty_table(#[case] name: &str) -> Result<()> {
    let ddl = SchemaDefinition::default().table_sql(&Table::named(name))?;
    assert_eq!(ddl.sql, format!("CREATE TABLE IF NOT EXISTS {}", name));
    assert!(ddl.params.is_empty());
    Ok(())
}

#[test]
fn test_table_with_different_column_types() -> Result<()> {
    let table = Table::named("test_table_with_different_column_types")
        .column(ColumnDef::integer("id").auto_increment())
        .column(ColumnDef::varchar("name", 42).primary_key())
        .column(ColumnDef::integer("age").nullable());

    let ddl = SchemaDefinition::default().table_sql(&table)?;
    assert_eq!(
        ddl.sql,
        "CREATE TABLE IF NOT EXISTS test_table_with_different_column_types (id INT NOT NULL AUTO_INCREMENT, name VARCHAR(42) NOT NULL, age INT NULL, CONSTRAINT PK_test_table_with_different_column_types PRIMARY KEY (name))"
    );
    Ok(())
}

#[test]
fn test_columns_with_defaults() -> Result<()> {
    let table = Table::named("t")
        .column(ColumnDef::varchar("s", 100).default("test"))
        .column(ColumnDef::long("l").default(42));

    let ddl = SchemaDefinition::default().table_sql(&table)?;
    assert_eq!(
        ddl.sql,
        "CREATE TABLE IF NOT EXISTS t (s VARCHAR(100) NOT NULL DEFAULT ?, l BIGINT NOT NULL DEFAULT 42)"
    );
    assert_eq!(ddl.params, vec![BoundValue::Text("test".to_string())]);
    Ok(())
}

#[test]
fn test_single_column_primary_key() -> Result<()> {
    let table = Table::named("t1")
        .column(ColumnDef::integer("id").primary_key())
        .column(ColumnDef::varchar("name", 255).index());

    let ddl = SchemaDefinition::default().table_sql(&table)?;
    assert_eq!(
        ddl.sql,
        "CREATE TABLE IF NOT EXISTS t1 (id INT NOT NULL, name VARCHAR(255) NOT NULL, CONSTRAINT PK_t1 PRIMARY KEY (id))"
    );
    Ok(())
}

#[test]
fn test_rendering_is_idempotent() -> Result<()> {
    let table = Table::named("t")
        .column(ColumnDef::integer("id").primary_key().auto_increment())
        .column(ColumnDef::varchar("s", 100).default("test"))
        .column(ColumnDef::long("l").default(42).unique_index());
    let definition = SchemaDefinition::default();

    assert_eq!(definition.table_sql(&table)?, definition.table_sql(&table)?);
    assert_eq!(definition.indices_sql(&table)?, definition.indices_sql(&table)?);
    Ok(())
}

#[test]
fn test_quoted_identifiers() -> Result<()> {
    let table = Table::named("t1")
        .column(ColumnDef::integer("id").primary_key())
        .column(ColumnDef::varchar("name", 255).index());
    let definition = SchemaDefinition::for_kind(DialectKind::H2, true, RenderOptions::default());

    assert_snapshot!(
        definition.table_sql(&table)?.sql,
        @r#"CREATE TABLE IF NOT EXISTS "t1" ("id" INT NOT NULL, "name" VARCHAR(255) NOT NULL, CONSTRAINT "PK_t1" PRIMARY KEY ("id"))"#
    );
    assert_snapshot!(
        definition.indices_sql(&table)?[0].sql,
        @r#"CREATE INDEX "IX_t1_name" ON "t1" ("name")"#
    );
    Ok(())
}

#[test]
fn test_postgres_table() -> Result<()> {
    let table = Table::named("accounts")
        .column(ColumnDef::long("id").primary_key().auto_increment())
        .column(ColumnDef::text("owner").default("nobody"))
        .column(ColumnDef::decimal("balance", 12, 2).default(0))
        .column(ColumnDef::boolean("active").default(true))
        .column(ColumnDef::long("created").nullable().default(DefaultValue::expression("0")));

    let definition = SchemaDefinition::for_kind(DialectKind::Postgres, false, RenderOptions::default());
    let ddl = definition.table_sql(&table)?;

    assert_snapshot!(
        ddl.sql,
        @"CREATE TABLE IF NOT EXISTS accounts (id BIGINT NOT NULL GENERATED BY DEFAULT AS IDENTITY, owner TEXT NOT NULL DEFAULT $1, balance DECIMAL(12, 2) NOT NULL DEFAULT 0, active BOOLEAN NOT NULL DEFAULT TRUE, created BIGINT NULL DEFAULT 0, CONSTRAINT PK_accounts PRIMARY KEY (id))"
    );
    assert_eq!(ddl.params, vec![BoundValue::Text("nobody".to_string())]);
    Ok(())
}

#[test]
fn test_inline_string_defaults() -> Result<()> {
    let table = Table::named("t").column(ColumnDef::varchar("s", 100).default("o'clock"));
    let definition =
        SchemaDefinition::for_kind(DialectKind::H2, false, RenderOptions::inline_strings());

    let ddl = definition.table_sql(&table)?;
    assert_eq!(
        ddl.sql,
        "CREATE TABLE IF NOT EXISTS t (s VARCHAR(100) NOT NULL DEFAULT 'o''clock')"
    );
    assert!(ddl.params.is_empty());
    Ok(())
}

#[test]
fn test_definition_shared_across_threads() -> Result<()> {
    let definition = SchemaDefinition::default();
    let table = Table::named("t1")
        .column(ColumnDef::integer("id").primary_key())
        .column(ColumnDef::varchar("name", 255).unique_index());
    let expected = definition.table_sql(&table)?;
    let (definition, table) = (&definition, &table);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || definition.table_sql(table)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
    Ok(())
}
