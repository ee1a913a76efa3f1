//! Loads table models from YAML files.
//!
//! A file holds either one table or a `tables:` list:
//!
//! ```yaml
//! name: t1
//! columns:
//!   - { name: id, type: integer, primary_key: true }
//!   - { name: name, type: varchar(255), index: { unique: true } }
//! indices:
//!   - { columns: [id, name], name: ix_custom }
//! ```

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::{ColumnDef, DefaultValue, Index, Table, TypeSpec};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesFile {
    tables: Vec<TableInput>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableInput {
    name: Option<String>,
    #[serde(default)]
    columns: Vec<ColumnInput>,
    primary_key: Option<PrimaryKeyInput>,
    #[serde(default)]
    indices: Vec<IndexInput>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnInput {
    name: String,
    #[serde(rename = "type")]
    sql_type: String,
    #[serde(default)]
    nullable: bool,
    default: Option<DefaultInput>,
    default_expression: Option<String>,
    #[serde(default)]
    auto_increment: bool,
    #[serde(default)]
    primary_key: bool,
    index: Option<ColumnIndexInput>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DefaultInput {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnIndexInput {
    name: Option<String>,
    #[serde(default)]
    unique: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PrimaryKeyInput {
    name: Option<String>,
    columns: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IndexInput {
    name: Option<String>,
    columns: Vec<String>,
    #[serde(default)]
    unique: bool,
}

impl From<DefaultInput> for DefaultValue {
    fn from(input: DefaultInput) -> Self {
        match input {
            DefaultInput::Boolean(b) => DefaultValue::Boolean(b),
            DefaultInput::Integer(n) => DefaultValue::Integer(n),
            DefaultInput::Float(f) => DefaultValue::Float(f),
            DefaultInput::Text(s) => DefaultValue::Text(s),
        }
    }
}

impl ColumnInput {
    fn into_def(self, table: &str) -> Result<ColumnDef> {
        let sql_type: TypeSpec = self
            .sql_type
            .parse()
            .map_err(|e: String| anyhow!("column '{}' in table '{}': {}", self.name, table, e))?;

        let mut def = ColumnDef::new(self.name.clone(), sql_type);
        if self.nullable {
            def = def.nullable();
        }
        if self.auto_increment {
            def = def.auto_increment();
        }
        match (self.default, self.default_expression) {
            (Some(_), Some(_)) => bail!(
                "column '{}' in table '{}' sets both default and default_expression",
                self.name,
                table
            ),
            (Some(value), None) => def = def.default(DefaultValue::from(value)),
            (None, Some(expr)) => def = def.default(DefaultValue::Expression(expr)),
            (None, None) => {}
        }
        if self.primary_key {
            def = def.primary_key();
        }
        if let Some(index) = self.index {
            def = match (index.name, index.unique) {
                (Some(name), true) => def.unique_index_named(name),
                (Some(name), false) => def.index_named(name),
                (None, true) => def.unique_index(),
                (None, false) => def.index(),
            };
        }
        Ok(def)
    }
}

impl TableInput {
    fn into_table(self) -> Result<Table> {
        let label = self.name.clone().unwrap_or_else(|| "<unnamed>".to_string());
        let mut table = Table {
            name: self.name,
            ..Table::default()
        };

        for column in self.columns {
            table = table.column(column.into_def(&label)?);
        }
        if let Some(pk) = self.primary_key {
            table = match pk.name {
                Some(name) => table.named_primary_key(name, pk.columns),
                None => table.primary_key(pk.columns),
            };
        }
        for index in self.indices {
            table = table.with_index(Index {
                name: index.name,
                columns: index.columns,
                unique: index.unique,
            });
        }
        Ok(table)
    }
}

/// Parse the tables declared in one YAML document
pub fn parse_tables(content: &str) -> Result<Vec<Table>> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;

    let inputs = if value.get("tables").is_some() {
        serde_yaml::from_value::<TablesFile>(value)?.tables
    } else {
        vec![serde_yaml::from_value::<TableInput>(value)?]
    };

    inputs.into_iter().map(TableInput::into_table).collect()
}

/// Load tables from files and directories. Directories are searched
/// recursively for `.yaml` / `.yml` files in alphabetical order.
pub fn load_tables(paths: &[PathBuf]) -> Result<Vec<Table>> {
    let mut tables = Vec::new();
    for path in paths {
        let mut files = Vec::new();
        if path.is_dir() {
            discover_model_files(path, &mut files)?;
            files.sort();
        } else {
            files.push(path.clone());
        }

        for file in files {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read model file {}", file.display()))?;
            let parsed = parse_tables(&content)
                .with_context(|| format!("Invalid model file {}", file.display()))?;
            debug!("Loaded {} table(s) from {}", parsed.len(), file.display());
            tables.extend(parsed);
        }
    }
    Ok(tables)
}

fn discover_model_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_dir() {
            discover_model_files(&path, files)?;
        } else if matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        ) {
            files.push(path);
        }
    }
    Ok(())
}
