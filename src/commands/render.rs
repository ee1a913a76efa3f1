use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::catalog::Table;
use crate::config::Config;
use crate::definition::SchemaDefinition;
use crate::render::Statement;
use crate::schema_loader::load_tables;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderFormat {
    /// Statements terminated by semicolons, bound values as comments
    #[default]
    Sql,
    /// JSON array of tables with their statements
    Json,
}

#[derive(Debug, Serialize)]
struct RenderedTable<'a> {
    table: &'a str,
    statements: Vec<Statement>,
}

pub fn cmd_render(config: &Config, models: &[PathBuf], format: RenderFormat) -> Result<()> {
    let tables = load_tables(models)?;
    info!(
        "Rendering {} table(s) for the {} dialect",
        tables.len(),
        config.dialect
    );

    let output = render_output(&config.schema_definition(), &tables, format)?;
    print!("{}", output);
    Ok(())
}

/// Render every table, failing on the first table that cannot be rendered
pub fn render_output(
    definition: &SchemaDefinition,
    tables: &[Table],
    format: RenderFormat,
) -> Result<String> {
    let rendered = tables
        .iter()
        .map(|table| {
            let name = table.name.as_deref().unwrap_or("<unnamed>");
            let statements = definition
                .create_statements(table)
                .with_context(|| format!("Failed to render table '{}'", name))?;
            Ok(RenderedTable {
                table: name,
                statements,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match format {
        RenderFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&rendered)?)),
        RenderFormat::Sql => {
            let mut out = String::new();
            for table in &rendered {
                out.push_str(&format!("-- {}\n", table.table));
                for statement in &table.statements {
                    out.push_str(&statement.sql);
                    out.push_str(";\n");
                    if !statement.params.is_empty() {
                        out.push_str(&format!(
                            "-- params: {}\n",
                            serde_json::to_string(&statement.params)?
                        ));
                    }
                }
                out.push('\n');
            }
            Ok(out)
        }
    }
}
