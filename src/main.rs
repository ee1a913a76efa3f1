use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tabledef::commands::{self, RenderFormat};
use tabledef::config::{self, ConfigBuilder, ConfigInput, DatabaseArgs, RenderArgs};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "tabledef.yaml", global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print CREATE TABLE and CREATE INDEX statements for model files
    Render {
        /// Model files or directories of model files
        #[arg(required = true)]
        models: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "sql")]
        format: RenderFormat,

        #[command(flatten)]
        render_args: RenderArgs,
    },

    /// Create modeled tables that do not exist yet in a PostgreSQL database
    Apply {
        #[arg(required = true)]
        models: Vec<PathBuf>,

        /// Print the statements instead of executing them
        #[arg(long)]
        dry_run: bool,

        /// Quote every identifier
        #[arg(long)]
        quote: bool,

        #[command(flatten)]
        database_args: DatabaseArgs,
    },

    /// Check whether a table exists (exit code 1 when it does not)
    Exists {
        table: String,

        #[command(flatten)]
        database_args: DatabaseArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);

    tokio::select! {
        result = run_main(cli) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal, stopping");
            Ok(())
        }
    }
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_main(cli: Cli) -> Result<()> {
    let file_config = config::load_config(&cli.config_file)?;

    match cli.command {
        Commands::Render {
            models,
            format,
            render_args,
        } => {
            let cli_config = ConfigInput {
                dialect: render_args.dialect,
                render: Some(render_args.into()),
                database: None,
            };
            let config = ConfigBuilder::new()
                .with_file(file_config)
                .with_cli_args(cli_config)
                .resolve();

            commands::cmd_render(&config, &models, format)
        }
        Commands::Apply {
            models,
            dry_run,
            quote,
            database_args,
        } => {
            let cli_config = ConfigInput {
                dialect: None,
                render: Some(
                    RenderArgs {
                        quote,
                        ..RenderArgs::default()
                    }
                    .into(),
                ),
                database: Some(database_args.into()),
            };
            let config = ConfigBuilder::new()
                .with_file(file_config)
                .with_cli_args(cli_config)
                .resolve();

            info!("Applying {} model path(s)", models.len());
            commands::cmd_apply(&config, &models, dry_run).await
        }
        Commands::Exists {
            table,
            database_args,
        } => {
            let cli_config = ConfigInput {
                dialect: None,
                render: None,
                database: Some(database_args.into()),
            };
            let config = ConfigBuilder::new()
                .with_file(file_config)
                .with_cli_args(cli_config)
                .resolve();

            let exists = commands::cmd_exists(&config, &table).await?;
            println!("{}", exists);
            if !exists {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
