use std::path::{Path, PathBuf};

use clap::Parser;
use conf_content::{config::read_config, GenerationReport};
use tracing_subscriber::{prelude::*, EnvFilter};

mod commands;

use commands::Command;

/// Turns the conference CSV exports into site content pages.
#[derive(Parser, Debug)]
#[command(name = "conf-content", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// YAML config file. Falls back to $CONF_CONTENT_CONFIG.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory containing the CSV files
    #[arg(long, global = true)]
    input_dir: Option<PathBuf>,
    /// Directory the content tree is written to
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = read_config(cli.config.as_deref())?;
    if let Some(input_dir) = cli.input_dir {
        config.input_dir = input_dir;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging_config))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let command = cli.command.unwrap_or(Command::All);
    if !log_outcome(command.run(&config), &config.output_dir) {
        std::process::exit(1);
    }
    Ok(())
}

/// Logs the result of a run once. Returns whether the run succeeded.
fn log_outcome(result: anyhow::Result<GenerationReport>, output_dir: &Path) -> bool {
    match result {
        Ok(report) => {
            tracing::info!(
                "Wrote {} documents to {}",
                report.documents_written(),
                output_dir.display()
            );
            true
        }
        Err(e) => {
            tracing::error!("Content generation failed: {:#}", e);
            false
        }
    }
}
