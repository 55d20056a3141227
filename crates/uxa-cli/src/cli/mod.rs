//! CLI for the UXA design prototype analyzer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use uxa_core::config;

use commands::{run_analyze, run_embed, run_validate};

/// Top-level CLI for the UXA analyzer.
#[derive(Debug, Parser)]
#[command(name = "uxa")]
#[command(about = "UXA: automated critique for design prototypes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Analyze a design file and print the critique report.
    Analyze {
        /// Design-file URL (e.g. https://www.figma.com/file/<id>/<name>).
        url: String,
        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,
        /// Override the simulated analysis latency from config.
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,
    },

    /// Check whether a URL is an acceptable design-file reference.
    Validate {
        /// Design-file URL to check.
        url: String,
    },

    /// Print the embeddable preview URL for a design file.
    Embed {
        /// Design-file URL to embed.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Analyze {
                url,
                json,
                delay_ms,
            } => {
                if let Some(ms) = delay_ms {
                    cfg.analysis_delay_ms = ms;
                }
                run_analyze(&cfg, &url, json).await?
            }
            CliCommand::Validate { url } => run_validate(&url)?,
            CliCommand::Embed { url } => run_embed(&cfg, &url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
