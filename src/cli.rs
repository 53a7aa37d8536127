use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{serve, show_config};

#[derive(Parser)]
#[command(name = "debtdesk")]
#[command(about = "DebtDesk invoice and bad-debt tracking server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080).
        /// Overrides `bind_address` from the configuration.
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Configuration file (TOML, YAML, JSON or any other format the
        /// extension identifies)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the effective configuration as JSON and exit
    ShowConfig {
        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, config } => {
                serve(config.as_deref(), bind_address).await?;
            }
            Commands::ShowConfig { config } => {
                show_config(config.as_deref())?;
            }
        }
        Ok(())
    }
}
