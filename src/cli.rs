use clap::{Parser, Subcommand};
use color_eyre::eyre::{self, eyre};

use crate::api::ApiClient;
use crate::config::load_config;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "scholartui", about = "TUI and CLI for academic impact analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand)]
pub enum CliCommand {
    /// Launch the interactive TUI (default)
    Tui,
    /// Fetch one researcher's analysis report (JSON)
    Analyze {
        /// Researcher ID (e.g. a Semantic Scholar author ID)
        researcher_id: String,
    },
}

// ---------------------------------------------------------------------------
// Command execution
// ---------------------------------------------------------------------------

pub async fn run_command(cmd: CliCommand) -> eyre::Result<()> {
    let config = load_config();
    let client = ApiClient::new(config.base_url);

    match cmd {
        CliCommand::Tui => {
            unreachable!("tui is handled in main")
        }

        CliCommand::Analyze { researcher_id } => {
            let id = researcher_id.trim();
            if id.is_empty() {
                return Err(eyre!("researcher ID must not be empty"));
            }
            let report = client.get_analysis(id).await.map_err(|e| eyre!("{e}"))?;
            let line = serde_json::to_string(&report)?;
            println!("{line}");
        }
    }

    Ok(())
}
