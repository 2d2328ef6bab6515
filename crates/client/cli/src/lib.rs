//! Command-line client for the finish calculator.
//!
//! - `finish calc` prints the odds table for a matchup
//! - `finish presets` lists the preset matchups
//! - `finish check <FILE>` validates a matchup file
//!
//! Configuration comes from the environment (see [`CliConfig::from_env`]);
//! global flags override it.

pub mod commands;
pub mod config;
pub mod logging;
pub mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

pub use commands::{Calc, Check, Presets};
pub use config::{CliConfig, OutputFormat};

/// Finish and breakout odds for every Crowd Meter level
#[derive(Parser, Debug)]
#[command(name = "finish")]
#[command(about = "Finish and breakout odds for every Crowd Meter level", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory of preset matchups (overrides FINISH_PRESETS_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub presets_dir: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Compute finish odds for every Crowd Meter level
    Calc(Calc),

    /// List available presets
    Presets(Presets),

    /// Load and validate a matchup file
    Check(Check),
}

impl Cli {
    /// Let command-line flags override environment configuration.
    pub fn configure(&self, config: &mut CliConfig) {
        if let Some(dir) = &self.presets_dir {
            config.presets_dir = dir.clone();
        }
        if self.no_color {
            config.color = false;
        }
    }
}

impl Command {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        match self {
            Command::Calc(cmd) => cmd.execute(config),
            Command::Presets(cmd) => cmd.execute(config),
            Command::Check(cmd) => cmd.execute(config),
        }
    }
}
