//! `finish` binary entry point.
use anyhow::Result;
use clap::Parser;
use finish_cli::logging::setup_logging;
use finish_cli::{Cli, CliConfig};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    cli.configure(&mut config);

    let _guard = setup_logging(config.log_dir.as_deref())?;
    console::set_colors_enabled(config.color);
    console::set_colors_enabled_stderr(config.color);

    cli.command.execute(&config)
}
