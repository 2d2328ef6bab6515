//! List the matchup presets in the presets directory.

use anyhow::Result;
use clap::Parser;
use console::style;
use finish_content::PresetCatalog;

use crate::config::CliConfig;

/// List available presets
#[derive(Parser, Debug, Default)]
pub struct Presets {
    /// Print only the names, one per line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Presets {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let catalog = PresetCatalog::new(&config.presets_dir);
        let names = catalog.names()?;

        if self.quiet {
            for name in &names {
                println!("{name}");
            }
            return Ok(());
        }

        if names.is_empty() {
            println!(
                "{}",
                style(format!("No presets in {}", catalog.dir().display())).dim()
            );
            return Ok(());
        }

        println!(
            "{} {}",
            style("Presets in").bold(),
            style(catalog.dir().display()).cyan()
        );
        for name in &names {
            println!("  {}", style(name).green());
        }
        println!(
            "\n{}",
            style("Run `finish calc --preset <NAME>` to evaluate one").dim()
        );

        Ok(())
    }
}
