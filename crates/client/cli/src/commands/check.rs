//! Load and validate a matchup file without evaluating it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use finish_content::MatchupLoader;
use finish_core::{CalculatorError, Matchup, MatchupError, ValidationReport};

use crate::config::CliConfig;

/// Load and validate a matchup file
#[derive(Parser, Debug)]
pub struct Check {
    /// Matchup file to check (.toml or .ron)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl Check {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        match self.run(config) {
            Ok(_) => {
                println!(
                    "{} {} is a valid matchup",
                    style("✓").green().bold(),
                    style(self.file.display()).cyan()
                );
                Ok(())
            }
            Err(err) => {
                eprintln!(
                    "{} {} is not a valid matchup",
                    style("✗").red().bold(),
                    style(self.file.display()).cyan()
                );
                if let Some(report) = err.downcast_ref::<ValidationReport>() {
                    for error in &report.errors {
                        eprintln!("  {}", describe(error));
                    }
                }
                Err(err)
            }
        }
    }

    /// Unlike `calc`, nothing is clamped: every out-of-range value is an error.
    pub fn run(&self, config: &CliConfig) -> Result<Matchup> {
        let matchup = MatchupLoader::load(&self.file)?;

        if let Err(report) = matchup.validate(&config.rules) {
            for error in &report.errors {
                tracing::debug!(
                    severity = error.severity().as_str(),
                    code = error.error_code(),
                    "{}",
                    error
                );
            }
            return Err(report.into());
        }

        Ok(matchup)
    }
}

/// One report line: `[validation] STAT_OUT_OF_RANGE: attacker power is 0, ...`.
fn describe(error: &MatchupError) -> String {
    format!(
        "[{}] {}: {}",
        error.severity().as_str(),
        error.error_code(),
        error
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
attempts = 2
penalties = [0, 3]

[attacker]
power = 10
technique = 9
agility = 8
strike = 7
submission = 6
grapple = 5

[defender]
power = 10
technique = 9
agility = 8
strike = 7
submission = 6
grapple = 5
"#;

    #[test]
    fn valid_file_passes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ok.toml");
        std::fs::write(&file, VALID).unwrap();

        let matchup = Check { file }.run(&CliConfig::default()).unwrap();
        assert_eq!(matchup.penalties, vec![0, 3]);
    }

    #[test]
    fn out_of_range_values_are_reported_not_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bad.toml");
        let content = VALID
            .replacen("power = 10", "power = 0", 1)
            .replace("attempts = 2", "attempts = 12");
        std::fs::write(&file, content).unwrap();

        let err = Check { file }.run(&CliConfig::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<ValidationReport>().map(|r| r.len()), Some(2));
        let message = err.to_string();
        assert!(message.contains("attacker power is 0"));
        assert!(message.contains("breakout attempts is 12"));
    }

    #[test]
    fn report_lines_carry_severity_and_code() {
        let error = MatchupError::AttemptsOutOfRange {
            attempts: 12,
            min: 1,
            max: 10,
        };
        assert_eq!(
            describe(&error),
            "[validation] ATTEMPTS_OUT_OF_RANGE: breakout attempts is 12, expected 1..=10"
        );
    }

    #[test]
    fn unreadable_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("absent.toml");
        assert!(Check { file }.run(&CliConfig::default()).is_err());
    }
}
