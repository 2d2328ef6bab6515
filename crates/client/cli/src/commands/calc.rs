//! Compute the finish odds table for a matchup.
//!
//! The matchup starts from a file, a preset or the default calculator
//! inputs. Flags then override single fields the same way the calculator
//! form edits them: text is coerced leniently and raw stats are clamped.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use finish_content::{MatchupLoader, PresetCatalog};
use finish_core::{FormField, Matchup, RulesConfig, Stat, parse_lenient_list};

use crate::config::{CliConfig, OutputFormat};
use crate::render::{render_json, render_table};

/// Compute finish odds for every Crowd Meter level
#[derive(Parser, Debug, Default)]
pub struct Calc {
    /// Matchup file to start from (.toml or .ron)
    #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
    pub matchup: Option<PathBuf>,

    /// Preset to start from (see `finish presets`)
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Attacker stats: power,technique,agility,strike,submission,grapple
    #[arg(long, value_name = "STATS", allow_hyphen_values = true)]
    pub attacker: Option<String>,

    /// Attacker finish bonuses, in stat order
    #[arg(long, value_name = "OFFSETS", allow_hyphen_values = true)]
    pub bonus: Option<String>,

    /// Finish rerolls available to the attacker
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub rerolls: Option<String>,

    /// Defender stats: power,technique,agility,strike,submission,grapple
    #[arg(long, value_name = "STATS", allow_hyphen_values = true)]
    pub defender: Option<String>,

    /// Modifiers applied to the defender, in stat order
    #[arg(long, value_name = "OFFSETS", allow_hyphen_values = true)]
    pub modifier: Option<String>,

    /// Breakout attempts (resets penalties)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub attempts: Option<String>,

    /// Penalty per breakout attempt, e.g. 0,2,4
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    pub penalties: Option<String>,

    /// Output format (defaults to FINISH_OUTPUT_FORMAT, then table)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Calc {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let matchup = self.resolve(config)?;
        let table = matchup.evaluate();

        tracing::debug!(
            attempts = matchup.attempts,
            rerolls = matchup.rerolls,
            "Evaluated matchup"
        );

        match self.format.unwrap_or(config.output) {
            OutputFormat::Table => print!("{}", render_table(&matchup, &table, config.color)),
            OutputFormat::Json => println!("{}", render_json(&matchup, &table)?),
        }

        Ok(())
    }

    /// Build the matchup to evaluate: base inputs, flag overrides, then
    /// clamping and validation.
    pub fn resolve(&self, config: &CliConfig) -> Result<Matchup> {
        let mut matchup = self.base_matchup(config)?;
        self.apply_overrides(&mut matchup, &config.rules)?;

        let sanitized = matchup.sanitize(&config.rules);
        if sanitized != matchup {
            tracing::warn!("Out-of-range matchup values were clamped");
        }
        sanitized.validate(&config.rules)?;

        Ok(sanitized)
    }

    fn base_matchup(&self, config: &CliConfig) -> Result<Matchup> {
        if let Some(path) = &self.matchup {
            return MatchupLoader::load(path);
        }
        if let Some(name) = &self.preset {
            return PresetCatalog::new(&config.presets_dir).load(name);
        }
        Ok(Matchup::default())
    }

    fn apply_overrides(&self, matchup: &mut Matchup, rules: &RulesConfig) -> Result<()> {
        let profiles: [(&Option<String>, fn(Stat) -> FormField, &str); 4] = [
            (&self.attacker, FormField::AttackerStat, "--attacker"),
            (&self.bonus, FormField::FinishBonus, "--bonus"),
            (&self.defender, FormField::DefenderStat, "--defender"),
            (&self.modifier, FormField::DefenderModifier, "--modifier"),
        ];
        for (text, field, flag) in profiles {
            if let Some(text) = text {
                edit_profile(matchup, text, field, rules).with_context(|| format!("Invalid {flag}"))?;
            }
        }

        if let Some(text) = &self.rerolls {
            matchup.edit(FormField::Rerolls, text, rules);
        }

        if let Some(text) = &self.attempts {
            matchup.edit(FormField::Attempts, text, rules);
        }

        if let Some(text) = &self.penalties {
            // Loaded files may still carry an unclamped attempt count
            let attempts = rules.clamp_attempts(matchup.attempts);
            let penalties = parse_lenient_list(text);
            if penalties.len() > attempts as usize {
                anyhow::bail!(
                    "--penalties has {} entries but the defender has {} attempts",
                    penalties.len(),
                    attempts
                );
            }

            matchup.attempts = attempts;
            matchup.penalties = vec![0; attempts as usize];
            for (attempt, penalty) in penalties.into_iter().enumerate() {
                matchup.set_penalty(attempt, penalty);
            }
        }

        Ok(())
    }
}

/// Apply six comma-separated entries to the fields of one profile.
fn edit_profile(
    matchup: &mut Matchup,
    text: &str,
    field: fn(Stat) -> FormField,
    rules: &RulesConfig,
) -> Result<()> {
    let entries: Vec<&str> = text.split(',').collect();
    if entries.len() != Stat::COUNT {
        anyhow::bail!(
            "expected {} comma-separated values (power, technique, agility, strike, submission, grapple), got {}",
            Stat::COUNT,
            entries.len()
        );
    }

    for (stat, entry) in Stat::ALL.into_iter().zip(entries) {
        matchup.edit(field(stat), entry, rules);
    }
    Ok(())
}
