//! Matchup - the complete input bundle of one finish calculation.
//!
//! A [`Matchup`] holds everything a "Calculate" action needs: both competitors,
//! the attacker's finish bonuses and rerolls, the defender's modifiers, and
//! the breakout attempts with their penalties. It also carries the editing
//! rules of the calculator form:
//!
//! - text fields are coerced with [`parse_lenient`]
//! - raw stats clamp to [1, 30], attempts to [1, 10]
//! - changing the attempt count resets the penalty list to zeros
//!
//! [`Matchup::validate`] rejects out-of-range values for callers that want a
//! hard check instead of clamping.

pub mod coerce;
pub mod validation;

pub use coerce::{parse_lenient, parse_lenient_list};
pub use validation::{MatchupError, Side, ValidationReport};

use crate::breakout::{BreakoutConfig, RerollPolicy, ResultTable, compute_result_table};
use crate::config::RulesConfig;
use crate::stats::{FinishBonusProfile, OpponentModifierProfile, Stat, StatProfile};

/// Profile both competitors start with in a fresh calculator.
pub const DEFAULT_PROFILE: StatProfile = StatProfile::new(10, 9, 8, 7, 6, 5);

/// Complete input of a finish calculation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    /// Attacking competitor (rolls the finish).
    pub attacker: StatProfile,
    /// Added to the attacker's finish value per face.
    #[cfg_attr(feature = "serde", serde(default))]
    pub finish_bonuses: FinishBonusProfile,
    /// Finish rerolls available to the attacker; any at all means best-of-two.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rerolls: u32,
    /// Defending competitor (attempts the breakout).
    pub defender: StatProfile,
    /// Applied once to the defender before any breakout attempt.
    #[cfg_attr(feature = "serde", serde(default))]
    pub defender_modifiers: OpponentModifierProfile,
    /// Breakout attempts the defender gets.
    #[cfg_attr(feature = "serde", serde(default = "default_attempts"))]
    pub attempts: u32,
    /// Penalty to the defender's stats on each attempt (missing slots are 0).
    #[cfg_attr(feature = "serde", serde(default))]
    pub penalties: Vec<i32>,
}

#[cfg(feature = "serde")]
fn default_attempts() -> u32 {
    RulesConfig::DEFAULT_ATTEMPTS
}

/// An editable field of the calculator form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    AttackerStat(Stat),
    FinishBonus(Stat),
    Rerolls,
    DefenderStat(Stat),
    DefenderModifier(Stat),
    Attempts,
    /// Penalty of the attempt at this 0-based index.
    Penalty(usize),
}

impl Matchup {
    /// A matchup with no bonuses, modifiers or rerolls and default attempts.
    pub fn new(attacker: StatProfile, defender: StatProfile) -> Self {
        let attempts = RulesConfig::DEFAULT_ATTEMPTS;
        Self {
            attacker,
            finish_bonuses: FinishBonusProfile::zero(),
            rerolls: 0,
            defender,
            defender_modifiers: OpponentModifierProfile::zero(),
            attempts,
            penalties: vec![0; attempts as usize],
        }
    }

    pub fn reroll_policy(&self) -> RerollPolicy {
        RerollPolicy::from_rerolls(self.rerolls)
    }

    pub fn breakout_config(&self) -> BreakoutConfig {
        BreakoutConfig::with_penalties(self.attempts, self.penalties.clone())
    }

    /// Run the engine over this matchup.
    pub fn evaluate(&self) -> ResultTable {
        compute_result_table(
            &self.attacker,
            &self.finish_bonuses,
            &self.defender,
            &self.defender_modifiers,
            self.reroll_policy(),
            &self.breakout_config(),
        )
    }

    /// Change the attempt count; the penalty list resets to that many zeros.
    pub fn set_attempts(&mut self, attempts: u32) {
        self.attempts = attempts;
        self.penalties = vec![0; attempts as usize];
    }

    /// Set a penalty, growing the list with zeros if needed.
    pub fn set_penalty(&mut self, attempt: usize, penalty: i32) {
        if attempt >= self.penalties.len() {
            self.penalties.resize(attempt + 1, 0);
        }
        self.penalties[attempt] = penalty;
    }

    /// Apply text typed into a form field.
    ///
    /// - Raw stats: coerced, then clamped to the stat range
    /// - Bonuses, modifiers, penalties: coerced, unbounded
    /// - Rerolls: coerced, negative becomes 0
    /// - Attempts: coerced (0 or unparsable falls back to the default),
    ///   clamped, and the penalty list is reset
    pub fn edit(&mut self, field: FormField, text: &str, rules: &RulesConfig) {
        let value = parse_lenient(text);
        match field {
            FormField::AttackerStat(stat) => self.attacker.set(stat, rules.clamp_stat(value)),
            FormField::FinishBonus(stat) => self.finish_bonuses.set(stat, value),
            FormField::Rerolls => self.rerolls = value.max(0) as u32,
            FormField::DefenderStat(stat) => self.defender.set(stat, rules.clamp_stat(value)),
            FormField::DefenderModifier(stat) => self.defender_modifiers.set(stat, value),
            FormField::Attempts => {
                let requested = if value == 0 {
                    RulesConfig::DEFAULT_ATTEMPTS
                } else {
                    value.max(0) as u32
                };
                self.set_attempts(rules.clamp_attempts(requested));
            }
            FormField::Penalty(attempt) => self.set_penalty(attempt, value),
        }
    }

    /// Clamp every bounded field into range.
    ///
    /// Raw stats clamp to the stat range and attempts to the attempt range;
    /// penalties beyond the attempt count are dropped. Bonuses, modifiers and
    /// penalty values are left as they are.
    #[must_use]
    pub fn sanitize(&self, rules: &RulesConfig) -> Self {
        let mut out = self.clone();
        out.attacker = self.attacker.map(|_, value| rules.clamp_stat(value));
        out.defender = self.defender.map(|_, value| rules.clamp_stat(value));
        out.attempts = rules.clamp_attempts(self.attempts);
        out.penalties.truncate(out.attempts as usize);
        out
    }

    /// Check every bounded field, reporting all problems at once.
    pub fn validate(&self, rules: &RulesConfig) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::default();

        for (side, profile) in [(Side::Attacker, &self.attacker), (Side::Defender, &self.defender)]
        {
            for (stat, value) in profile.iter() {
                if !rules.stat_in_range(value) {
                    report.push(MatchupError::StatOutOfRange {
                        side,
                        stat,
                        value,
                        min: rules.stat_min,
                        max: rules.stat_max,
                    });
                }
            }
        }

        if !rules.attempts_in_range(self.attempts) {
            report.push(MatchupError::AttemptsOutOfRange {
                attempts: self.attempts,
                min: rules.min_attempts,
                max: rules.max_attempts,
            });
        }

        if self.penalties.len() > self.attempts as usize {
            report.push(MatchupError::TooManyPenalties {
                penalties: self.penalties.len(),
                attempts: self.attempts,
            });
        }

        report.into_result()
    }
}

impl Default for Matchup {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE, DEFAULT_PROFILE)
    }
}
