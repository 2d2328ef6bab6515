//! Matchup validation errors.
//!
//! Validation is an additive precondition in front of the engine: the engine
//! accepts any integers, but user-facing callers reject matchups outside the
//! ranges the game allows. Every problem is collected so a form can flag all
//! offending fields at once.

use crate::error::{CalculatorError, ErrorSeverity};
use crate::stats::Stat;

/// Which competitor a stat belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    Attacker,
    Defender,
}

/// A single reason a matchup was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchupError {
    #[error("{side} {stat} is {value}, expected {min}..={max}")]
    StatOutOfRange {
        side: Side,
        stat: Stat,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("breakout attempts is {attempts}, expected {min}..={max}")]
    AttemptsOutOfRange { attempts: u32, min: u32, max: u32 },

    #[error("{penalties} breakout penalties given for {attempts} attempts")]
    TooManyPenalties { penalties: usize, attempts: u32 },
}

impl CalculatorError for MatchupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::StatOutOfRange { .. } => "STAT_OUT_OF_RANGE",
            Self::AttemptsOutOfRange { .. } => "ATTEMPTS_OUT_OF_RANGE",
            Self::TooManyPenalties { .. } => "TOO_MANY_PENALTIES",
        }
    }
}

/// Every problem found in a matchup.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("invalid matchup: {}", summary(.errors))]
pub struct ValidationReport {
    pub errors: Vec<MatchupError>,
}

impl ValidationReport {
    pub fn push(&mut self, error: MatchupError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` when nothing was reported.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl CalculatorError for ValidationReport {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}

fn summary(errors: &[MatchupError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
