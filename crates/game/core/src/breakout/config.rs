//! Match configuration for a finish: breakout attempts and reroll policy.

use crate::config::RulesConfig;

/// How many breakout attempts the defender gets, and how each one is weakened.
///
/// Attempt `i` (0-indexed) subtracts `penalties[i]` from every defender stat,
/// or 0 when the list is shorter than the attempt count. Penalties are not
/// cumulative: each attempt recomputes from the same defender stats.
///
/// The uniform case (every attempt at full strength) is simply an empty
/// penalty list, so both modes share a single code path.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakoutConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_attempts"))]
    attempts: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    penalties: Vec<i32>,
}

#[cfg(feature = "serde")]
fn default_attempts() -> u32 {
    RulesConfig::DEFAULT_ATTEMPTS
}

impl BreakoutConfig {
    /// `attempts` attempts, none penalised.
    pub fn uniform(attempts: u32) -> Self {
        Self {
            attempts,
            penalties: Vec::new(),
        }
    }

    /// `attempts` attempts with an explicit per-attempt penalty list.
    pub fn with_penalties(attempts: u32, penalties: impl Into<Vec<i32>>) -> Self {
        Self {
            attempts,
            penalties: penalties.into(),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Penalties as configured (may be shorter or longer than `attempts`).
    pub fn penalties(&self) -> &[i32] {
        &self.penalties
    }

    /// Penalty applied on attempt `attempt` (0-indexed).
    pub fn penalty_for(&self, attempt: usize) -> i32 {
        self.penalties.get(attempt).copied().unwrap_or(0)
    }

    /// The effective penalty of every attempt, in order.
    pub fn attempt_penalties(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.attempts as usize).map(|attempt| self.penalty_for(attempt))
    }

    /// True when no attempt carries a penalty.
    pub fn is_uniform(&self) -> bool {
        self.attempt_penalties().all(|penalty| penalty == 0)
    }
}

impl Default for BreakoutConfig {
    fn default() -> Self {
        Self::uniform(RulesConfig::DEFAULT_ATTEMPTS)
    }
}

/// Whether the attacker may roll the finish die twice and keep the better face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RerollPolicy {
    /// One roll; every face weighs 1/6.
    #[default]
    Single,
    /// Two rolls, attacker keeps the face worse for the defender; every
    /// ordered pair weighs 1/36.
    BestOfTwo,
}

impl RerollPolicy {
    /// Policy for a number of available finish rerolls. Any reroll at all
    /// grants the best-of-two; extra rerolls do not stack.
    pub const fn from_rerolls(rerolls: u32) -> Self {
        if rerolls > 0 {
            Self::BestOfTwo
        } else {
            Self::Single
        }
    }

    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::BestOfTwo)
    }
}

impl From<bool> for RerollPolicy {
    fn from(allow: bool) -> Self {
        if allow { Self::BestOfTwo } else { Self::Single }
    }
}
