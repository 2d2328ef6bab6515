//! Crowd Meter levels, reroll aggregation and the result table.

use crate::config::RulesConfig;
use crate::stats::{FinishBonusProfile, OpponentModifierProfile, Stat, StatProfile};

use super::config::{BreakoutConfig, RerollPolicy};
use super::face::{face_breakout_probability, finish_values};
use super::tier::SuccessTier;

/// Crowd Meter level: a bonus added to every finish value.
///
/// Level 0 enables the "stat of 10 always breaks out" boundary rule; every
/// level above 0 enables automatic success for finish values of 11 or more.
/// The engine accepts any level; the game uses 0..=5.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CrowdMeter(u8);

impl CrowdMeter {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(RulesConfig::CROWD_METER_MAX);
    /// Number of levels in a result table.
    pub const LEVELS: usize = RulesConfig::CROWD_METER_MAX as usize + 1;

    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    /// Level within the game's range, or `None`.
    pub const fn checked(level: u8) -> Option<Self> {
        if level <= RulesConfig::CROWD_METER_MAX {
            Some(Self(level))
        } else {
            None
        }
    }

    pub const fn level(self) -> u8 {
        self.0
    }

    /// Amount added to every finish value.
    pub const fn bonus(self) -> i32 {
        self.0 as i32
    }

    /// Finish values of 11+ cannot be broken out of.
    pub const fn allows_auto_success(self) -> bool {
        self.0 > 0
    }

    /// A defender stat of exactly 10 always breaks out.
    pub const fn boundary_rule_active(self) -> bool {
        self.0 == 0
    }

    /// Every level from 0 to 5, in order.
    pub fn levels() -> impl Iterator<Item = CrowdMeter> {
        (0..=RulesConfig::CROWD_METER_MAX).map(CrowdMeter)
    }
}

impl core::fmt::Display for CrowdMeter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CM {}", self.0)
    }
}

/// Odds of one finish at one Crowd Meter level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinishOutcome {
    pub crowd_meter: CrowdMeter,
    /// Probability the defender escapes.
    pub breakout: f64,
    /// Probability the finish holds: `1 - breakout`.
    pub success: f64,
}

impl FinishOutcome {
    pub fn new(crowd_meter: CrowdMeter, breakout: f64) -> Self {
        Self {
            crowd_meter,
            breakout,
            success: 1.0 - breakout,
        }
    }

    pub fn tier(&self) -> SuccessTier {
        SuccessTier::from_success(self.success)
    }
}

/// Finish odds for every Crowd Meter level, ordered 0..=5.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultTable {
    outcomes: [FinishOutcome; CrowdMeter::LEVELS],
}

impl ResultTable {
    pub fn outcomes(&self) -> &[FinishOutcome; CrowdMeter::LEVELS] {
        &self.outcomes
    }

    /// Outcome for a level, or `None` above Crowd Meter 5.
    pub fn get(&self, crowd_meter: CrowdMeter) -> Option<&FinishOutcome> {
        self.outcomes.get(crowd_meter.level() as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FinishOutcome> {
        self.outcomes.iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a FinishOutcome;
    type IntoIter = core::slice::Iter<'a, FinishOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

/// Combine per-face breakout odds into the odds of one finish roll.
///
/// - [`RerollPolicy::Single`]: mean of the six faces.
/// - [`RerollPolicy::BestOfTwo`]: for all 36 ordered pairs of faces the
///   attacker keeps the face with the lower breakout chance; mean of those.
pub fn aggregate_faces(face_probs: &[f64; Stat::COUNT], reroll: RerollPolicy) -> f64 {
    match reroll {
        RerollPolicy::Single => face_probs.iter().sum::<f64>() / RulesConfig::DIE_FACES as f64,
        RerollPolicy::BestOfTwo => {
            let total: f64 = face_probs
                .iter()
                .flat_map(|first| face_probs.iter().map(move |second| f64::min(*first, *second)))
                .sum();
            total / RulesConfig::REROLL_PAIRS as f64
        }
    }
}

/// Breakout odds for a single Crowd Meter level.
///
/// `defender` must already include opponent modifiers; see
/// [`compute_result_table`] for the full pipeline.
pub fn breakout_probability(
    attacker: &StatProfile,
    finish_bonuses: &FinishBonusProfile,
    defender: &StatProfile,
    reroll: RerollPolicy,
    config: &BreakoutConfig,
    crowd_meter: CrowdMeter,
) -> f64 {
    let face_probs = finish_values(attacker, finish_bonuses, crowd_meter)
        .map(|value| face_breakout_probability(value, defender, config, crowd_meter));

    aggregate_faces(&face_probs, reroll)
}

/// Compute the finish odds for every Crowd Meter level.
///
/// Opponent modifiers are applied to the defender once, before any level is
/// evaluated; they do not depend on the Crowd Meter.
///
/// The computation is total: any integer inputs produce a table, and no
/// bounds are checked. Use [`crate::Matchup::validate`] to reject
/// out-of-range input first.
pub fn compute_result_table(
    attacker: &StatProfile,
    finish_bonuses: &FinishBonusProfile,
    defender: &StatProfile,
    defender_modifiers: &OpponentModifierProfile,
    reroll: RerollPolicy,
    config: &BreakoutConfig,
) -> ResultTable {
    let effective_defender = defender.offset_by(defender_modifiers);

    let outcomes = core::array::from_fn(|level| {
        let crowd_meter = CrowdMeter::new(level as u8);
        let breakout = breakout_probability(
            attacker,
            finish_bonuses,
            &effective_defender,
            reroll,
            config,
            crowd_meter,
        );
        FinishOutcome::new(crowd_meter, breakout)
    });

    ResultTable { outcomes }
}
