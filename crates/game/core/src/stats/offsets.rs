//! Per-stat offsets layered on top of a profile.
//!
//! The same shape serves two roles:
//! - **Finish bonuses** raise the attacker's finish value for a single face
//! - **Opponent modifiers** adjust the defender's stats once, before any
//!   breakout attempt (independent of per-attempt penalties)

use core::ops::Index;

use super::kind::Stat;

/// Signed adjustments for each stat. Defaults to all zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "OffsetFields", into = "OffsetFields"))]
pub struct StatOffsets {
    values: [i32; Stat::COUNT],
}

/// Attacker offsets added to the finish value of the matching face.
pub type FinishBonusProfile = StatOffsets;

/// Defender offsets applied once before every breakout check.
pub type OpponentModifierProfile = StatOffsets;

impl StatOffsets {
    pub const fn zero() -> Self {
        Self {
            values: [0; Stat::COUNT],
        }
    }

    pub const fn from_array(values: [i32; Stat::COUNT]) -> Self {
        Self { values }
    }

    pub const fn get(&self, stat: Stat) -> i32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        self.values[stat.index()] = value;
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, stat: Stat, value: i32) -> Self {
        self.set(stat, value);
        self
    }

    pub const fn values(&self) -> &[i32; Stat::COUNT] {
        &self.values
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0)
    }
}

impl From<[i32; Stat::COUNT]> for StatOffsets {
    fn from(values: [i32; Stat::COUNT]) -> Self {
        Self::from_array(values)
    }
}

impl Index<Stat> for StatOffsets {
    type Output = i32;

    fn index(&self, stat: Stat) -> &i32 {
        &self.values[stat.index()]
    }
}

/// Named-field form; omitted stats default to 0.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OffsetFields {
    power: i32,
    technique: i32,
    agility: i32,
    strike: i32,
    submission: i32,
    grapple: i32,
}

#[cfg(feature = "serde")]
impl From<OffsetFields> for StatOffsets {
    fn from(f: OffsetFields) -> Self {
        Self::from_array([
            f.power,
            f.technique,
            f.agility,
            f.strike,
            f.submission,
            f.grapple,
        ])
    }
}

#[cfg(feature = "serde")]
impl From<StatOffsets> for OffsetFields {
    fn from(o: StatOffsets) -> Self {
        Self {
            power: o[Stat::Power],
            technique: o[Stat::Technique],
            agility: o[Stat::Agility],
            strike: o[Stat::Strike],
            submission: o[Stat::Submission],
            grapple: o[Stat::Grapple],
        }
    }
}
