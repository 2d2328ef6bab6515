//! Stat profiles - the raw ratings of a competitor.
//!
//! Raw stats are conventionally clamped to [1, 30] by whoever collects them
//! (see [`crate::RulesConfig`]); the engine operates on whatever integers it
//! is given.

use core::ops::{Index, IndexMut};

use super::kind::Stat;
use super::offsets::StatOffsets;

/// The six ratings of a competitor, indexed by [`Stat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ProfileFields", into = "ProfileFields"))]
pub struct StatProfile {
    values: [i32; Stat::COUNT],
}

impl StatProfile {
    /// Create a profile with the stats in die face order.
    pub const fn new(
        power: i32,
        technique: i32,
        agility: i32,
        strike: i32,
        submission: i32,
        grapple: i32,
    ) -> Self {
        Self {
            values: [power, technique, agility, strike, submission, grapple],
        }
    }

    /// Create a profile with every stat set to `value`.
    pub const fn uniform(value: i32) -> Self {
        Self {
            values: [value; Stat::COUNT],
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

    /// Raw values in die face order.
    pub const fn values(&self) -> &[i32; Stat::COUNT] {
        &self.values
    }

    /// Iterate `(stat, value)` pairs in die face order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }

    /// Apply a function to every stat.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(Stat, i32) -> i32) -> Self {
        let mut out = *self;
        for stat in Stat::ALL {
            out.set(stat, f(stat, self.get(stat)));
        }
        out
    }

    /// Add per-stat offsets (finish bonuses or opponent modifiers).
    ///
    /// Sums saturate at the `i32` bounds.
    #[must_use]
    pub fn offset_by(&self, offsets: &StatOffsets) -> Self {
        self.map(|stat, value| value.saturating_add(offsets.get(stat)))
    }
}

impl From<[i32; Stat::COUNT]> for StatProfile {
    fn from(values: [i32; Stat::COUNT]) -> Self {
        Self::from_array(values)
    }
}

impl Index<Stat> for StatProfile {
    type Output = i32;

    fn index(&self, stat: Stat) -> &i32 {
        &self.values[stat.index()]
    }
}

impl IndexMut<Stat> for StatProfile {
    fn index_mut(&mut self, stat: Stat) -> &mut i32 {
        &mut self.values[stat.index()]
    }
}

/// Named-field form used in matchup files: `{ power = 10, technique = 9, ... }`.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileFields {
    power: i32,
    technique: i32,
    agility: i32,
    strike: i32,
    submission: i32,
    grapple: i32,
}

#[cfg(feature = "serde")]
impl From<ProfileFields> for StatProfile {
    fn from(f: ProfileFields) -> Self {
        Self::new(
            f.power,
            f.technique,
            f.agility,
            f.strike,
            f.submission,
            f.grapple,
        )
    }
}

#[cfg(feature = "serde")]
impl From<StatProfile> for ProfileFields {
    fn from(p: StatProfile) -> Self {
        Self {
            power: p[Stat::Power],
            technique: p[Stat::Technique],
            agility: p[Stat::Agility],
            strike: p[Stat::Strike],
            submission: p[Stat::Submission],
            grapple: p[Stat::Grapple],
        }
    }
}
