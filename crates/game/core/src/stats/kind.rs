//! The six stats shared by every competitor.

/// A competitor stat, and the finish die face that rolls it.
///
/// Declaration order is the die face order; [`Stat::index`] and [`Stat::ALL`]
/// rely on it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stat {
    Power,
    Technique,
    Agility,
    Strike,
    Submission,
    Grapple,
}

impl Stat {
    /// Number of stats (and die faces).
    pub const COUNT: usize = 6;

    /// All stats in die face order.
    pub const ALL: [Stat; Self::COUNT] = [
        Stat::Power,
        Stat::Technique,
        Stat::Agility,
        Stat::Strike,
        Stat::Submission,
        Stat::Grapple,
    ];

    /// Position of this stat in a profile array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display label, e.g. `"Submission"`.
    pub const fn label(self) -> &'static str {
        match self {
            Stat::Power => "Power",
            Stat::Technique => "Technique",
            Stat::Agility => "Agility",
            Stat::Strike => "Strike",
            Stat::Submission => "Submission",
            Stat::Grapple => "Grapple",
        }
    }
}
