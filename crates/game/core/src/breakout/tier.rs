//! Success tiers used to colour-code result tables.

/// Coarse classification of a finish's success probability.
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
pub enum SuccessTier {
    /// Below 25%
    Low,
    /// 25% or more
    Weak,
    /// 50% or more
    Moderate,
    /// 75% or more
    Strong,
    /// 99% or more - treated as a sure finish
    Certain,
}

impl SuccessTier {
    /// Classify a success probability.
    pub fn from_success(success: f64) -> Self {
        match success {
            s if s >= 0.99 => Self::Certain,
            s if s >= 0.75 => Self::Strong,
            s if s >= 0.50 => Self::Moderate,
            s if s >= 0.25 => Self::Weak,
            _ => Self::Low,
        }
    }

    /// Lowest success probability that falls in this tier.
    pub const fn threshold(self) -> f64 {
        match self {
            Self::Certain => 0.99,
            Self::Strong => 0.75,
            Self::Moderate => 0.50,
            Self::Weak => 0.25,
            Self::Low => 0.0,
        }
    }

    pub const fn is_certain(self) -> bool {
        matches!(self, Self::Certain)
    }
}
