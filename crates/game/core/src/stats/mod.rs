//! Stat system for finish resolution.
//!
//! Every competitor is rated on the same six stats, which double as the six
//! faces of the finish die:
//!
//! ```text
//! face:  1      2          3        4       5           6
//! stat:  Power  Technique  Agility  Strike  Submission  Grapple
//! ```
//!
//! Profiles are fixed-size arrays indexed by [`Stat`], so every per-stat
//! computation is exhaustive at compile time.
//!
//! ## Layers
//!
//! - [`StatProfile`]: raw ratings of a competitor (conventionally 1..=30)
//! - [`StatOffsets`]: signed per-stat adjustments layered on top, used both as
//!   the attacker's finish bonuses and as the defender's modifiers

pub mod kind;
pub mod offsets;
pub mod profile;

pub use kind::Stat;
pub use offsets::{FinishBonusProfile, OpponentModifierProfile, StatOffsets};
pub use profile::StatProfile;
