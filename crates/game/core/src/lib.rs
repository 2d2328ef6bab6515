//! Deterministic finish/breakout odds for the tabletop wrestling card game.
//!
//! `finish-core` holds the canonical rules for resolving a *finish*: the
//! attacker rolls one of six stats, the defender gets one or more breakout
//! attempts against the resulting finish value. All APIs are pure functions
//! over immutable values; frontends and content loaders depend on the types
//! re-exported here.
//!
//! The main entry point is [`compute_result_table`], which evaluates every
//! Crowd Meter level (0..=5) and returns a [`ResultTable`]. [`Matchup`] wraps
//! the same inputs as an editable bundle with the lenient coercion, clamping
//! and validation that user-facing forms need.
pub mod breakout;
pub mod config;
pub mod error;
pub mod matchup;
pub mod stats;

pub use breakout::{
    BreakoutConfig, CrowdMeter, FinishOutcome, RerollPolicy, ResultTable, SuccessTier,
    breakout_probability, compute_result_table, face_breakout_probability, finish_values,
};
pub use config::RulesConfig;
pub use error::{CalculatorError, ErrorSeverity};
pub use matchup::{
    DEFAULT_PROFILE, FormField, Matchup, MatchupError, Side, ValidationReport, parse_lenient,
    parse_lenient_list,
};
pub use stats::{FinishBonusProfile, OpponentModifierProfile, Stat, StatOffsets, StatProfile};
