//! Finish resolution and breakout odds.
//!
//! This module provides pure functions that compute, analytically, how likely
//! a defender is to break out of an attacker's finish. Nothing is sampled:
//! every die face (or ordered pair of faces, with a reroll) is enumerated with
//! equal weight.
//!
//! # Resolution order
//!
//! ```text
//! finish value per face = attacker stat + finish bonus + crowd meter
//!      ↓
//! automatic success      (finish value ≥ 11 and CM > 0 → breakout 0)
//!      ↓
//! per-attempt count      (defender stats meeting the finish value, CM0 rule)
//!      ↓
//! attempts               (1 − Π(1 − count/6) over every attempt)
//!      ↓
//! reroll aggregation     (mean over 6 faces, or mean of min over 36 pairs)
//!      ↓
//! crowd meter driver     (repeat for CM 0..=5)
//! ```
//!
//! # Core Functions
//!
//! - `finish_values`: finish value for each die face at a Crowd Meter level
//! - `face_breakout_probability`: breakout odds against one finish value
//! - `breakout_probability`: breakout odds for one Crowd Meter level
//! - `compute_result_table`: the full six-level result table

pub mod config;
pub mod face;
pub mod table;
pub mod tier;

pub use config::{BreakoutConfig, RerollPolicy};
pub use face::{
    attempt_breakout_chance, breakout_count, face_breakout_probability, finish_values,
};
pub use table::{
    CrowdMeter, FinishOutcome, ResultTable, aggregate_faces, breakout_probability,
    compute_result_table,
};
pub use tier::SuccessTier;
