//! Per-face breakout odds.

use crate::config::RulesConfig;
use crate::stats::{FinishBonusProfile, Stat, StatProfile};

use super::config::BreakoutConfig;
use super::table::CrowdMeter;

/// Finish value for every die face at a Crowd Meter level.
///
/// # Formula
///
/// ```text
/// finish(s) = attacker[s] + bonus[s] + crowd_meter
/// ```
///
/// Summed in `i64` so any pair of `i32` inputs is exact.
pub fn finish_values(
    attacker: &StatProfile,
    bonuses: &FinishBonusProfile,
    crowd_meter: CrowdMeter,
) -> [i64; Stat::COUNT] {
    Stat::ALL.map(|stat| {
        i64::from(attacker[stat]) + i64::from(bonuses[stat]) + i64::from(crowd_meter.bonus())
    })
}

/// Number of defender stats that break out of `finish_value` on one attempt.
///
/// A stat breaks out when `stat - penalty >= finish_value`. At Crowd Meter 0 a
/// stat of exactly 10 always breaks out, whatever the penalty or finish value.
/// The comparison against 10 uses the stat before the attempt penalty.
pub fn breakout_count(
    defender: &StatProfile,
    finish_value: i64,
    penalty: i32,
    crowd_meter: CrowdMeter,
) -> usize {
    defender
        .values()
        .iter()
        .filter(|&&value| {
            let beats_finish = i64::from(value) - i64::from(penalty) >= finish_value;
            let boundary =
                crowd_meter.boundary_rule_active() && value == RulesConfig::CM0_BREAKOUT_STAT;
            beats_finish || boundary
        })
        .count()
}

/// Chance a single attempt breaks out: `count / 6`.
pub fn attempt_breakout_chance(
    defender: &StatProfile,
    finish_value: i64,
    penalty: i32,
    crowd_meter: CrowdMeter,
) -> f64 {
    breakout_count(defender, finish_value, penalty, crowd_meter) as f64
        / RulesConfig::DIE_FACES as f64
}

/// Chance the defender breaks out at least once against `finish_value`.
///
/// Returns exactly 0 when the finish is an automatic success
/// (`finish_value >= 11` with Crowd Meter above 0). Otherwise every attempt is
/// an independent trial with its own penalty:
///
/// ```text
/// breakout = 1 - Π (1 - q_i)
/// ```
///
/// `defender` must already include opponent modifiers.
pub fn face_breakout_probability(
    finish_value: i64,
    defender: &StatProfile,
    config: &BreakoutConfig,
    crowd_meter: CrowdMeter,
) -> f64 {
    if crowd_meter.allows_auto_success()
        && finish_value >= i64::from(RulesConfig::AUTO_SUCCESS_THRESHOLD)
    {
        return 0.0;
    }

    let all_fail: f64 = config
        .attempt_penalties()
        .map(|penalty| 1.0 - attempt_breakout_chance(defender, finish_value, penalty, crowd_meter))
        .product();

    1.0 - all_fail
}
