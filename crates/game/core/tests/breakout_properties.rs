//! Rule-level properties of the finish calculator.
//!
//! Scenario tests pin down the worked examples; the proptest block checks the
//! laws that must hold for every in-range matchup.

use finish_core::{
    BreakoutConfig, CrowdMeter, Matchup, RerollPolicy, ResultTable, Stat, StatOffsets,
    StatProfile, breakout_probability, compute_result_table, face_breakout_probability,
    finish_values,
};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

fn ladder() -> StatProfile {
    StatProfile::new(10, 9, 8, 7, 6, 5)
}

fn mirror_table(reroll: RerollPolicy, config: &BreakoutConfig) -> ResultTable {
    compute_result_table(
        &ladder(),
        &StatOffsets::zero(),
        &ladder(),
        &StatOffsets::zero(),
        reroll,
        config,
    )
}

fn level(table: &ResultTable, cm: u8) -> f64 {
    table
        .get(CrowdMeter::new(cm))
        .expect("level within table")
        .breakout
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn mirror_match_at_cm0_is_nontrivial() {
    let table = mirror_table(RerollPolicy::Single, &BreakoutConfig::uniform(1));
    let breakout = level(&table, 0);

    assert!(breakout > 0.0 && breakout < 1.0);
    assert!((breakout - 21.0 / 36.0).abs() < TOLERANCE);
}

#[test]
fn power_face_at_cm0_is_carried_by_the_ten() {
    // Defender with a single 10 and nothing else that can compete
    let defender = StatProfile::new(10, 1, 1, 1, 1, 1);
    let attacker = StatProfile::uniform(10);
    let breakout = breakout_probability(
        &attacker,
        &StatOffsets::zero(),
        &defender,
        RerollPolicy::Single,
        &BreakoutConfig::with_penalties(1, vec![8]),
        CrowdMeter::ZERO,
    );

    // 10 - 8 = 2 < 10, but the boundary rule still counts one stat per face
    assert!((breakout - 1.0 / 6.0).abs() < TOLERANCE);
}

#[test]
fn reroll_helps_at_cm3_with_three_attempts() {
    let config = BreakoutConfig::uniform(3);
    let single = mirror_table(RerollPolicy::Single, &config);
    let reroll = mirror_table(RerollPolicy::BestOfTwo, &config);

    let single_success = single.get(CrowdMeter::new(3)).unwrap().success;
    let reroll_success = reroll.get(CrowdMeter::new(3)).unwrap().success;

    assert!(reroll_success >= single_success);
}

#[test]
fn escalating_penalties_weaken_the_defender() {
    let escalating = mirror_table(
        RerollPolicy::Single,
        &BreakoutConfig::with_penalties(3, vec![0, 2, 4]),
    );
    let flat = mirror_table(
        RerollPolicy::Single,
        &BreakoutConfig::with_penalties(3, vec![0, 0, 0]),
    );

    for cm in 1..=5 {
        assert!(level(&escalating, cm) <= level(&flat, cm) + TOLERANCE);
    }
    assert_ne!(escalating, flat);
}

#[test]
fn zero_penalty_list_matches_uniform_closed_form() {
    let explicit = mirror_table(
        RerollPolicy::Single,
        &BreakoutConfig::with_penalties(3, vec![0, 0, 0]),
    );
    let uniform = mirror_table(RerollPolicy::Single, &BreakoutConfig::uniform(3));

    for (a, b) in explicit.iter().zip(uniform.iter()) {
        assert!((a.breakout - b.breakout).abs() < TOLERANCE);
    }
}

#[test]
fn automatic_success_beats_a_maxed_defender() {
    let attacker = StatProfile::uniform(10);
    let defender = StatProfile::uniform(30);
    let table = compute_result_table(
        &attacker,
        &StatOffsets::zero(),
        &defender,
        &StatOffsets::zero(),
        RerollPolicy::Single,
        &BreakoutConfig::uniform(10),
    );

    // CM0: 10 vs 30s, every stat breaks out
    assert!((level(&table, 0) - 1.0).abs() < TOLERANCE);
    // CM1+: every finish value is 11+, nothing breaks out
    for cm in 1..=5 {
        assert_eq!(level(&table, cm), 0.0);
        assert_eq!(table.get(CrowdMeter::new(cm)).unwrap().success, 1.0);
    }
}

#[test]
fn default_matchup_evaluates_like_explicit_call() {
    let matchup = Matchup::default();
    let direct = compute_result_table(
        &matchup.attacker,
        &matchup.finish_bonuses,
        &matchup.defender,
        &matchup.defender_modifiers,
        RerollPolicy::Single,
        &BreakoutConfig::uniform(3),
    );

    for (a, b) in matchup.evaluate().iter().zip(direct.iter()) {
        assert!((a.breakout - b.breakout).abs() < TOLERANCE);
    }
}

#[test]
fn engine_accepts_out_of_range_input() {
    let attacker = StatProfile::new(-5, 0, 100, 7, 6, 5);
    let defender = StatProfile::uniform(-3);
    let bonuses = StatOffsets::zero().with(Stat::Power, -50);

    let table = compute_result_table(
        &attacker,
        &bonuses,
        &defender,
        &StatOffsets::zero(),
        RerollPolicy::BestOfTwo,
        &BreakoutConfig::with_penalties(2, vec![-4, 9]),
    );

    for outcome in &table {
        assert!((outcome.success + outcome.breakout - 1.0).abs() < TOLERANCE);
    }
}

#[test]
fn extreme_offsets_and_penalties_stay_exact() {
    let bonuses = StatOffsets::zero().with(Stat::Power, i32::MAX);
    let modifiers = StatOffsets::zero().with(Stat::Grapple, i32::MIN);
    let config = BreakoutConfig::with_penalties(3, vec![i32::MIN, i32::MAX, 0]);

    let table = compute_result_table(
        &ladder(),
        &bonuses,
        &ladder(),
        &modifiers,
        RerollPolicy::BestOfTwo,
        &config,
    );

    for outcome in &table {
        assert!((outcome.success + outcome.breakout - 1.0).abs() < TOLERANCE);
        assert!((0.0..=1.0).contains(&outcome.breakout));
    }

    // The boosted power face is an automatic success above CM0
    for cm in 1..=5 {
        let crowd_meter = CrowdMeter::new(cm);
        let power = finish_values(&ladder(), &bonuses, crowd_meter)[Stat::Power.index()];
        assert!(power > i64::from(i32::MAX));
        assert_eq!(
            face_breakout_probability(power, &ladder(), &config, crowd_meter),
            0.0
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

fn profile() -> impl Strategy<Value = StatProfile> {
    prop::array::uniform6(1i32..=30).prop_map(StatProfile::from)
}

fn offsets() -> impl Strategy<Value = StatOffsets> {
    prop::array::uniform6(-5i32..=5).prop_map(StatOffsets::from)
}

fn penalties() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..=6, 0..=10)
}

proptest! {
    /// success + breakout == 1 at every level
    #[test]
    fn prop_success_complements_breakout(
        attacker in profile(),
        bonuses in offsets(),
        defender in profile(),
        modifiers in offsets(),
        reroll in any::<bool>(),
        attempts in 1u32..=10,
        penalties in penalties(),
    ) {
        let table = compute_result_table(
            &attacker,
            &bonuses,
            &defender,
            &modifiers,
            RerollPolicy::from(reroll),
            &BreakoutConfig::with_penalties(attempts, penalties),
        );
        for outcome in &table {
            prop_assert!((outcome.success + outcome.breakout - 1.0).abs() < TOLERANCE);
            prop_assert!(outcome.breakout >= -TOLERANCE && outcome.breakout <= 1.0 + TOLERANCE);
        }
    }

    /// Keeping the better of two rolls never helps the defender
    #[test]
    fn prop_reroll_never_raises_breakout(
        attacker in profile(),
        bonuses in offsets(),
        defender in profile(),
        attempts in 1u32..=10,
        penalties in penalties(),
    ) {
        let config = BreakoutConfig::with_penalties(attempts, penalties);
        let zero = StatOffsets::zero();
        let single = compute_result_table(
            &attacker, &bonuses, &defender, &zero, RerollPolicy::Single, &config,
        );
        let reroll = compute_result_table(
            &attacker, &bonuses, &defender, &zero, RerollPolicy::BestOfTwo, &config,
        );
        for (s, r) in single.iter().zip(reroll.iter()) {
            prop_assert!(r.breakout <= s.breakout + TOLERANCE);
        }
    }

    /// More attempts never lower the defender's odds
    #[test]
    fn prop_more_attempts_never_lower_breakout(
        attacker in profile(),
        defender in profile(),
        attempts in 1u32..10,
        reroll in any::<bool>(),
    ) {
        let zero = StatOffsets::zero();
        let reroll = RerollPolicy::from(reroll);
        let fewer = compute_result_table(
            &attacker, &zero, &defender, &zero, reroll, &BreakoutConfig::uniform(attempts),
        );
        let more = compute_result_table(
            &attacker, &zero, &defender, &zero, reroll, &BreakoutConfig::uniform(attempts + 1),
        );
        for (f, m) in fewer.iter().zip(more.iter()) {
            prop_assert!(m.breakout + TOLERANCE >= f.breakout);
        }
    }

    /// A higher Crowd Meter never lowers the finish's success odds
    #[test]
    fn prop_success_grows_with_crowd_meter(
        attacker in profile(),
        bonuses in offsets(),
        defender in profile(),
        reroll in any::<bool>(),
        attempts in 1u32..=10,
        penalties in penalties(),
    ) {
        let table = compute_result_table(
            &attacker,
            &bonuses,
            &defender,
            &StatOffsets::zero(),
            RerollPolicy::from(reroll),
            &BreakoutConfig::with_penalties(attempts, penalties),
        );
        let outcomes = table.outcomes();
        for pair in outcomes.windows(2) {
            prop_assert!(pair[1].success + TOLERANCE >= pair[0].success);
        }
    }

    /// Non-negative penalties only ever weaken the defender
    #[test]
    fn prop_penalties_never_raise_breakout(
        attacker in profile(),
        defender in profile(),
        attempts in 1u32..=10,
        penalties in penalties(),
    ) {
        let zero = StatOffsets::zero();
        let penalised = compute_result_table(
            &attacker, &zero, &defender, &zero, RerollPolicy::Single,
            &BreakoutConfig::with_penalties(attempts, penalties),
        );
        let uniform = compute_result_table(
            &attacker, &zero, &defender, &zero, RerollPolicy::Single,
            &BreakoutConfig::uniform(attempts),
        );
        for (p, u) in penalised.iter().zip(uniform.iter()) {
            prop_assert!(p.breakout <= u.breakout + TOLERANCE);
        }
    }

    /// At CM0 a defender 10 breaks out whatever the penalty
    #[test]
    fn prop_cm0_ten_always_counts(
        attacker in profile(),
        penalty in 0i32..=30,
    ) {
        let defender = StatProfile::new(10, -100, -100, -100, -100, -100);
        let breakout = breakout_probability(
            &attacker,
            &StatOffsets::zero(),
            &defender,
            RerollPolicy::Single,
            &BreakoutConfig::with_penalties(1, vec![penalty]),
            CrowdMeter::ZERO,
        );
        // Only the 10 can ever break out, and it always does: 1/6 per face
        prop_assert!((breakout - 1.0 / 6.0).abs() < TOLERANCE);
    }
}
