//! Result table rendering: a colour-coded terminal table or JSON.

use std::fmt::Write;

use anyhow::Result;
use console::Style;
use finish_core::{
    CrowdMeter, Matchup, RerollPolicy, ResultTable, Stat, StatOffsets, StatProfile, SuccessTier,
};
use serde::Serialize;

const LABEL_WIDTH: usize = 14;
const COLUMN_WIDTH: usize = 10;

/// Percentage with one decimal, e.g. `0.4166` -> `"41.7%"`.
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Colour of a success cell.
pub fn tier_style(tier: SuccessTier) -> Style {
    match tier {
        SuccessTier::Certain => Style::new().green().bold(),
        SuccessTier::Strong => Style::new().green(),
        SuccessTier::Moderate => Style::new().yellow(),
        SuccessTier::Weak => Style::new().color256(208),
        SuccessTier::Low => Style::new().red(),
    }
}

/// Human-readable report: the matchup summary followed by the odds table.
pub fn render_table(matchup: &Matchup, table: &ResultTable, color: bool) -> String {
    let mut out = String::new();
    let label = Style::new().bold().force_styling(color);

    let _ = writeln!(out, "{} {}", label.apply_to("Attacker:"), profile_line(&matchup.attacker));
    if !matchup.finish_bonuses.is_zero() {
        let _ = writeln!(
            out,
            "{} {}",
            label.apply_to("Finish bonuses:"),
            offsets_line(&matchup.finish_bonuses)
        );
    }
    let _ = writeln!(out, "{} {}", label.apply_to("Defender:"), profile_line(&matchup.defender));
    if !matchup.defender_modifiers.is_zero() {
        let _ = writeln!(
            out,
            "{} {}",
            label.apply_to("Modifiers:"),
            offsets_line(&matchup.defender_modifiers)
        );
    }
    let _ = writeln!(out, "{} {}", label.apply_to("Breakout:"), attempts_line(matchup));
    let _ = writeln!(out, "{} {}", label.apply_to("Finish roll:"), reroll_line(matchup.reroll_policy()));
    out.push('\n');

    let mut header = format!("{:<LABEL_WIDTH$}", "Crowd Meter");
    let mut success = format!("{:<LABEL_WIDTH$}", "Success");
    let mut breakout = format!("{:<LABEL_WIDTH$}", "Breakout");
    let dim = Style::new().dim().force_styling(color);

    for outcome in table {
        let _ = write!(header, "{:>COLUMN_WIDTH$}", outcome.crowd_meter.to_string());

        // Pad before styling; escape codes would count toward the width.
        let cell = format!("{:>COLUMN_WIDTH$}", success_cell(outcome.success));
        let style = tier_style(outcome.tier()).force_styling(color);
        let _ = write!(success, "{}", style.apply_to(cell));

        let cell = format!("{:>COLUMN_WIDTH$}", format_percent(outcome.breakout));
        let _ = write!(breakout, "{}", dim.apply_to(cell));
    }

    let _ = writeln!(out, "{}", label.apply_to(header));
    let _ = writeln!(out, "{success}");
    let _ = writeln!(out, "{breakout}");
    out
}

/// Pretty JSON with the (sanitized) matchup and one row per Crowd Meter level.
pub fn render_json(matchup: &Matchup, table: &ResultTable) -> Result<String> {
    let report = JsonReport {
        matchup,
        reroll_policy: matchup.reroll_policy(),
        outcomes: table
            .iter()
            .map(|outcome| JsonOutcome {
                crowd_meter: outcome.crowd_meter,
                success: outcome.success,
                breakout: outcome.breakout,
                tier: outcome.tier(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    matchup: &'a Matchup,
    reroll_policy: RerollPolicy,
    outcomes: Vec<JsonOutcome>,
}

#[derive(Serialize)]
struct JsonOutcome {
    crowd_meter: CrowdMeter,
    success: f64,
    breakout: f64,
    tier: SuccessTier,
}

fn success_cell(success: f64) -> String {
    let mut cell = format_percent(success);
    if SuccessTier::from_success(success).is_certain() {
        cell.push_str(" ✓");
    }
    cell
}

fn profile_line(profile: &StatProfile) -> String {
    profile
        .iter()
        .map(|(stat, value)| format!("{} {value}", stat.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn offsets_line(offsets: &StatOffsets) -> String {
    Stat::ALL
        .into_iter()
        .filter(|stat| offsets[*stat] != 0)
        .map(|stat| format!("{} {:+}", stat.label(), offsets[stat]))
        .collect::<Vec<_>>()
        .join(", ")
}

fn attempts_line(matchup: &Matchup) -> String {
    let noun = if matchup.attempts == 1 { "attempt" } else { "attempts" };
    let config = matchup.breakout_config();
    if config.is_uniform() {
        return format!("{} {noun}", matchup.attempts);
    }

    let penalties = config
        .attempt_penalties()
        .map(|penalty| penalty.to_string())
        .collect::<Vec<_>>()
        .join("/");
    format!("{} {noun}, penalties {penalties}", matchup.attempts)
}

fn reroll_line(policy: RerollPolicy) -> &'static str {
    match policy {
        RerollPolicy::Single => "single roll",
        RerollPolicy::BestOfTwo => "best of two",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lopsided() -> Matchup {
        Matchup::new(StatProfile::uniform(20), StatProfile::uniform(1))
    }

    #[test]
    fn percentages_have_one_decimal() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(21.0 / 36.0), "58.3%");
    }

    #[test]
    fn certain_cells_are_checked() {
        assert_eq!(success_cell(1.0), "100.0% ✓");
        assert_eq!(success_cell(0.5), "50.0%");
    }

    #[test]
    fn plain_table_lists_every_level() {
        let matchup = lopsided();
        let output = render_table(&matchup, &matchup.evaluate(), false);

        for level in 0..=5 {
            assert!(output.contains(&format!("CM {level}")));
        }
        assert_eq!(output.matches("100.0% ✓").count(), 6);
        assert!(output.contains("Attacker: Power 20, Technique 20"));
        assert!(output.contains("Breakout: 3 attempts"));
        assert!(output.contains("Finish roll: single roll"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn coloured_table_uses_escape_codes() {
        let matchup = lopsided();
        let output = render_table(&matchup, &matchup.evaluate(), true);
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn summary_shows_offsets_and_penalties() {
        let mut matchup = lopsided();
        matchup.finish_bonuses.set(Stat::Grapple, 2);
        matchup.defender_modifiers.set(Stat::Agility, -1);
        matchup.penalties = vec![0, 2, 4];
        matchup.rerolls = 1;

        let output = render_table(&matchup, &matchup.evaluate(), false);

        assert!(output.contains("Finish bonuses: Grapple +2"));
        assert!(output.contains("Modifiers: Agility -1"));
        assert!(output.contains("3 attempts, penalties 0/2/4"));
        assert!(output.contains("best of two"));
    }

    #[test]
    fn json_has_one_row_per_level() {
        let matchup = Matchup::new(StatProfile::uniform(1), StatProfile::uniform(30));
        let json = render_json(&matchup, &matchup.evaluate()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let outcomes = value["outcomes"].as_array().unwrap();
        assert_eq!(outcomes.len(), 6);
        assert_eq!(outcomes[0]["crowd_meter"], 0);
        assert_eq!(outcomes[5]["crowd_meter"], 5);
        assert_eq!(outcomes[3]["breakout"], 1.0);
        assert_eq!(outcomes[3]["tier"], "low");
        assert_eq!(value["reroll_policy"], "single");
        assert_eq!(value["matchup"]["attempts"], 3);
        assert_eq!(value["matchup"]["attacker"]["power"], 1);
    }
}
