// Plain-text and JSON rendering of settled entries and payout tables.

use fanassist_core::format::{
    describe_result, format_currency, format_evaluation, format_multiplier,
};
use fanassist_core::payout::tables;
use fanassist_core::{Pick, PayoutResult};

use crate::app::Settlement;

/// Multi-line text report for a settled entry.
pub fn render_settlement(settlement: &Settlement) -> String {
    let entry = &settlement.entry;
    let result = &settlement.result;
    let mut lines = Vec::new();

    lines.push(format!(
        "{} | {} picks | wager {}",
        entry.play_mode.label(),
        entry.picks.len(),
        format_currency(entry.wager_amount)
    ));

    match &settlement.evaluations {
        Some(evaluations) => {
            for (pick, evaluation) in entry.picks.iter().zip(evaluations) {
                lines.push(format!("  {}{}", format_evaluation(evaluation), modifier_suffix(pick)));
            }
        }
        None => {
            for pick in &entry.picks {
                lines.push(format!("  {}", format_pick(pick)));
            }
        }
    }

    lines.push(format!(
        "Picks: {} total, {} active, {} pushed",
        result.original_pick_count, result.active_pick_count, result.push_count
    ));
    lines.push(format!("Multiplier: {}", format_multiplier(result.multiplier)));
    lines.push(format!("Payout: {}", format_currency(result.payout_amount)));
    lines.push(describe_result(result));

    lines.join("\n")
}

/// Pretty-printed JSON of the payout record.
pub fn render_json(result: &PayoutResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// All four payout tables as text.
pub fn render_tables() -> String {
    let mut lines = vec!["Power Play (all active picks must win)".to_string()];
    for (picks, multiplier) in tables::POWER_PLAY_PAYOUTS {
        lines.push(format!("  {picks}-pick: {}", format_multiplier(*multiplier)));
    }

    lines.push("Flex Play (correct picks -> multiplier)".to_string());
    for (picks, tier) in tables::FLEX_PLAY_PAYOUTS {
        let mut payouts: Vec<(usize, f64)> = tier.to_vec();
        payouts.sort_by(|a, b| b.0.cmp(&a.0));
        let cells: Vec<String> = payouts
            .iter()
            .map(|(wins, multiplier)| format!("{wins}/{picks} {}", format_multiplier(*multiplier)))
            .collect();
        lines.push(format!("  {picks}-pick: {}", cells.join(", ")));
    }

    lines.push("Demon boost (added per demon leg)".to_string());
    for (picks, boost) in tables::DEMON_MULTIPLIER_BOOST {
        lines.push(format!("  {picks}-pick: +{boost}"));
    }

    lines.push("Goblin reduction (applied per goblin leg)".to_string());
    for (picks, factor) in tables::GOBLIN_MULTIPLIER_REDUCTION {
        lines.push(format!("  {picks}-pick: x{factor}"));
    }

    lines.join("\n")
}

fn format_pick(pick: &Pick) -> String {
    let tag = match pick.status {
        Some(status) => status.display_str().to_uppercase(),
        None => "----".to_string(),
    };
    format!(
        "{:<4} {} - {} {} {}{}",
        tag,
        pick.player_name,
        pick.category,
        pick.selection.display_str().to_uppercase(),
        pick.stat_value,
        modifier_suffix(pick)
    )
}

fn modifier_suffix(pick: &Pick) -> String {
    pick.modifier
        .map(|m| format!(" [{m}]"))
        .unwrap_or_default()
}
