// Display helpers for multipliers, amounts and settled lineups.

use crate::grading::Evaluation;
use crate::payout::PayoutResult;
use crate::pick::PickStatus;

/// `37.5` -> `"37.5x"`, `20.0` -> `"20x"`.
pub fn format_multiplier(multiplier: f64) -> String {
    format!("{multiplier}x")
}

/// Dollar amount with two decimals and thousands separators: `"$1,100.00"`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One-line summary of a settled lineup.
pub fn describe_result(result: &PayoutResult) -> String {
    if result.push_count > 0 {
        return format!(
            "{} push{} removed. Entry graded as {}-pick with {} win{}.",
            result.push_count,
            plural(result.push_count, "es"),
            result.active_pick_count,
            result.win_count,
            plural(result.win_count, "s"),
        );
    }

    if result.is_winner {
        return format!(
            "{}/{} correct picks!",
            result.win_count, result.active_pick_count
        );
    }

    format!(
        "{} loss{}. Better luck next time!",
        result.loss_count,
        plural(result.loss_count, "es")
    )
}

/// One line per graded pick: `WIN  LeBron James - Points MORE 25.5 (Actual: 30)`.
pub fn format_evaluation(evaluation: &Evaluation) -> String {
    let tag = match evaluation.status {
        PickStatus::Win => "WIN ",
        PickStatus::Loss => "LOSS",
        PickStatus::Push => "PUSH",
    };
    format!(
        "{tag} {} - {} {} {} (Actual: {})",
        evaluation.player_name,
        evaluation.category,
        evaluation.selection.display_str().to_uppercase(),
        evaluation.projected_value,
        evaluation.actual_value,
    )
}

fn plural(count: usize, suffix: &'static str) -> &'static str {
    if count == 1 {
        ""
    } else {
        suffix
    }
}
