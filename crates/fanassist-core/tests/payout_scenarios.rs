// End-to-end payout scenarios through the public API: grade a lineup from
// final stat lines, price it, and render the summary strings.

use fanassist_core::format::{describe_result, format_currency, format_multiplier};
use fanassist_core::grading::{grade_lineup, GameResult};
use fanassist_core::PickStatus::{Loss as L, Push as P, Win as W};
use fanassist_core::{
    calculate_payout, Entry, PayoutError, Pick, PickModifier, PickStatus, PlayMode, Selection,
};

// ===========================================================================
// Test helpers
// ===========================================================================

const WAGER: f64 = 10.0;

/// The six-player slate used throughout: (player, category, line).
fn slate() -> Vec<Pick> {
    [
        ("LeBron James", "Points", 25.5),
        ("Stephen Curry", "Points", 28.5),
        ("Kevin Durant", "Points", 27.5),
        ("Giannis Antetokounmpo", "Rebounds", 11.5),
        ("Luka Doncic", "Assists", 8.5),
        ("Nikola Jokic", "Points", 26.5),
    ]
    .iter()
    .enumerate()
    .map(|(i, (name, category, line))| {
        Pick::new(
            (i + 1).to_string(),
            format!("p{}", i + 1),
            *name,
            *category,
            Selection::More,
            *line,
        )
    })
    .collect()
}

fn with_statuses(statuses: &[PickStatus]) -> Vec<Pick> {
    slate()
        .into_iter()
        .zip(statuses)
        .map(|(pick, status)| pick.with_status(*status))
        .collect()
}

fn settle(statuses: &[PickStatus], mode: PlayMode) -> (f64, String) {
    let result = calculate_payout(&with_statuses(statuses), mode, WAGER).unwrap();
    (result.multiplier, format_currency(result.payout_amount))
}

// ===========================================================================
// Power Play
// ===========================================================================

#[test]
fn power_six_all_win() {
    assert_eq!(settle(&[W, W, W, W, W, W], PlayMode::Power), (37.5, "$375.00".into()));
}

#[test]
fn power_six_one_loss() {
    assert_eq!(settle(&[W, W, L, W, W, W], PlayMode::Power), (0.0, "$0.00".into()));
}

#[test]
fn power_six_one_push_grades_as_five() {
    assert_eq!(settle(&[W, W, P, W, W, W], PlayMode::Power), (20.0, "$200.00".into()));
}

#[test]
fn power_two_with_push_has_no_tier() {
    assert_eq!(settle(&[W, P], PlayMode::Power), (0.0, "$0.00".into()));
}

#[test]
fn power_four_with_demon() {
    let mut picks = with_statuses(&[W, W, W, W]);
    picks[0].modifier = Some(PickModifier::Demon);
    let result = calculate_payout(&picks, PlayMode::Power, WAGER).unwrap();
    assert_eq!(result.multiplier, 110.0);
    assert_eq!(format_currency(result.payout_amount), "$1,100.00");
}

// ===========================================================================
// Flex Play
// ===========================================================================

#[test]
fn flex_six_all_win() {
    assert_eq!(settle(&[W, W, W, W, W, W], PlayMode::Flex), (25.0, "$250.00".into()));
}

#[test]
fn flex_six_five_wins() {
    assert_eq!(settle(&[W, W, L, W, W, W], PlayMode::Flex), (2.0, "$20.00".into()));
}

#[test]
fn flex_six_four_wins() {
    assert_eq!(settle(&[W, W, L, W, L, W], PlayMode::Flex), (0.4, "$4.00".into()));
}

#[test]
fn flex_six_three_wins_pays_nothing() {
    assert_eq!(settle(&[W, L, W, L, L, W], PlayMode::Flex), (0.0, "$0.00".into()));
}

// ===========================================================================
// Grading into payout
// ===========================================================================

fn final_line(pick: &Pick, actual: f64) -> GameResult {
    GameResult {
        player_id: pick.player_id.clone(),
        player_name: pick.player_name.clone(),
        category: pick.category.clone(),
        actual_value: actual,
        game_completed: true,
    }
}

#[test]
fn graded_slate_settles_with_push_regrade() {
    let picks = slate();
    // Durant lands exactly on 27.5; everyone else clears the line.
    let actuals = [30.0, 31.0, 27.5, 13.0, 10.0, 29.0];
    let results: Vec<GameResult> = picks
        .iter()
        .zip(actuals)
        .map(|(p, a)| final_line(p, a))
        .collect();

    let graded = grade_lineup(&picks, &results).unwrap();
    let result = calculate_payout(&graded, PlayMode::Power, WAGER).unwrap();

    assert_eq!(result.push_count, 1);
    assert_eq!(format_multiplier(result.multiplier), "20x");
    assert_eq!(
        describe_result(&result),
        "1 push removed. Entry graded as 5-pick with 5 wins."
    );
}

#[test]
fn ungraded_slate_is_rejected_until_graded() {
    let picks = slate();
    let err = calculate_payout(&picks, PlayMode::Flex, WAGER).unwrap_err();
    assert!(matches!(err, PayoutError::UngradedPick { ref id, .. } if id == "1"));

    let results: Vec<GameResult> = picks
        .iter()
        .map(|p| final_line(p, p.stat_value + 1.0))
        .collect();
    let entry = Entry::new(grade_lineup(&picks, &results).unwrap(), PlayMode::Flex, WAGER);
    let result = entry.calculate().unwrap();
    assert_eq!(result.multiplier, 25.0);
    assert_eq!(describe_result(&result), "6/6 correct picks!");
}

#[test]
fn losing_flex_description() {
    let picks = with_statuses(&[W, L, W, L, L, W]);
    let result = calculate_payout(&picks, PlayMode::Flex, WAGER).unwrap();
    assert_eq!(describe_result(&result), "3 losses. Better luck next time!");
    assert!(!result.is_winner);
}
