// Pick grading: compare final stat lines against projected lines.
//
// A settlement pass assigns each pick exactly one status. Pricing the graded
// lineup is left to `payout::calculate_payout`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GradingError;
use crate::pick::{Pick, PickStatus, Selection};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Final stat line for one player/category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub player_id: String,
    pub player_name: String,
    pub category: String,
    pub actual_value: f64,
    pub game_completed: bool,
}

/// Outcome of grading a single pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub player_id: String,
    pub player_name: String,
    pub category: String,
    pub selection: Selection,
    pub projected_value: f64,
    pub actual_value: f64,
    pub status: PickStatus,
    /// `actual_value - projected_value`.
    pub difference: f64,
}

/// Aggregate counts for a graded lineup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupSummary {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub pushes: usize,
    /// Wins as a percentage of all graded picks (0 when empty).
    pub win_percentage: f64,
}

// ---------------------------------------------------------------------------
// Grading
// ---------------------------------------------------------------------------

/// Grade one pick against the actual stat value.
///
/// An exact tie with the line is a push; otherwise the pick wins when the
/// actual value lands on the selected side of the line.
pub fn evaluate_pick(pick: &Pick, actual_value: f64) -> PickStatus {
    let line = pick.stat_value;
    if actual_value == line {
        return PickStatus::Push;
    }
    let won = match pick.selection {
        Selection::More => actual_value > line,
        Selection::Less => actual_value < line,
    };
    if won {
        PickStatus::Win
    } else {
        PickStatus::Loss
    }
}

/// Grade every pick in a lineup.
///
/// Results are matched on `player_id` and `category`. A pick with no
/// matching result, or whose game has not finished, fails the whole pass.
pub fn evaluate_lineup(
    picks: &[Pick],
    results: &[GameResult],
) -> Result<Vec<Evaluation>, GradingError> {
    picks
        .iter()
        .map(|pick| {
            let result = results
                .iter()
                .find(|r| r.player_id == pick.player_id && r.category == pick.category)
                .ok_or_else(|| GradingError::MissingResult {
                    player_name: pick.player_name.clone(),
                    category: pick.category.clone(),
                })?;

            if !result.game_completed {
                return Err(GradingError::GameNotCompleted {
                    player_name: pick.player_name.clone(),
                });
            }

            Ok(Evaluation {
                player_id: pick.player_id.clone(),
                player_name: pick.player_name.clone(),
                category: pick.category.clone(),
                selection: pick.selection,
                projected_value: pick.stat_value,
                actual_value: result.actual_value,
                status: evaluate_pick(pick, result.actual_value),
                difference: result.actual_value - pick.stat_value,
            })
        })
        .collect()
}

/// Return copies of `picks` with their status set from `results`.
pub fn grade_lineup(picks: &[Pick], results: &[GameResult]) -> Result<Vec<Pick>, GradingError> {
    let evaluations = evaluate_lineup(picks, results)?;
    Ok(apply_evaluations(picks, &evaluations))
}

/// Return copies of `picks` with their status taken from `evaluations`,
/// which must be in lineup order (as `evaluate_lineup` returns them).
///
/// A pick that already carried a different status is overwritten and
/// logged. Picks beyond the end of `evaluations` are dropped.
pub fn apply_evaluations(picks: &[Pick], evaluations: &[Evaluation]) -> Vec<Pick> {
    picks
        .iter()
        .zip(evaluations)
        .map(|(pick, evaluation)| {
            if let Some(previous) = pick.status {
                if previous != evaluation.status {
                    warn!(
                        "regrading pick {} ({} - {}): {} -> {}",
                        pick.id, pick.player_name, pick.category, previous, evaluation.status
                    );
                }
            }
            Pick {
                status: Some(evaluation.status),
                ..pick.clone()
            }
        })
        .collect()
}

/// Count wins, losses and pushes across a set of evaluations.
pub fn summarize(evaluations: &[Evaluation]) -> LineupSummary {
    let count = |status: PickStatus| evaluations.iter().filter(|e| e.status == status).count();
    let total = evaluations.len();
    let wins = count(PickStatus::Win);

    LineupSummary {
        total,
        wins,
        losses: count(PickStatus::Loss),
        pushes: count(PickStatus::Push),
        win_percentage: if total > 0 {
            wins as f64 / total as f64 * 100.0
        } else {
            0.0
        },
    }
}
