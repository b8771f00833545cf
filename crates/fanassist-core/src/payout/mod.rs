// Payout composition: classify -> resolve -> adjust -> scale by wager.

pub mod classify;
pub mod modifiers;
pub mod resolve;
pub mod tables;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PayoutError;
use crate::pick::{Pick, PlayMode};

pub use classify::{classify, Classified, PickCounts};
pub use modifiers::apply_modifiers;
pub use resolve::resolve_base;

// ---------------------------------------------------------------------------
// Result record
// ---------------------------------------------------------------------------

/// The settled outcome of a lineup.
///
/// `win_count + loss_count == active_pick_count` and
/// `active_pick_count + push_count == original_pick_count`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutResult {
    /// Final multiplier after modifiers; 0 for a losing or unpriced lineup.
    pub multiplier: f64,
    pub original_pick_count: usize,
    pub active_pick_count: usize,
    pub win_count: usize,
    pub loss_count: usize,
    pub push_count: usize,
    pub is_winner: bool,
    /// `wager * multiplier`.
    pub payout_amount: f64,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Price a graded lineup.
///
/// Fails only on caller errors: an empty lineup or a pick with no status.
/// Every graded lineup yields a result, with a zero multiplier when it pays
/// nothing. The wager is not validated.
pub fn calculate_payout(
    picks: &[Pick],
    mode: PlayMode,
    wager: f64,
) -> Result<PayoutResult, PayoutError> {
    if picks.is_empty() {
        return Err(PayoutError::EmptyLineup);
    }
    if let Some(pick) = picks.iter().find(|p| p.status.is_none()) {
        return Err(PayoutError::UngradedPick {
            id: pick.id.clone(),
            player_name: pick.player_name.clone(),
            category: pick.category.clone(),
        });
    }

    let Classified { active, counts } = classify(picks);
    let base = resolve_base(mode, &active);
    let multiplier = apply_modifiers(base, &active);

    debug!(
        "{} lineup: {} picks, {} active ({}W/{}L), {} pushed, base {}x, final {}x",
        mode,
        counts.total,
        active.len(),
        counts.wins,
        counts.losses,
        counts.pushes,
        base,
        multiplier
    );

    Ok(PayoutResult {
        multiplier,
        original_pick_count: counts.total,
        active_pick_count: active.len(),
        win_count: counts.wins,
        loss_count: counts.losses,
        push_count: counts.pushes,
        is_winner: multiplier > 0.0,
        payout_amount: wager * multiplier,
    })
}

// ---------------------------------------------------------------------------
// Entry: a submitted lineup
// ---------------------------------------------------------------------------

/// A lineup as submitted for settlement: picks, mode and wager together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub play_mode: PlayMode,
    pub wager_amount: f64,
    pub picks: Vec<Pick>,
}

impl Entry {
    pub fn new(picks: Vec<Pick>, play_mode: PlayMode, wager_amount: f64) -> Self {
        Entry {
            play_mode,
            wager_amount,
            picks,
        }
    }

    pub fn calculate(&self) -> Result<PayoutResult, PayoutError> {
        calculate_payout(&self.picks, self.play_mode, self.wager_amount)
    }

    pub fn counts(&self) -> PickCounts {
        classify(&self.picks).counts
    }

    /// Picks graded WIN or LOSS, in lineup order.
    pub fn active_picks(&self) -> Vec<&Pick> {
        classify(&self.picks).active
    }
}
