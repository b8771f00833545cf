// Base payout resolution: multiplier from the shape of the active set.
//
// Push regrading falls out of this for free: the caller passes only the
// active picks, so a 6-pick lineup with one push is priced as a 5-pick.

use crate::payout::tables;
use crate::pick::{Pick, PlayMode};

/// Base multiplier for `mode` given the active (win/loss) picks.
pub fn resolve_base(mode: PlayMode, active: &[&Pick]) -> f64 {
    match mode {
        PlayMode::Power => power_base(active),
        PlayMode::Flex => flex_base(active),
    }
}

/// All-or-nothing: any loss zeroes the lineup.
fn power_base(active: &[&Pick]) -> f64 {
    if active.is_empty() {
        return 0.0;
    }
    if active.iter().any(|p| p.is_loss()) {
        return 0.0;
    }
    tables::power_multiplier(active.len())
}

/// Partial credit keyed on (active count, win count).
fn flex_base(active: &[&Pick]) -> f64 {
    if active.len() < 2 {
        return 0.0;
    }
    let wins = active.iter().filter(|p| p.is_win()).count();
    tables::flex_multiplier(active.len(), wins)
}
