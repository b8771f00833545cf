// Demon/goblin adjustment of the base multiplier.

use crate::payout::tables;
use crate::pick::{Pick, PickModifier};

/// Rescale `base` for the modifiers present among the active picks.
///
/// Demons stack additively (each adds a full boost for the lineup size),
/// then goblins compound multiplicatively on the boosted value. A zero base
/// stays zero, and the result is never negative.
pub fn apply_modifiers(base: f64, active: &[&Pick]) -> f64 {
    if base == 0.0 {
        return 0.0;
    }

    let n = active.len();
    let demons = count_modifier(active, PickModifier::Demon);
    let goblins = count_modifier(active, PickModifier::Goblin);

    let mut multiplier = base;
    if demons > 0 {
        multiplier += tables::demon_boost(n) * demons as f64;
    }
    if goblins > 0 {
        multiplier *= tables::goblin_reduction(n).powi(goblins as i32);
    }

    multiplier.max(0.0)
}

fn count_modifier(active: &[&Pick], modifier: PickModifier) -> usize {
    active
        .iter()
        .filter(|p| p.modifier == Some(modifier))
        .count()
}
