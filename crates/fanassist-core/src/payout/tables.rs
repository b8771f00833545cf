// Payout tiers as data.
//
// Every table is a fixed slice of (key, value) pairs. Lookups never panic:
// a missing key falls back to a neutral value (0 for multipliers, 1 for
// modifier factors).

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Power Play: active pick count -> multiplier when every active pick wins.
pub const POWER_PLAY_PAYOUTS: &[(usize, f64)] = &[
    (2, 3.0),
    (3, 6.0),
    (4, 10.0),
    (5, 20.0),
    (6, 37.5),
];

/// Flex Play: active pick count -> (win count -> multiplier).
pub const FLEX_PLAY_PAYOUTS: &[(usize, &[(usize, f64)])] = &[
    (3, &[(3, 3.0), (2, 1.0)]),
    (4, &[(4, 6.0), (3, 1.5)]),
    (5, &[(5, 10.0), (4, 2.0), (3, 0.4)]),
    (6, &[(6, 25.0), (5, 2.0), (4, 0.4)]),
];

/// Additive boost per demon leg, keyed by active pick count.
pub const DEMON_MULTIPLIER_BOOST: &[(usize, f64)] = &[
    (2, 10.0),
    (3, 25.0),
    (4, 100.0),
    (5, 400.0),
    (6, 2000.0),
];

/// Multiplicative reduction per goblin leg, keyed by active pick count.
pub const GOBLIN_MULTIPLIER_REDUCTION: &[(usize, f64)] = &[
    (2, 0.5),
    (3, 0.4),
    (4, 0.3),
    (5, 0.25),
    (6, 0.2),
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

fn lookup<V: Copy>(table: &[(usize, V)], key: usize) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Power multiplier for an all-win lineup of `active` picks, 0 if unlisted.
pub fn power_multiplier(active: usize) -> f64 {
    lookup(POWER_PLAY_PAYOUTS, active).unwrap_or(0.0)
}

/// Flex multiplier for `wins` out of `active`, 0 if the tier or win count is unlisted.
pub fn flex_multiplier(active: usize, wins: usize) -> f64 {
    lookup(FLEX_PLAY_PAYOUTS, active)
        .and_then(|tier| lookup(tier, wins))
        .unwrap_or(0.0)
}

/// Demon boost per leg for a lineup of `active` picks, 1 if unlisted.
pub fn demon_boost(active: usize) -> f64 {
    lookup(DEMON_MULTIPLIER_BOOST, active).unwrap_or(1.0)
}

/// Goblin reduction factor per leg for a lineup of `active` picks, 1 if unlisted.
pub fn goblin_reduction(active: usize) -> f64 {
    lookup(GOBLIN_MULTIPLIER_REDUCTION, active).unwrap_or(1.0)
}
