// Pick classification: split a lineup into active (win/loss) and voided legs.

use crate::pick::Pick;

/// Tally of a lineup by settlement status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickCounts {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub pushes: usize,
}

impl PickCounts {
    /// Picks that carry no status at all. 0 if the counts are inconsistent.
    pub fn ungraded(&self) -> usize {
        self.total
            .saturating_sub(self.wins)
            .saturating_sub(self.losses)
            .saturating_sub(self.pushes)
    }

    /// Wins plus losses: the size of the lineup after pushes are removed.
    pub fn active(&self) -> usize {
        self.wins + self.losses
    }
}

/// A lineup partitioned into its active picks and status counts.
#[derive(Debug, Clone)]
pub struct Classified<'a> {
    /// Picks graded WIN or LOSS, in their original relative order.
    pub active: Vec<&'a Pick>,
    pub counts: PickCounts,
}

/// Partition `picks` into active legs and status counts.
///
/// Ungraded picks count toward `total` only. They are never active, so
/// `active.len() == counts.wins + counts.losses` always holds.
pub fn classify(picks: &[Pick]) -> Classified<'_> {
    let mut counts = PickCounts {
        total: picks.len(),
        ..PickCounts::default()
    };
    let mut active = Vec::with_capacity(picks.len());

    for pick in picks {
        if pick.is_win() {
            counts.wins += 1;
            active.push(pick);
        } else if pick.is_loss() {
            counts.losses += 1;
            active.push(pick);
        } else if pick.is_push() {
            counts.pushes += 1;
        }
    }

    Classified { active, counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pick::{PickStatus, Selection};

    fn pick(id: &str, status: Option<PickStatus>) -> Pick {
        let p = Pick::new(
            id,
            format!("p{id}"),
            format!("Player {id}"),
            "Points",
            Selection::More,
            20.5,
        );
        match status {
            Some(s) => p.with_status(s),
            None => p,
        }
    }

    #[test]
    fn splits_pushes_out_of_active_set() {
        let picks = vec![
            pick("1", Some(PickStatus::Win)),
            pick("2", Some(PickStatus::Push)),
            pick("3", Some(PickStatus::Loss)),
            pick("4", Some(PickStatus::Win)),
        ];
        let classified = classify(&picks);
        assert_eq!(classified.counts.total, 4);
        assert_eq!(classified.counts.wins, 2);
        assert_eq!(classified.counts.losses, 1);
        assert_eq!(classified.counts.pushes, 1);
        assert_eq!(classified.counts.active(), 3);
        let ids: Vec<&str> = classified.active.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn all_pushes_leave_nothing_active() {
        let picks = vec![
            pick("1", Some(PickStatus::Push)),
            pick("2", Some(PickStatus::Push)),
        ];
        let classified = classify(&picks);
        assert!(classified.active.is_empty());
        assert_eq!(classified.counts.pushes, 2);
    }

    #[test]
    fn ungraded_pick_counts_toward_total_only() {
        let picks = vec![pick("1", Some(PickStatus::Win)), pick("2", None)];
        let classified = classify(&picks);
        assert_eq!(classified.counts.total, 2);
        assert_eq!(classified.counts.ungraded(), 1);
        assert_eq!(classified.active.len(), 1);
        assert_eq!(classified.active.len(), classified.counts.active());
    }

    #[test]
    fn inconsistent_counts_report_no_ungraded() {
        let counts = PickCounts {
            total: 1,
            wins: 2,
            losses: 0,
            pushes: 0,
        };
        assert_eq!(counts.ungraded(), 0);
        assert_eq!(counts.active(), 2);

        let counts = PickCounts {
            total: 3,
            wins: 1,
            losses: 1,
            pushes: 4,
        };
        assert_eq!(counts.ungraded(), 0);
    }

    #[test]
    fn empty_input() {
        let classified = classify(&[]);
        assert_eq!(classified.counts, PickCounts::default());
        assert!(classified.active.is_empty());
    }
}
