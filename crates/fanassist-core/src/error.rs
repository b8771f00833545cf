// Error types for payout calculation and pick grading.

use thiserror::Error;

/// Hard failures of the payout engine.
///
/// These are caller errors. Lineups that simply pay nothing (a Power loss,
/// too few active picks, an unlisted Flex tier) are not errors; they come
/// back as a `PayoutResult` with a zero multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayoutError {
    #[error("picks cannot be empty")]
    EmptyLineup,

    #[error("play mode must be \"power\" or \"flex\", got \"{0}\"")]
    UnknownPlayMode(String),

    #[error("pick `{id}` ({player_name} - {category}) has not been graded")]
    UngradedPick {
        id: String,
        player_name: String,
        category: String,
    },
}

/// Failures while grading picks against final stat lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradingError {
    #[error("no game result found for {player_name} - {category}")]
    MissingResult {
        player_name: String,
        category: String,
    },

    #[error("game not completed for {player_name}")]
    GameNotCompleted { player_name: String },
}
