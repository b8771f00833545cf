// Library root: payout engine for Power/Flex prop lineups.
//
// The engine is pure: every public function is a deterministic function of
// its inputs, so the same code can price a lineup preview and settle it.

pub mod error;
pub mod format;
pub mod grading;
pub mod payout;
pub mod pick;

pub use error::{GradingError, PayoutError};
pub use payout::{calculate_payout, Entry, PayoutResult};
pub use pick::{Pick, PickModifier, PickStatus, PlayMode, Selection};
