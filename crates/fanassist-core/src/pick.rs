// Pick representation: one leg of a lineup, plus the play mode enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PayoutError;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Direction the user picked relative to the projected line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    More,
    Less,
}

impl Selection {
    pub fn display_str(&self) -> &'static str {
        match self {
            Selection::More => "more",
            Selection::Less => "less",
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Settlement outcome of a single pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickStatus {
    Win,
    Loss,
    /// The stat landed exactly on the line. The leg is voided.
    Push,
}

impl PickStatus {
    pub fn display_str(&self) -> &'static str {
        match self {
            PickStatus::Win => "win",
            PickStatus::Loss => "loss",
            PickStatus::Push => "push",
        }
    }

    /// Whether this outcome counts toward the active (win/loss) set.
    pub fn is_active(&self) -> bool {
        matches!(self, PickStatus::Win | PickStatus::Loss)
    }
}

impl fmt::Display for PickStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Risk/reward adjustment fixed when the pick is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickModifier {
    /// Harder line, boosted payout.
    Demon,
    /// Easier line, reduced payout.
    Goblin,
}

impl PickModifier {
    pub fn display_str(&self) -> &'static str {
        match self {
            PickModifier::Demon => "demon",
            PickModifier::Goblin => "goblin",
        }
    }
}

impl fmt::Display for PickModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Payout mode chosen once per lineup submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Every active pick must win.
    Power,
    /// Partial credit for lineups that clear a per-tier win count.
    Flex,
}

impl PlayMode {
    /// Parse the wire literal (`"power"` / `"flex"`), case-insensitively.
    pub fn from_str_mode(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "power" => Some(PlayMode::Power),
            "flex" => Some(PlayMode::Flex),
            _ => None,
        }
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            PlayMode::Power => "power",
            PlayMode::Flex => "flex",
        }
    }

    /// Human-facing label ("Power Play" / "Flex Play").
    pub fn label(&self) -> &'static str {
        match self {
            PlayMode::Power => "Power Play",
            PlayMode::Flex => "Flex Play",
        }
    }
}

impl FromStr for PlayMode {
    type Err = PayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayMode::from_str_mode(s).ok_or_else(|| PayoutError::UnknownPlayMode(s.to_string()))
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

// ---------------------------------------------------------------------------
// Pick
// ---------------------------------------------------------------------------

/// A single leg of a lineup.
///
/// Field names serialize in camelCase to match the settlement backend's
/// pick shape (`playerId`, `statValue`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    pub id: String,
    pub player_id: String,
    pub player_name: String,
    /// Stat category, e.g. "Points" or "Rebounds".
    pub category: String,
    pub selection: Selection,
    /// Projected line for the category.
    pub stat_value: f64,
    /// Outcome after settlement. `None` means the pick has not been graded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PickStatus>,
    #[serde(default)]
    pub modifier: Option<PickModifier>,
}

impl Pick {
    /// Create an ungraded, unmodified pick.
    pub fn new(
        id: impl Into<String>,
        player_id: impl Into<String>,
        player_name: impl Into<String>,
        category: impl Into<String>,
        selection: Selection,
        stat_value: f64,
    ) -> Self {
        Pick {
            id: id.into(),
            player_id: player_id.into(),
            player_name: player_name.into(),
            category: category.into(),
            selection,
            stat_value,
            status: None,
            modifier: None,
        }
    }

    pub fn with_status(mut self, status: PickStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_modifier(mut self, modifier: PickModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn is_win(&self) -> bool {
        self.status == Some(PickStatus::Win)
    }

    pub fn is_loss(&self) -> bool {
        self.status == Some(PickStatus::Loss)
    }

    pub fn is_push(&self) -> bool {
        self.status == Some(PickStatus::Push)
    }
}
