//! Terminal-state reporting.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game is ongoing.
    InProgress,
    /// A player owns every cell of some line.
    Win(Player),
    /// Every cell is filled and nobody completed a line.
    Draw,
}

impl GameOutcome {
    /// Returns true for a win or a draw.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "{} wins", player),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
