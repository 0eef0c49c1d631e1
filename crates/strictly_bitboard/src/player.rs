//! The two players.

use crate::{InvalidOperation, InvalidOperationKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game, identified by index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player 0, drawn as `O` by default.
    #[display("O")]
    O,
    /// Player 1, drawn as `X` by default.
    #[display("X")]
    X,
}

impl Player {
    /// Both players in index order.
    pub const ALL: [Player; 2] = [Player::O, Player::X];

    /// Returns the player's index (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Player::O => 0,
            Player::X => 1,
        }
    }

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }
}

impl TryFrom<i64> for Player {
    type Error = InvalidOperation;

    #[track_caller]
    #[instrument]
    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Player::O),
            1 => Ok(Player::X),
            other => Err(InvalidOperation::new(InvalidOperationKind::UnknownPlayer(
                other,
            ))),
        }
    }
}
