//! Bitmask board state.

use crate::masks::{self, FULL_MASK};
use crate::{Cell, GameOutcome, InvalidOperation, InvalidOperationKind, Player, Symbols};
use tracing::{debug, instrument, warn};

/// 3x3 tic-tac-toe board stored as occupancy masks.
///
/// Each player owns a 9-bit mask; `occupied` is their union and is
/// recomputed after every mark. The player masks never overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    /// Per-player masks, indexed by [`Player::index`].
    players: [u16; 2],
    /// Union of both player masks.
    occupied: u16,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `player`'s mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperation`] if the cell is off the board or already
    /// occupied. The board is left unchanged.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn mark(&mut self, row: usize, col: usize, player: Player) -> Result<(), InvalidOperation> {
        let cell = Cell::new(row, col)?;
        self.mark_cell(cell, player)
    }

    /// Places `player`'s mark at `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperation`] if the cell is already occupied.
    #[track_caller]
    #[instrument(skip(self), fields(cell = %cell))]
    pub fn mark_cell(&mut self, cell: Cell, player: Player) -> Result<(), InvalidOperation> {
        if !self.is_empty(cell) {
            warn!(occupant = ?self.occupant(cell), "Cell already occupied");
            return Err(InvalidOperation::new(InvalidOperationKind::CellOccupied(
                cell,
            )));
        }

        self.players[player.index()] |= cell.bit();
        self.update();
        debug!(occupied = self.occupied, "Mark placed");
        Ok(())
    }

    fn update(&mut self) {
        self.occupied = self.players.iter().fold(0, |acc, mask| acc | mask);
    }

    /// Reports whether the game is won, drawn or still going.
    ///
    /// Players are checked in index order, so if both somehow hold a line
    /// player 0 is reported.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> GameOutcome {
        let winner = Player::ALL
            .into_iter()
            .find(|player| masks::contains_win(self.player_mask(*player)));

        let outcome = match winner {
            Some(player) => GameOutcome::Win(player),
            None if self.is_full() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        };
        debug!(%outcome, "Evaluated board");
        outcome
    }

    /// Returns the player holding `cell`, if any.
    pub fn occupant(&self, cell: Cell) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|player| self.player_mask(*player) & cell.bit() != 0)
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.occupied & cell.bit() == 0
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied == FULL_MASK
    }

    /// Returns the occupancy mask of one player.
    pub fn player_mask(&self, player: Player) -> u16 {
        self.players[player.index()]
    }

    /// Returns the union of both players' masks.
    pub fn occupied_mask(&self) -> u16 {
        self.occupied
    }

    /// Iterates the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL.into_iter().filter(|cell| self.is_empty(*cell))
    }

    /// Renders the board with the default symbols.
    pub fn render(&self) -> String {
        self.render_with(&Symbols::default())
    }

    /// Renders the board as three lines of `| a | b | c |`.
    pub fn render_with(&self, symbols: &Symbols) -> String {
        let mut result = String::new();
        for row in Cell::ALL.chunks(masks::BOARD_SIZE) {
            result.push('|');
            for cell in row {
                result.push(' ');
                result.push(symbols.for_cell(self.occupant(*cell)));
                result.push_str(" |");
            }
            result.push('\n');
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
