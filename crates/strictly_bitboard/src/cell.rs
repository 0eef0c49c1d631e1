//! Cell coordinates and their bit positions.

use crate::masks::{BOARD_SIZE, N_CELLS};
use crate::{InvalidOperation, InvalidOperationKind};
use tracing::{instrument, warn};

/// A cell on the 3x3 grid.
///
/// Always in bounds: the only ways to build one are [`Cell::new`] and
/// [`Cell::from_index`], which both check the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("({}, {})", row, col)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// All nine cells in row-major order.
    pub const ALL: [Cell; N_CELLS] = {
        let mut cells = [Cell { row: 0, col: 0 }; N_CELLS];
        let mut i = 0;
        while i != N_CELLS {
            cells[i] = Cell {
                row: i / BOARD_SIZE,
                col: i % BOARD_SIZE,
            };
            i += 1;
        }
        cells
    };

    /// Creates a cell, rejecting coordinates past the edge of the grid.
    #[track_caller]
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, InvalidOperation> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            warn!(row, col, "Cell out of bounds");
            return Err(InvalidOperation::new(InvalidOperationKind::OutOfBounds {
                row,
                col,
            }));
        }
        Ok(Self { row, col })
    }

    /// Creates a cell from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the row (0-2, top to bottom).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column (0-2, left to right).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the row-major index (0-8).
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Returns the single-bit mask for this cell.
    ///
    /// The top-left cell is the most significant of the nine bits.
    pub fn bit(&self) -> u16 {
        1 << (N_CELLS - 1 - self.index())
    }
}
