//! Error types for board operations.

use crate::Cell;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a board operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidOperationKind {
    /// Row or column is past the edge of the grid.
    #[display("cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Player index outside `{0, 1}`.
    #[display("no player with index {}", _0)]
    UnknownPlayer(i64),

    /// The cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Cell),
}

/// Invalid board operation with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid board operation: {} at {}:{}", kind, file, line)]
pub struct InvalidOperation {
    /// What was wrong with the request.
    pub kind: InvalidOperationKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidOperation {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: InvalidOperationKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the reason for the rejection.
    pub fn kind(&self) -> InvalidOperationKind {
        self.kind
    }
}

impl PartialEq for InvalidOperation {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for InvalidOperation {}
