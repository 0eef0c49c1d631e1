//! Strictly Bitboard - tic-tac-toe board state on bitmasks
//!
//! Tracks which cells each of two players holds, detects wins and draws,
//! and renders a text view of the grid.
//!
//! # Architecture
//!
//! - **Board**: per-player 9-bit occupancy masks plus their union
//! - **Masks**: the eight winning lines, built at compile time
//! - **Symbols**: render configuration, loadable from TOML
//!
//! # Example
//!
//! ```
//! use strictly_bitboard::{Board, GameOutcome, Player};
//!
//! # fn example() -> Result<(), strictly_bitboard::InvalidOperation> {
//! let mut board = Board::new();
//! board.mark(0, 0, Player::O)?;
//! board.mark(0, 1, Player::O)?;
//! board.mark(0, 2, Player::O)?;
//! assert_eq!(board.outcome(), GameOutcome::Win(Player::O));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod error;
mod masks;
mod outcome;
mod player;
mod symbols;

pub use board::Board;
pub use cell::Cell;
pub use error::{InvalidOperation, InvalidOperationKind};
pub use masks::{BOARD_SIZE, FULL_MASK, N_CELLS, WIN_MASKS};
pub use outcome::GameOutcome;
pub use player::Player;
pub use symbols::{ConfigError, Symbols};
