//! Render configuration: which characters stand for each player and for
//! empty cells.

use crate::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Characters used when rendering a board.
///
/// Loaded from TOML, any missing field falls back to its default:
///
/// ```toml
/// player_o = "O"
/// player_x = "X"
/// empty = "."
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawSymbols")]
pub struct Symbols {
    /// Symbol for player 0.
    player_o: char,

    /// Symbol for player 1.
    player_x: char,

    /// Placeholder for an empty cell.
    empty: char,
}

/// Symbols as written in a file, before the distinctness check.
#[derive(Debug, Deserialize)]
struct RawSymbols {
    #[serde(default = "default_player_o")]
    player_o: char,

    #[serde(default = "default_player_x")]
    player_x: char,

    #[serde(default = "default_empty")]
    empty: char,
}

impl TryFrom<RawSymbols> for Symbols {
    type Error = ConfigError;

    fn try_from(raw: RawSymbols) -> Result<Self, Self::Error> {
        Self::new(raw.player_o, raw.player_x, raw.empty)
    }
}

fn default_player_o() -> char {
    'O'
}

fn default_player_x() -> char {
    'X'
}

fn default_empty() -> char {
    '.'
}

impl Symbols {
    /// Creates a symbol set, rejecting duplicates.
    #[track_caller]
    #[instrument]
    pub fn new(player_o: char, player_x: char, empty: char) -> Result<Self, ConfigError> {
        let symbols = Self {
            player_o,
            player_x,
            empty,
        };
        symbols.validate()?;
        Ok(symbols)
    }

    /// Loads symbols from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading symbols from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read symbols file: {}", e)))?;

        let symbols = Self::from_toml(&content)?;
        info!(
            player_o = %symbols.player_o,
            player_x = %symbols.player_x,
            empty = %symbols.empty,
            "Symbols loaded successfully"
        );
        Ok(symbols)
    }

    /// Parses symbols from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: RawSymbols = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse symbols: {}", e)))?;
        Self::try_from(raw)
    }

    /// Returns the symbol for a cell held by `player`.
    pub fn for_player(&self, player: Player) -> char {
        match player {
            Player::O => self.player_o,
            Player::X => self.player_x,
        }
    }

    /// Returns the symbol for a cell, empty or not.
    pub fn for_cell(&self, occupant: Option<Player>) -> char {
        occupant.map_or(self.empty, |player| self.for_player(player))
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.player_o == self.player_x
            || self.player_o == self.empty
            || self.player_x == self.empty
        {
            return Err(ConfigError::new(format!(
                "Symbols must be distinct, got '{}', '{}', '{}'",
                self.player_o, self.player_x, self.empty
            )));
        }
        Ok(())
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            player_o: default_player_o(),
            player_x: default_player_x(),
            empty: default_empty(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let symbols = Symbols::default();
        assert_eq!(*symbols.player_o(), 'O');
        assert_eq!(*symbols.player_x(), 'X');
        assert_eq!(*symbols.empty(), '.');
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let symbols = Symbols::from_toml("empty = \"-\"").unwrap();
        assert_eq!(symbols, Symbols::new('O', 'X', '-').unwrap());
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let err = Symbols::new('X', 'X', '.').unwrap_err();
        assert!(err.message.contains("distinct"));
        assert!(Symbols::from_toml("player_o = \".\"").is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(toml::from_str::<Symbols>("player_o = \"X\"").is_err());
        assert!(toml::from_str::<Symbols>("empty = \"O\"").is_err());

        let symbols = toml::from_str::<Symbols>("player_x = \"+\"").unwrap();
        assert_eq!(symbols, Symbols::new('O', '+', '.').unwrap());
    }

    #[test]
    fn test_serialize_round_trip() {
        let symbols = Symbols::new('a', 'b', '_').unwrap();
        let text = toml::to_string(&symbols).unwrap();
        assert_eq!(Symbols::from_toml(&text).unwrap(), symbols);
    }

    #[test]
    fn test_multi_char_symbol_rejected() {
        let err = Symbols::from_toml("player_x = \"XX\"").unwrap_err();
        assert!(err.message.contains("Failed to parse"));
    }

    #[test]
    fn test_for_cell() {
        let symbols = Symbols::default();
        assert_eq!(symbols.for_cell(None), '.');
        assert_eq!(symbols.for_cell(Some(Player::O)), 'O');
        assert_eq!(symbols.for_cell(Some(Player::X)), 'X');
    }
}
