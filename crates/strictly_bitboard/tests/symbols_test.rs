//! Tests for loading render symbols from TOML files.

use std::io::Write;

use tempfile::NamedTempFile;

use strictly_bitboard::{Board, Player, Symbols};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config("player_o = \"@\"\nplayer_x = \"#\"\nempty = \"_\"\n");
    let symbols = Symbols::from_file(file.path()).expect("Load failed");

    let mut board = Board::new();
    board.mark(0, 0, Player::O).expect("Mark failed");
    board.mark(2, 2, Player::X).expect("Mark failed");

    assert_eq!(
        board.render_with(&symbols),
        "| @ | _ | _ |\n| _ | _ | _ |\n| _ | _ | # |\n"
    );
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = write_config("");
    let symbols = Symbols::from_file(file.path()).expect("Load failed");
    assert_eq!(symbols, Symbols::default());
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = Symbols::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read"), "{}", err);
}

#[test]
fn test_invalid_config_fails() {
    let file = write_config("player_o = \"X\"\n");
    let err = Symbols::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("distinct"), "{}", err);
}
