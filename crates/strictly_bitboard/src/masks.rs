//! Compile-time occupancy masks.
//!
//! A board is stored as 9-bit masks. Cell `(row, col)` lives at bit
//! `8 - (row * 3 + col)`, so a mask reads MSB-first across the grid in
//! row-major order: `0b111_000_000` is the top row.

/// Width and height of the grid.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the grid.
pub const N_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Mask with every cell set.
pub const FULL_MASK: u16 = (1 << N_CELLS) - 1;

/// Winning lines as drawn on the grid, top row first.
const WIN_PATTERNS: [&str; 8] = [
    // Rows
    "111000000",
    "000111000",
    "000000111",
    // Columns
    "100100100",
    "010010010",
    "001001001",
    // Diagonals
    "100010001",
    "001010100",
];

/// The eight winning lines: three rows, three columns, two diagonals.
pub const WIN_MASKS: [u16; 8] = {
    let mut masks = [0; 8];
    let mut i = 0;
    while i != WIN_PATTERNS.len() {
        masks[i] = pattern_to_mask(WIN_PATTERNS[i]);
        i += 1;
    }
    masks
};

/// Parses a 9-character binary pattern into a mask.
///
/// Evaluated at compile time; a malformed pattern fails the build.
const fn pattern_to_mask(pattern: &str) -> u16 {
    let bytes = pattern.as_bytes();
    assert!(bytes.len() == N_CELLS, "pattern must cover every cell");

    let mut mask = 0;
    let mut i = 0;
    while i != bytes.len() {
        mask <<= 1;
        match bytes[i] {
            b'1' => mask |= 1,
            b'0' => {}
            _ => panic!("pattern may only contain '0' and '1'"),
        }
        i += 1;
    }
    mask
}

/// Returns true if `mask` covers every cell of at least one winning line.
pub fn contains_win(mask: u16) -> bool {
    WIN_MASKS.iter().any(|win| win & mask == *win)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_masks_match_literals() {
        assert_eq!(
            WIN_MASKS,
            [
                0b111_000_000,
                0b000_111_000,
                0b000_000_111,
                0b100_100_100,
                0b010_010_010,
                0b001_001_001,
                0b100_010_001,
                0b001_010_100,
            ]
        );
    }

    #[test]
    fn test_each_line_has_three_cells() {
        for mask in WIN_MASKS {
            assert_eq!(mask.count_ones(), 3, "line {:09b}", mask);
            assert_eq!(mask & !FULL_MASK, 0);
        }
    }

    #[test]
    fn test_full_mask() {
        assert_eq!(FULL_MASK, 0b111_111_111);
        assert!(contains_win(FULL_MASK));
    }

    #[test]
    fn test_partial_line_is_not_a_win() {
        assert!(!contains_win(0));
        assert!(!contains_win(0b110_000_000));
        // Corners only
        assert!(!contains_win(0b101_000_101));
    }

    #[test]
    fn test_line_plus_noise_is_a_win() {
        assert!(contains_win(0b010_111_100));
    }
}
