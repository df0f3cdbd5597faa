//! Helpers shared by the test modules.

use crate::boards::Board;
use crate::pieces::Piece;
use crate::squares::{Square, SIZE};

/// Builds a board from ten rows of piece glyphs, top row first. Every
/// square is overwritten; the turn stays with White and the history
/// stays empty.
pub fn board_from_layout(layout: &str) -> Board {
    let mut board = Board::new();
    let rows: Vec<&str> = layout.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(rows.len(), SIZE as usize, "layout must have {} rows", SIZE);

    for (i, line) in rows.iter().enumerate() {
        let row = SIZE - 1 - i as u8;
        let glyphs: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(glyphs.len(), SIZE as usize, "bad row {:?}", line);
        for (col, token) in glyphs.iter().enumerate() {
            let mut chars = token.chars();
            let glyph = chars.next().unwrap();
            assert!(chars.next().is_none(), "bad glyph {:?}", token);
            let piece =
                Piece::from_glyph(glyph).unwrap_or_else(|| panic!("bad glyph {:?}", token));
            board.put(piece, Square::sq(col as u8, row));
        }
    }
    board
}
