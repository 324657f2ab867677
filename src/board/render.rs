use std::fmt;

use super::{Board, Square};

/// Console diagram: rank 8 at the top, Unicode glyphs, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for sq in (0..8).filter_map(|file| Square::new(rank, file)) {
                let glyph = self
                    .piece_at(sq)
                    .map_or('.', |(color, piece)| piece.glyph(color));
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_diagram() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ ");
        assert_eq!(lines[4], "4 . . . . . . . . ");
        assert_eq!(lines[7], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ ");
        assert_eq!(lines[8], "  a b c d e f g h");
    }
}
