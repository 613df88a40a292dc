//! Algebraic square conversions.
//!
//! Converts between human-readable coordinates (for example `e4`) and the
//! internal `Square` representation reused by FEN, PGN, and CLI components.

use crate::errors::ChessError;
use crate::game_state::chess_types::Square;

/// Convert algebraic text (for example: "e4") to a square.
#[inline]
pub fn square_from_text(text: &str) -> Result<Square, ChessError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to algebraic text (for example: "e4").
#[inline]
pub fn square_to_text(square: Square) -> String {
    format!("{}{}", square.file_char(), square.rank_char())
}

#[cfg(test)]
mod tests {
    use super::{square_from_text, square_to_text};
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_corner_and_center_squares() {
        assert_eq!(
            square_from_text("a1").expect("a1 should parse"),
            Square::new(7, 0)
        );
        assert_eq!(
            square_from_text("h8").expect("h8 should parse"),
            Square::new(0, 7)
        );
        assert_eq!(square_to_text(Square::new(4, 4)), "e4");
        assert_eq!(
            square_from_text(&square_to_text(Square::new(3, 2))).expect("round trip"),
            Square::new(3, 2)
        );
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert!(square_from_text("").is_err());
        assert!(square_from_text("e").is_err());
        assert!(square_from_text("e44").is_err());
        assert!(square_from_text("i4").is_err());
        assert!(square_from_text("e9").is_err());
    }
}
