//! Move text rendering.
//!
//! Two formats: the abbreviated algebraic form shown to players (`Nxf3`,
//! `exd5`) and the long algebraic form used in CLI output and PGN movetext
//! (`e2e4`, `a7a8q`).

use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::square_to_text;

/// Abbreviated algebraic text: piece letter (omitted for pawns), `x` when
/// capturing, then the destination square. A pawn capture is prefixed with
/// its origin file instead of a piece letter. Castling renders as the king
/// move it is.
pub fn notation(mv: &Move) -> String {
    let mut out = String::new();

    match mv.piece.kind {
        PieceKind::Pawn => {
            if mv.is_capture() {
                out.push(mv.from.file_char());
            }
        }
        kind => out.push(piece_letter(kind)),
    }

    if mv.is_capture() {
        out.push('x');
    }
    out.push_str(&square_to_text(mv.to));

    out
}

/// Long algebraic text: origin square, destination square, and the promotion
/// piece letter when the move promotes (`q` for the Queen default when no
/// choice was recorded).
pub fn long_algebraic(mv: &Move) -> String {
    let mut out = String::new();
    out.push_str(&square_to_text(mv.from));
    out.push_str(&square_to_text(mv.to));

    if mv.is_promotion {
        out.push(promotion_letter(mv.promotion.unwrap_or(PieceKind::Queen)));
    }

    out
}

fn piece_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Knight => 'N',
        PieceKind::Bishop => 'B',
        PieceKind::Rook => 'R',
        PieceKind::Queen => 'Q',
        PieceKind::King => 'K',
        PieceKind::Pawn => unreachable!("pawns carry no piece letter"),
    }
}

fn promotion_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        _ => 'q',
    }
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic, notation};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::moves::chess_move::Move;

    fn square(text: &str) -> Square {
        crate::utils::algebraic::square_from_text(text).expect("test square should parse")
    }

    #[test]
    fn pawn_push_is_just_the_destination() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let mv = Move::quiet(square("e2"), square("e4"), pawn);
        assert_eq!(notation(&mv), "e4");
        assert_eq!(long_algebraic(&mv), "e2e4");
    }

    #[test]
    fn pawn_capture_is_prefixed_with_the_origin_file() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let victim = Piece::new(Color::Black, PieceKind::Pawn);
        let mv = Move::capture(square("e4"), square("d5"), pawn, victim);
        assert_eq!(notation(&mv), "exd5");
    }

    #[test]
    fn piece_moves_carry_their_letter_and_capture_marker() {
        let knight = Piece::new(Color::White, PieceKind::Knight);
        let quiet = Move::quiet(square("g1"), square("f3"), knight);
        assert_eq!(notation(&quiet), "Nf3");

        let victim = Piece::new(Color::Black, PieceKind::Bishop);
        let capture = Move::capture(square("f3"), square("e5"), knight, victim);
        assert_eq!(notation(&capture), "Nxe5");
    }

    #[test]
    fn castling_renders_as_the_king_move() {
        let king = Piece::new(Color::White, PieceKind::King);
        let mv = Move::castle(square("e1"), square("g1"), king);
        assert_eq!(notation(&mv), "Kg1");
        assert_eq!(long_algebraic(&mv), "e1g1");
    }

    #[test]
    fn promotion_suffix_reflects_the_chosen_piece() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let eligible = Move::quiet(square("a7"), square("a8"), pawn).marked_promotion();
        assert_eq!(long_algebraic(&eligible), "a7a8q");
        assert_eq!(
            long_algebraic(&eligible.promoting_to(PieceKind::Knight)),
            "a7a8n"
        );
    }
}
