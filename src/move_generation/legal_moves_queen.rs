//! Queen move generation: the union of rook and bishop slides.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_scan::Pin;
use crate::move_generation::legal_move_shared::slider_moves;
use crate::move_generation::legal_moves_bishop::BISHOP_DIRECTIONS;
use crate::move_generation::legal_moves_rook::ROOK_DIRECTIONS;
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    pins: &[Pin],
    out: &mut Vec<Move>,
) {
    let Some(queen) = game_state.board.piece_at(from) else {
        return;
    };
    slider_moves(game_state, from, queen, &ROOK_DIRECTIONS, pins, out);
    slider_moves(game_state, from, queen, &BISHOP_DIRECTIONS, pins, out);
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{GameState, Square};

    fn square(text: &str) -> Square {
        crate::utils::algebraic::square_from_text(text).expect("test square should parse")
    }

    #[test]
    fn central_queen_covers_both_axes() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves: Vec<_> = game
            .generate_legal_moves()
            .into_iter()
            .filter(|mv| mv.from == square("d4"))
            .collect();
        // 14 orthogonal plus 13 diagonal destinations from d4.
        assert_eq!(moves.len(), 27);
    }

    #[test]
    fn pinned_queen_still_slides_on_the_pin_axis() {
        // Enemy rook e8 pins the e4 queen; vertical moves survive,
        // horizontal and diagonal ones do not.
        let mut game =
            GameState::from_fen("4r2k/8/8/8/4Q3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves: Vec<_> = game
            .generate_legal_moves()
            .into_iter()
            .filter(|mv| mv.from == square("e4"))
            .collect();

        assert!(moves.iter().all(|mv| mv.to.col == square("e4").col));
        assert!(moves
            .iter()
            .any(|mv| mv.to == square("e8") && mv.is_capture()));
        assert_eq!(moves.len(), 6);
    }
}
