//! Rook move generation: the four orthogonal slides.

use crate::game_state::chess_types::{Direction, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_scan::Pin;
use crate::move_generation::legal_move_shared::slider_moves;
use crate::moves::chess_move::Move;

pub const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, 0),
    Direction::new(1, 0),
    Direction::new(0, -1),
    Direction::new(0, 1),
];

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    pins: &[Pin],
    out: &mut Vec<Move>,
) {
    let Some(rook) = game_state.board.piece_at(from) else {
        return;
    };
    slider_moves(game_state, from, rook, &ROOK_DIRECTIONS, pins, out);
}
