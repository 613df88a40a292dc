//! Knight move generation.
//!
//! The eight fixed offsets onto empty or enemy-occupied squares. A pinned
//! knight can never stay on its pin axis, so it contributes no moves at all.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_scan::{Pin, KNIGHT_OFFSETS};
use crate::move_generation::legal_move_shared::pin_direction;
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    pins: &[Pin],
    out: &mut Vec<Move>,
) {
    let Some(knight) = game_state.board.piece_at(from) else {
        return;
    };
    if pin_direction(pins, from).is_some() {
        return;
    }

    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match game_state.board.piece_at(to) {
            None => out.push(Move::quiet(from, to, knight)),
            Some(occupant) if occupant.color != knight.color => {
                out.push(Move::capture(from, to, knight, occupant));
            }
            Some(_) => {}
        }
    }
}
