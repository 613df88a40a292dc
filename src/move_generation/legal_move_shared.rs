//! Helpers shared by the per-piece generators.

use crate::game_state::chess_types::{Direction, Piece, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_scan::Pin;
use crate::moves::chess_move::Move;

/// The pin axis constraining `from`, if any.
#[inline]
pub fn pin_direction(pins: &[Pin], from: Square) -> Option<Direction> {
    pins.iter()
        .find(|pin| pin.square == from)
        .map(|pin| pin.direction)
}

/// A pinned piece may only move on its pin axis, in either sign.
#[inline]
pub fn pin_allows(pin: Option<Direction>, direction: Direction) -> bool {
    pin.map_or(true, |axis| axis.same_axis(direction))
}

/// Slide `piece` along each direction until the board edge, an own piece
/// (stop, excluded), or an enemy piece (capture, then stop).
pub fn slider_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    pins: &[Pin],
    out: &mut Vec<Move>,
) {
    let pin = pin_direction(pins, from);

    for direction in directions {
        if !pin_allows(pin, *direction) {
            continue;
        }

        for distance in 1..8 {
            let Some(to) = from.offset(
                direction.d_row * distance,
                direction.d_col * distance,
            ) else {
                break;
            };

            match game_state.board.piece_at(to) {
                None => out.push(Move::quiet(from, to, piece)),
                Some(occupant) if occupant.color != piece.color => {
                    out.push(Move::capture(from, to, piece, occupant));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
