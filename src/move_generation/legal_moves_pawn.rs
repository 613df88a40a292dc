//! Pawn move generation.
//!
//! Forward steps, the double step from the home row, diagonal captures, and
//! en-passant capture, each constrained to the pin axis when the pawn shields
//! its king. A move reaching the opponent's back row is marked
//! promotion-eligible; choosing the replacement piece is left to the caller.

use crate::game_state::chess_rules::{BLACK_BACK_ROW, BLACK_PAWN_ROW, WHITE_BACK_ROW, WHITE_PAWN_ROW};
use crate::game_state::chess_types::{Color, Direction, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_scan::{is_square_attacked, Pin};
use crate::move_generation::legal_move_shared::{pin_allows, pin_direction};
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    pins: &[Pin],
    out: &mut Vec<Move>,
) {
    let Some(pawn) = game_state.board.piece_at(from) else {
        return;
    };
    let color = pawn.color;
    let forward = color.forward();
    let pin = pin_direction(pins, from);

    let (home_row, promotion_row) = match color {
        Color::White => (WHITE_PAWN_ROW, BLACK_BACK_ROW),
        Color::Black => (BLACK_PAWN_ROW, WHITE_BACK_ROW),
    };

    // Forward steps.
    if pin_allows(pin, Direction::new(forward, 0)) {
        if let Some(one) = from.offset(forward, 0) {
            if game_state.board.piece_at(one).is_none() {
                push_pawn_move(Move::quiet(from, one, pawn), promotion_row, out);

                if from.row == home_row {
                    if let Some(two) = one.offset(forward, 0) {
                        if game_state.board.piece_at(two).is_none() {
                            out.push(Move::quiet(from, two, pawn));
                        }
                    }
                }
            }
        }
    }

    // Diagonal captures and en passant.
    for d_col in [-1i8, 1i8] {
        let direction = Direction::new(forward, d_col);
        if !pin_allows(pin, direction) {
            continue;
        }
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };

        match game_state.board.piece_at(to) {
            Some(occupant) if occupant.color != color => {
                push_pawn_move(Move::capture(from, to, pawn, occupant), promotion_row, out);
            }
            None if game_state.en_passant_target == Some(to) => {
                let victim_square = Square::new(from.row, to.col);
                let Some(victim) = game_state.board.piece_at(victim_square) else {
                    continue;
                };
                if en_passant_is_safe(game_state, from, to, victim_square) {
                    out.push(Move::en_passant(from, to, pawn, victim));
                }
            }
            _ => {}
        }
    }
}

#[inline]
fn push_pawn_move(mv: Move, promotion_row: u8, out: &mut Vec<Move>) {
    if mv.to.row == promotion_row {
        out.push(mv.marked_promotion());
    } else {
        out.push(mv);
    }
}

/// En passant removes a pawn that is not on the destination square, which can
/// uncover an attack along the shared row that neither the pin scan nor the
/// check filter models. Replay the capture on a scratch board and reject it
/// if the king ends up attacked.
fn en_passant_is_safe(
    game_state: &GameState,
    from: Square,
    to: Square,
    victim_square: Square,
) -> bool {
    let color = game_state.side_to_move;
    let mut probe = game_state.board;

    let pawn = probe.take(from);
    probe.set(victim_square, None);
    probe.set(to, pawn);

    !is_square_attacked(&probe, game_state.king_square(color), color.opposite())
}
