//! King move generation.
//!
//! Adjacent steps onto squares an ally does not hold and the opponent does
//! not attack, plus castling. Step safety is a pure query with the origin
//! square treated as vacated; the king is never relocated to test a move.

use crate::game_state::chess_rules::{
    KING_HOME_COL, KINGSIDE_KING_TO_COL, KINGSIDE_ROOK_COL, QUEENSIDE_KING_TO_COL,
    QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::{CastlingRights, Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_scan::{
    is_king_step_safe, is_square_attacked, RAY_DIRECTIONS,
};
use crate::moves::chess_move::Move;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let Some(king) = game_state.board.piece_at(from) else {
        return;
    };

    for direction in RAY_DIRECTIONS {
        let Some(to) = from.offset(direction.d_row, direction.d_col) else {
            continue;
        };

        let occupant = game_state.board.piece_at(to);
        if occupant.is_some_and(|piece| piece.color == king.color) {
            continue;
        }
        if !is_king_step_safe(&game_state.board, from, to, king.color) {
            continue;
        }

        match occupant {
            Some(victim) => out.push(Move::capture(from, to, king, victim)),
            None => out.push(Move::quiet(from, to, king)),
        }
    }

    generate_castling_moves(game_state, from, out);
}

/// Castling needs the relevant right, empty squares between king and rook,
/// and an unattacked start, transit, and destination square for the king.
fn generate_castling_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let Some(king) = game_state.board.piece_at(from) else {
        return;
    };
    let enemy = king.color.opposite();
    let row = from.row;

    // No castling out of check, and only from the home square.
    if from.col != KING_HOME_COL || is_square_attacked(&game_state.board, from, enemy) {
        return;
    }

    if game_state
        .castling_rights
        .contains(CastlingRights::kingside_flag(king.color))
    {
        let empty = (KING_HOME_COL + 1..KINGSIDE_ROOK_COL).map(|col| Square::new(row, col));
        let safe = [
            Square::new(row, KING_HOME_COL + 1),
            Square::new(row, KINGSIDE_KING_TO_COL),
        ];
        if castle_path_is_clear(game_state, empty, &safe, enemy) {
            out.push(Move::castle(from, Square::new(row, KINGSIDE_KING_TO_COL), king));
        }
    }

    if game_state
        .castling_rights
        .contains(CastlingRights::queenside_flag(king.color))
    {
        let empty = (QUEENSIDE_ROOK_COL + 1..KING_HOME_COL).map(|col| Square::new(row, col));
        let safe = [
            Square::new(row, KING_HOME_COL - 1),
            Square::new(row, QUEENSIDE_KING_TO_COL),
        ];
        if castle_path_is_clear(game_state, empty, &safe, enemy) {
            out.push(Move::castle(from, Square::new(row, QUEENSIDE_KING_TO_COL), king));
        }
    }
}

fn castle_path_is_clear(
    game_state: &GameState,
    mut empty: impl Iterator<Item = Square>,
    safe: &[Square],
    enemy: Color,
) -> bool {
    empty.all(|square| game_state.board.piece_at(square).is_none())
        && safe
            .iter()
            .all(|square| !is_square_attacked(&game_state.board, *square, enemy))
}
