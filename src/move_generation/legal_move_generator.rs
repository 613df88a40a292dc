//! Full legal move generation pipeline.
//!
//! Orchestrates the king-centred pin/check scan, fans out to the per-piece
//! generators, and filters the result by check status: a single check
//! restricts non-king moves to the attacker's blocking set, a double check
//! leaves only king moves.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_scan::{scan_king_safety, Check, Pin};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Every legal move for the side to move, plus whether its king is currently
/// in check (so the caller can classify an empty list as mate or stalemate).
pub fn legal_moves(game_state: &GameState) -> (Vec<Move>, bool) {
    let side = game_state.side_to_move;
    let king = game_state.king_square(side);
    let safety = scan_king_safety(&game_state.board, king, side);

    let mut moves = Vec::with_capacity(48);
    generate_king_moves(game_state, king, &mut moves);

    match safety.checks.as_slice() {
        [] => generate_piece_moves(game_state, &safety.pins, &mut moves),
        [check] => {
            let mut candidates = Vec::with_capacity(48);
            generate_piece_moves(game_state, &safety.pins, &mut candidates);

            let blocking = blocking_squares(king, check);
            moves.extend(
                candidates
                    .into_iter()
                    .filter(|mv| resolves_check(mv, check, &blocking)),
            );
        }
        // Double check: no block or capture helps, only the king may move.
        _ => {}
    }

    (moves, safety.in_check())
}

fn generate_piece_moves(game_state: &GameState, pins: &[Pin], out: &mut Vec<Move>) {
    for (square, piece) in game_state.board.occupied() {
        if piece.color != game_state.side_to_move {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, square, pins, out),
            PieceKind::Knight => generate_knight_moves(game_state, square, pins, out),
            PieceKind::Bishop => generate_bishop_moves(game_state, square, pins, out),
            PieceKind::Rook => generate_rook_moves(game_state, square, pins, out),
            PieceKind::Queen => generate_queen_moves(game_state, square, pins, out),
            // King moves are generated up front, before the check filter.
            PieceKind::King => {}
        }
    }
}

/// Squares a non-king move may land on to resolve `check`: everything
/// strictly between king and a ray checker plus the checker itself, or only
/// the checker square for a knight.
fn blocking_squares(king: Square, check: &Check) -> Vec<Square> {
    match check {
        Check::Knight { square } => vec![*square],
        Check::Ray { square, direction } => {
            let mut blocking = Vec::with_capacity(7);
            for distance in 1..8 {
                let Some(step) = king.offset(
                    direction.d_row * distance,
                    direction.d_col * distance,
                ) else {
                    break;
                };
                blocking.push(step);
                if step == *square {
                    break;
                }
            }
            blocking
        }
    }
}

fn resolves_check(mv: &Move, check: &Check, blocking: &[Square]) -> bool {
    if blocking.contains(&mv.to) {
        return true;
    }
    // An en-passant capture removes the checking pawn from a square the move
    // does not land on.
    mv.is_en_passant && Square::new(mv.from.row, mv.to.col) == check.square()
}
