use crate::game_state::chess_types::{CastlingRights, Square};
use crate::moves::chess_move::Move;

/// Single reversible record for `apply_move` / `undo_last_move`.
///
/// The move itself carries the captured piece, so restoring the prior rights
/// and en-passant target is enough to undo in one step.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
}
