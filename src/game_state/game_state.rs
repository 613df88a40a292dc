//! Core board-state representation.
//!
//! `GameState` is the central model for the engine: the mailbox board plus
//! side to move, cached king squares, castling rights, the en-passant target,
//! and the undo stack driving make/unmake workflows for search and interactive
//! play. Applying a move performs no legality check; callers feed it moves
//! drawn from `generate_legal_moves`.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    BLACK_BACK_ROW, KINGSIDE_KING_TO_COL, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL,
    STARTING_POSITION_FEN, WHITE_BACK_ROW,
};
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::attack_scan::is_square_attacked;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Column the rook lands on after castling kingside (file f).
const KINGSIDE_ROOK_TO_COL: u8 = 5;
/// Column the rook lands on after castling queenside (file d).
const QUEENSIDE_ROOK_TO_COL: u8 = 3;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    /// Cached king squares, indexed by `Color::index()`.
    pub kings: [Square; 2],
    pub castling_rights: CastlingRights,
    /// Square a pawn skipped on the immediately preceding ply, if any.
    pub en_passant_target: Option<Square>,
    pub undo_stack: Vec<UndoState>,

    /// Terminal flags, current as of the last `generate_legal_moves` call and
    /// reset by apply/undo.
    pub checkmate: bool,
    pub stalemate: bool,
}

impl GameState {
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// True when the side to move's king is currently attacked.
    pub fn is_in_check(&self) -> bool {
        is_square_attacked(
            &self.board,
            self.king_square(self.side_to_move),
            self.side_to_move.opposite(),
        )
    }

    /// True when the last legal-move query found no moves while in check.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// True when the last legal-move query found no moves out of check.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// All moves legal for the side to move. Also refreshes the checkmate and
    /// stalemate flags.
    pub fn generate_legal_moves(&mut self) -> Vec<Move> {
        let (moves, in_check) = legal_moves(self);
        self.checkmate = moves.is_empty() && in_check;
        self.stalemate = moves.is_empty() && !in_check;
        moves
    }

    /// Match a caller-proposed square pair against the current legal moves.
    ///
    /// Returns the canonical generated move (carrying capture and flag data)
    /// or `InvalidMoveRequested` without touching the position. A promotion
    /// match comes back eligibility-marked; select a replacement with
    /// [`Move::promoting_to`] before applying, or let apply default to Queen.
    pub fn resolve_move(&mut self, from: Square, to: Square) -> Result<Move, ChessError> {
        self.generate_legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
            .ok_or(ChessError::InvalidMoveRequested { from, to })
    }

    /// Apply `mv` to the position. No legality check is performed here.
    pub fn apply_move(&mut self, mv: Move) {
        let mover = self.side_to_move;

        self.undo_stack.push(UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
        });

        self.board.take(mv.from);
        let placed = if mv.is_promotion {
            Piece::new(mover, mv.promotion.unwrap_or(PieceKind::Queen))
        } else {
            mv.piece
        };
        if mv.is_en_passant {
            // The passed pawn sits beside the origin, not on the destination.
            self.board.set(Square::new(mv.from.row, mv.to.col), None);
        }
        self.board.set(mv.to, Some(placed));

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.board.take(rook_from);
            self.board.set(rook_to, rook);
        }

        if mv.piece.kind == PieceKind::King {
            self.kings[mover.index()] = mv.to;
            self.castling_rights
                .revoke(CastlingRights::both_flags(mover));
        }
        self.revoke_rights_for_corner_squares(mv);

        self.en_passant_target = if mv.piece.kind == PieceKind::Pawn
            && mv.from.row.abs_diff(mv.to.row) == 2
        {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
        } else {
            None
        };

        self.side_to_move = mover.opposite();
        self.checkmate = false;
        self.stalemate = false;
    }

    /// Undo the most recent move, restoring the exact prior position. A call
    /// with no history is a no-op.
    pub fn undo_last_move(&mut self) {
        let Some(record) = self.undo_stack.pop() else {
            return;
        };
        let mv = record.mv;
        let mover = self.side_to_move.opposite();

        // The origin gets the originally moved piece back; a promoted pawn
        // reverts to a pawn because `mv.piece` still holds it.
        self.board.set(mv.from, Some(mv.piece));
        if mv.is_en_passant {
            self.board.set(mv.to, None);
            self.board
                .set(Square::new(mv.from.row, mv.to.col), mv.captured);
        } else {
            self.board.set(mv.to, mv.captured);
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.board.take(rook_to);
            self.board.set(rook_from, rook);
        }

        if mv.piece.kind == PieceKind::King {
            self.kings[mover.index()] = mv.from;
        }

        self.castling_rights = record.prev_castling_rights;
        self.en_passant_target = record.prev_en_passant_target;
        self.side_to_move = mover;
        self.checkmate = false;
        self.stalemate = false;
    }

    /// Revoke the right tied to any home corner square the move disturbs,
    /// whether the rook moved away or was captured there. Touching a corner
    /// the rook already left is harmless; the right is long gone.
    fn revoke_rights_for_corner_squares(&mut self, mv: Move) {
        for color in [Color::White, Color::Black] {
            let back_row = match color {
                Color::White => WHITE_BACK_ROW,
                Color::Black => BLACK_BACK_ROW,
            };
            let kingside_corner = Square::new(back_row, KINGSIDE_ROOK_COL);
            let queenside_corner = Square::new(back_row, QUEENSIDE_ROOK_COL);

            if mv.from == kingside_corner || mv.to == kingside_corner {
                self.castling_rights
                    .revoke(CastlingRights::kingside_flag(color));
            }
            if mv.from == queenside_corner || mv.to == queenside_corner {
                self.castling_rights
                    .revoke(CastlingRights::queenside_flag(color));
            }
        }
    }
}

/// Origin and destination of the rook in a castle move. The rook lands on the
/// square the king passed over.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.from.row;
    if mv.to.col == KINGSIDE_KING_TO_COL {
        (
            Square::new(row, KINGSIDE_ROOK_COL),
            Square::new(row, KINGSIDE_ROOK_TO_COL),
        )
    } else {
        (
            Square::new(row, QUEENSIDE_ROOK_COL),
            Square::new(row, QUEENSIDE_ROOK_TO_COL),
        )
    }
}
