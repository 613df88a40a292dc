//! GameState-to-FEN generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_text;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = game_state
        .en_passant_target
        .map(square_to_text)
        .unwrap_or_else(|| "-".to_owned());

    // The clocks are reconstructed from the recorded history, counted from
    // whatever position the game was loaded at.
    let halfmove_clock = game_state
        .undo_stack
        .iter()
        .rev()
        .take_while(|record| {
            record.mv.captured.is_none() && record.mv.piece.kind != PieceKind::Pawn
        })
        .count();
    let fullmove_number = game_state.undo_stack.len() / 2 + 1;

    format!(
        "{} {} {} {} {} {}",
        board, side_to_move, castling, en_passant, halfmove_clock, fullmove_number
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            if let Some(piece) = board.piece_at(Square::new(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights.contains(CastlingRights::WHITE_KINGSIDE) {
        out.push('K');
    }
    if rights.contains(CastlingRights::WHITE_QUEENSIDE) {
        out.push('Q');
    }
    if rights.contains(CastlingRights::BLACK_KINGSIDE) {
        out.push('k');
    }
    if rights.contains(CastlingRights::BLACK_QUEENSIDE) {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
