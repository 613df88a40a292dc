//! FEN-to-GameState parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string:
//! board contents, side to move, castling rights, en-passant target, and the
//! cached king squares.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_from_text;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing side to move".to_owned()))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing castling rights".to_owned()))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing en-passant square".to_owned()))?;

    // Halfmove clock and fullmove number are validated but not modeled.
    for clock_part in [parts.next(), parts.next()].into_iter().flatten() {
        clock_part
            .parse::<u16>()
            .map_err(|_| ChessError::InvalidFen(format!("invalid move counter: {clock_part}")))?;
    }
    if parts.next().is_some() {
        return Err(ChessError::InvalidFen("extra trailing fields".to_owned()));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part)?;

    let white_king = board
        .king_square(Color::White)
        .ok_or_else(|| ChessError::InvalidFen("no white king on the board".to_owned()))?;
    let black_king = board
        .king_square(Color::Black)
        .ok_or_else(|| ChessError::InvalidFen("no black king on the board".to_owned()))?;

    Ok(GameState {
        board,
        side_to_move,
        kings: [white_king, black_king],
        castling_rights,
        en_passant_target,
        undo_stack: Vec::new(),
        checkmate: false,
        stalemate: false,
    })
}

fn parse_board(board_part: &str) -> Result<Board, ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();

    for (row, rank_text) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_text.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as u8;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| ChessError::InvalidFen(format!("invalid piece character '{ch}'")))?;
            if col >= 8 {
                return Err(ChessError::InvalidFen(
                    "board rank has too many files".to_owned(),
                ));
            }
            board.set(Square::new(row as u8, col), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFen(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessError> {
    if castling_part == "-" {
        return Ok(CastlingRights::none());
    }

    let mut rights = CastlingRights::none();
    for ch in castling_part.chars() {
        match ch {
            'K' => rights.grant(CastlingRights::WHITE_KINGSIDE),
            'Q' => rights.grant(CastlingRights::WHITE_QUEENSIDE),
            'k' => rights.grant(CastlingRights::BLACK_KINGSIDE),
            'q' => rights.grant(CastlingRights::BLACK_QUEENSIDE),
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessError> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    Ok(Some(square_from_text(en_passant_part)?))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
