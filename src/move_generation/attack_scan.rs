//! Ray and knight attack scans.
//!
//! Everything legality filtering needs to know about attacks: whether an
//! arbitrary square is attacked, whether a candidate king step is safe with
//! the origin vacated, and the king-centred scan producing the pin and check
//! records the generator prunes with. All queries are pure; none of them
//! mutates board or position state.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Direction, PieceKind, Square};

/// The four orthogonal rays followed by the four diagonal rays.
pub const RAY_DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, 0),
    Direction::new(1, 0),
    Direction::new(0, -1),
    Direction::new(0, 1),
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A friendly piece that shields its king along `direction` (measured from
/// the king outward) and may only move on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

/// An enemy piece currently attacking the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Sliding, pawn, or adjacent-king attack along `direction` (from the
    /// king toward the checker).
    Ray { square: Square, direction: Direction },
    /// Knight attack; there is no ray to block.
    Knight { square: Square },
}

impl Check {
    #[inline]
    pub const fn square(&self) -> Square {
        match self {
            Check::Ray { square, .. } => *square,
            Check::Knight { square } => *square,
        }
    }
}

/// Result of the king-centred scan, recomputed per legal-move query.
#[derive(Debug, Clone, Default)]
pub struct KingSafety {
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl KingSafety {
    #[inline]
    pub fn in_check(&self) -> bool {
        !self.checks.is_empty()
    }
}

/// Walk the eight rays and knight offsets from `king`, collecting pins on
/// `ally` pieces and checks against the king.
///
/// Per ray, the first friendly piece met is remembered as a candidate pin and
/// the walk continues; the next piece decides the outcome. An enemy piece
/// whose movement pattern covers the ray confirms the pin (or, with no
/// candidate, registers a check); anything else blocks the ray.
pub fn scan_king_safety(board: &Board, king: Square, ally: Color) -> KingSafety {
    let mut safety = KingSafety::default();

    for (ray_index, direction) in RAY_DIRECTIONS.iter().enumerate() {
        let mut candidate_pin: Option<Square> = None;

        for distance in 1..8 {
            let Some(square) = king.offset(
                direction.d_row * distance,
                direction.d_col * distance,
            ) else {
                break;
            };
            let Some(piece) = board.piece_at(square) else {
                continue;
            };

            if piece.color == ally {
                if piece.kind != PieceKind::King && candidate_pin.is_none() {
                    candidate_pin = Some(square);
                    continue;
                }
                break;
            }

            if threatens_along_ray(piece.kind, ally, *direction, ray_index, distance) {
                match candidate_pin {
                    Some(pinned) => safety.pins.push(Pin {
                        square: pinned,
                        direction: *direction,
                    }),
                    None => safety.checks.push(Check::Ray {
                        square,
                        direction: *direction,
                    }),
                }
            }
            break;
        }
    }

    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(square) = king.offset(d_row, d_col) {
            if let Some(piece) = board.piece_at(square) {
                if piece.color != ally && piece.kind == PieceKind::Knight {
                    safety.checks.push(Check::Knight { square });
                }
            }
        }
    }

    safety
}

/// True when any piece of `attacker` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    attacked_with_vacated(board, square, attacker, None)
}

/// True when the king of `ally` may step from `king_from` to `candidate`.
///
/// The origin square is treated as vacated so that a king stepping away along
/// a checking ray is still seen by the attacker behind it. Pure query; the
/// king is never actually relocated.
pub fn is_king_step_safe(board: &Board, king_from: Square, candidate: Square, ally: Color) -> bool {
    !attacked_with_vacated(board, candidate, ally.opposite(), Some(king_from))
}

fn attacked_with_vacated(
    board: &Board,
    square: Square,
    attacker: Color,
    vacated: Option<Square>,
) -> bool {
    let defender = attacker.opposite();

    for (ray_index, direction) in RAY_DIRECTIONS.iter().enumerate() {
        for distance in 1..8 {
            let Some(target) = square.offset(
                direction.d_row * distance,
                direction.d_col * distance,
            ) else {
                break;
            };
            if Some(target) == vacated {
                continue;
            }
            let Some(piece) = board.piece_at(target) else {
                continue;
            };

            if piece.color == attacker
                && threatens_along_ray(piece.kind, defender, *direction, ray_index, distance)
            {
                return true;
            }
            break;
        }
    }

    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(target) = square.offset(d_row, d_col) {
            if let Some(piece) = board.piece_at(target) {
                if piece.color == attacker && piece.kind == PieceKind::Knight {
                    return true;
                }
            }
        }
    }

    false
}

/// Whether `kind` (an enemy piece of the `defender` color's opponent) attacks
/// back down a scan ray. `direction` runs from the defended square toward the
/// piece; orthogonal rays have index 0..=3, diagonal 4..=7.
#[inline]
fn threatens_along_ray(
    kind: PieceKind,
    defender: Color,
    direction: Direction,
    ray_index: usize,
    distance: i8,
) -> bool {
    let orthogonal = ray_index < 4;
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => orthogonal,
        PieceKind::Bishop => !orthogonal,
        PieceKind::King => distance == 1,
        // An enemy pawn sits one diagonal step in the direction the defender
        // itself advances.
        PieceKind::Pawn => {
            !orthogonal && distance == 1 && direction.d_row == defender.forward()
        }
        PieceKind::Knight => false,
    }
}
