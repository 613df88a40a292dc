//! Negamax search with alpha-beta pruning.
//!
//! Fixed-depth adversarial search over a single `GameState` mutated in
//! place: every frame applies a move, recurses with negated and swapped
//! bounds, and undoes the move before returning, so the position is restored
//! exactly for every sibling branch. Results come back as an explicit
//! `SearchResult`; there is no shared search state.

use log::debug;
use rand::rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{evaluate, BoardScorer, MaterialScorer, MATE_SCORE};

/// Ordering bonus for promotion-eligible moves.
const PROMOTION_ORDER_BONUS: i32 = 800;
/// Ordering bonus for castling.
const CASTLE_ORDER_BONUS: i32 = 50;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
    /// Shuffle the root list before ordering so equally-scored moves vary
    /// between games. Disable for reproducible searches.
    pub shuffle_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            shuffle_root: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Uniform choice from `moves`, the fallback when search yields nothing.
pub fn find_random_move(moves: &[Move]) -> Option<Move> {
    find_random_move_with(moves, &mut rng())
}

pub fn find_random_move_with<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}

/// Search `moves` to `config.depth` plies and return the best root move.
///
/// `moves` must be the current legal moves of `game_state`; an empty list
/// comes back as `best_move: None`. The position is restored to its entry
/// state before returning.
pub fn find_best_move<S: BoardScorer>(
    game_state: &mut GameState,
    mut moves: Vec<Move>,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    if config.shuffle_root {
        moves.shuffle(&mut rng());
    }

    let mut nodes = 0u64;
    let (best_move, best_score) =
        negamax_root(game_state, scorer, moves, config.depth, &mut nodes);

    debug!(
        "search depth {} nodes {} score {}",
        config.depth, nodes, best_score
    );

    SearchResult {
        best_move,
        best_score,
        nodes,
    }
}

fn negamax_root<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    mut moves: Vec<Move>,
    depth: u8,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    order_moves(&mut moves);

    let mut alpha = -MATE_SCORE;
    let beta = MATE_SCORE;
    let mut best_move = None;
    let mut best_score = -MATE_SCORE;
    let turn = turn_multiplier(game_state.side_to_move());

    for mv in moves {
        game_state.apply_move(mv);
        let replies = game_state.generate_legal_moves();
        let score = -negamax(
            game_state,
            scorer,
            replies,
            depth.saturating_sub(1),
            -beta,
            -alpha,
            -turn,
            nodes,
        );
        game_state.undo_last_move();

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
    }

    (best_move, best_score)
}

#[allow(clippy::too_many_arguments)]
fn negamax<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    mut moves: Vec<Move>,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    turn_multiplier: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    // Terminal flags are current here: `moves` was generated for exactly
    // this position.
    if depth == 0 || moves.is_empty() {
        return turn_multiplier * evaluate(game_state, scorer);
    }

    order_moves(&mut moves);

    let mut best = -MATE_SCORE;
    for mv in moves {
        game_state.apply_move(mv);
        let replies = game_state.generate_legal_moves();
        let score = -negamax(
            game_state,
            scorer,
            replies,
            depth - 1,
            -beta,
            -alpha,
            -turn_multiplier,
            nodes,
        );
        game_state.undo_last_move();

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

#[inline]
fn turn_multiplier(side: Color) -> i32 {
    match side {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Cheap descending ordering to tighten pruning: winning captures first
/// (most valuable victim, least valuable attacker), then promotions and
/// castles. Stable sort keeps the shuffled order within equal scores.
fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| -move_order_score(mv));
}

fn move_order_score(mv: &Move) -> i32 {
    let mut score = 0;
    if let Some(victim) = mv.captured {
        score += 10 * MaterialScorer::piece_value(victim.kind)
            - MaterialScorer::piece_value(mv.piece.kind);
    }
    if mv.is_promotion {
        score += PROMOTION_ORDER_BONUS;
    }
    if mv.is_castle {
        score += CASTLE_ORDER_BONUS;
    }
    score
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{
        find_best_move, find_random_move_with, negamax, SearchConfig, SearchResult,
    };
    use crate::game_state::chess_types::{GameState, Square};
    use crate::search::board_scoring::{evaluate, BoardScorer, StandardScorer, MATE_SCORE};

    fn square(text: &str) -> Square {
        crate::utils::algebraic::square_from_text(text).expect("test square should parse")
    }

    fn fixed_depth(depth: u8) -> SearchConfig {
        SearchConfig {
            depth,
            shuffle_root: false,
        }
    }

    fn search(fen: &str, depth: u8) -> (GameState, SearchResult) {
        let mut game = GameState::from_fen(fen).expect("test FEN should parse");
        let moves = game.generate_legal_moves();
        let result = find_best_move(&mut game, moves, &StandardScorer, fixed_depth(depth));
        (game, result)
    }

    /// Reference full-width negamax without pruning, for score equivalence.
    fn unpruned<S: BoardScorer>(
        game_state: &mut GameState,
        scorer: &S,
        depth: u8,
        turn_multiplier: i32,
    ) -> i32 {
        let moves = game_state.generate_legal_moves();
        if depth == 0 || moves.is_empty() {
            return turn_multiplier * evaluate(game_state, scorer);
        }

        let mut best = -MATE_SCORE;
        for mv in moves {
            game_state.apply_move(mv);
            let score = -unpruned(game_state, scorer, depth - 1, -turn_multiplier);
            game_state.undo_last_move();
            best = best.max(score);
        }
        best
    }

    #[test]
    fn search_takes_the_hanging_queen() {
        let (_, result) = search("k7/8/8/3q4/8/8/3R4/K7 w - - 0 1", 2);
        let best = result.best_move.expect("search should pick a move");
        assert_eq!(best.to, square("d5"));
        assert!(best.is_capture());
    }

    #[test]
    fn search_finds_mate_in_one() {
        let (_, result) = search("6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1", 2);
        let best = result.best_move.expect("search should pick a move");
        assert_eq!(best.to, square("a8"));
        assert_eq!(result.best_score, MATE_SCORE);
    }

    #[test]
    fn search_restores_the_position_it_was_given() {
        let mut game = GameState::new_game();
        let before_board = game.board;
        let moves = game.generate_legal_moves();
        find_best_move(&mut game, moves, &StandardScorer, fixed_depth(3));
        assert_eq!(game.board, before_board);
        assert!(game.undo_stack.is_empty());
    }

    #[test]
    fn unshuffled_search_is_deterministic() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 0 1";
        let (_, first) = search(fen, 3);
        let (_, second) = search(fen, 3);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.best_score, second.best_score);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn pruned_score_equals_the_unpruned_score() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 0 1",
            "k7/8/8/3q4/8/8/3R4/K7 w - - 0 1",
        ] {
            let (_, pruned) = search(fen, 2);

            let mut game = GameState::from_fen(fen).expect("test FEN should parse");
            let turn = super::turn_multiplier(game.side_to_move());
            let reference = unpruned(&mut game, &StandardScorer, 2, turn);

            assert_eq!(pruned.best_score, reference, "alpha-beta diverged on {fen}");
        }
    }

    #[test]
    fn pruning_searches_no_more_nodes_than_full_width() {
        let mut game = GameState::new_game();
        let moves = game.generate_legal_moves();
        let pruned = find_best_move(&mut game, moves, &StandardScorer, fixed_depth(3));
        // Full-width depth 3 from the start position visits 20 + 400 + 8902
        // interior and leaf nodes.
        assert!(pruned.nodes < 9322);
    }

    #[test]
    fn negamax_scores_an_already_terminal_node_from_its_flags() {
        let mut mated = GameState::from_fen("7k/6Q1/8/6R1/8/8/8/4K3 b - - 0 1")
            .expect("FEN should parse");
        let moves = mated.generate_legal_moves();
        assert!(moves.is_empty());

        // From the mated side's own perspective the node is a loss.
        let mut nodes = 0;
        let score = negamax(
            &mut mated,
            &StandardScorer,
            moves,
            3,
            -MATE_SCORE,
            MATE_SCORE,
            -1,
            &mut nodes,
        );
        assert_eq!(score, -MATE_SCORE);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn random_choice_reaches_every_move() {
        let mut game = GameState::new_game();
        let moves = game.generate_legal_moves();

        let mut seen = vec![false; moves.len()];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let pick = find_random_move_with(&moves, &mut rng).expect("list is non-empty");
            let index = moves
                .iter()
                .position(|mv| *mv == pick)
                .expect("picked move comes from the list");
            seen[index] = true;
        }

        assert!(seen.iter().all(|&hit| hit));
        assert_eq!(find_random_move_with(&[], &mut rng), None);
    }
}
