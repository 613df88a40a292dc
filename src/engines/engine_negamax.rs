//! Fixed-depth negamax engine.
//!
//! Wraps the alpha-beta search with a configured depth and the standard
//! scorer, falling back to a uniformly random choice if the search reports
//! no move for a position that still has them.

use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::StandardScorer;
use crate::search::negamax::{find_best_move, find_random_move, SearchConfig};

pub struct NegamaxEngine {
    config: SearchConfig,
    scorer: StandardScorer,
}

impl NegamaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig {
                depth,
                ..SearchConfig::default()
            },
            scorer: StandardScorer,
        }
    }

    /// Reproducible variant for tests and engine comparisons.
    pub fn new_deterministic(depth: u8) -> Self {
        Self {
            config: SearchConfig {
                depth,
                shuffle_root: false,
            },
            scorer: StandardScorer,
        }
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "quince-negamax"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> Option<Move> {
        let moves = game_state.generate_legal_moves();
        if moves.is_empty() {
            return None;
        }

        let result = find_best_move(game_state, moves.clone(), &self.scorer, self.config);
        result.best_move.or_else(|| find_random_move(&moves))
    }
}
