//! Random-move engine.
//!
//! Selects uniformly from the legal moves; used for diagnostics, integration
//! testing, and the weakest difficulty setting.

use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::negamax::find_random_move;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "quince-random"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> Option<Move> {
        let moves = game_state.generate_legal_moves();
        find_random_move(&moves)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::GameState;

    #[test]
    fn chooses_one_of_the_legal_moves() {
        let mut game = GameState::new_game();
        let legal = game.generate_legal_moves();

        let chosen = RandomEngine
            .choose_move(&mut game)
            .expect("the start position has moves");
        assert!(legal.contains(&chosen));
    }

    #[test]
    fn returns_none_in_a_terminal_position() {
        let mut stalemate =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(RandomEngine.choose_move(&mut stalemate), None);
        assert!(stalemate.is_stalemate());
    }
}
