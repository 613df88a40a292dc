//! Engine abstraction layer.
//!
//! Frontends pick a playing strength behind one trait interface instead of
//! wiring themselves to a concrete move-selection strategy.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub trait Engine {
    fn name(&self) -> &str;

    /// Choose a move for the side to move, or `None` when the position has
    /// no legal moves. The position is restored before returning; applying
    /// the chosen move is the caller's decision.
    fn choose_move(&mut self, game_state: &mut GameState) -> Option<Move>;
}
