//! Adversarial search engine
//!
//! The free functions use a sequential [`Minimax`] with the default
//! configuration; build a searcher directly for parallel root search or node
//! statistics.

pub mod config;
pub mod minimax;

pub use config::SearchConfig;
pub use minimax::{Decision, Minimax, SearchReport, SearchStats};

use crate::{
    Result,
    tictactoe::{Action, Board},
};

/// Optimal action for the player to move, or `None` if `board` is terminal.
///
/// # Examples
///
/// ```
/// use ttt_minimax::{initial_state, minimax};
///
/// let opening = minimax(&initial_state())?.expect("empty board is not terminal");
/// assert!(opening.is_corner() || opening.is_center());
/// # Ok::<(), ttt_minimax::Error>(())
/// ```
pub fn minimax(board: &Board) -> Result<Option<Action>> {
    Minimax::default().best_action(board)
}

/// Game value and optimal action for the player to move
pub fn evaluate(board: &Board) -> Result<Decision> {
    Minimax::default().evaluate(board)
}

/// Minimax value of every legal action, in row-major order
pub fn action_values(board: &Board) -> Result<Vec<(Action, i32)>> {
    Minimax::default().action_values(board)
}
