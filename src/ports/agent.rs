//! Agent port - abstraction over anything that picks moves
//!
//! Implemented by the minimax searcher, a random baseline, and the console
//! driver's human player.

use crate::{
    Result,
    tictactoe::{Action, Board},
};

/// Move-selection interface shared by all players of a game
///
/// # Examples
///
/// ```no_run
/// use ttt_minimax::{ports::Agent, tictactoe::Game};
///
/// fn finish<A: Agent>(game: &mut Game, agent: &mut A) -> ttt_minimax::Result<()> {
///     while !game.is_over() {
///         let action = agent.select_action(game.board())?;
///         game.play(action)?;
///     }
///     Ok(())
/// }
/// ```
pub trait Agent: Send {
    /// Select an action for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the board is terminal.
    fn select_action(&mut self, board: &Board) -> Result<Action>;

    /// Get the agent's name.
    fn name(&self) -> &str;
}
