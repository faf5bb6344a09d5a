//! Procedural rules API.
//!
//! Thin free-function layer over [`Board`] for callers that prefer the
//! `initial_state` / `player` / `actions` / `result` vocabulary. Every
//! function is pure; none of them mutates its board argument.

use super::{Action, Board, Outcome, Player};
use crate::Result;

/// Empty board with X to move
pub fn initial_state() -> Board {
    Board::new()
}

/// Player whose turn it is on `board`
pub fn player(board: &Board) -> Player {
    board.player()
}

/// Empty cells of `board` in row-major order
pub fn actions(board: &Board) -> Vec<Action> {
    board.actions()
}

/// New board with `action` played by the player to move
///
/// # Errors
///
/// Returns [`crate::Error::InvalidAction`] if `action` is out of range or
/// targets an occupied cell.
pub fn result(board: &Board, action: Action) -> Result<Board> {
    board.result(action)
}

pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

pub fn terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// Signed outcome from X's perspective; only meaningful on terminal boards
pub fn utility(board: &Board) -> i32 {
    board.utility()
}

pub fn outcome(board: &Board) -> Outcome {
    board.outcome()
}
