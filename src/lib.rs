//! Exhaustive minimax solver for Tic-Tac-Toe
//!
//! This crate provides:
//! - A rules engine for the 3x3 game with value-type boards
//! - A minimax search over the full game tree, optionally parallel at the root
//! - Agents and a match pipeline for playing complete games
//! - The console driver behind the `ttt` binary
//!
//! The procedural API mirrors the classic formulation:
//!
//! ```
//! use ttt_minimax::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     let action = minimax(&board)?.expect("non-terminal board has a move");
//!     board = result(&board, action)?;
//! }
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), ttt_minimax::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, InvalidActionReason, Result};
pub use search::{Decision, Minimax, SearchConfig, action_values, evaluate, minimax};
pub use tictactoe::{
    Action, Board, Cell, Outcome, Player,
    rules::{actions, initial_state, outcome, player, result, terminal, utility, winner},
};
