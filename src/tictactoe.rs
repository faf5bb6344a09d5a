//! Tic-Tac-Toe rules engine

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;

pub use board::{Action, BOARD_SIDE, Board, Cell, Outcome, PieceCount, Player};
pub use game::{Game, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
