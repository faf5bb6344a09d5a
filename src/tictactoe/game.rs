//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Action, Board, Outcome, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// A game with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    board: Board,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Continue a game from an arbitrary position
    pub fn from_board(board: Board) -> Self {
        Game {
            initial: board,
            moves: Vec::new(),
            board,
        }
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// Play `action` for the player to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the board is terminal, and
    /// [`crate::Error::InvalidAction`] when the rules reject the action. The
    /// game is left unchanged on error.
    pub fn play(&mut self, action: Action) -> Result<Outcome, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        let player = self.board.player();
        self.board = self.board.result(action)?;
        self.moves.push(Move { action, player });

        Ok(self.outcome())
    }

    /// Boards from the initial position through the current one
    pub fn board_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial;
        boards.push(board);
        for mv in &self.moves {
            board = board.result(mv.action)?;
            boards.push(board);
        }
        Ok(boards)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
