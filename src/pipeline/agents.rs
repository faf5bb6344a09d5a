//! Agent implementations (adapters for the [`Agent`] port)

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Agent,
    search::{Minimax, SearchConfig},
    tictactoe::{Action, Board},
};

/// Plays the minimax-optimal action
pub struct MinimaxAgent {
    name: String,
    searcher: Minimax,
}

impl MinimaxAgent {
    pub fn new(name: String) -> Self {
        Self::with_config(name, SearchConfig::default())
    }

    pub fn with_config(name: String, config: SearchConfig) -> Self {
        Self {
            name,
            searcher: Minimax::new(config),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        self.searcher.best_action(board)?.ok_or(Error::GameOver)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy agent (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }
        let actions = board.actions();
        let index = self.rng.random_range(0..actions.len());
        Ok(actions[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimax_agent_rejects_terminal_board() {
        let mut agent = MinimaxAgent::new("Minimax".to_string());
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(matches!(agent.select_action(&board), Err(Error::GameOver)));
    }

    #[test]
    fn random_agent_only_plays_empty_cells() {
        let mut agent = RandomAgent::with_seed("Random".to_string(), 7);
        let board: Board = "XOX/OX./...".parse().unwrap();
        for _ in 0..50 {
            let action = agent.select_action(&board).unwrap();
            assert!(board.actions().contains(&action));
        }
    }

    #[test]
    fn random_agent_is_reproducible() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed("A".to_string(), 42);
        let mut b = RandomAgent::with_seed("B".to_string(), 42);
        for _ in 0..10 {
            assert_eq!(
                a.select_action(&board).unwrap(),
                b.select_action(&board).unwrap()
            );
        }
    }
}
