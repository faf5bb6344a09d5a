//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Interactive play configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Seat taken by the human
    pub human: Player,

    /// Search root subtrees in parallel
    pub parallel: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            parallel: false,
        }
    }
}

/// Evaluation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Number of evaluation games
    pub games: usize,

    /// Seed for the random opponent
    pub seed: Option<u64>,

    /// Seat taken by the minimax agent
    pub agent_player: Player,

    /// Whether to show progress bars
    pub progress: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            agent_player: Player::X,
            progress: true,
        }
    }
}
