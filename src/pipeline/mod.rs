//! Game-playing pipeline
//!
//! Agent adapters plus helpers that play single games and scored series
//! between two agents.

pub mod agents;
pub mod series;

pub use agents::{MinimaxAgent, RandomAgent};
pub use series::{SeriesConfig, SeriesSummary, play_game, run_series};

pub use crate::ports::Agent;
