//! Playing games and series between two agents

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{Game, Outcome, Player},
};

/// Series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Number of games to play
    pub games: usize,

    /// Whether to show a progress bar
    pub progress: bool,
}

impl SeriesConfig {
    pub fn new(games: usize) -> Self {
        Self {
            games,
            ..Self::default()
        }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            games: 100,
            progress: false,
        }
    }
}

/// Tally of a finished series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SeriesSummary {
    /// Count a finished game; unfinished games are rejected and not counted
    fn record(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::XWins => self.x_wins += 1,
            Outcome::OWins => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return Err(Error::GameInProgress),
        }
        self.games += 1;
        Ok(())
    }

    pub fn wins_for(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn losses_for(&self, player: Player) -> usize {
        self.wins_for(player.opponent())
    }
}

/// Play one game from the empty board, `x` moving first
pub fn play_game(x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Game> {
    let mut game = Game::new();
    while !game.is_over() {
        let action = match game.board().player() {
            Player::X => x.select_action(game.board())?,
            Player::O => o.select_action(game.board())?,
        };
        game.play(action)?;
    }

    debug!(
        x = x.name(),
        o = o.name(),
        outcome = %game.outcome(),
        moves = game.moves.len(),
        "game finished"
    );
    Ok(game)
}

/// Play `config.games` games between `x` and `o`
pub fn run_series(config: &SeriesConfig, x: &mut dyn Agent, o: &mut dyn Agent) -> Result<SeriesSummary> {
    let progress = if config.progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")
                .map_err(|e| Error::InvalidConfiguration {
                    message: format!("progress bar template: {e}"),
                })?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut summary = SeriesSummary::default();
    for _ in 0..config.games {
        let game = play_game(x, o)?;
        summary.record(game.outcome())?;
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    info!(
        x = x.name(),
        o = o.name(),
        games = summary.games,
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        draws = summary.draws,
        "series complete"
    );
    Ok(summary)
}
