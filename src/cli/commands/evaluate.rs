//! Evaluate command - minimax agent against a random opponent

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::EvaluationConfig,
        output::{print_kv, print_section, write_json},
    },
    pipeline::{MinimaxAgent, RandomAgent, SeriesConfig, SeriesSummary, run_series},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate the solver against a random opponent")]
pub struct EvaluateArgs {
    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for the opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which token the solver controls (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub agent_player: Player,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export results to file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl From<&EvaluateArgs> for EvaluationConfig {
    fn from(args: &EvaluateArgs) -> Self {
        Self {
            games: args.games,
            seed: args.seed,
            agent_player: args.agent_player,
            progress: !args.no_progress,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    pub config: EvaluationConfig,
    pub summary: SeriesSummary,
    pub agent_wins: usize,
    pub agent_losses: usize,
}

/// Run the evaluation series described by `config`
pub fn evaluate(config: &EvaluationConfig) -> crate::Result<EvaluationReport> {
    let mut solver = MinimaxAgent::new("Minimax".to_string());
    let mut opponent = match config.seed {
        Some(seed) => RandomAgent::with_seed("Random".to_string(), seed),
        None => RandomAgent::new("Random".to_string()),
    };

    let series = SeriesConfig::new(config.games).with_progress(config.progress);
    let summary = match config.agent_player {
        Player::X => run_series(&series, &mut solver, &mut opponent)?,
        Player::O => run_series(&series, &mut opponent, &mut solver)?,
    };

    Ok(EvaluationReport {
        config: config.clone(),
        summary,
        agent_wins: summary.wins_for(config.agent_player),
        agent_losses: summary.losses_for(config.agent_player),
    })
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let config = EvaluationConfig::from(&args);
    let report = evaluate(&config)?;

    print_section("Evaluation Results");
    print_kv("Solver plays", &config.agent_player.to_string());
    print_kv("Games", &report.summary.games.to_string());
    print_kv("Solver wins", &report.agent_wins.to_string());
    print_kv("Draws", &report.summary.draws.to_string());
    print_kv("Solver losses", &report.agent_losses.to_string());

    if let Some(path) = &args.export {
        write_json(path, &report)?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}
