//! ttt - console driver for the Tic-Tac-Toe minimax solver
//!
//! This CLI provides:
//! - Interactive play against the solver
//! - Optimal-move queries for arbitrary positions
//! - Per-action value analysis
//! - Evaluation series against a random opponent

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Exhaustive minimax solver for Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the solver
    Play(ttt_minimax::cli::commands::play::PlayArgs),

    /// Print the optimal move for a position
    BestMove(ttt_minimax::cli::commands::best_move::BestMoveArgs),

    /// Show the minimax value of every legal action
    Analyze(ttt_minimax::cli::commands::analyze::AnalyzeArgs),

    /// Evaluate the solver against a random opponent
    Evaluate(ttt_minimax::cli::commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ttt_minimax::cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => ttt_minimax::cli::commands::play::execute(args),
        Commands::BestMove(args) => ttt_minimax::cli::commands::best_move::execute(args),
        Commands::Analyze(args) => ttt_minimax::cli::commands::analyze::execute(args),
        Commands::Evaluate(args) => ttt_minimax::cli::commands::evaluate::execute(args),
    }
}
