//! Best-move command - solve a single position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{describe_value, print_kv, print_section, render_board},
    search::{Minimax, SearchConfig},
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Print the optimal move for a position")]
pub struct BestMoveArgs {
    /// Board in row-major order, e.g. "X.O/.X./..." ('.' for empty)
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: Board,

    /// Search root subtrees in parallel
    #[arg(long)]
    pub parallel: bool,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let searcher = Minimax::new(SearchConfig::new().with_parallel_root(args.parallel));
    let report = searcher.search(&args.board)?;

    print_section("Best Move");
    println!("{}", render_board(&args.board));

    match report.decision.action {
        Some(action) => {
            print_kv("To move", &args.board.player().to_string());
            print_kv("Optimal action", &action.to_string());
        }
        None => print_kv("Status", &format!("terminal ({})", args.board.outcome())),
    }
    let value = report.decision.value;
    print_kv("Value", &format!("{value} ({})", describe_value(value)));
    print_kv("Nodes searched", &report.stats.nodes.to_string());

    Ok(())
}
