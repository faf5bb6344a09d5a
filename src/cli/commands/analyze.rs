//! Analyze command - minimax value of every legal action

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{describe_value, print_section, render_board, write_json},
    search::{Minimax, SearchConfig},
    tictactoe::{Action, Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Show the minimax value of every legal action")]
pub struct AnalyzeArgs {
    /// Board in row-major order, e.g. "X.O/.X./..." ('.' for empty)
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: Board,

    /// Search root subtrees in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Export the analysis as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ActionValue {
    pub action: Action,
    pub value: i32,
    pub optimal: bool,
}

#[derive(Debug, Serialize)]
pub struct PositionAnalysis {
    pub board: String,
    pub to_move: Player,
    pub terminal: bool,
    pub value: i32,
    pub best_action: Option<Action>,
    pub actions: Vec<ActionValue>,
}

/// Score every action of `board` and flag the optimal ones
pub fn analyze_position(searcher: &Minimax, board: &Board) -> crate::Result<PositionAnalysis> {
    let decision = searcher.evaluate(board)?;
    let actions = searcher
        .action_values(board)?
        .into_iter()
        .map(|(action, value)| ActionValue {
            action,
            value,
            optimal: value == decision.value,
        })
        .collect();

    Ok(PositionAnalysis {
        board: board.encode(),
        to_move: board.player(),
        terminal: board.is_terminal(),
        value: decision.value,
        best_action: decision.action,
        actions,
    })
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let searcher = Minimax::new(SearchConfig::new().with_parallel_root(args.parallel));
    let analysis = analyze_position(&searcher, &args.board)?;

    print_section("Position Analysis");
    println!("{}", render_board(&args.board));

    if analysis.terminal {
        println!("\n(board is terminal: {})", args.board.outcome());
    } else {
        println!("\n{} to move; {}", analysis.to_move, describe_value(analysis.value));
        for entry in &analysis.actions {
            let marker = if Some(entry.action) == analysis.best_action {
                " <- chosen"
            } else if entry.optimal {
                " (optimal)"
            } else {
                ""
            };
            println!("  {:8} {:>2}{marker}", entry.action.to_string(), entry.value);
        }
    }

    if let Some(path) = &args.export {
        write_json(path, &analysis)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_analysis_marks_no_losing_moves() {
        let analysis = analyze_position(&Minimax::default(), &Board::new()).unwrap();
        assert_eq!(analysis.value, 0);
        assert_eq!(analysis.actions.len(), 9);
        // Every opening move draws with best play.
        assert!(analysis.actions.iter().all(|entry| entry.optimal));
        assert_eq!(analysis.best_action, Some(Action::new(0, 0)));
    }

    #[test]
    fn terminal_position_has_no_actions() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let analysis = analyze_position(&Minimax::default(), &board).unwrap();
        assert!(analysis.terminal);
        assert!(analysis.actions.is_empty());
        assert_eq!(analysis.best_action, None);
        assert_eq!(analysis.value, 1);
    }

    #[test]
    fn export_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        let board: Board = "XX./OO./...".parse().unwrap();
        let analysis = analyze_position(&Minimax::default(), &board).unwrap();

        write_json(&path, &analysis).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["board"], "XX.OO....");
        assert_eq!(json["value"], 1);
        assert_eq!(json["best_action"]["row"], 0);
        assert_eq!(json["best_action"]["col"], 2);
    }
}
