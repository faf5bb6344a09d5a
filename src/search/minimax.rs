//! Exhaustive minimax over the full game tree.
//!
//! X maximizes the utility, O minimizes it. One recursive routine handles
//! both sides by switching on the player to move. There is no pruning and no
//! transposition table: positions reached by different move orders are
//! searched again, which the 9! bound on move sequences keeps cheap.
//!
//! Ties are broken by enumeration order. Actions come from
//! [`Board::actions`] in row-major order and a candidate only replaces the
//! incumbent when strictly better, so the earliest optimal action wins.

use std::ops::AddAssign;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::config::SearchConfig;
use crate::{
    Result,
    tictactoe::{Action, Board, Player},
};

/// Value of a position together with the action achieving it.
///
/// `action` is `None` exactly when the position is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub value: i32,
    pub action: Option<Action>,
}

/// Counters collected while walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included
    pub nodes: u64,
    /// Terminal positions reached
    pub terminals: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.terminals += other.terminals;
    }
}

/// Result of a full search from one root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub decision: Decision,
    pub stats: SearchStats,
}

/// Minimax searcher
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search the whole tree below `board`.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::InvalidAction`] from the rules engine. The
    /// searcher only plays actions listed by [`Board::actions`], so this does
    /// not happen on boards built through the public API.
    #[instrument(level = "debug", skip(self, board), fields(board = %board.encode()))]
    pub fn search(&self, board: &Board) -> Result<SearchReport> {
        let mut stats = SearchStats::default();
        let decision = if self.config.parallel_root && !board.is_terminal() {
            search_root_parallel(board, &mut stats)?
        } else {
            evaluate_node(board, &mut stats)?
        };

        debug!(
            value = decision.value,
            action = ?decision.action,
            nodes = stats.nodes,
            terminals = stats.terminals,
            "search complete"
        );

        Ok(SearchReport { decision, stats })
    }

    /// Value and optimal action for the player to move
    pub fn evaluate(&self, board: &Board) -> Result<Decision> {
        Ok(self.search(board)?.decision)
    }

    /// Optimal action for the player to move, or `None` on a terminal board
    pub fn best_action(&self, board: &Board) -> Result<Option<Action>> {
        if board.is_terminal() {
            return Ok(None);
        }
        Ok(self.evaluate(board)?.action)
    }

    /// Minimax value of every legal action, in row-major order.
    ///
    /// Empty on terminal boards.
    pub fn action_values(&self, board: &Board) -> Result<Vec<(Action, i32)>> {
        if board.is_terminal() {
            return Ok(Vec::new());
        }

        let score = |action: Action| -> Result<(Action, i32)> {
            let child = board.result(action)?;
            let mut stats = SearchStats::default();
            Ok((action, evaluate_node(&child, &mut stats)?.value))
        };

        if self.config.parallel_root {
            board.actions().into_par_iter().map(score).collect()
        } else {
            board.actions().into_iter().map(score).collect()
        }
    }
}

/// Whether `candidate` is strictly better than `incumbent` for `side`
fn improves(side: Player, candidate: i32, incumbent: i32) -> bool {
    match side {
        Player::X => candidate > incumbent,
        Player::O => candidate < incumbent,
    }
}

/// Pick the first strictly-best scored action for `side`
fn select_best<I>(side: Player, scored: I) -> Option<(i32, Action)>
where
    I: IntoIterator<Item = (Action, i32)>,
{
    let mut best: Option<(i32, Action)> = None;
    for (action, value) in scored {
        if best.is_none_or(|(best_value, _)| improves(side, value, best_value)) {
            best = Some((value, action));
        }
    }
    best
}

fn terminal_decision(board: &Board, stats: &mut SearchStats) -> Decision {
    stats.terminals += 1;
    Decision {
        value: board.utility(),
        action: None,
    }
}

fn evaluate_node(board: &Board, stats: &mut SearchStats) -> Result<Decision> {
    stats.nodes += 1;
    if board.is_terminal() {
        return Ok(terminal_decision(board, stats));
    }

    let scored = board
        .actions()
        .into_iter()
        .map(|action| -> Result<(Action, i32)> {
            let child = board.result(action)?;
            Ok((action, evaluate_node(&child, stats)?.value))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(decision_from(board, select_best(board.player(), scored)))
}

fn search_root_parallel(board: &Board, stats: &mut SearchStats) -> Result<Decision> {
    stats.nodes += 1;

    let scored = board
        .actions()
        .into_par_iter()
        .map(|action| -> Result<(Action, i32, SearchStats)> {
            let child = board.result(action)?;
            let mut child_stats = SearchStats::default();
            let value = evaluate_node(&child, &mut child_stats)?.value;
            Ok((action, value, child_stats))
        })
        .collect::<Result<Vec<_>>>()?;

    for &(_, _, child_stats) in &scored {
        *stats += child_stats;
    }

    let best = select_best(
        board.player(),
        scored.into_iter().map(|(action, value, _)| (action, value)),
    );
    Ok(decision_from(board, best))
}

fn decision_from(board: &Board, best: Option<(i32, Action)>) -> Decision {
    match best {
        Some((value, action)) => Decision {
            value,
            action: Some(action),
        },
        // Non-terminal boards always have an empty cell.
        None => Decision {
            value: board.utility(),
            action: None,
        },
    }
}
