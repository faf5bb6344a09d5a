//! Common test utilities for the solver test suite.
//!
//! This module provides reachable-position enumeration and an independent
//! memoized reference solver used to cross-check the search.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};

use ttt_minimax::{Board, Player};

/// Every board reachable from the empty board by legal play.
///
/// Play stops at terminal boards, so no position continues after a win.
pub fn reachable_boards() -> Vec<Board> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    queue.push_back(Board::new());
    visited.insert(Board::new());

    while let Some(board) = queue.pop_front() {
        order.push(board);
        if board.is_terminal() {
            continue;
        }
        for action in board.actions() {
            let next = board.result(action).expect("listed action must be legal");
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    order
}

/// Game value of `board` from X's perspective, memoized by position.
pub fn reference_value(board: &Board, memo: &mut HashMap<Board, i32>) -> i32 {
    if let Some(&value) = memo.get(board) {
        return value;
    }

    let value = if board.is_terminal() {
        board.utility()
    } else {
        let children = board.actions().into_iter().map(|action| {
            let next = board.result(action).expect("listed action must be legal");
            reference_value(&next, memo)
        });
        let values: Vec<i32> = children.collect();
        match board.player() {
            Player::X => values.into_iter().max().unwrap_or(0),
            Player::O => values.into_iter().min().unwrap_or(0),
        }
    };

    memo.insert(*board, value);
    value
}
