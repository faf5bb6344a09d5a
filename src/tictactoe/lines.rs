//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player, board::BOARD_SIDE};

type Grid = [[Cell; BOARD_SIDE]; BOARD_SIDE];

/// Winning lines as `(row, col)` triples, in scan order
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Mark filling every cell of `line`, if the line is complete
    fn line_owner(cells: &Grid, line: &[(usize, usize); 3]) -> Option<Cell> {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let first = cells[r0][c0];
        (first != Cell::Empty && cells[r1][c1] == first && cells[r2][c2] == first).then_some(first)
    }

    /// Mark of the first complete line in scan order
    pub fn first_complete_line(cells: &Grid) -> Option<Cell> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::line_owner(cells, line))
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &Grid, player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owner(cells, line) == Some(target))
    }
}
