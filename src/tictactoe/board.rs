//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::error::InvalidActionReason;

/// Side length of the grid
pub const BOARD_SIDE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayer {
                input: other.to_string(),
            }),
        }
    }
}

/// A placement at `(row, col)`.
///
/// Coordinates are signed so raw caller input can be carried as-is and
/// rejected by [`Board::result`] instead of at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: i32,
    pub col: i32,
}

impl Action {
    pub const fn new(row: i32, col: i32) -> Self {
        Action { row, col }
    }

    /// Action for a row-major cell index (0-8)
    pub(crate) const fn from_index(index: usize) -> Self {
        Action {
            row: (index / BOARD_SIDE) as i32,
            col: (index % BOARD_SIDE) as i32,
        }
    }

    /// Grid coordinates, or `None` when either lies outside `0..=2`
    pub fn coords(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < BOARD_SIDE && col < BOARD_SIDE).then_some((row, col))
    }

    /// Row-major index (0-8) for in-range actions
    pub fn index(self) -> Option<usize> {
        self.coords().map(|(row, col)| row * BOARD_SIDE + col)
    }

    /// Whether this action targets one of the four corners
    pub fn is_corner(self) -> bool {
        matches!(self.coords(), Some((0 | 2, 0 | 2)))
    }

    /// Whether this action targets the center cell
    pub fn is_center(self) -> bool {
        self.coords() == Some((1, 1))
    }

    /// Whether this action targets an edge midpoint
    pub fn is_edge(self) -> bool {
        self.coords().is_some() && !self.is_corner() && !self.is_center()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Action {
    type Err = crate::Error;

    /// Parse `"row col"` or `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || crate::Error::ParseAction {
            input: s.to_string(),
        };
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();
        let [row, col] = parts.as_slice() else {
            return Err(parse_error());
        };
        let row = row.parse::<i32>().map_err(|_| parse_error())?;
        let col = col.parse::<i32>().map_err(|_| parse_error())?;
        Ok(Action::new(row, col))
    }
}

/// Derived game status of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
    InProgress,
}

impl Outcome {
    /// The winning player, if the game was won
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    pub fn is_finished(self) -> bool {
        self != Outcome::InProgress
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X wins"),
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::InProgress => write!(f, "in progress"),
        }
    }
}

/// A 3x3 grid of cells.
///
/// `Board` is `Copy` (9 bytes), so every transition hands back a fresh
/// value and sibling search branches never share a grid. The player to move
/// is not stored; it is derived from the mark counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIDE]; BOARD_SIDE],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIDE]; BOARD_SIDE],
        }
    }

    /// Build a board from raw rows without validating reachability
    pub fn from_cells(cells: [[Cell; BOARD_SIDE]; BOARD_SIDE]) -> Self {
        Board { cells }
    }

    /// The underlying grid
    pub fn cells(&self) -> &[[Cell; BOARD_SIDE]; BOARD_SIDE] {
        &self.cells
    }

    /// Cell at `(row, col)`, or `None` if out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Iterate over `(action, cell)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        self.cells
            .iter()
            .flatten()
            .enumerate()
            .map(|(i, &cell)| (Action::from_index(i), cell))
    }

    pub fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount::default();
        for &cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().flatten().any(|&cell| cell == Cell::Empty)
    }

    /// Player who moves next: O when O has fewer marks than X, else X.
    ///
    /// Defined on every board, including terminal ones.
    pub fn player(&self) -> Player {
        let count = self.count_pieces();
        if count.o < count.x {
            Player::O
        } else {
            Player::X
        }
    }

    /// One action per empty cell, in row-major order
    pub fn actions(&self) -> Vec<Action> {
        self.iter()
            .filter(|&(_, cell)| cell == Cell::Empty)
            .map(|(action, _)| action)
            .collect()
    }

    /// Board after the player to move marks `action`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] when the coordinates are out of
    /// range or the target cell is occupied.
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<Board, crate::Error> {
        let invalid = |reason| crate::Error::InvalidAction { action, reason };

        let (row, col) = action
            .coords()
            .ok_or_else(|| invalid(InvalidActionReason::OutOfBounds))?;
        if self.cells[row][col] != Cell::Empty {
            return Err(invalid(InvalidActionReason::Occupied));
        }

        let mut next = *self;
        next.cells[row][col] = self.player().to_cell();
        Ok(next)
    }

    /// Check if a player has a complete line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Owner of the first complete line (rows, then columns, then diagonals)
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::first_complete_line(&self.cells).and_then(Cell::to_player)
    }

    /// Check if the game is over (a line is complete or no cell remains)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// +1 if X has won, -1 if O has won, 0 otherwise
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(Player::X) => Outcome::XWins,
            Some(Player::O) => Outcome::OWins,
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Parse a board from its text form.
    ///
    /// Exactly nine cell characters in row-major order; whitespace and the
    /// row separators `/` and `|` are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The text does not hold exactly 9 cells
    /// - Any character is not a valid cell representation
    /// - The piece counts are not reachable by legal play
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        if chars.len() != BOARD_SIDE * BOARD_SIDE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIDE * BOARD_SIDE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            board.cells[i / BOARD_SIDE][i % BOARD_SIDE] = cell;
        }

        let count = board.count_pieces();
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Compact nine-character row-major encoding
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i + 1 < BOARD_SIDE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.player(), Player::X);
        assert_eq!(board.actions().len(), 9);
        assert!(board.iter().all(|(_, cell)| cell == Cell::Empty));
    }

    #[test]
    fn test_result() {
        let board = Board::new();

        let next = board.result(Action::new(1, 1)).unwrap();
        assert_eq!(next.get(1, 1), Some(Cell::X));
        assert_eq!(next.player(), Player::O);
        assert_eq!(board.get(1, 1), Some(Cell::Empty));

        let err = next.result(Action::new(1, 1)).unwrap_err();
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_result_out_of_bounds() {
        let board = Board::new();
        for action in [Action::new(-1, 0), Action::new(0, 3), Action::new(3, 3)] {
            let err = board.result(action).unwrap_err();
            assert!(matches!(
                err,
                crate::Error::InvalidAction {
                    reason: InvalidActionReason::OutOfBounds,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_actions_row_major() {
        let board = Board::from_string("X...O....").unwrap();
        let actions = board.actions();
        assert_eq!(actions.len(), 7);
        assert_eq!(actions[0], Action::new(0, 1));
        assert_eq!(actions[6], Action::new(2, 2));
        assert!(!actions.contains(&Action::new(1, 1)));
    }

    #[test]
    fn test_player_alternation() {
        let mut board = Board::new();
        assert_eq!(board.player(), Player::X);

        board = board.result(Action::new(0, 0)).unwrap();
        assert_eq!(board.player(), Player::O);

        board = board.result(Action::new(0, 1)).unwrap();
        assert_eq!(board.player(), Player::X);
    }

    #[test]
    fn test_winner_precedence_rows_first() {
        // Unreachable in play, but pins the scan order.
        let board = Board::from_cells([
            [Cell::X, Cell::X, Cell::X],
            [Cell::Empty, Cell::Empty, Cell::Empty],
            [Cell::O, Cell::O, Cell::O],
        ]);
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_outcome() {
        assert_eq!(Board::new().outcome(), Outcome::InProgress);
        assert_eq!(
            Board::from_string("XXX/OO./...").unwrap().outcome(),
            Outcome::XWins
        );
        assert_eq!(
            Board::from_string("XOX/XOO/OXX").unwrap().outcome(),
            Outcome::Draw
        );
    }

    #[test]
    fn test_utility() {
        assert_eq!(Board::from_string("XXXOO....").unwrap().utility(), 1);
        assert_eq!(Board::from_string("OOOXX.X..").unwrap().utility(), -1);
        assert_eq!(Board::from_string("XOXXOOOXX").unwrap().utility(), 0);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::X));
        assert_eq!(board.get(0, 1), Some(Cell::O));
        assert_eq!(board.player(), Player::O);

        let result = Board::from_string("XO");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));

        let result = Board::from_string("XOZ......");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidCellCharacter { character: 'Z', .. })
        ));

        let result = Board::from_string("XXX......");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidPieceCounts { x_count: 3, o_count: 0 })
        ));
    }

    #[test]
    fn test_from_string_with_separators() {
        let a = Board::from_string("X.O/.X./..O").unwrap();
        let b = Board::from_string("X.O|.X.|..O").unwrap();
        let c: Board = "X.O .X. ..O".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_encode() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.encode(), "XO.......");
        assert_eq!(Board::new().encode(), ".........");
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }

    #[test]
    fn test_action_parse() {
        assert_eq!("1 2".parse::<Action>().unwrap(), Action::new(1, 2));
        assert_eq!("0,2".parse::<Action>().unwrap(), Action::new(0, 2));
        assert_eq!("-1 0".parse::<Action>().unwrap(), Action::new(-1, 0));
        assert!("1".parse::<Action>().is_err());
        assert!("a b".parse::<Action>().is_err());
    }

    #[test]
    fn test_action_classification() {
        assert!(Action::new(0, 0).is_corner());
        assert!(Action::new(2, 2).is_corner());
        assert!(Action::new(1, 1).is_center());
        assert!(Action::new(0, 1).is_edge());
        assert!(!Action::new(3, 1).is_edge());
        assert_eq!(Action::new(2, 1).index(), Some(7));
        assert_eq!(Action::new(-1, 1).index(), None);
    }
}
