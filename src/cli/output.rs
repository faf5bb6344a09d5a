//! Output formatting for CLI

use std::path::Path;

use serde::Serialize;

use crate::{
    Error,
    tictactoe::{Board, Cell},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board with row and column labels
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    0   1   2\n");
    for (r, row) in board.cells().iter().enumerate() {
        let marks: Vec<String> = row
            .iter()
            .map(|&cell| match cell {
                Cell::Empty => " ".to_string(),
                other => other.to_char().to_string(),
            })
            .collect();
        out.push_str(&format!("{r}   {}\n", marks.join(" | ")));
        if r < 2 {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

/// Describe a game value from X's perspective
pub fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "X wins with best play",
        -1 => "O wins with best play",
        _ => "draw with best play",
    }
}

/// Write `value` as pretty-printed JSON to `path`
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> crate::Result<()> {
    let file = std::fs::File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}
