//! Subcommands of the `ttt` binary

pub mod analyze;
pub mod best_move;
pub mod evaluate;
pub mod play;
