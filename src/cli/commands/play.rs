//! Play command - interactive game against the solver

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    Error,
    cli::{config::PlayConfig, output::render_board},
    pipeline::MinimaxAgent,
    ports::Agent,
    search::SearchConfig,
    tictactoe::{Action, Board, Game, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the solver")]
pub struct PlayArgs {
    /// Which token you play (`x` moves first)
    #[arg(long, default_value = "x")]
    pub human: Player,

    /// Search root subtrees in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl From<&PlayArgs> for PlayConfig {
    fn from(args: &PlayArgs) -> Self {
        Self {
            human: args.human,
            parallel: args.parallel,
        }
    }
}

/// Human player reading `row col` lines from `input`.
///
/// Unparseable or illegal input is reported on `output` and asked again.
pub struct ConsoleAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead + Send, W: Write + Send> ConsoleAgent<R, W> {
    pub fn new(name: String, input: R, output: W) -> Self {
        Self {
            name,
            input,
            output,
        }
    }

    fn prompt(&mut self, player: Player) -> crate::Result<Option<String>> {
        write!(self.output, "{player} to move (row col): ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead + Send, W: Write + Send> Agent for ConsoleAgent<R, W> {
    fn select_action(&mut self, board: &Board) -> crate::Result<Action> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }

        loop {
            let Some(line) = self.prompt(board.player())? else {
                return Err(Error::Io {
                    operation: "read move".to_string(),
                    source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
                });
            };

            let checked = line
                .trim()
                .parse::<Action>()
                .and_then(|action| board.result(action).map(|_| action));
            match checked {
                Ok(action) => return Ok(action),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = PlayConfig::from(&args);
    let mut human = ConsoleAgent::new(
        "Human".to_string(),
        io::BufReader::new(io::stdin()),
        io::stdout(),
    );
    let mut computer = MinimaxAgent::with_config(
        "Computer".to_string(),
        SearchConfig::new().with_parallel_root(config.parallel),
    );

    info!(human = %config.human, parallel = config.parallel, "starting game");
    let outcome = play_interactive(&config, &mut human, &mut computer, &mut io::stdout())?;

    match (outcome.winner(), outcome) {
        (Some(winner), _) if winner == config.human => println!("You win!"),
        (Some(winner), _) => println!("Game over: {winner} wins."),
        (None, Outcome::Draw) => println!("Game over: tie."),
        (None, _) => println!("Game over."),
    }
    Ok(())
}

/// Alternate human and computer moves until the board is terminal
pub fn play_interactive(
    config: &PlayConfig,
    human: &mut dyn Agent,
    computer: &mut dyn Agent,
    out: &mut dyn Write,
) -> crate::Result<Outcome> {
    let mut game = Game::new();
    while !game.is_over() {
        writeln!(out, "\n{}", render_board(game.board()))?;
        let action = if game.board().player() == config.human {
            human.select_action(game.board())?
        } else {
            writeln!(out, "Computer thinking...")?;
            let action = computer.select_action(game.board())?;
            writeln!(out, "Computer plays {action}")?;
            action
        };
        game.play(action)?;
    }
    writeln!(out, "\n{}", render_board(game.board()))?;
    Ok(game.outcome())
}
