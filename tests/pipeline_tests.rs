//! Integration tests for agents and the match pipeline

use ttt_minimax::{
    Action, Outcome, Player,
    pipeline::{Agent, MinimaxAgent, RandomAgent, SeriesConfig, play_game, run_series},
    tictactoe::Game,
};

#[test]
fn minimax_never_loses_to_random_as_x() {
    let mut solver = MinimaxAgent::new("Minimax".to_string());
    let mut random = RandomAgent::with_seed("Random".to_string(), 11);

    let summary = run_series(&SeriesConfig::new(6), &mut solver, &mut random).unwrap();
    assert_eq!(summary.games, 6);
    assert_eq!(summary.losses_for(Player::X), 0);
}

#[test]
fn minimax_never_loses_to_random_as_o() {
    let mut random = RandomAgent::with_seed("Random".to_string(), 12);
    let mut solver = MinimaxAgent::new("Minimax".to_string());

    let summary = run_series(&SeriesConfig::new(10), &mut random, &mut solver).unwrap();
    assert_eq!(summary.games, 10);
    assert_eq!(summary.o_wins + summary.draws, 10);
}

#[test]
fn game_history_replays_to_final_board() {
    let mut x = RandomAgent::with_seed("X".to_string(), 5);
    let mut o = MinimaxAgent::new("O".to_string());
    let game = play_game(&mut x, &mut o).unwrap();

    assert!(game.is_over());
    let boards = game.board_sequence().unwrap();
    assert_eq!(boards.len(), game.moves.len() + 1);
    assert_eq!(boards.last(), Some(game.board()));

    for (i, mv) in game.moves.iter().enumerate() {
        let expected = if i % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(mv.player, expected);
    }
}

#[test]
fn minimax_agent_finishes_a_started_game() {
    // X took a corner, O answered on an adjacent edge; X can force a win.
    let mut game = Game::new();
    game.play(Action::new(0, 0)).unwrap();
    game.play(Action::new(0, 1)).unwrap();

    let mut x = MinimaxAgent::new("X".to_string());
    let mut o = MinimaxAgent::new("O".to_string());
    while !game.is_over() {
        let agent: &mut dyn Agent = match game.board().player() {
            Player::X => &mut x,
            Player::O => &mut o,
        };
        let action = agent.select_action(game.board()).unwrap();
        game.play(action).unwrap();
    }
    assert_eq!(game.outcome(), Outcome::XWins);
}
