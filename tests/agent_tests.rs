//! Automated players and full simulated matches.

use supersymmetry::agents::{GreedyAgent, RandomAgent, Simulator};
use supersymmetry::core::{Color, GameConfig, GameRng, PlayerId};
use supersymmetry::game::Game;
use supersymmetry::rules::GameResult;

fn game(n: usize, colors: &[Color]) -> Game {
    let config = colors
        .iter()
        .enumerate()
        .fold(GameConfig::new(n), |config, (idx, &color)| {
            config.with_player(format!("p{idx}"), color)
        });
    Game::new(config).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Two greedy players on the smallest board both reach the far home.
#[test]
fn test_greedy_small_board_finishes() {
    init_tracing();
    let mut game = game(1, &[Color::Red, Color::Black]);
    let mut sim = Simulator::new(50)
        .with_agent(GreedyAgent::new(1))
        .with_agent(GreedyAgent::new(2));

    let report = sim.run(&mut game).unwrap();

    assert!(report.all_arrived(), "{report:?}");
    assert!(report.result.is_some());
    for p in PlayerId::all(2) {
        let turn = report.finished[p].unwrap();
        assert!(turn <= report.turns_played);
        assert!(game.has_arrived(p));
    }
    assert_eq!(report.finishing_order().len(), 2);
}

/// Greedy play on the standard two-player board finishes well inside the
/// turn limit.
#[test]
fn test_greedy_two_player_finishes() {
    let mut game = game(2, &[Color::Red, Color::Black]);
    let mut rng = GameRng::new(2024);
    let mut sim = Simulator::new(200)
        .with_agent(GreedyAgent::from_rng(rng.fork()))
        .with_agent(GreedyAgent::from_rng(rng.fork()));

    let report = sim.run(&mut game).unwrap();

    assert!(report.all_arrived(), "{report:?}");
    assert!(report.turns_played < 200);
    assert!(matches!(
        game.outcome(),
        Some(GameResult::Winner(_)) | Some(GameResult::Winners(_))
    ));
}

/// Random play with many seats runs to the turn limit without errors and
/// keeps every piece on the board.
#[test]
fn test_random_six_players() {
    let colors = Color::ALL;
    let mut game = game(2, &colors);
    let mut rng = GameRng::new(7);
    let mut sim = colors
        .iter()
        .fold(Simulator::new(60), |sim, _| sim.with_agent(RandomAgent::from_rng(rng.fork())));

    let report = sim.run(&mut game).unwrap();

    assert_eq!(report.turns_played, 60);
    assert_eq!(game.turn().turn_number, 61);
    for color in colors {
        assert_eq!(game.occupancy().pieces(color).count(), 3);
    }
}

/// Same seeds, same match.
#[test]
fn test_simulation_is_deterministic() {
    let run = || {
        let mut game = game(2, &[Color::Red, Color::Black, Color::Green]);
        let mut sim = Simulator::new(30)
            .with_agent(RandomAgent::new(11))
            .with_agent(GreedyAgent::new(12))
            .with_agent(RandomAgent::new(13).with_continue_probability(0.9));
        let report = sim.run(&mut game).unwrap();
        (report, game.export_state())
    };

    assert_eq!(run(), run());
}

/// A greedy seat arrives while a seat that always passes never does.
#[test]
fn test_greedy_beats_passing() {
    let mut game = game(2, &[Color::Red, Color::Green]);
    // Second seat has no agent and passes every turn.
    let mut sim = Simulator::new(200).with_agent(GreedyAgent::new(5));

    let report = sim.run(&mut game).unwrap();

    assert!(report.finished[PlayerId::new(0)].is_some(), "{report:?}");
    assert!(report.finished[PlayerId::new(1)].is_none());
    assert_eq!(game.outcome(), Some(GameResult::Winner(PlayerId::new(0))));
}
