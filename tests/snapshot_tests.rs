//! Export/import of the mutable game state.

use supersymmetry::core::{Color, Coord, GameConfig, PlayerId, SnapshotError};
use supersymmetry::game::Game;
use supersymmetry::turn::{GameSnapshot, TurnPhase};

fn config() -> GameConfig {
    GameConfig::new(2)
        .with_player("ada", Color::Red)
        .with_player("bob", Color::Black)
        .with_player("cy", Color::Yellow)
}

/// A game one full turn in, with the second player mid-turn.
fn mid_turn() -> Game {
    let mut game = Game::new(config()).unwrap();
    game.select(Coord::new(5, 6)).unwrap();
    game.attempt_move(Coord::new(4, 6)).unwrap();
    game.commit_turn().unwrap();

    game.select(Coord::new(3, 2)).unwrap();
    game.attempt_move(Coord::new(4, 2)).unwrap();
    game
}

/// Bytes round-trip into a fresh engine reproduces board and turn state.
#[test]
fn test_bincode_roundtrip_into_fresh_game() {
    let game = mid_turn();
    let bytes = game.export_state().to_bytes().unwrap();

    let restored = Game::from_snapshot(config(), GameSnapshot::from_bytes(&bytes).unwrap()).unwrap();

    assert_eq!(restored.occupancy(), game.occupancy());
    assert_eq!(restored.turn(), game.turn());
    assert_eq!(restored.active_player(), PlayerId::new(1));
    assert_eq!(restored.selection(), Some(Coord::new(4, 2)));
    assert_eq!(restored.phase(), TurnPhase::Moving);
}

/// The in-progress turn survives: rolling back after import restores the
/// start of that turn.
#[test]
fn test_rollback_after_import() {
    let game = mid_turn();
    let mut restored = Game::from_snapshot(config(), game.export_state()).unwrap();

    restored.cancel_turn();

    assert_eq!(restored.occupancy().get(Coord::new(3, 2)), Some(Color::Black));
    assert_eq!(restored.occupancy().get(Coord::new(4, 2)), None);
    assert_eq!(restored.occupancy().get(Coord::new(4, 6)), Some(Color::Red));
    assert_eq!(restored.active_player(), PlayerId::new(1));
}

/// Any serde format works; JSON is what relays usually carry.
#[test]
fn test_json_roundtrip() {
    let game = mid_turn();
    let json = serde_json::to_string(&game.export_state()).unwrap();
    let snapshot: GameSnapshot = serde_json::from_str(&json).unwrap();

    let mut fresh = Game::new(config()).unwrap();
    fresh.import_state(snapshot).unwrap();
    assert_eq!(fresh.export_state(), game.export_state());
}

/// Play continues normally after import.
#[test]
fn test_play_continues_after_import() {
    let game = mid_turn();
    let mut restored = Game::from_snapshot(config(), game.export_state()).unwrap();

    assert_eq!(restored.commit_turn().unwrap(), PlayerId::new(2));
    assert_eq!(restored.turn().turn_number, 3);
}

/// Snapshots from a different roster or board are refused untouched.
#[test]
fn test_import_mismatch() {
    let mut game = Game::new(config()).unwrap();
    let before = game.export_state();

    let mut snapshot = mid_turn().export_state();
    snapshot.players.pop();
    let err = game.import_state(snapshot).unwrap_err();
    assert!(matches!(err, SnapshotError::RosterMismatch));

    let mut snapshot = mid_turn().export_state();
    snapshot.turn.active_player = PlayerId::new(7);
    let err = game.import_state(snapshot).unwrap_err();
    assert!(matches!(err, SnapshotError::UnknownActivePlayer(7)));

    let small = Game::new(GameConfig::new(1).with_player("ada", Color::Red)).unwrap();
    let mut snapshot = small.export_state();
    snapshot.board_size = 2;
    snapshot.players = before.players.clone();
    let err = game.import_state(snapshot).unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::GridMismatch { expected: 81, found: 25 }
    ));

    assert_eq!(game.export_state(), before);
}

/// Garbage bytes are a codec error, not a panic.
#[test]
fn test_garbage_bytes() {
    let err = GameSnapshot::from_bytes(&[0xff; 7]).unwrap_err();
    assert!(matches!(err, SnapshotError::Codec(_)));
}
