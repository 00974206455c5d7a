//! Turn state machine: selection, hops, commit, rollback and rotation.

use supersymmetry::board::Occupancy;
use supersymmetry::core::{Color, Coord, GameConfig, GameError, PlayerId, SelectionIssue};
use supersymmetry::game::Game;
use supersymmetry::rules::RuleId;
use supersymmetry::turn::TurnPhase;

fn c(i: i32, j: i32) -> Coord {
    Coord::new(i, j)
}

fn two_player() -> Game {
    Game::new(
        GameConfig::new(2)
            .with_player("ada", Color::Red)
            .with_player("bob", Color::Black),
    )
    .unwrap()
}

/// Replace the board with the given pieces (turn state untouched).
fn with_pieces(game: &mut Game, pieces: &[(i32, i32, Color)]) {
    let mut snapshot = game.export_state();
    snapshot.occupancy = Occupancy::empty(game.topology().width());
    for &(i, j, color) in pieces {
        snapshot.occupancy.place(c(i, j), color);
    }
    game.import_state(snapshot).unwrap();
}

/// Three players A, B, C: A's commit hands over to B, C's wraps to A.
#[test]
fn test_turn_rotation() {
    let mut game = Game::new(
        GameConfig::new(2)
            .with_player("a", Color::Red)
            .with_player("b", Color::Black)
            .with_player("c", Color::Green),
    )
    .unwrap();

    // Red single step.
    game.select(c(5, 6)).unwrap();
    game.attempt_move(c(4, 6)).unwrap();
    assert_eq!(game.commit_turn().unwrap(), PlayerId::new(1));

    // Black single step.
    game.select(c(3, 2)).unwrap();
    game.attempt_move(c(4, 2)).unwrap();
    assert_eq!(game.commit_turn().unwrap(), PlayerId::new(2));

    // Green single step wraps around.
    game.select(c(1, 5)).unwrap();
    game.attempt_move(c(2, 5)).unwrap();
    assert_eq!(game.commit_turn().unwrap(), PlayerId::new(0));

    assert_eq!(game.turn().turn_number, 4);
    assert_eq!(game.phase(), TurnPhase::Idle);
}

/// A single step ends the turn's movement, whatever comes next.
#[test]
fn test_single_step_is_final() {
    let mut game = two_player();
    game.select(c(5, 6)).unwrap();
    game.attempt_move(c(4, 6)).unwrap();
    assert!(game.turn().single_step_made);

    for to in [c(3, 6), c(4, 5), c(2, 6)] {
        let err = game.attempt_move(to).unwrap_err();
        assert!(
            matches!(err, GameError::IllegalMove { rule: RuleId::SingleHopIsFinal, .. }),
            "{to}: {err}"
        );
    }
    assert!(game.legal_destinations().is_empty());
}

/// A rejected move changes nothing: board, selection and hop count stay.
#[test]
fn test_illegal_move_leaves_state() {
    let mut game = two_player();
    game.select(c(5, 6)).unwrap();
    let before = game.export_state();

    let err = game.attempt_move(c(3, 6)).unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { rule: RuleId::NoGaps, .. }));
    assert_eq!(
        err.to_string(),
        "Can not cross gaps without jumping over a piece, tried (5, 6) --> (3, 6)"
    );

    assert_eq!(game.export_state(), before);
    assert_eq!(game.selection(), Some(c(5, 6)));
}

/// Jump chain into enemy territory: commit fails and the board returns to
/// the start of the turn.
#[test]
fn test_rollback_on_illegal_destination() {
    let mut game = two_player();
    with_pieces(
        &mut game,
        &[
            (4, 2, Color::Red),
            (4, 3, Color::Black),
            (3, 5, Color::Black),
            (2, 7, Color::Black),
        ],
    );
    let start = game.occupancy().clone();

    game.select(c(4, 2)).unwrap();
    game.attempt_move(c(4, 4)).unwrap();
    game.attempt_move(c(2, 6)).unwrap();
    game.attempt_move(c(2, 8)).unwrap();
    assert_eq!(game.turn().hops, 3);
    assert_eq!(game.phase(), TurnPhase::Moving);

    let err = game.commit_turn().unwrap_err();
    assert!(matches!(
        err,
        GameError::IllegalDestination { rule: RuleId::NoEnemyFinishing, .. }
    ));
    assert_eq!(
        err.to_string(),
        "Can not finish in enemy territory, tried landing on (2, 8)"
    );

    assert_eq!(game.occupancy(), &start);
    assert_eq!(game.active_player(), PlayerId::new(0));
    assert_eq!(game.phase(), TurnPhase::Idle);
    assert_eq!(game.turn().hops, 0);
    assert!(!game.turn().single_step_made);
    assert!(game.turn().snapshot().is_none());
    assert_eq!(game.turn().turn_number, 1);
}

/// The same chain stopping on neutral ground commits.
#[test]
fn test_multi_hop_commit() {
    let mut game = two_player();
    with_pieces(
        &mut game,
        &[
            (4, 2, Color::Red),
            (4, 3, Color::Black),
            (3, 5, Color::Black),
        ],
    );

    game.select(c(4, 2)).unwrap();
    game.attempt_move(c(4, 4)).unwrap();
    game.attempt_move(c(2, 6)).unwrap();
    assert_eq!(game.commit_turn().unwrap(), PlayerId::new(1));

    assert_eq!(game.occupancy().get(c(2, 6)), Some(Color::Red));
    assert_eq!(game.occupancy().get(c(4, 2)), None);
}

/// Re-selecting before any hop only re-targets; the snapshot is kept.
#[test]
fn test_reselect_without_hops() {
    let mut game = two_player();
    game.select(c(5, 6)).unwrap();
    let snapshot = game.turn().snapshot().cloned();

    game.select(c(6, 6)).unwrap();

    assert_eq!(game.selection(), Some(c(6, 6)));
    assert_eq!(game.phase(), TurnPhase::Selected);
    assert_eq!(game.turn().snapshot().cloned(), snapshot);
}

/// Re-selecting after a hop rolls the turn back first.
#[test]
fn test_reselect_after_hop_rolls_back() {
    let mut game = two_player();
    let start = game.occupancy().clone();

    game.select(c(5, 6)).unwrap();
    game.attempt_move(c(4, 6)).unwrap();
    game.select(c(6, 6)).unwrap();

    assert_eq!(game.occupancy(), &start);
    assert_eq!(game.selection(), Some(c(6, 6)));
    assert_eq!(game.turn().hops, 0);
    assert!(!game.turn().single_step_made);

    // The fresh selection can move normally.
    let err = game.attempt_move(c(5, 5)).unwrap_err();
    assert!(
        matches!(err, GameError::IllegalMove { rule: RuleId::Line, .. }),
        "{err}"
    );
    game.select(c(6, 5)).unwrap();
    game.attempt_move(c(5, 5)).unwrap();
}

/// After a hop, only pieces owned at the start of the turn are selectable.
#[test]
fn test_reselect_moved_piece_refused() {
    let mut game = two_player();
    game.select(c(5, 6)).unwrap();
    game.attempt_move(c(4, 6)).unwrap();
    let before = game.export_state();

    let err = game.select(c(4, 6)).unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidSelection(SelectionIssue::NotOwnPiece(_))
    ));
    assert_eq!(game.export_state(), before);
}

/// Committing without a hop is a pass.
#[test]
fn test_commit_without_hop_passes() {
    let mut game = two_player();
    let start = game.occupancy().clone();

    game.select(c(6, 6)).unwrap();
    assert_eq!(game.commit_turn().unwrap(), PlayerId::new(1));
    assert_eq!(game.occupancy(), &start);
}

/// Selecting an opponent's piece or an empty cell is refused.
#[test]
fn test_select_requires_own_piece() {
    let mut game = two_player();

    for at in [c(2, 2), c(4, 4), c(0, 0)] {
        let err = game.select(at).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("invalid selection: must choose an own piece, {at} is not one")
        );
    }
    assert_eq!(game.phase(), TurnPhase::Idle);
}

/// Disabling a rule mid-game takes effect on the next attempt.
#[test]
fn test_rules_toggle_mid_game() {
    let mut game = two_player();
    game.select(c(5, 6)).unwrap();
    assert!(game.attempt_move(c(3, 6)).is_err());

    game.rules_mut().set_enabled(&RuleId::NoGaps, false).unwrap();
    game.attempt_move(c(3, 6)).unwrap();
    assert_eq!(game.selection(), Some(c(3, 6)));
}
