//! Error types for board construction, configuration, play and snapshots.
//!
//! `InvalidSelection` and `IllegalMove` are recoverable and leave the game
//! untouched. `IllegalDestination` is reported after the turn has already
//! been rolled back. `TopologyError` indicates a construction defect.

use thiserror::Error;

use super::color::Color;
use super::coord::Coord;
use crate::rules::RuleId;

/// Why a selection (or a move without one) was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionIssue {
    #[error("no current player")]
    NoActivePlayer,

    #[error("{0} is outside the board")]
    OutOfBounds(Coord),

    #[error("must choose an own piece, {0} is not one")]
    NotOwnPiece(Coord),

    #[error("no piece is selected")]
    NothingSelected,

    #[error("no own piece can end the turn where it stands")]
    NoCommittablePiece,
}

/// Errors surfaced by game operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// Selection refused; state unchanged.
    #[error("invalid selection: {0}")]
    InvalidSelection(SelectionIssue),

    /// A transit rule rejected the move; state unchanged.
    #[error("{description}, tried {from} --> {to}")]
    IllegalMove {
        rule: RuleId,
        description: String,
        from: Coord,
        to: Coord,
    },

    /// A destination rule rejected the commit; the turn was rolled back.
    #[error("{description}, tried landing on {at}")]
    IllegalDestination {
        rule: RuleId,
        description: String,
        at: Coord,
    },

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl From<SelectionIssue> for GameError {
    fn from(issue: SelectionIssue) -> Self {
        GameError::InvalidSelection(issue)
    }
}

/// Topology construction defect.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("failed to classify cell (i={i}, j={j}) for board size {n}")]
    MalformedConfiguration { n: usize, i: i32, j: i32 },

    #[error("board size {0} is outside 1..={max}", max = crate::core::MAX_BOARD_SIZE)]
    UnsupportedSize(usize),
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be between 1 and {max}, got {0}", max = crate::core::MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),

    #[error("at least one player must be registered")]
    NoPlayers,

    #[error("at most {max} players supported, got {count}")]
    TooManyPlayers { count: usize, max: usize },

    #[error("colour {0} is registered more than once")]
    DuplicateColor(Color),

    #[error("no rule with id {0}")]
    UnknownRule(RuleId),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Snapshot export/import failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode or decode snapshot: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot is for board size {found}, engine has {expected}")]
    BoardSizeMismatch { expected: usize, found: usize },

    #[error("snapshot occupancy has {found} cells, expected {expected}")]
    GridMismatch { expected: usize, found: usize },

    #[error("snapshot player roster does not match the registered players")]
    RosterMismatch,

    #[error("snapshot active player {0} is not registered")]
    UnknownActivePlayer(u8),
}
