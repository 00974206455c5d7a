//! Core types: coordinates, colours, players, configuration, RNG, errors.
//!
//! Everything here is independent of any particular board instance.

pub mod color;
pub mod config;
pub mod coord;
pub mod error;
pub mod player;
pub mod rng;

pub use color::{Classification, Color, Pair};
pub use config::{GameConfig, PlayerConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use coord::{Axis, Coord, Interior, Line};
pub use error::{ConfigError, GameError, SelectionIssue, SnapshotError, TopologyError};
pub use player::{Player, PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{GameRng, GameRngState};
