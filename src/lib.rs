//! # supersymmetry
//!
//! Rule engine and turn state machine for Supersymmetry, a six-pointed-star
//! peg-jumping game with multi-hop jumps, a mirror-symmetry constraint on
//! jumps, and territory restrictions.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Every operation takes the game it acts on; there
//!    is no global "current game". Hosts serialise access to an instance.
//!
//! 2. **Rules As Data**: Each rule is a tagged record plus a pure predicate
//!    over a read-only context, so rules can be toggled, reordered, tested
//!    in isolation and extended with custom predicates.
//!
//! 3. **Atomic Turns**: A turn is any number of hops followed by a commit.
//!    The start-of-turn board is kept as a snapshot; a rejected commit
//!    restores it wholesale.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Occupancy is an `im::Vector`, so the
//!   per-turn snapshot and exported states are O(1) clones.
//!
//! - **Skewed Grid**: Cells are `(i, j)` on a `(4n + 1)²` grid; rows,
//!   columns and the anti-diagonal are the hexagonal lines.
//!
//! ## Modules
//!
//! - `core`: Coordinates, colours, players, configuration, RNG, errors
//! - `board`: Cell classification and piece occupancy
//! - `rules`: Transit and destination rules and the rule engine
//! - `turn`: Turn bookkeeping and exportable snapshots
//! - `game`: The playable game and victory detection
//! - `agents`: Automated players and a match simulator

pub mod agents;
pub mod board;
pub mod core;
pub mod game;
pub mod rules;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    Axis, Classification, Color, ConfigError, Coord, GameConfig, GameError, GameRng,
    GameRngState, Line, Pair, Player, PlayerConfig, PlayerId, PlayerMap, SelectionIssue,
    SnapshotError, TopologyError,
};

pub use crate::board::{Occupancy, Topology};

pub use crate::rules::{
    DestinationRule, GameResult, Rule, RuleContext, RuleEngine, RuleId, TransitRule,
};

pub use crate::turn::{GameSnapshot, TurnPhase, TurnState};

pub use crate::game::Game;

pub use crate::agents::{Agent, GreedyAgent, RandomAgent, SimulationReport, Simulator};
