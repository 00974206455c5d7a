//! Exportable game state for hosts that persist or relay games.
//!
//! A `GameSnapshot` holds everything that changes during play: occupancy,
//! turn state and the player roster (with transient selections). Static
//! data (topology, rules) is rebuilt from configuration on import.
//!
//! The byte form uses `bincode`; every type also derives serde traits so
//! hosts may pick another format.

use serde::{Deserialize, Serialize};

use super::state::TurnState;
use crate::board::Occupancy;
use crate::core::{Player, SnapshotError};

/// Complete mutable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board size parameter the occupancy was built for.
    pub board_size: usize,
    pub occupancy: Occupancy,
    pub turn: TurnState,
    /// Players in turn order.
    pub players: Vec<Player>,
}

impl GameSnapshot {
    /// Encode to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
