//! Turn bookkeeping: who acts, hops made, and the pre-turn snapshot.
//!
//! ## Phases
//!
//! - `Idle`: the active player has nothing selected
//! - `Selected`: a piece is selected, no hop applied yet
//! - `Moving`: one or more hops applied, not yet committed
//!
//! The snapshot is the occupancy as of the start of the turn. It is taken
//! at the first selection of a turn and dropped on commit or rollback, so
//! it exists whenever a hop is pending.

use serde::{Deserialize, Serialize};

use crate::board::Occupancy;
use crate::core::{Coord, PlayerId};

/// Where the active player is within their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    Idle,
    Selected,
    Moving,
}

/// Mutable per-turn state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Player whose turn it is.
    pub active_player: PlayerId,

    /// Turn number (starts at 1, advanced on every commit).
    pub turn_number: u32,

    /// Hops applied this turn.
    pub hops: u32,

    /// A single-step hop was applied this turn; no further hop is allowed.
    pub single_step_made: bool,

    /// Occupancy at the start of the turn.
    snapshot: Option<Occupancy>,
}

impl TurnState {
    /// First turn, for `first` player.
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        Self {
            active_player: first,
            turn_number: 1,
            hops: 0,
            single_step_made: false,
            snapshot: None,
        }
    }

    /// Current phase given the active player's selection.
    #[must_use]
    pub fn phase(&self, selection: Option<Coord>) -> TurnPhase {
        match (selection, self.hops) {
            (None, _) => TurnPhase::Idle,
            (Some(_), 0) => TurnPhase::Selected,
            (Some(_), _) => TurnPhase::Moving,
        }
    }

    /// Save the start-of-turn occupancy unless already saved this turn.
    pub fn arm_snapshot(&mut self, occupancy: &Occupancy) {
        if self.snapshot.is_none() {
            self.snapshot = Some(occupancy.clone());
        }
    }

    /// The start-of-turn occupancy, if saved.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Occupancy> {
        self.snapshot.as_ref()
    }

    /// Record an applied hop `from -> to`.
    pub fn record_hop(&mut self, from: Coord, to: Coord) {
        self.hops += 1;
        self.single_step_made |= from.is_single_step(to);
    }

    /// Clear hop bookkeeping and hand back the snapshot for restoring.
    pub fn reset(&mut self) -> Option<Occupancy> {
        self.hops = 0;
        self.single_step_made = false;
        self.snapshot.take()
    }

    /// Commit: rotate to the next player and start a fresh turn.
    pub fn advance(&mut self, player_count: usize) {
        self.reset();
        self.active_player = self.active_player.next(player_count);
        self.turn_number += 1;
    }
}
