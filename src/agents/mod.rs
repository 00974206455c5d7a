//! Automated players and a match simulator.
//!
//! Agents drive a `Game` through its public turn operations only, so
//! every rule applies to them exactly as to a human caller.
//!
//! - `RandomAgent`: random piece, random legal hop chain
//! - `GreedyAgent`: searches hop chains, takes the one with most progress
//! - `Simulator`: rotates agents until everyone arrives or a turn limit

mod greedy;
mod random;
mod simulator;

pub use greedy::GreedyAgent;
pub use random::RandomAgent;
pub use simulator::{SimulationReport, Simulator};

use crate::core::{GameError, PlayerId, SelectionIssue};
use crate::game::Game;

/// Plays whole turns for the active player.
pub trait Agent: Send {
    /// Play the active player's turn through to a successful commit.
    ///
    /// Returns the number of hops made (0 for a pass).
    fn play_turn(&mut self, game: &mut Game) -> Result<u32, GameError>;
}

/// End the active player's turn without moving.
///
/// Any turn in progress is abandoned first. The first own piece whose
/// position passes the destination rules is committed in place.
pub fn pass(game: &mut Game) -> Result<PlayerId, GameError> {
    game.cancel_turn();
    for at in game.own_pieces() {
        game.select(at)?;
        if game.check_commit().is_ok() {
            return game.commit_turn();
        }
    }
    game.cancel_turn();
    Err(SelectionIssue::NoCommittablePiece.into())
}
