//! Arrival and game outcome.
//!
//! A colour's target is its partner's home, on the opposite star point. A
//! player has arrived once every target cell holds one of its pieces.

use super::session::Game;
use crate::core::PlayerId;
use crate::rules::GameResult;

impl Game {
    /// True if `player` has filled the home opposite its own.
    #[must_use]
    pub fn has_arrived(&self, player: PlayerId) -> bool {
        let Some(color) = self.players().get(player).map(|p| p.color) else {
            return false;
        };
        let mut target = self.topology().home_cells(color.partner()).peekable();
        target.peek().is_some() && target.all(|at| self.occupancy().get(at) == Some(color))
    }

    /// Players that have arrived, in registration order.
    #[must_use]
    pub fn arrived(&self) -> Vec<PlayerId> {
        PlayerId::all(self.player_count())
            .filter(|&p| self.has_arrived(p))
            .collect()
    }

    /// The result once any player has arrived.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        let mut arrived = self.arrived();
        match arrived.len() {
            0 => None,
            1 => arrived.pop().map(GameResult::Winner),
            _ => Some(GameResult::Winners(arrived)),
        }
    }
}
