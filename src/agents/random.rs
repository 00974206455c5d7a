//! Uniformly random legal play.

use tracing::{debug, trace};

use super::{pass, Agent};
use crate::core::{Coord, GameError, GameRng, GameRngState};
use crate::game::Game;

/// Picks a random movable piece and follows a random legal hop chain.
///
/// After each jump the chain continues with probability
/// `continue_probability`, up to `max_hops`. A chain that ends where the
/// destination rules refuse to finish is abandoned and another tried; after
/// `max_attempts` failures the agent passes.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
    max_hops: u32,
    continue_probability: f64,
    max_attempts: u32,
}

impl RandomAgent {
    /// Create a random agent with its own seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a random agent from an existing (typically forked) stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng,
            max_hops: 8,
            continue_probability: 0.5,
            max_attempts: 16,
        }
    }

    /// Position of this agent's stream, for pausing a simulated match.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn with_max_hops(mut self, max_hops: u32) -> Self {
        self.max_hops = max_hops.max(1);
        self
    }

    #[must_use]
    pub fn with_continue_probability(mut self, probability: f64) -> Self {
        self.continue_probability = probability.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    fn hop_chain(&mut self, game: &mut Game) -> Result<u32, GameError> {
        let mut hops = 0;
        while hops < self.max_hops {
            let dests = game.legal_destinations();
            let Some(&to) = self.rng.choose(&dests) else {
                break;
            };
            game.attempt_move(to)?;
            hops += 1;

            if game.turn().single_step_made || !self.rng.gen_bool(self.continue_probability) {
                break;
            }
        }
        Ok(hops)
    }
}

impl Agent for RandomAgent {
    fn play_turn(&mut self, game: &mut Game) -> Result<u32, GameError> {
        game.cancel_turn();

        for attempt in 0..self.max_attempts {
            let movable: Vec<Coord> = game
                .own_pieces()
                .into_iter()
                .filter(|&at| !game.legal_destinations_from(at).is_empty())
                .collect();
            let Some(&piece) = self.rng.choose(&movable) else {
                break;
            };

            game.select(piece)?;
            let hops = self.hop_chain(game)?;
            if hops > 0 && game.check_commit().is_ok() {
                game.commit_turn()?;
                return Ok(hops);
            }

            trace!(attempt, %piece, hops, "abandoning hop chain");
            game.cancel_turn();
        }

        debug!(player = %game.active_player(), "no committable move found, passing");
        pass(game)?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, GameConfig, PlayerId};

    fn game() -> Game {
        Game::new(
            GameConfig::new(2)
                .with_player("ada", Color::Red)
                .with_player("bob", Color::Black),
        )
        .unwrap()
    }

    #[test]
    fn test_plays_a_turn() {
        let mut game = game();
        let mut agent = RandomAgent::new(7);

        let hops = agent.play_turn(&mut game).unwrap();

        assert!(hops >= 1);
        assert_eq!(game.active_player(), PlayerId::new(1));
        assert_eq!(game.occupancy().pieces(Color::Red).count(), 3);
    }

    #[test]
    fn test_same_seed_same_play() {
        let mut a = game();
        let mut b = game();
        let mut agent_a = RandomAgent::new(99);
        let mut agent_b = RandomAgent::new(99);

        for _ in 0..6 {
            agent_a.play_turn(&mut a).unwrap();
            agent_b.play_turn(&mut b).unwrap();
        }

        assert_eq!(a.occupancy(), b.occupancy());
    }

    #[test]
    fn test_resumed_stream_repeats_play() {
        let mut game = game();
        let mut agent = RandomAgent::new(21);
        agent.play_turn(&mut game).unwrap();

        let saved = game.export_state();
        let mut resumed = RandomAgent::from_rng(GameRng::from_state(&agent.rng_state()));
        let mut replay = game.clone();

        agent.play_turn(&mut game).unwrap();
        resumed.play_turn(&mut replay).unwrap();

        assert_ne!(game.export_state(), saved);
        assert_eq!(game.export_state(), replay.export_state());
    }

    #[test]
    fn test_zero_attempts_passes() {
        let mut game = game();
        let start = game.occupancy().clone();
        let mut agent = RandomAgent::new(1).with_max_attempts(0);

        assert_eq!(agent.play_turn(&mut game).unwrap(), 0);
        assert_eq!(game.occupancy(), &start);
        assert_eq!(game.active_player(), PlayerId::new(1));
    }
}
