//! Progress-maximising play.
//!
//! Progress is measured in hexagonal steps toward the apex of the target
//! home (the partner's home cell farthest from the board centre). For each
//! own piece the agent enumerates every hop chain up to `max_depth` hops,
//! visiting each cell at most once per piece, and keeps the committable
//! endpoints. The best-scoring chains form a pool; ties are broken at
//! random.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::{pass, Agent};
use crate::board::Topology;
use crate::core::{Color, Coord, GameError, GameRng};
use crate::game::Game;

/// A hop chain for one piece.
#[derive(Clone, Debug)]
struct Plan {
    piece: Coord,
    path: Vec<Coord>,
}

/// Takes the reachable endpoint closest to the target home.
#[derive(Clone, Debug)]
pub struct GreedyAgent {
    rng: GameRng,
    max_depth: usize,
}

impl GreedyAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng, max_depth: 6 }
    }

    /// Longest hop chain searched.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Committable hop chains from the current selection. `game` is a
    /// scratch copy; the real game is never touched.
    fn explore(
        &self,
        game: &Game,
        path: &mut Vec<Coord>,
        seen: &mut FxHashSet<Coord>,
        out: &mut Vec<Vec<Coord>>,
    ) -> Result<(), GameError> {
        for to in game.legal_destinations() {
            if !seen.insert(to) {
                continue;
            }

            let mut next = game.clone();
            next.attempt_move(to)?;
            path.push(to);

            if next.check_commit().is_ok() {
                out.push(path.clone());
            }
            if path.len() < self.max_depth && !next.turn().single_step_made {
                self.explore(&next, path, seen, out)?;
            }

            path.pop();
        }
        Ok(())
    }

    fn best_plans(&self, game: &Game, target: Coord) -> Result<Vec<Plan>, GameError> {
        let mut best = Vec::new();
        let mut best_score = i64::MIN;

        for piece in game.own_pieces() {
            let mut probe = game.clone();
            probe.select(piece)?;

            let mut seen = FxHashSet::default();
            seen.insert(piece);
            let mut chains = Vec::new();
            self.explore(&probe, &mut Vec::new(), &mut seen, &mut chains)?;

            let before = i64::from(piece.hex_distance(target));
            for path in chains {
                let Some(&end) = path.last() else { continue };
                let score = before - i64::from(end.hex_distance(target));
                if score > best_score {
                    best_score = score;
                    best.clear();
                }
                if score == best_score {
                    best.push(Plan { piece, path });
                }
            }
        }
        Ok(best)
    }
}

/// The target home cell farthest from the centre.
fn target_apex(topology: &Topology, color: Color) -> Option<Coord> {
    let mid = (2 * topology.size()) as i32;
    let center = Coord::new(mid, mid);
    topology
        .home_cells(color.partner())
        .max_by_key(|at| at.hex_distance(center))
}

impl Agent for GreedyAgent {
    fn play_turn(&mut self, game: &mut Game) -> Result<u32, GameError> {
        game.cancel_turn();

        let color = game.players()[game.active_player()].color;
        let Some(target) = target_apex(game.topology(), color) else {
            pass(game)?;
            return Ok(0);
        };

        let plans = self.best_plans(game, target)?;
        let Some(plan) = self.rng.choose(&plans) else {
            debug!(player = %game.active_player(), "no committable chain, passing");
            pass(game)?;
            return Ok(0);
        };

        game.select(plan.piece)?;
        for &to in &plan.path {
            game.attempt_move(to)?;
        }
        game.commit_turn()?;
        Ok(plan.path.len() as u32)
    }
}
