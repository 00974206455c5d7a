//! Runs a whole match between agents.

use tracing::{debug, info};

use super::{pass, Agent};
use crate::core::{GameError, PlayerId, PlayerMap};
use crate::game::Game;
use crate::rules::GameResult;

/// What happened in a simulated match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationReport {
    /// Turn number on which each player arrived, if it did.
    pub finished: PlayerMap<Option<u32>>,

    /// Turns committed during the run.
    pub turns_played: u32,

    /// Outcome at the end of the run.
    pub result: Option<GameResult>,
}

impl SimulationReport {
    /// True if every player arrived before the turn limit.
    #[must_use]
    pub fn all_arrived(&self) -> bool {
        self.finished.values().all(Option::is_some)
    }

    /// Arrived players ordered by finishing turn.
    #[must_use]
    pub fn finishing_order(&self) -> Vec<PlayerId> {
        let mut order: Vec<(u32, PlayerId)> = self
            .finished
            .iter()
            .filter_map(|(p, turn)| turn.map(|t| (t, p)))
            .collect();
        order.sort_unstable();
        order.into_iter().map(|(_, p)| p).collect()
    }
}

/// Plays agents in turn order until every player has arrived or
/// `max_turns` turns have been committed.
///
/// Seat `k` is played by the `k`-th agent added. Seats without an agent,
/// and players that have already arrived, pass.
pub struct Simulator {
    agents: Vec<Box<dyn Agent>>,
    max_turns: u32,
}

impl Simulator {
    #[must_use]
    pub fn new(max_turns: u32) -> Self {
        Self {
            agents: Vec::new(),
            max_turns,
        }
    }

    /// Add the agent for the next seat (builder pattern).
    #[must_use]
    pub fn with_agent(mut self, agent: impl Agent + 'static) -> Self {
        self.agents.push(Box::new(agent));
        self
    }

    #[must_use]
    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Play `game` from its current state.
    pub fn run(&mut self, game: &mut Game) -> Result<SimulationReport, GameError> {
        let player_count = game.player_count();
        let mut finished: PlayerMap<Option<u32>> = PlayerMap::with_value(player_count, None);
        for p in PlayerId::all(player_count) {
            if game.has_arrived(p) {
                finished[p] = Some(game.turn().turn_number);
            }
        }

        let mut turns_played = 0;
        while turns_played < self.max_turns && finished.values().any(Option::is_none) {
            let active = game.active_player();
            let turn = game.turn().turn_number;

            match (finished[active], self.agents.get_mut(active.index())) {
                (None, Some(agent)) => {
                    let hops = agent.play_turn(game)?;
                    debug!(player = %active, turn, hops, "agent played");
                }
                _ => {
                    pass(game)?;
                }
            }
            turns_played += 1;

            for p in PlayerId::all(player_count) {
                if finished[p].is_none() && game.has_arrived(p) {
                    info!(player = %p, turn, "player arrived");
                    finished[p] = Some(turn);
                }
            }
        }

        info!(turns_played, "simulation finished");
        Ok(SimulationReport {
            finished,
            turns_played,
            result: game.outcome(),
        })
    }
}
