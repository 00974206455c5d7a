//! Ordered rule evaluation.
//!
//! The engine owns two ordered collections:
//! - **transit rules**, checked on every move attempt `(from, to)`,
//! - **destination rules**, checked once at commit against the final cell.
//!
//! Evaluation walks a collection in order, skips disabled rules and stops
//! at the first enabled rule whose predicate fails. Order decides only
//! which failure is reported; a move is legal exactly when every enabled
//! rule passes.

use rustc_hash::FxHashMap;
use tracing::{trace, warn};

use crate::core::{ConfigError, Coord, GameError, PlayerId};

use super::destination;
use super::rule::{DestinationRule, RuleContext, RuleId, TransitRule};
use super::transit;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A single player has arrived.
    Winner(PlayerId),
    /// Several players arrived on the same turn count.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Ordered transit and destination rule collections.
#[derive(Clone, Debug)]
pub struct RuleEngine {
    transit: Vec<TransitRule>,
    destination: Vec<DestinationRule>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleEngine {
    /// The standard rule set with its default toggles.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            transit: transit::standard(),
            destination: destination::standard(),
        }
    }

    /// An engine with no rules: every move and commit is legal.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            transit: Vec::new(),
            destination: Vec::new(),
        }
    }

    /// The standard rule set with per-rule enabled overrides applied.
    pub fn with_overrides(overrides: &FxHashMap<RuleId, bool>) -> Result<Self, ConfigError> {
        let mut engine = Self::standard();
        for (id, &enabled) in overrides {
            engine.set_enabled(id, enabled)?;
        }
        Ok(engine)
    }

    // === Rule Management ===

    /// Append a transit rule (evaluated after the existing ones).
    pub fn add_transit(&mut self, rule: TransitRule) {
        self.transit.push(rule);
    }

    /// Append a destination rule.
    pub fn add_destination(&mut self, rule: DestinationRule) {
        self.destination.push(rule);
    }

    /// Transit rules in evaluation order.
    #[must_use]
    pub fn transit_rules(&self) -> &[TransitRule] {
        &self.transit
    }

    /// Destination rules in evaluation order.
    #[must_use]
    pub fn destination_rules(&self) -> &[DestinationRule] {
        &self.destination
    }

    /// Whether a rule is enabled, or `None` if no rule has this id.
    #[must_use]
    pub fn is_enabled(&self, id: &RuleId) -> Option<bool> {
        self.transit
            .iter()
            .find(|r| r.id == *id)
            .map(|r| r.enabled)
            .or_else(|| self.destination.iter().find(|r| r.id == *id).map(|r| r.enabled))
    }

    /// Enable or disable a rule by id.
    ///
    /// Required rules may be disabled; the game is then no longer
    /// well-formed, which is logged.
    pub fn set_enabled(&mut self, id: &RuleId, enabled: bool) -> Result<(), ConfigError> {
        let (required, slot) = if let Some(rule) = self.transit.iter_mut().find(|r| r.id == *id) {
            (rule.required, &mut rule.enabled)
        } else if let Some(rule) = self.destination.iter_mut().find(|r| r.id == *id) {
            (rule.required, &mut rule.enabled)
        } else {
            return Err(ConfigError::UnknownRule(id.clone()));
        };

        if required && !enabled {
            warn!(rule = %id, "disabling a required rule");
        }
        *slot = enabled;
        Ok(())
    }

    // === Evaluation ===

    /// Check a single move attempt against the enabled transit rules.
    pub fn check_move(&self, ctx: &RuleContext<'_>, from: Coord, to: Coord) -> Result<(), GameError> {
        match self.first_transit_failure(ctx, from, to) {
            None => Ok(()),
            Some(rule) => {
                trace!(rule = %rule.id, %from, %to, "transit rule rejected move");
                Err(GameError::IllegalMove {
                    rule: rule.id.clone(),
                    description: rule.description.clone(),
                    from,
                    to,
                })
            }
        }
    }

    /// Check the final position at commit against the enabled destination
    /// rules.
    pub fn check_destination(&self, ctx: &RuleContext<'_>, at: Coord) -> Result<(), GameError> {
        let failure = self
            .destination
            .iter()
            .filter(|rule| rule.enabled)
            .find(|rule| !rule.passes(ctx, at));

        match failure {
            None => Ok(()),
            Some(rule) => {
                trace!(rule = %rule.id, %at, "destination rule rejected commit");
                Err(GameError::IllegalDestination {
                    rule: rule.id.clone(),
                    description: rule.description.clone(),
                    at,
                })
            }
        }
    }

    /// True if every enabled transit rule accepts `from -> to`.
    #[must_use]
    pub fn is_legal_move(&self, ctx: &RuleContext<'_>, from: Coord, to: Coord) -> bool {
        self.first_transit_failure(ctx, from, to).is_none()
    }

    /// Every board cell reachable from `from` in one hop, row-major.
    #[must_use]
    pub fn legal_destinations(&self, ctx: &RuleContext<'_>, from: Coord) -> Vec<Coord> {
        ctx.topology
            .coords()
            .filter(|&to| self.is_legal_move(ctx, from, to))
            .collect()
    }

    fn first_transit_failure(
        &self,
        ctx: &RuleContext<'_>,
        from: Coord,
        to: Coord,
    ) -> Option<&TransitRule> {
        self.transit
            .iter()
            .filter(|rule| rule.enabled)
            .find(|rule| !rule.passes(ctx, from, to))
    }
}
