//! Rule records and the read-only context predicates evaluate against.
//!
//! A rule is a tagged record (id, required flag, enabled flag,
//! description) plus a plain function predicate. Predicates receive an
//! explicit `RuleContext` instead of capturing game state, so they can be
//! tested in isolation and evaluated from any thread.

use serde::{Deserialize, Serialize};

use crate::board::{Occupancy, Topology};
use crate::core::{Color, Coord};

/// Identifier of a rule, stable across configurations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    /// Destination lies inside the grid.
    InBounds,
    /// Destination is not a forbidden cell.
    NotForbidden,
    /// No further hop after a single-step hop.
    SingleHopIsFinal,
    Line,
    LineOrDiagonal,
    Unoccupied,
    OnePieceOver,
    SuperSymmetry,
    NoGaps,
    NoEnemyLanding,
    NoEnemyFinishing,
    /// A rule added by the host.
    Custom(String),
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleId::Custom(name) => f.write_str(name),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Everything a predicate may read.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub topology: &'a Topology,
    pub occupancy: &'a Occupancy,
    /// Colour of the acting player.
    pub mover: Color,
    /// Hops already applied this turn.
    pub hops: u32,
    /// A single-step hop was applied this turn.
    pub single_step_made: bool,
}

/// Predicate checked on every individual move attempt.
pub type TransitCheck = fn(&RuleContext<'_>, Coord, Coord) -> bool;

/// Predicate checked once, against the final position, at commit.
pub type DestinationCheck = fn(&RuleContext<'_>, Coord) -> bool;

/// A named, toggleable predicate.
///
/// `required` documents intent only; required and optional rules are
/// evaluated identically.
#[derive(Clone)]
pub struct Rule<F> {
    pub id: RuleId,
    pub required: bool,
    pub enabled: bool,
    pub description: String,
    pub check: F,
}

impl<F> std::fmt::Debug for Rule<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("required", &self.required)
            .field("enabled", &self.enabled)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

pub type TransitRule = Rule<TransitCheck>;
pub type DestinationRule = Rule<DestinationCheck>;

impl<F> Rule<F> {
    /// Create an enabled, optional rule.
    pub fn new(id: RuleId, description: impl Into<String>, check: F) -> Self {
        Self {
            id,
            required: false,
            enabled: true,
            description: description.into(),
            check,
        }
    }

    /// Create a host-defined rule.
    pub fn custom(name: impl Into<String>, description: impl Into<String>, check: F) -> Self {
        Self::new(RuleId::Custom(name.into()), description, check)
    }

    /// Mark as required (builder pattern).
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Start disabled (builder pattern).
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl TransitRule {
    /// Run the predicate for `from -> to`.
    #[must_use]
    pub fn passes(&self, ctx: &RuleContext<'_>, from: Coord, to: Coord) -> bool {
        (self.check)(ctx, from, to)
    }
}

impl DestinationRule {
    /// Run the predicate for the final position `at`.
    #[must_use]
    pub fn passes(&self, ctx: &RuleContext<'_>, at: Coord) -> bool {
        (self.check)(ctx, at)
    }
}
