//! Move legality.
//!
//! - `rule`: rule records, ids and the read-only predicate context
//! - `transit`: predicates checked on every move attempt
//! - `destination`: predicates checked once at commit
//! - `engine`: ordered, short-circuiting evaluation and destination
//!   enumeration
//!
//! The rules know nothing about turns; the turn state machine passes its
//! hop bookkeeping in through `RuleContext`.

pub mod destination;
pub mod engine;
pub mod rule;
pub mod transit;

pub use engine::{GameResult, RuleEngine};
pub use rule::{
    DestinationCheck, DestinationRule, Rule, RuleContext, RuleId, TransitCheck, TransitRule,
};
