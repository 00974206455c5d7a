//! Turn progression and state export.
//!
//! - `state`: active player, hop bookkeeping, start-of-turn snapshot
//! - `snapshot`: the whole mutable game state as an exportable value

pub mod snapshot;
pub mod state;

pub use snapshot::GameSnapshot;
pub use state::{TurnPhase, TurnState};
