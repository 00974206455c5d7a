//! The playable game: turn operations, export/import and victory.

mod session;
mod victory;

pub use session::Game;
