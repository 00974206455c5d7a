//! Game configuration.
//!
//! A game is configured by three things only:
//! - the board size parameter `n` (the board is `4n + 1` cells wide),
//! - the registered players in turn order,
//! - which rules are enabled, as overrides on the rule defaults.
//!
//! The engine never reads files or the environment; hosts build a
//! `GameConfig` however they like (it is serde-serialisable).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::ConfigError;
use super::player::MAX_PLAYERS;
use crate::rules::RuleId;

/// Default board size parameter.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Largest supported board size parameter. Keeps the `(4n + 1)²` cell
/// table allocatable and every coordinate representable as `i32`.
pub const MAX_BOARD_SIZE: usize = 256;

/// A player to register, in turn order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub username: String,
    pub color: Color,
}

impl PlayerConfig {
    pub fn new(username: impl Into<String>, color: Color) -> Self {
        Self {
            username: username.into(),
            color,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board size parameter `n`, in `1..=MAX_BOARD_SIZE`.
    pub board_size: usize,

    /// Players in turn order.
    pub players: Vec<PlayerConfig>,

    /// Enabled/disabled overrides applied on top of each rule's default.
    pub rule_overrides: FxHashMap<RuleId, bool>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            players: Vec::new(),
            rule_overrides: FxHashMap::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration for board size `n` with no players.
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Register a player (builder pattern).
    #[must_use]
    pub fn with_player(mut self, username: impl Into<String>, color: Color) -> Self {
        self.players.push(PlayerConfig::new(username, color));
        self
    }

    /// Override a rule's enabled flag (builder pattern).
    #[must_use]
    pub fn with_rule(mut self, rule: RuleId, enabled: bool) -> Self {
        self.rule_overrides.insert(rule, enabled);
        self
    }

    /// Board width `4n + 1`, saturating for sizes `validate` rejects.
    #[must_use]
    pub fn width(&self) -> usize {
        self.board_size.saturating_mul(4).saturating_add(1)
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check the configuration before building a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::InvalidBoardSize(self.board_size));
        }
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.players.len() > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                count: self.players.len(),
                max: MAX_PLAYERS,
            });
        }
        for (idx, player) in self.players.iter().enumerate() {
            if self.players[..idx].iter().any(|p| p.color == player.color) {
                return Err(ConfigError::DuplicateColor(player.color));
            }
        }
        Ok(())
    }
}
