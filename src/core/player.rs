//! Player identification, registration records and per-player storage.
//!
//! ## PlayerId
//!
//! Index into the registration order. Turn order is registration order,
//! cyclic, so `PlayerId::next` is the whole rotation policy.
//!
//! ## PlayerMap
//!
//! Per-player data backed by `Vec` for O(1) access, indexable by
//! `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::Color;
use super::coord::Coord;

/// Maximum number of players: one per colour.
pub const MAX_PLAYERS: usize = 6;

/// Player identifier (0-based registration index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Position in the registration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player after this one in a rotation of `player_count` players.
    ///
    /// ```
    /// use supersymmetry::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count.max(1)) as u8)
    }

    /// Seats `0..player_count` in turn order.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A registered player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub username: String,
    pub color: Color,
    /// Currently selected piece, if any. Transient: cleared on commit and
    /// rollback.
    pub selected: Option<Coord>,
}

impl Player {
    /// Create a player with no selection.
    pub fn new(username: impl Into<String>, color: Color) -> Self {
        Self {
            username: username.into(),
            color,
            selected: None,
        }
    }
}

/// One value per registered seat, indexed by `PlayerId`.
///
/// ## Example
///
/// ```
/// use supersymmetry::core::{PlayerId, PlayerMap};
///
/// let mut finished: PlayerMap<Option<u32>> = PlayerMap::with_value(3, None);
/// finished[PlayerId::new(1)] = Some(12);
///
/// assert_eq!(finished[PlayerId::new(0)], None);
/// assert_eq!(finished[PlayerId::new(1)], Some(12));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill each seat from `factory`.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();
        Self { data }
    }

    /// Wrap values already in registration order.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Every seat starts with a clone of `value`.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// `None` for an id past the last registered seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Seats with their values, in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Values alone, in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
