//! Piece colours, home pairing and cell classification.
//!
//! ## Pairing
//!
//! The six colours form three opposing pairs. Each colour's home sits at
//! the star point opposite its partner's, and the partner's home is the
//! colour's target:
//!
//! - `Red` ↔ `Black`
//! - `Green` ↔ `White`
//! - `Yellow` ↔ `Blue`
//!
//! Terrain belonging to another pair is *enemy* terrain.

use serde::{Deserialize, Serialize};

/// One of the six piece (and home) colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Green,
    Yellow,
    Red,
    White,
    Blue,
}

/// One of the three opposing colour pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pair {
    RedBlack,
    GreenWhite,
    YellowBlue,
}

impl Color {
    /// All colours.
    pub const ALL: [Color; 6] = [
        Color::Black,
        Color::Green,
        Color::Yellow,
        Color::Red,
        Color::White,
        Color::Blue,
    ];

    /// The pair this colour belongs to.
    #[must_use]
    pub const fn pair(self) -> Pair {
        match self {
            Color::Red | Color::Black => Pair::RedBlack,
            Color::Green | Color::White => Pair::GreenWhite,
            Color::Yellow | Color::Blue => Pair::YellowBlue,
        }
    }

    /// The opposing colour, whose home is this colour's target.
    #[must_use]
    pub const fn partner(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
            Color::Green => Color::White,
            Color::White => Color::Green,
            Color::Yellow => Color::Blue,
            Color::Blue => Color::Yellow,
        }
    }

    /// Lower-case colour name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::White => "white",
            Color::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static terrain category of a cell. Never changes after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Not part of the playing surface.
    Forbidden,
    /// Free terrain, enemy to nobody.
    Neutral,
    /// Home triangle of a colour.
    Home(Color),
}

impl Classification {
    /// True if a piece may stand here.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Classification::Forbidden)
    }

    /// The home colour, if this is a home cell.
    #[must_use]
    pub const fn home(self) -> Option<Color> {
        match self {
            Classification::Home(color) => Some(color),
            _ => None,
        }
    }

    /// True if `mover` may stand here without being in enemy territory.
    ///
    /// Neutral terrain and the homes of the mover's own pair pass;
    /// forbidden cells and the other pairs' homes do not.
    #[must_use]
    pub fn is_friendly_to(self, mover: Color) -> bool {
        match self {
            Classification::Forbidden => false,
            Classification::Neutral => true,
            Classification::Home(owner) => owner.pair() == mover.pair(),
        }
    }
}
