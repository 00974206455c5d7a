//! Cell addressing and straight-line geometry on the skewed grid.
//!
//! ## Coordinates
//!
//! A `Coord` is an `(i, j)` pair on a `width × width` grid where
//! `width = 4n + 1`. The grid is skewed: the hexagonal neighbourhood of a
//! cell is `(i±1, j)`, `(i, j±1)` and the anti-diagonal `(i+1, j-1)`,
//! `(i-1, j+1)`.
//!
//! Coordinates are signed so that callers can ask about cells outside the
//! board without wrapping; bounds are checked by the topology.
//!
//! ## Axis families
//!
//! Four families of "straight lines" are recognised:
//!
//! | Axis           | Condition               |
//! |----------------|-------------------------|
//! | `Row`          | `i == i0`               |
//! | `Column`       | `j == j0`               |
//! | `AntiDiagonal` | `i - i0 == j0 - j`      |
//! | `MainDiagonal` | `i - i0 == j - j0`      |
//!
//! `MainDiagonal` is not a hexagonal line; only the LineOrDiagonal rule
//! accepts it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell address on the skewed grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub i: i32,
    pub j: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Displacement `(Δi, Δj)` from `self` to `other`.
    #[must_use]
    pub const fn delta(self, other: Coord) -> (i32, i32) {
        (other.i - self.i, other.j - self.j)
    }

    /// True if `other` is at most one cell away in each axis.
    ///
    /// This is the "single step" test that ends a turn; note that it also
    /// accepts main-diagonal neighbours and the cell itself.
    #[must_use]
    pub fn is_single_step(self, other: Coord) -> bool {
        let (di, dj) = self.delta(other);
        di.abs() <= 1 && dj.abs() <= 1
    }

    /// Offset this coordinate.
    #[must_use]
    pub const fn offset(self, di: i32, dj: i32) -> Self {
        Self::new(self.i + di, self.j + dj)
    }

    /// Number of hexagonal single steps between two cells.
    #[must_use]
    pub fn hex_distance(self, other: Coord) -> u32 {
        let (di, dj) = self.delta(other);
        (di.unsigned_abs() + dj.unsigned_abs() + (di + dj).unsigned_abs()) / 2
    }
}

impl From<(i32, i32)> for Coord {
    fn from((i, j): (i32, i32)) -> Self {
        Self::new(i, j)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// One of the four recognised straight-line families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
    AntiDiagonal,
    MainDiagonal,
}

impl Axis {
    /// All axis families, in matching priority order.
    pub const ALL: [Axis; 4] = [Axis::Row, Axis::Column, Axis::AntiDiagonal, Axis::MainDiagonal];

    /// Check whether the move `from -> to` lies on this axis family.
    #[must_use]
    pub fn contains(self, from: Coord, to: Coord) -> bool {
        let (di, dj) = from.delta(to);
        match self {
            Axis::Row => di == 0,
            Axis::Column => dj == 0,
            Axis::AntiDiagonal => di == -dj,
            Axis::MainDiagonal => di == dj,
        }
    }

    /// The first axis family (in `ALL` order) the move lies on, if any.
    ///
    /// A zero-length move matches `Row`.
    #[must_use]
    pub fn between(from: Coord, to: Coord) -> Option<Axis> {
        Self::ALL.into_iter().find(|axis| axis.contains(from, to))
    }

    /// Unit step along this axis pointing from `from` toward `to`.
    fn unit_step(self, from: Coord, to: Coord) -> (i32, i32) {
        let (di, dj) = from.delta(to);
        match self {
            Axis::Row => (0, dj.signum()),
            Axis::Column => (di.signum(), 0),
            Axis::AntiDiagonal | Axis::MainDiagonal => (di.signum(), dj.signum()),
        }
    }

    /// Signed length of the move measured along this axis.
    fn length(self, from: Coord, to: Coord) -> i32 {
        let (di, dj) = from.delta(to);
        match self {
            Axis::Row => dj,
            _ => di,
        }
    }
}

/// Interior cells of a straight move; most jumps are short.
pub type Interior = SmallVec<[Coord; 8]>;

/// A straight move together with the cells strictly between its ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub axis: Axis,
    pub from: Coord,
    pub to: Coord,
    /// Cells strictly between `from` and `to`, ordered from `from`.
    pub interior: Interior,
}

impl Line {
    /// Build the line for `from -> to`, or `None` if the move matches no
    /// axis family.
    #[must_use]
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        let axis = Axis::between(from, to)?;
        let (si, sj) = axis.unit_step(from, to);
        let steps = axis.length(from, to).abs();

        let interior = (1..steps).map(|s| from.offset(si * s, sj * s)).collect();

        Some(Self { axis, from, to, interior })
    }

    /// Number of cells strictly between the ends (`|Δ| - 1`, or 0).
    #[must_use]
    pub fn interior_len(&self) -> usize {
        self.interior.len()
    }

    /// Pairs of interior cells mirrored about the segment midpoint,
    /// walking inward from both ends. The middle cell of an odd interior
    /// is paired with itself.
    pub fn mirrored_pairs(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        let len = self.interior.len();
        (0..len.div_ceil(2)).map(move |s| (self.interior[s], self.interior[len - 1 - s]))
    }
}
