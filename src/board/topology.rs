//! Static cell classification for a board of size `n`.
//!
//! The board is a `width × width` skewed grid (`width = 4n + 1`) holding a
//! six-pointed star: a hexagonal neutral core, six triangular homes of
//! `n(n + 1) / 2` cells each, and forbidden cells everywhere else.
//!
//! Classification is decided by a fixed sequence of region tests, first
//! match wins:
//!
//! 1. the three pairs of outer corners are forbidden,
//! 2. two rectangular bands inside the hexagon are neutral,
//! 3. six triangular bands each split into a home triangle (inner half) and
//!    either forbidden or, for black and red, neutral terrain (outer half).
//!
//! A cell matching no region is a construction defect and is reported as
//! `TopologyError::MalformedConfiguration` rather than guessed.

use serde::{Deserialize, Serialize};

use crate::core::{Classification, Color, Coord, TopologyError, MAX_BOARD_SIZE};

/// Board width for size parameter `n`.
#[must_use]
pub const fn width(n: usize) -> usize {
    4 * n + 1
}

/// Classify cell `(i, j)` of a board with size parameter `n`.
///
/// Total over `0 <= i, j < width(n)` for every `n >= 1`.
pub fn classify(n: usize, i: usize, j: usize) -> Result<Classification, TopologyError> {
    use Classification::{Forbidden, Home, Neutral};

    // Lower left corner
    if (i < 2 * n + 1 && j < n) || (j < 2 * n + 1 && i < n) {
        return Ok(Forbidden);
    }

    // Lower right and upper left corners
    if (i >= 3 * n + 1 && j < n) || (j >= 3 * n + 1 && i < n) {
        return Ok(Forbidden);
    }

    // Top right corner
    if (i >= 2 * n && j >= 3 * n + 1) || (j >= 2 * n && i >= 3 * n + 1) {
        return Ok(Forbidden);
    }

    // Neutral bands
    if (n..2 * n + 1).contains(&i) && (2 * n..3 * n + 1).contains(&j) {
        return Ok(Neutral);
    }
    if (2 * n..3 * n + 1).contains(&i) && (n..2 * n + 1).contains(&j) {
        return Ok(Neutral);
    }

    // Triangular bands. In each, (x, y) are offsets from the star point so
    // that `x + y < n` selects the home triangle.
    if (n..2 * n).contains(&i) && (n..2 * n).contains(&j) {
        let (x, y) = (i - n, j - n);
        return Ok(if x + y < n { Home(Color::Black) } else { Neutral });
    }
    if (2 * n + 1..3 * n + 1).contains(&i) && j < n {
        let (x, y) = (3 * n - i, n - 1 - j);
        return Ok(if x + y < n { Home(Color::Blue) } else { Forbidden });
    }
    if i >= 3 * n + 1 && (n..2 * n).contains(&j) {
        let (x, y) = (i - (3 * n + 1), j - n);
        return Ok(if x + y < n { Home(Color::White) } else { Forbidden });
    }
    if (2 * n + 1..3 * n + 1).contains(&i) && (2 * n + 1..3 * n + 1).contains(&j) {
        let (x, y) = (3 * n - i, 3 * n - j);
        return Ok(if x + y < n { Home(Color::Red) } else { Neutral });
    }
    if (n..2 * n).contains(&i) && j >= 3 * n + 1 {
        let (x, y) = (i - n, j - (3 * n + 1));
        return Ok(if x + y < n { Home(Color::Yellow) } else { Forbidden });
    }
    if i < n && (2 * n + 1..3 * n + 1).contains(&j) {
        let (x, y) = (n - 1 - i, 3 * n - j);
        return Ok(if x + y < n { Home(Color::Green) } else { Forbidden });
    }

    Err(TopologyError::MalformedConfiguration {
        n,
        i: i as i32,
        j: j as i32,
    })
}

/// Immutable classification grid for one board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    n: usize,
    width: usize,
    /// Row-major: index `i * width + j`.
    cells: Vec<Classification>,
}

impl Topology {
    /// Classify every cell of a board with size parameter `n`.
    pub fn new(n: usize) -> Result<Self, TopologyError> {
        if !(1..=MAX_BOARD_SIZE).contains(&n) {
            return Err(TopologyError::UnsupportedSize(n));
        }
        let width = width(n);
        let mut cells = Vec::with_capacity(width * width);
        for i in 0..width {
            for j in 0..width {
                cells.push(classify(n, i, j)?);
            }
        }
        Ok(Self { n, width, cells })
    }

    /// Board size parameter `n`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Board width `4n + 1`.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// True if both coordinates lie in `[0, width)`.
    #[must_use]
    pub fn in_bounds(&self, at: Coord) -> bool {
        let w = self.width as i32;
        (0..w).contains(&at.i) && (0..w).contains(&at.j)
    }

    /// Classification of a cell. Out-of-bounds cells are `Forbidden`.
    #[must_use]
    pub fn get(&self, at: Coord) -> Classification {
        self.index(at)
            .map_or(Classification::Forbidden, |idx| self.cells[idx])
    }

    /// Row-major index of an in-bounds cell.
    #[must_use]
    pub(crate) fn index(&self, at: Coord) -> Option<usize> {
        self.in_bounds(at)
            .then(|| at.i as usize * self.width + at.j as usize)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let w = self.width as i32;
        (0..w).flat_map(move |i| (0..w).map(move |j| Coord::new(i, j)))
    }

    /// All playable (non-forbidden) coordinates in row-major order.
    pub fn playable(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|&c| self.get(c).is_playable())
    }

    /// Cells of a colour's home triangle, row-major.
    pub fn home_cells(&self, color: Color) -> impl Iterator<Item = Coord> + '_ {
        self.coords()
            .filter(move |&c| self.get(c) == Classification::Home(color))
    }

    /// Classification rows for rendering, `rows()[i][j]`.
    pub fn rows(&self) -> impl Iterator<Item = &[Classification]> {
        self.cells.chunks(self.width)
    }
}
