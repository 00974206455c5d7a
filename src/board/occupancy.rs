//! Piece occupancy, independent of terrain.
//!
//! A cell's terrain and the piece standing on it are separate facts: a red
//! piece may stand on neutral terrain, and a home cell may be empty.
//!
//! Backed by `im::Vector`, so cloning an `Occupancy` (the per-turn
//! snapshot, exported state) shares structure and costs O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::topology::Topology;
use crate::core::{Color, Coord};

/// Grid of optional piece colours keyed by the same coordinates as the
/// topology.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    width: usize,
    /// Row-major: index `i * width + j`.
    cells: Vector<Option<Color>>,
}

impl Occupancy {
    /// An empty grid.
    #[must_use]
    pub fn empty(width: usize) -> Self {
        Self {
            width,
            cells: std::iter::repeat(None).take(width * width).collect(),
        }
    }

    /// Starting position: each home of a registered colour is filled with
    /// that colour's pieces; every other cell is empty.
    pub fn initial(topology: &Topology, registered: &[Color]) -> Self {
        let cells = topology
            .coords()
            .map(|c| topology.get(c).home().filter(|color| registered.contains(color)))
            .collect();
        Self {
            width: topology.width(),
            cells,
        }
    }

    /// Grid width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`width²`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, at: Coord) -> Option<usize> {
        let w = self.width as i32;
        ((0..w).contains(&at.i) && (0..w).contains(&at.j))
            .then(|| at.i as usize * self.width + at.j as usize)
    }

    /// The piece at a cell. Out-of-bounds cells are empty.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Color> {
        self.index(at).and_then(|idx| self.cells.get(idx).copied().flatten())
    }

    /// True if a piece stands at the cell.
    #[must_use]
    pub fn is_occupied(&self, at: Coord) -> bool {
        self.get(at).is_some()
    }

    /// Put a piece on a cell, returning whatever was there.
    ///
    /// Out-of-bounds placements are ignored and return `None`.
    pub fn place(&mut self, at: Coord, color: Color) -> Option<Color> {
        let idx = self.index(at)?;
        self.cells.set(idx, Some(color))
    }

    /// Empty a cell, returning the piece that was there.
    pub fn clear(&mut self, at: Coord) -> Option<Color> {
        let idx = self.index(at)?;
        self.cells.set(idx, None)
    }

    /// Move the piece at `from` to `to`.
    ///
    /// Any piece already at `to` is overwritten (a capture, when the
    /// Unoccupied rule is disabled). Returns the moved piece, or `None`
    /// (and changes nothing) if `from` is empty or `to` is off the grid.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Option<Color> {
        let piece = self.get(from)?;
        self.index(to)?;
        self.clear(from);
        self.place(to, piece);
        Some(piece)
    }

    /// Every cell with its piece, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Option<Color>)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (Coord::new((idx / w) as i32, (idx % w) as i32), *cell))
    }

    /// Cells holding a piece of `color`, row-major.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter_map(move |(at, cell)| (cell == Some(color)).then_some(at))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;

    #[test]
    fn test_initial_fills_registered_homes_only() {
        let topology = Topology::new(2).unwrap();
        let occupancy = Occupancy::initial(&topology, &[Color::Red, Color::Green]);

        assert_eq!(occupancy.pieces(Color::Red).count(), 3);
        assert_eq!(occupancy.pieces(Color::Green).count(), 3);
        assert_eq!(occupancy.pieces(Color::Black).count(), 0);
        assert_eq!(occupancy.piece_count(), 6);

        for at in occupancy.pieces(Color::Red) {
            assert_eq!(topology.get(at), Classification::Home(Color::Red));
        }
    }

    #[test]
    fn test_move_piece() {
        let mut occupancy = Occupancy::empty(9);
        occupancy.place(Coord::new(4, 4), Color::Blue);

        assert_eq!(occupancy.move_piece(Coord::new(4, 4), Coord::new(4, 6)), Some(Color::Blue));
        assert!(!occupancy.is_occupied(Coord::new(4, 4)));
        assert_eq!(occupancy.get(Coord::new(4, 6)), Some(Color::Blue));

        // Empty source is a no-op.
        assert_eq!(occupancy.move_piece(Coord::new(0, 0), Coord::new(1, 1)), None);
        assert_eq!(occupancy.piece_count(), 1);
    }

    #[test]
    fn test_move_off_grid_is_noop() {
        let mut occupancy = Occupancy::empty(5);
        occupancy.place(Coord::new(2, 2), Color::Red);

        assert_eq!(occupancy.move_piece(Coord::new(2, 2), Coord::new(2, 9)), None);
        assert_eq!(occupancy.get(Coord::new(2, 2)), Some(Color::Red));
    }

    #[test]
    fn test_out_of_bounds_reads_empty() {
        let mut occupancy = Occupancy::empty(5);
        assert_eq!(occupancy.get(Coord::new(-1, 0)), None);
        assert_eq!(occupancy.place(Coord::new(7, 7), Color::Red), None);
        assert_eq!(occupancy.piece_count(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut occupancy = Occupancy::empty(5);
        occupancy.place(Coord::new(1, 1), Color::White);
        let saved = occupancy.clone();

        occupancy.move_piece(Coord::new(1, 1), Coord::new(1, 2));

        assert_eq!(saved.get(Coord::new(1, 1)), Some(Color::White));
        assert_ne!(saved, occupancy);
    }
}
