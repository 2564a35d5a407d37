//! The mutable play board.

use serde::{Deserialize, Serialize};

use super::cell::CellState;
use super::coord::Coord;

/// A square grid of [`CellState`]s.
///
/// The board is owned by the play session (or whatever caller drives the
/// engine); the generators and rule predicates only ever borrow it. All
/// cells start [`CellState::Empty`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an empty `size`-by-`size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be positive");
        Self {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// State of the cell at `coord`.
    ///
    /// Panics if `coord` is outside the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> CellState {
        self.cells[self.index(coord)]
    }

    /// Overwrite the cell at `coord`.
    ///
    /// Panics if `coord` is outside the board.
    pub fn set(&mut self, coord: Coord, state: CellState) {
        let index = self.index(coord);
        self.cells[index] = state;
    }

    /// Coordinates of all cells currently holding a queen, row-major.
    pub fn queens(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all(self.size).filter(move |&c| self.get(c) == CellState::Queen)
    }

    /// Number of queens on the board.
    #[must_use]
    pub fn queen_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == CellState::Queen)
            .count()
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            coord.row < self.size && coord.col < self.size,
            "Coordinate {} outside {}x{} board",
            coord,
            self.size,
            self.size
        );
        coord.row * self.size + coord.col
    }
}
