//! Board coordinates and neighborhood geometry.

use serde::{Deserialize, Serialize};

/// A cell coordinate on a square puzzle grid.
///
/// Rows and columns are zero-based. A placed queen is identified by the
/// coordinate of the cell it occupies, so the non-attack rules are
/// expressed as relations between coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev (chessboard) distance to another coordinate.
    ///
    /// Two distinct cells are 8-neighbors exactly when this is 1.
    #[must_use]
    pub fn chebyshev(self, other: Coord) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Do two coordinates lie on a common diagonal or anti-diagonal?
    ///
    /// A cell trivially shares a diagonal with itself.
    #[must_use]
    pub fn shares_diagonal(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }

    /// The 4-connected neighbors that fall inside a `size`-by-`size` grid.
    pub fn orthogonal_neighbors(self, size: usize) -> impl Iterator<Item = Coord> {
        const DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

        DIRS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            (row < size && col < size).then_some(Coord::new(row, col))
        })
    }

    /// Iterate every coordinate of a `size`-by-`size` grid in row-major order.
    pub fn all(size: usize) -> impl Iterator<Item = Coord> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev() {
        let origin = Coord::new(3, 3);
        assert_eq!(origin.chebyshev(origin), 0);
        assert_eq!(origin.chebyshev(Coord::new(4, 4)), 1);
        assert_eq!(origin.chebyshev(Coord::new(2, 3)), 1);
        assert_eq!(origin.chebyshev(Coord::new(0, 5)), 3);
        assert_eq!(origin.chebyshev(Coord::new(6, 2)), 3);
    }

    #[test]
    fn test_shares_diagonal() {
        let q = Coord::new(2, 5);
        assert!(q.shares_diagonal(q));
        assert!(q.shares_diagonal(Coord::new(4, 7)));
        assert!(q.shares_diagonal(Coord::new(4, 3)));
        assert!(!q.shares_diagonal(Coord::new(4, 5)));
        assert!(!q.shares_diagonal(Coord::new(2, 0)));
    }

    #[test]
    fn test_orthogonal_neighbors_interior() {
        let mut neighbors: Vec<_> = Coord::new(3, 3).orthogonal_neighbors(8).collect();
        neighbors.sort();
        assert_eq!(
            neighbors,
            vec![
                Coord::new(2, 3),
                Coord::new(3, 2),
                Coord::new(3, 4),
                Coord::new(4, 3),
            ]
        );
    }

    #[test]
    fn test_orthogonal_neighbors_corner() {
        let mut neighbors: Vec<_> = Coord::new(0, 0).orthogonal_neighbors(8).collect();
        neighbors.sort();
        assert_eq!(neighbors, vec![Coord::new(0, 1), Coord::new(1, 0)]);

        let mut neighbors: Vec<_> = Coord::new(7, 7).orthogonal_neighbors(8).collect();
        neighbors.sort();
        assert_eq!(neighbors, vec![Coord::new(6, 7), Coord::new(7, 6)]);
    }

    #[test]
    fn test_all_covers_grid() {
        let cells: Vec<_> = Coord::all(3).collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], Coord::new(0, 0));
        assert_eq!(cells[8], Coord::new(2, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(1, 6).to_string(), "(1, 6)");
    }
}
