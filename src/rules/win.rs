//! Board-level win detection.

use rustc_hash::FxHashSet;

use crate::core::Board;
use crate::generator::RegionGrid;

/// Is this board a completed puzzle?
///
/// True iff exactly `size` queens are placed and their rows, columns,
/// and region ids are each pairwise distinct. With exactly `size` queens
/// each distinctness condition is equivalent to "one per row / column /
/// region". Pure and idempotent; the session calls it after every
/// accepted queen placement.
#[must_use]
pub fn check_win(board: &Board, regions: &RegionGrid) -> bool {
    let size = board.size();

    let mut count = 0;
    let mut rows = FxHashSet::default();
    let mut cols = FxHashSet::default();
    let mut regs = FxHashSet::default();

    for queen in board.queens() {
        count += 1;
        rows.insert(queen.row);
        cols.insert(queen.col);
        regs.insert(regions.region_at(queen));
    }

    count == size && rows.len() == size && cols.len() == size && regs.len() == size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellState, Coord};
    use crate::generator::RegionId;

    // One region per row.
    fn row_regions(size: usize) -> RegionGrid {
        let ids = Coord::all(size).map(|c| RegionId::new(c.row as u8)).collect();
        RegionGrid::from_ids(size, ids)
    }

    fn place(board: &mut Board, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            board.set(Coord::new(r, c), CellState::Queen);
        }
    }

    #[test]
    fn test_empty_board_is_not_won() {
        let board = Board::new(4);
        assert!(!check_win(&board, &row_regions(4)));
    }

    #[test]
    fn test_one_queen_per_row_column_region_wins() {
        let mut board = Board::new(4);
        place(&mut board, &[(0, 1), (1, 3), (2, 0), (3, 2)]);
        assert!(check_win(&board, &row_regions(4)));
    }

    #[test]
    fn test_too_few_queens() {
        let mut board = Board::new(4);
        place(&mut board, &[(0, 1), (1, 3), (2, 0)]);
        assert!(!check_win(&board, &row_regions(4)));
    }

    #[test]
    fn test_repeated_column_fails() {
        let mut board = Board::new(4);
        place(&mut board, &[(0, 1), (1, 3), (2, 1), (3, 2)]);
        assert!(!check_win(&board, &row_regions(4)));
    }

    #[test]
    fn test_repeated_row_fails_even_with_four_queens() {
        let mut board = Board::new(4);
        place(&mut board, &[(0, 0), (0, 2), (2, 1), (3, 3)]);
        assert!(!check_win(&board, &row_regions(4)));
    }

    #[test]
    fn test_repeated_region_fails() {
        // All rows and columns distinct, but (1, 3) sits in region 0
        // alongside (0, 1).
        let ids = Coord::all(4)
            .map(|c| {
                if c == Coord::new(1, 3) {
                    RegionId::new(0)
                } else {
                    RegionId::new(c.row as u8)
                }
            })
            .collect();
        let regions = RegionGrid::from_ids(4, ids);

        let mut board = Board::new(4);
        place(&mut board, &[(0, 1), (1, 3), (2, 0), (3, 2)]);
        assert!(!check_win(&board, &regions));
    }

    #[test]
    fn test_check_win_is_idempotent() {
        let mut board = Board::new(4);
        place(&mut board, &[(0, 1), (1, 3), (2, 0), (3, 2)]);
        let regions = row_regions(4);
        let first = check_win(&board, &regions);
        for _ in 0..5 {
            assert_eq!(check_win(&board, &regions), first);
        }
    }
}
