//! Placement legality for the marked-to-queen transition.

use crate::core::{Board, Coord};
use crate::generator::RegionGrid;

/// May a queen be placed at `coord` on this board?
///
/// Consulted only for the `Marked -> Queen` edge of the cell state
/// machine. The move is illegal if any existing queen shares the
/// candidate's row, column, or region, or sits within a king's move of
/// it (Chebyshev distance <= 1). Note there is no whole-diagonal rule at
/// play time - regions replace it; only the diagonal *touch* is banned,
/// via the distance rule.
///
/// Pure: the caller applies the transition only on `true`.
#[must_use]
pub fn is_valid_move(board: &Board, regions: &RegionGrid, coord: Coord) -> bool {
    let region = regions.region_at(coord);
    board.queens().all(|queen| {
        queen.row != coord.row
            && queen.col != coord.col
            && regions.region_at(queen) != region
            && queen.chebyshev(coord) > 1
    })
}
