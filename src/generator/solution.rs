//! Randomized backtracking search for a valid queen placement.
//!
//! A valid placement puts one queen on every row such that every pair of
//! queens differs in column, shares no diagonal or anti-diagonal, and sits
//! more than a king's move apart (Chebyshev distance > 1). The last rule
//! is the non-classic extension: queens may not touch, even diagonally.
//!
//! The search is depth-first over rows. Each row draws a fresh uniformly
//! shuffled column order, so the randomness only diversifies which of the
//! many valid placements comes out - it never affects validity.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, PuzzleRng, SearchExhausted};

/// A complete queen placement: entry `i` is the queen on row `i`.
///
/// Immutable once produced; the play session keeps it around for the
/// reveal-solution action and never exposes it to the validator path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    queens: SmallVec<[Coord; 8]>,
}

impl Solution {
    pub(crate) fn new(queens: SmallVec<[Coord; 8]>) -> Self {
        debug_assert!(queens.iter().enumerate().all(|(i, q)| q.row == i));
        Self { queens }
    }

    /// The queens, ordered by row.
    #[must_use]
    pub fn queens(&self) -> &[Coord] {
        &self.queens
    }

    /// Number of queens (equals the board size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.queens.len()
    }

    /// True only for the degenerate zero-size placement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queens.is_empty()
    }
}

/// Generates queen placements by randomized depth-first backtracking.
///
/// Stateless apart from the board size; all randomness comes from the
/// [`PuzzleRng`] handed to [`generate`](Self::generate).
#[derive(Clone, Copy, Debug)]
pub struct SolutionGenerator {
    size: usize,
}

impl SolutionGenerator {
    /// Create a generator for a `size`-by-`size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be positive");
        Self { size }
    }

    /// Run one randomized search.
    ///
    /// Returns [`SearchExhausted`] if every branch order is ruled out -
    /// which a caller must treat as "roll again", since the branch order
    /// is exhaustive only relative to this run's shuffles. At size 8 a
    /// placement always exists and this cannot fail.
    pub fn generate(&self, rng: &mut PuzzleRng) -> Result<Solution, SearchExhausted> {
        // Explicit stack of per-row candidate iterators over one shared
        // placement buffer. Frame `i` enumerates columns for row
        // `placed.len()`; popping a frame un-places the row beneath it.
        let mut placed: SmallVec<[Coord; 8]> = SmallVec::new();
        let mut frames = vec![self.shuffled_columns(rng)];

        while let Some(frame) = frames.last_mut() {
            match frame.next() {
                Some(col) => {
                    let candidate = Coord::new(placed.len(), col);
                    if compatible(&placed, candidate) {
                        placed.push(candidate);
                        if placed.len() == self.size {
                            return Ok(Solution::new(placed));
                        }
                        frames.push(self.shuffled_columns(rng));
                    }
                }
                None => {
                    frames.pop();
                    placed.pop();
                }
            }
        }

        Err(SearchExhausted { size: self.size })
    }

    fn shuffled_columns(&self, rng: &mut PuzzleRng) -> std::vec::IntoIter<usize> {
        let mut cols: Vec<usize> = (0..self.size).collect();
        rng.shuffle(&mut cols);
        cols.into_iter()
    }
}

/// May `candidate` join `placed` without attacking or touching any queen?
///
/// Rows are distinct by construction (one queen per row), so only the
/// column, diagonal, and adjacency rules are checked.
fn compatible(placed: &[Coord], candidate: Coord) -> bool {
    placed.iter().all(|&queen| {
        queen.col != candidate.col
            && !queen.shares_diagonal(candidate)
            && queen.chebyshev(candidate) > 1
    })
}
