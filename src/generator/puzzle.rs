//! Full-puzzle generation: pairing a solution with a compatible partition.
//!
//! The solution generator and the region partitioner are independent; a
//! sampled pair is only playable if the solution's queens land in
//! pairwise distinct regions. This module is the one place the two are
//! correlated: it rejection-samples fresh pairs until that holds.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{GenerateError, PuzzleConfig, PuzzleRng};
use crate::generator::regions::{RegionGrid, RegionPartitioner};
use crate::generator::solution::{Solution, SolutionGenerator};

/// A compatibility-checked solution/partition pair.
///
/// Invariant: the solution's queens occupy `size` distinct regions, so
/// the solution is realizable as a winning placement on this grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    solution: Solution,
    regions: RegionGrid,
}

impl Puzzle {
    /// The intended queen placement, kept for the reveal action.
    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// The region layout the player solves against.
    #[must_use]
    pub fn regions(&self) -> &RegionGrid {
        &self.regions
    }
}

/// Samples puzzles by re-rolling solution and partition together.
#[derive(Clone, Debug)]
pub struct PuzzleGenerator {
    config: PuzzleConfig,
}

impl PuzzleGenerator {
    /// Create a generator for the given configuration.
    #[must_use]
    pub fn new(config: PuzzleConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator samples under.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Sample one playable puzzle.
    ///
    /// Each attempt draws a fresh solution and a fresh partition; both
    /// are discarded whenever the pair is incompatible. A search
    /// exhaustion from the solution generator also just spends an
    /// attempt - re-rolling is the contract for that signal. Partition
    /// exhaustion is a real fault and propagates.
    pub fn generate(&self, rng: &mut PuzzleRng) -> Result<Puzzle, GenerateError> {
        let solutions = SolutionGenerator::new(self.config.size);
        let partitioner = RegionPartitioner::with_config(&self.config);

        for _ in 0..self.config.max_generate_attempts {
            let Ok(solution) = solutions.generate(rng) else {
                continue;
            };
            let regions = partitioner.generate(rng)?;

            if regions_distinct(&solution, &regions) {
                return Ok(Puzzle { solution, regions });
            }
        }

        Err(GenerateError::Incompatible {
            attempts: self.config.max_generate_attempts,
        })
    }
}

/// Do the solution's queens land in pairwise distinct regions?
fn regions_distinct(solution: &Solution, regions: &RegionGrid) -> bool {
    let mut seen = FxHashSet::default();
    solution
        .queens()
        .iter()
        .all(|&queen| seen.insert(regions.region_at(queen)))
}
