//! Randomized contiguous partitioning of the grid into regions.
//!
//! A partition assigns every cell exactly one of `size` region ids such
//! that each region is one 4-connected component of at least
//! `min_region_size` cells. Partitioning is independent of any queen
//! placement; the compatibility loop in [`puzzle`](super::puzzle) is what
//! correlates the two.
//!
//! ## Algorithm
//!
//! One attempt seeds each region at the next unassigned cell of a
//! shuffled coordinate order and grows it breadth-first over 4-neighbors
//! (frontier order shuffled per step) until it reaches the minimum size,
//! then sweeps remaining unassigned cells onto adjacent regions pass by
//! pass. Any dead end - no seed left, a region starved below minimum
//! size, a cell no sweep can reach - discards the whole attempt and
//! restarts from scratch. Restarting wholesale trades efficiency for
//! guaranteed-valid output without partial-repair logic.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, PartitionExhausted, PuzzleConfig, PuzzleRng};

/// Region identifier, in `[0, size)` for a given puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u8);

impl RegionId {
    /// Create a new region ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Region({})", self.0)
    }
}

/// A total assignment of region ids to grid cells.
///
/// Immutable once produced. Generated grids satisfy the covering,
/// minimum-size, and 4-connectivity invariants; grids built by hand via
/// [`from_ids`](Self::from_ids) (or deserialized) are the caller's
/// responsibility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionGrid {
    size: usize,
    ids: Vec<RegionId>,
}

impl RegionGrid {
    /// Build a grid from row-major region ids.
    ///
    /// Panics unless exactly `size * size` ids are supplied.
    #[must_use]
    pub fn from_ids(size: usize, ids: Vec<RegionId>) -> Self {
        assert_eq!(
            ids.len(),
            size * size,
            "Region grid needs {} ids",
            size * size
        );
        Self { size, ids }
    }

    /// Grid side length; also the number of regions.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Region id of the cell at `coord`.
    ///
    /// Panics if `coord` is outside the grid.
    #[must_use]
    pub fn region_at(&self, coord: Coord) -> RegionId {
        assert!(
            coord.row < self.size && coord.col < self.size,
            "Coordinate {} outside {}x{} grid",
            coord,
            self.size,
            self.size
        );
        self.ids[coord.row * self.size + coord.col]
    }

    /// Coordinates of every cell in `region`, row-major.
    pub fn cells_in(&self, region: RegionId) -> impl Iterator<Item = Coord> + '_ {
        Coord::all(self.size).filter(move |&c| self.region_at(c) == region)
    }
}

/// Carves the grid into contiguous regions by randomized seeded growth.
#[derive(Clone, Copy, Debug)]
pub struct RegionPartitioner {
    size: usize,
    min_region_size: usize,
    max_attempts: usize,
}

impl RegionPartitioner {
    /// Create a partitioner from a puzzle configuration.
    #[must_use]
    pub fn with_config(config: &PuzzleConfig) -> Self {
        assert!(config.size <= 255, "At most 255 regions supported");
        Self {
            size: config.size,
            min_region_size: config.min_region_size,
            max_attempts: config.max_partition_attempts,
        }
    }

    /// Produce a valid partition, restarting failed attempts internally.
    ///
    /// Returns [`PartitionExhausted`] only once the attempt ceiling is
    /// hit - with a satisfiable configuration this converges in a handful
    /// of attempts, so exhaustion signals a configuration that cannot be
    /// partitioned (or only pathologically rarely).
    pub fn generate(&self, rng: &mut PuzzleRng) -> Result<RegionGrid, PartitionExhausted> {
        for _ in 0..self.max_attempts {
            if let Some(grid) = self.attempt(rng) {
                return Ok(grid);
            }
        }
        Err(PartitionExhausted {
            attempts: self.max_attempts,
        })
    }

    /// One whole-grid attempt; `None` discards all of its work.
    fn attempt(&self, rng: &mut PuzzleRng) -> Option<RegionGrid> {
        let size = self.size;
        let mut ids: Vec<Option<RegionId>> = vec![None; size * size];

        let mut seed_order: Vec<Coord> = Coord::all(size).collect();
        rng.shuffle(&mut seed_order);

        let mut cursor = 0;
        for region in 0..size {
            let region = RegionId::new(region as u8);
            let seed = loop {
                let &coord = seed_order.get(cursor)?;
                cursor += 1;
                if ids[Self::index(size, coord)].is_none() {
                    break coord;
                }
            };
            self.grow_region(&mut ids, seed, region, rng)?;
        }

        self.sweep_unassigned(&mut ids)?;

        let ids = ids.into_iter().collect::<Option<Vec<_>>>()?;
        Some(RegionGrid { size, ids })
    }

    /// Grow `region` from `seed` by BFS until it reaches the minimum size.
    ///
    /// Fails if the frontier runs dry first (the seed was boxed in by
    /// already-assigned cells).
    fn grow_region(
        &self,
        ids: &mut [Option<RegionId>],
        seed: Coord,
        region: RegionId,
        rng: &mut PuzzleRng,
    ) -> Option<()> {
        let size = self.size;
        ids[Self::index(size, seed)] = Some(region);
        let mut cell_count = 1;
        let mut frontier = VecDeque::from([seed]);

        while cell_count < self.min_region_size {
            let cell = frontier.pop_front()?;

            let mut neighbors: SmallVec<[Coord; 4]> = cell
                .orthogonal_neighbors(size)
                .filter(|&n| ids[Self::index(size, n)].is_none())
                .collect();
            rng.shuffle(&mut neighbors);

            for neighbor in neighbors {
                ids[Self::index(size, neighbor)] = Some(region);
                cell_count += 1;
                frontier.push_back(neighbor);
                if cell_count == self.min_region_size {
                    break;
                }
            }
        }

        Some(())
    }

    /// Assign leftover cells to adjacent regions, pass by pass.
    ///
    /// Fails if a pass makes no progress while cells remain unassigned.
    fn sweep_unassigned(&self, ids: &mut [Option<RegionId>]) -> Option<()> {
        let size = self.size;
        loop {
            let mut progress = false;
            let mut remaining = false;

            for coord in Coord::all(size) {
                if ids[Self::index(size, coord)].is_some() {
                    continue;
                }
                match coord
                    .orthogonal_neighbors(size)
                    .find_map(|n| ids[Self::index(size, n)])
                {
                    Some(region) => {
                        ids[Self::index(size, coord)] = Some(region);
                        progress = true;
                    }
                    None => remaining = true,
                }
            }

            if !remaining {
                return Some(());
            }
            if !progress {
                return None;
            }
        }
    }

    fn index(size: usize, coord: Coord) -> usize {
        coord.row * size + coord.col
    }
}
