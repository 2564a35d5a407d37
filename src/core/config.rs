//! Puzzle generation parameters.
//!
//! The engine never hardcodes the board dimension or retry ceilings - the
//! caller configures them here. The defaults describe the reference
//! 8x8 instance.

use serde::{Deserialize, Serialize};

/// Parameters shared by the generators and the play session.
///
/// `size` doubles as the region count and the queen count: a finished
/// puzzle has one queen per row, per column, and per region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Board side length. Also the number of regions and queens.
    pub size: usize,

    /// Every region must contain at least this many cells.
    ///
    /// Guards against degenerate single-cell regions; a partition attempt
    /// that cannot grow a region to this size is discarded wholesale.
    pub min_region_size: usize,

    /// Restart ceiling for the region partitioner.
    ///
    /// Attempts fail rarely at the default size, so this bound exists to
    /// fail loudly on pathological configurations rather than hang.
    pub max_partition_attempts: usize,

    /// Attempt ceiling for the solution/partition compatibility loop.
    pub max_generate_attempts: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: 8,
            min_region_size: 2,
            max_partition_attempts: 10_000,
            max_generate_attempts: 10_000,
        }
    }
}

impl PuzzleConfig {
    /// Create a configuration for a `size`-by-`size` board, with default
    /// region and retry settings.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be positive");
        assert!(size <= 255, "At most 255 regions supported");
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the minimum region size.
    #[must_use]
    pub fn with_min_region_size(mut self, min_region_size: usize) -> Self {
        assert!(min_region_size >= 1, "Regions must hold at least one cell");
        self.min_region_size = min_region_size;
        self
    }

    /// Set the partitioner's restart ceiling.
    #[must_use]
    pub fn with_max_partition_attempts(mut self, attempts: usize) -> Self {
        self.max_partition_attempts = attempts;
        self
    }

    /// Set the compatibility loop's attempt ceiling.
    #[must_use]
    pub fn with_max_generate_attempts(mut self, attempts: usize) -> Self {
        self.max_generate_attempts = attempts;
        self
    }
}
