//! Engine fault signals.
//!
//! Expected retries are ordinary control flow, not errors: a partition
//! attempt that fails to cover the grid is silently restarted, and an
//! incompatible solution/partition pair is silently resampled. The types
//! here cover the two ways generation can actually run out of road - the
//! backtracking search exhausting every branch, and a retry loop hitting
//! its configured ceiling.

use std::error::Error;
use std::fmt;

/// The backtracking search exhausted every branch without completing a
/// placement.
///
/// Guaranteed never to happen at the default size 8; small boards (2 or 3)
/// genuinely admit no placement under the adjacency rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchExhausted {
    /// Board size the search ran on.
    pub size: usize,
}

impl fmt::Display for SearchExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no complete queen placement exists along the explored branch order for a {}x{} board",
            self.size, self.size
        )
    }
}

impl Error for SearchExhausted {}

/// The region partitioner hit its restart ceiling without producing a
/// valid grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionExhausted {
    /// How many whole-grid attempts were made.
    pub attempts: usize,
}

impl fmt::Display for PartitionExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "region partitioning failed {} consecutive attempts",
            self.attempts
        )
    }
}

impl Error for PartitionExhausted {}

/// Failure of full-puzzle generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The partitioner gave up; see [`PartitionExhausted`].
    Partition(PartitionExhausted),
    /// No compatible solution/partition pair within the attempt ceiling.
    Incompatible {
        /// How many pairs were sampled and rejected.
        attempts: usize,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Partition(inner) => write!(f, "puzzle generation failed: {inner}"),
            GenerateError::Incompatible { attempts } => write!(
                f,
                "no compatible solution/region pair found in {attempts} attempts"
            ),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenerateError::Partition(inner) => Some(inner),
            GenerateError::Incompatible { .. } => None,
        }
    }
}

impl From<PartitionExhausted> for GenerateError {
    fn from(inner: PartitionExhausted) -> Self {
        GenerateError::Partition(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let search = SearchExhausted { size: 3 };
        assert!(search.to_string().contains("3x3"));

        let partition = PartitionExhausted { attempts: 10 };
        assert!(partition.to_string().contains("10"));

        let generate = GenerateError::from(partition);
        assert!(generate.to_string().contains("10"));

        let incompatible = GenerateError::Incompatible { attempts: 25 };
        assert!(incompatible.to_string().contains("25"));
    }

    #[test]
    fn test_source_chain() {
        let partition = PartitionExhausted { attempts: 4 };
        let generate = GenerateError::from(partition);
        assert!(generate.source().is_some());
        assert!(GenerateError::Incompatible { attempts: 1 }.source().is_none());
    }
}
