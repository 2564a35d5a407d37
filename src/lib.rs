//! # queens-engine
//!
//! Generation and validation engine for region-constrained queens
//! puzzles: place one queen per row, column, and colored region of a
//! square board, with no two queens touching - not even diagonally.
//!
//! ## Design Principles
//!
//! 1. **Pure components**: the solution generator, region partitioner,
//!    and rule predicates are stateless functions over their inputs.
//!    A presentation layer owns the mutable board and calls in.
//!
//! 2. **Explicit randomness**: every randomized step draws from an
//!    injected [`PuzzleRng`]. Same seed, same puzzle - instances are
//!    reproducible from a single `u64`.
//!
//! 3. **Loud failure over hanging**: the rejection-sampling loops carry
//!    generous attempt ceilings and report exhaustion instead of
//!    spinning on a configuration that cannot be satisfied.
//!
//! ## Modules
//!
//! - `core`: coordinates, cell states, boards, configuration, RNG, errors
//! - `generator`: solution search, region partitioning, compatibility loop
//! - `rules`: move validation and win detection
//! - `games`: headless session driving the tap-cycle state machine
//!
//! ## Example
//!
//! ```
//! use queens_engine::{Coord, GameSession, PuzzleConfig, TapOutcome};
//!
//! let mut session = GameSession::new(PuzzleConfig::default(), 42).unwrap();
//!
//! // Tap once to mark a cell, again to attempt a queen.
//! assert_eq!(session.tap(Coord::new(0, 0)), TapOutcome::Marked);
//!
//! // The intended solution always plays out to a win.
//! session.reveal_solution();
//! assert!(session.is_won());
//! ```

pub mod core;
pub mod games;
pub mod generator;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, CellState, Coord, GenerateError, PartitionExhausted, PuzzleConfig, PuzzleRng,
    PuzzleRngState, SearchExhausted,
};

pub use crate::generator::{
    Puzzle, PuzzleGenerator, RegionGrid, RegionId, RegionPartitioner, Solution, SolutionGenerator,
};

pub use crate::rules::{check_win, is_valid_move};

pub use crate::games::{GameSession, TapOutcome};
