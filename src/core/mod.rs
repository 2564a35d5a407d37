//! Core engine types: coordinates, cells, boards, RNG, configuration, errors.
//!
//! These are the building blocks shared by the generators, the rule
//! predicates, and the play session. Everything here is presentation-free.

pub mod board;
pub mod cell;
pub mod config;
pub mod coord;
pub mod error;
pub mod rng;

pub use board::Board;
pub use cell::CellState;
pub use config::PuzzleConfig;
pub use coord::Coord;
pub use error::{GenerateError, PartitionExhausted, SearchExhausted};
pub use rng::{PuzzleRng, PuzzleRngState};
