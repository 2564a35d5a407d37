//! Play-time rule predicates.
//!
//! Two pure functions drive interactive play:
//! - [`is_valid_move`] gates the `Marked -> Queen` cell transition
//! - [`check_win`] detects a completed board
//!
//! Neither mutates anything; the caller owns the board and applies (or
//! refuses) transitions based on what these return.

pub mod validator;
pub mod win;

pub use validator::is_valid_move;
pub use win::check_win;
