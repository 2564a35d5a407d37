//! Stateful play layer over the pure engine components.
//!
//! [`GameSession`] is the reference caller: it owns the board, runs the
//! tap-driven cell state machine, and wires the generators and rule
//! predicates together the way an interactive frontend would.

mod session;

pub use session::{GameSession, TapOutcome};
