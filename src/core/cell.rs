//! Play-time cell states.

use serde::{Deserialize, Serialize};

/// The state of one board cell during play.
///
/// A tap on a cell cycles it `Empty → Marked → Queen → Empty`. The
/// `Marked → Queen` edge is the only gated transition: it requires the
/// move validator's approval, and a rejected tap leaves the cell as is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Untouched cell.
    #[default]
    Empty,
    /// Player annotation ruling the cell out.
    Marked,
    /// A placed queen.
    Queen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(CellState::default(), CellState::Empty);
    }
}
