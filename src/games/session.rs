//! Headless play session.

use crate::core::{Board, CellState, Coord, GenerateError, PuzzleConfig, PuzzleRng};
use crate::generator::{Puzzle, PuzzleGenerator, RegionGrid, Solution};
use crate::rules;

/// What a single tap did, reported for caller feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// `Empty -> Marked`.
    Marked,
    /// `Marked -> Queen`; the move passed validation.
    QueenPlaced,
    /// `Marked -> Queen` was refused; the board is unchanged.
    Rejected,
    /// `Queen -> Empty`.
    Cleared,
    /// The puzzle is already solved; taps do nothing until a reset.
    Ignored,
}

/// One game of the puzzle: a generated instance plus the mutable board.
///
/// The session is the stateful caller the pure engine components are
/// designed around. It owns the board exclusively, drives the cell state
/// machine on taps, consults [`rules::is_valid_move`] on the gated edge,
/// and latches the win after every accepted placement. The solution and
/// regions are immutable for the lifetime of an instance; `reset`
/// replaces the whole triple.
#[derive(Clone, Debug)]
pub struct GameSession {
    generator: PuzzleGenerator,
    rng: PuzzleRng,
    puzzle: Puzzle,
    board: Board,
    won: bool,
}

impl GameSession {
    /// Start a session with a freshly generated puzzle.
    pub fn new(config: PuzzleConfig, seed: u64) -> Result<Self, GenerateError> {
        let generator = PuzzleGenerator::new(config);
        let mut rng = PuzzleRng::new(seed);
        let puzzle = generator.generate(&mut rng)?;
        let board = Board::new(generator.config().size);

        Ok(Self {
            generator,
            rng,
            puzzle,
            board,
            won: false,
        })
    }

    /// Apply one tap to the cell at `coord`.
    ///
    /// Cycles the cell `Empty -> Marked -> Queen -> Empty`; the
    /// `Marked -> Queen` edge only happens if the move validator
    /// approves, otherwise the tap is a no-op reported as
    /// [`TapOutcome::Rejected`]. Taps after a win are ignored.
    pub fn tap(&mut self, coord: Coord) -> TapOutcome {
        if self.won {
            return TapOutcome::Ignored;
        }

        match self.board.get(coord) {
            CellState::Empty => {
                self.board.set(coord, CellState::Marked);
                TapOutcome::Marked
            }
            CellState::Marked => {
                if rules::is_valid_move(&self.board, self.puzzle.regions(), coord) {
                    self.board.set(coord, CellState::Queen);
                    if rules::check_win(&self.board, self.puzzle.regions()) {
                        self.won = true;
                    }
                    TapOutcome::QueenPlaced
                } else {
                    TapOutcome::Rejected
                }
            }
            CellState::Queen => {
                self.board.set(coord, CellState::Empty);
                TapOutcome::Cleared
            }
        }
    }

    /// Discard the current instance and deal a fresh one.
    pub fn reset(&mut self) -> Result<(), GenerateError> {
        self.puzzle = self.generator.generate(&mut self.rng)?;
        self.board = Board::new(self.generator.config().size);
        self.won = false;
        Ok(())
    }

    /// Replace the board with the stored solution and end the game.
    ///
    /// Bypasses the move validator - the solution is valid by
    /// construction - and marks the session won.
    pub fn reveal_solution(&mut self) {
        let mut board = Board::new(self.generator.config().size);
        for &queen in self.puzzle.solution().queens() {
            board.set(queen, CellState::Queen);
        }
        self.board = board;
        self.won = true;
    }

    // === Accessors ===

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active region layout.
    #[must_use]
    pub fn regions(&self) -> &RegionGrid {
        self.puzzle.regions()
    }

    /// The intended solution for the active instance.
    #[must_use]
    pub fn solution(&self) -> &Solution {
        self.puzzle.solution()
    }

    /// Has the puzzle been solved (or revealed)?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// The configuration the session generates under.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        self.generator.config()
    }
}
