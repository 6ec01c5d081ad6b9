use std::fmt::{Display, Formatter};

use super::matrix::Cell;
use crate::Score;

/// Alignment strategy: the boundary, floor, base-case and terminal rules of the DP.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Mode {
    /// End-to-end alignment of both sequences (Needleman-Wunsch).
    #[default]
    Global,
    /// Best-scoring pair of subsequences (Smith-Waterman).
    Local,
}

impl Mode {
    /// Boundary cell of the first row/column given the score of the boundary cell preceding it
    /// (`prev`, the origin for `(0, 0)`) and the gap cost of the step between them.
    pub fn boundary<S: Score>(&self, row: usize, col: usize, prev: S, gap: S) -> Cell<S> {
        debug_assert!(row == 0 || col == 0);
        match (self, row, col) {
            (_, 0, 0) | (Mode::Local, _, _) => Cell::base(S::zero()),
            (Mode::Global, 0, _) => Cell::linked(prev + gap, vec![super::Edge::new(0, col - 1)]),
            (Mode::Global, _, _) => Cell::linked(prev + gap, vec![super::Edge::new(row - 1, 0)]),
        }
    }

    /// Final score of an interior cell given the best predecessor score.
    /// `None` means the cell becomes a base case (local alignment floors at zero).
    pub fn floor<S: Score>(&self, best: S) -> Option<S> {
        match self {
            Mode::Global => Some(best),
            Mode::Local if best > S::zero() => Some(best),
            Mode::Local => None,
        }
    }

    /// Whether the traceback stops at the cell.
    pub fn is_base<S: Score>(&self, row: usize, col: usize, cell: &Cell<S>) -> bool {
        match self {
            Mode::Global => row == 0 && col == 0,
            Mode::Local => cell.score().is_zero(),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Global => write!(f, "global"),
            Mode::Local => write!(f, "local"),
        }
    }
}
