use derive_getters::Getters;
use derive_more::Constructor;

use super::dp::Engine;
use super::scoring::{gaps, symbols, Delegate, MatrixChoice};
use crate::Score;

/// Scoring scheme built from [`Params`].
pub type Scheme<S> = Delegate<S, char, symbols::Substitution<S>, gaps::Linear<S>>;

/// User-facing scoring parameters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Getters, Constructor)]
pub struct Params<S: Score> {
    /// Score of identical symbols when no substitution table applies
    match_score: S,
    /// Score of different symbols when no substitution table applies
    mismatch_score: S,
    /// Cost of a single gap column, usually non-positive
    gap_penalty: S,
    matrix: MatrixChoice,
}

impl<S: Score> Params<S> {
    pub fn with_matrix(mut self, matrix: impl Into<MatrixChoice>) -> Self {
        self.matrix = matrix.into();
        self
    }

    pub fn scheme(&self) -> Scheme<S> {
        super::scoring::compose(
            symbols::Substitution::new(self.matrix, self.match_score, self.mismatch_score),
            gaps::Linear {
                penalty: self.gap_penalty,
            },
        )
    }

    pub fn engine(&self) -> Engine<S, char, Scheme<S>> {
        Engine::new(self.scheme())
    }
}

impl<S: Score> Default for Params<S> {
    fn default() -> Self {
        Self {
            match_score: S::one(),
            mismatch_score: -S::one(),
            gap_penalty: -S::one(),
            matrix: MatrixChoice::None,
        }
    }
}
