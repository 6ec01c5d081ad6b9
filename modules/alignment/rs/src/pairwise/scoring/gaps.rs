use crate::pairwise::scoring::Score;

// Gap scores are additive: every gap column is charged independently of its neighbours.
pub trait Scorer {
    type Score: Score;

    /// Cost of a gap in the first sequence facing the second sequence's symbol at `pos`.
    fn gap_first(&self, pos: usize) -> Self::Score;
    /// Cost of a gap in the second sequence facing the first sequence's symbol at `pos`.
    fn gap_second(&self, pos: usize) -> Self::Score;
}

pub trait PosInvariantScorer {
    type GapScore: Score;

    fn gap(&self) -> Self::GapScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::GapScore;

    #[inline(always)]
    fn gap_first(&self, _: usize) -> Self::Score {
        self.gap()
    }

    #[inline(always)]
    fn gap_second(&self, _: usize) -> Self::Score {
        self.gap()
    }
}

/// The same penalty for every gap column. Penalties are usually non-positive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Linear<S: Score> {
    pub penalty: S,
}

impl<S: Score> PosInvariantScorer for Linear<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap(&self) -> Self::GapScore {
        self.penalty
    }
}
