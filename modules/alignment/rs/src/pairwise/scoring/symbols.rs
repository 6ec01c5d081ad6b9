use std::marker::PhantomData;

use crate::pairwise::scoring::{MatrixChoice, Score};

pub trait Scorer {
    type Score: Score;
    type Symbol;

    fn score(
        &self,
        seq1pos: usize,
        s1: &Self::Symbol,
        seq2pos: usize,
        s2: &Self::Symbol,
    ) -> Self::Score;
}

pub trait PosInvariantScorer {
    type SymScore: Score;
    type Symbol;

    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::SymScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::SymScore;
    type Symbol = <Self as PosInvariantScorer>::Symbol;

    #[inline(always)]
    fn score(&self, _: usize, s1: &Self::Symbol, _: usize, s2: &Self::Symbol) -> Self::Score {
        self.score(s1, s2)
    }
}

/// Arithmetic scoring: exact (case-sensitive) comparison of symbols.
pub struct Equality<S: Score, Symbol> {
    pub equal: S,
    pub different: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol: PartialEq> PosInvariantScorer for Equality<S, Symbol> {
    type SymScore = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::SymScore {
        if a == b {
            self.equal
        } else {
            self.different
        }
    }
}

impl<S: Score, Symbol: PartialEq> Equality<S, Symbol> {
    pub fn new(equal: S, different: S) -> Self {
        Self {
            equal,
            different,
            _phantom: Default::default(),
        }
    }
}

/// Looks symbols up in a substitution table, falling back to [`Equality`] when no table is
/// selected, the pair is not covered by the table, or the tabulated value doesn't fit `S`.
pub struct Substitution<S: Score> {
    pub matrix: MatrixChoice,
    pub fallback: Equality<S, char>,
}

impl<S: Score> Substitution<S> {
    pub fn new(matrix: MatrixChoice, equal: S, different: S) -> Self {
        Self {
            matrix,
            fallback: Equality::new(equal, different),
        }
    }
}

/// Full Unicode upper-casing, `None` when the upper-case form spans several chars (e.g. `ß`).
fn uppercase(symbol: char) -> Option<char> {
    let mut upper = symbol.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(x), None) => Some(x),
        _ => None,
    }
}

impl<S: Score> PosInvariantScorer for Substitution<S> {
    type SymScore = S;
    type Symbol = char;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::SymScore {
        if let MatrixChoice::Table(table) = self.matrix {
            let tabulated = uppercase(*a)
                .zip(uppercase(*b))
                .and_then(|(a, b)| table.lookup(a, b))
                .and_then(|x| <S as num::NumCast>::from(x));
            if let Some(score) = tabulated {
                return score;
            }
        }
        PosInvariantScorer::score(&self.fallback, a, b)
    }
}
