use std::marker::PhantomData;

use derive_getters::{Dissolve, Getters};
use itertools::Itertools;

use dpalign_core_rs::alignment::Alignable;

use super::matrix::ScoreMatrix;
use super::mode::Mode;
use super::storage::Best;
use super::traceback::Traceback;
use super::algo;
use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring;
use crate::Score;

/// Outcome of a single alignment run.
#[derive(Clone, Debug, Getters, Dissolve)]
pub struct AlignmentResult<S: Score> {
    /// Optimal score: the bottom-right cell (global) or the best cell (local).
    score: S,
    /// Cells the traceback started from, in traversal order.
    terminals: Vec<(usize, usize)>,
    /// Distinct optimal alignments in first-discovery order.
    alignments: Vec<Alignment>,
    /// The filled matrix with optimal backpointers marked.
    matrix: ScoreMatrix<S>,
}

pub struct Engine<S, Smb, Scheme>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
{
    scoring: Scheme,
    _phantom: PhantomData<(S, Smb)>,
}

impl<S, Smb, Scheme> Engine<S, Smb, Scheme>
where
    S: Score,
    Smb: Copy + Into<char>,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
{
    pub fn new(scoring: Scheme) -> Self {
        Self {
            scoring,
            _phantom: Default::default(),
        }
    }

    pub fn with_scoring(&mut self, scoring: Scheme) {
        self.scoring = scoring;
    }

    pub fn scoring(&self) -> &Scheme {
        &self.scoring
    }

    /// Needleman-Wunsch: every optimal end-to-end alignment.
    pub fn global<S1, S2>(&self, seq1: &S1, seq2: &S2) -> AlignmentResult<S>
    where
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        self.align(Mode::Global, seq1, seq2)
    }

    /// Smith-Waterman: every optimal local alignment, over all best-scoring cells.
    pub fn local<S1, S2>(&self, seq1: &S1, seq2: &S2) -> AlignmentResult<S>
    where
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        self.align(Mode::Local, seq1, seq2)
    }

    pub fn align<S1, S2>(&self, mode: Mode, seq1: &S1, seq2: &S2) -> AlignmentResult<S>
    where
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        log::debug!(
            "Running {mode} alignment on a {}x{} score matrix",
            seq1.len() + 1,
            seq2.len() + 1
        );

        let mut best = Best::new();
        let mut matrix = algo::fill(mode, seq1, seq2, &self.scoring, &mut best);

        let (score, terminals) = match mode {
            Mode::Global => {
                let (row, col) = (seq1.len(), seq2.len());
                (matrix.score(row, col), vec![(row, col)])
            }
            Mode::Local => best.finalize(),
        };
        log::debug!(
            "Optimal score {score:?} reached at {} terminal cell(s)",
            terminals.len()
        );

        let mut traceback = Traceback::new(mode, &mut matrix, seq1, seq2);
        for &(row, col) in &terminals {
            traceback.run(row, col);
        }
        let found = traceback.finalize();
        let total = found.len();

        // Order-preserving deduplication
        let alignments: Vec<Alignment> = found.into_iter().unique().collect();
        log::debug!(
            "Traceback produced {total} path(s), {} distinct alignment(s)",
            alignments.len()
        );

        AlignmentResult {
            score,
            terminals,
            alignments,
            matrix,
        }
    }
}
