use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};
use eyre::Result;

use dpalign_core_rs::num::PrimUInt;

use super::{Op, Step};

/// Placeholder for an insertion/deletion in an aligned row.
pub const GAP: char = '-';

/// One optimal alignment: two rows of equal length over the input symbols and [`GAP`].
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Getters, Dissolve)]
pub struct Alignment {
    seq1: String,
    seq2: String,
}

impl Alignment {
    pub fn new(seq1: String, seq2: String) -> Result<Self> {
        let (len1, len2) = (seq1.chars().count(), seq2.chars().count());
        if len1 != len2 {
            return Err(eyre::eyre!(
                "Aligned rows must have equal length, got {len1} and {len2}"
            ));
        }
        Ok(Self { seq1, seq2 })
    }

    /// Build from rows accumulated end-to-start, as produced by the traceback.
    pub(crate) fn from_reversed(seq1: &[char], seq2: &[char]) -> Self {
        debug_assert_eq!(seq1.len(), seq2.len());
        Self {
            seq1: seq1.iter().rev().collect(),
            seq2: seq2.iter().rev().collect(),
        }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.seq1.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty()
    }

    /// Alignment columns as (first row, second row) symbol pairs.
    pub fn columns(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.seq1.chars().zip(self.seq2.chars())
    }

    /// Per-column operations. Symbols equal to [`GAP`] are always read as gaps.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.columns().map(|column| match column {
            (GAP, _) => Op::GapFirst,
            (_, GAP) => Op::GapSecond,
            (a, b) if a == b => Op::Match,
            _ => Op::Mismatch,
        })
    }

    /// Run-length encoded operations.
    pub fn steps<Len: PrimUInt>(&self) -> Vec<Step<Len>> {
        Step::from_ops(self.ops())
    }

    /// Returns the RLE representation of the alignment, e.g. `3=1X1v`.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps::<usize>().iter())
    }

    /// The first row with gaps removed.
    pub fn ungapped_seq1(&self) -> String {
        self.seq1.chars().filter(|x| *x != GAP).collect()
    }

    /// The second row with gaps removed.
    pub fn ungapped_seq2(&self) -> String {
        self.seq2.chars().filter(|x| *x != GAP).collect()
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.seq1, self.seq2)
    }
}
