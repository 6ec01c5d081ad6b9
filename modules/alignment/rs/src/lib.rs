//! Exhaustive pairwise alignment: global (Needleman-Wunsch) and local (Smith-Waterman) dynamic
//! programming that keeps *every* score-maximizing backpointer and enumerates every distinct
//! optimal alignment.
//!
//! ```
//! use dpalign_alignment_rs::pairwise::{align_global, Params};
//!
//! let result = align_global("AC", "A", &Params::<i32>::default());
//! assert_eq!(*result.score(), 0);
//! assert_eq!(result.alignments()[0].to_string(), "AC\nA-");
//! ```
//!
//! Enumeration is exponential in the number of score ties and recursive in `len(seq1) + len(seq2)`,
//! so it is meant for short, interactively inspected sequences.

pub use dpalign_core_rs::alignment::Alignable;
use dpalign_core_rs::num::PrimSInt;

pub mod pairwise;

/// Alignment scores are signed primitive integers.
pub trait Score: PrimSInt {}

impl<T: PrimSInt> Score for T {}
