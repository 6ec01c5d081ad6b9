pub use dp::{AlignmentResult, Engine, Mode};
pub use params::Params;

pub mod alignment;
pub mod dp;
mod params;
pub mod scoring;

/// Align two strings symbol by symbol (Unicode scalar values) with the given mode.
pub fn align<S: crate::Score>(
    mode: Mode,
    seq1: &str,
    seq2: &str,
    params: &Params<S>,
) -> AlignmentResult<S> {
    let seq1: Vec<char> = seq1.chars().collect();
    let seq2: Vec<char> = seq2.chars().collect();
    params.engine().align(mode, &seq1, &seq2)
}

/// Every optimal end-to-end alignment of `seq1` and `seq2`.
pub fn align_global<S: crate::Score>(
    seq1: &str,
    seq2: &str,
    params: &Params<S>,
) -> AlignmentResult<S> {
    align(Mode::Global, seq1, seq2, params)
}

/// Every optimal local alignment of `seq1` and `seq2`.
pub fn align_local<S: crate::Score>(
    seq1: &str,
    seq2: &str,
    params: &Params<S>,
) -> AlignmentResult<S> {
    align(Mode::Local, seq1, seq2, params)
}
