use dpalign_core_rs::alignment::Alignable;

use super::matrix::{Cell, Edge, Move, ScoreMatrix};
use super::mode::Mode;
use super::storage::Best;
use crate::pairwise::scoring;
use crate::Score;

/// Fill the `(len(seq1) + 1) x (len(seq2) + 1)` score matrix row by row.
/// Every interior cell records all predecessors attaining its score in [`Move::ORDER`].
/// Local mode reports interior cells to `best` to select traceback terminals.
pub fn fill<S, Smb, Scheme, S1, S2>(
    mode: Mode,
    seq1: &S1,
    seq2: &S2,
    scheme: &Scheme,
    best: &mut Best<S>,
) -> ScoreMatrix<S>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
{
    let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
    let mut matrix = ScoreMatrix::new(rows, cols);

    // First column: the first sequence against gaps
    let mut prev = matrix.score(0, 0);
    for row in 0..rows {
        let gap = if row == 0 {
            S::zero()
        } else {
            scheme.gap_second(row - 1)
        };
        let cell = mode.boundary(row, 0, prev, gap);
        prev = *cell.score();
        matrix.set(row, 0, cell);
    }

    // First row: the second sequence against gaps
    let mut prev = matrix.score(0, 0);
    for col in 1..cols {
        let cell = mode.boundary(0, col, prev, scheme.gap_first(col - 1));
        prev = *cell.score();
        matrix.set(0, col, cell);
    }

    for row in 1..rows {
        for col in 1..cols {
            let candidates = [
                matrix.score(row - 1, col - 1)
                    + scheme.score(row - 1, seq1.at(row - 1), col - 1, seq2.at(col - 1)),
                matrix.score(row - 1, col) + scheme.gap_second(row - 1),
                matrix.score(row, col - 1) + scheme.gap_first(col - 1),
            ];
            // Never empty
            let top = candidates[0].max(candidates[1]).max(candidates[2]);

            let cell = match mode.floor(top) {
                Some(score) => {
                    let predecessors = Move::ORDER
                        .into_iter()
                        .zip(candidates)
                        .filter(|(_, candidate)| *candidate == top)
                        .map(|(mv, _)| {
                            let (r, c) = mv.origin(row, col);
                            Edge::new(r, c)
                        })
                        .collect();
                    Cell::linked(score, predecessors)
                }
                None => Cell::base(S::zero()),
            };

            if mode == Mode::Local {
                best.observe(row, col, *cell.score());
            }
            matrix.set(row, col, cell);
        }
    }
    matrix
}
