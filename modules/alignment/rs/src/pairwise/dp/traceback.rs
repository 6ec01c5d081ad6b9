use dpalign_core_rs::alignment::Alignable;

use super::matrix::{Move, ScoreMatrix};
use super::mode::Mode;
use crate::pairwise::alignment::{Alignment, GAP};
use crate::Score;

/// Depth-first enumeration of every optimal path in a filled score matrix.
///
/// Each successful path (one that reaches a base case) is recorded as an [`Alignment`], and
/// every backpointer it used is marked optimal in the matrix. Paths are explored in the order
/// predecessors were recorded, so the output order is deterministic. The number of paths may
/// grow exponentially with the number of score ties; nothing is memoized.
pub struct Traceback<'a, S, Smb, S1, S2>
where
    S: Score,
    Smb: Copy + Into<char>,
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
{
    mode: Mode,
    matrix: &'a mut ScoreMatrix<S>,
    seq1: &'a S1,
    seq2: &'a S2,
    // Rows are accumulated from the terminal backwards
    row1: Vec<char>,
    row2: Vec<char>,
    found: Vec<Alignment>,
}

impl<'a, S, Smb, S1, S2> Traceback<'a, S, Smb, S1, S2>
where
    S: Score,
    Smb: Copy + Into<char>,
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
{
    pub fn new(mode: Mode, matrix: &'a mut ScoreMatrix<S>, seq1: &'a S1, seq2: &'a S2) -> Self {
        let depth = seq1.len() + seq2.len();
        Self {
            mode,
            matrix,
            seq1,
            seq2,
            row1: Vec::with_capacity(depth),
            row2: Vec::with_capacity(depth),
            found: Vec::new(),
        }
    }

    /// Enumerate all paths ending at `(row, col)`. Returns true if at least one reached a base case.
    pub fn run(&mut self, row: usize, col: usize) -> bool {
        log::trace!("Traceback from ({row}, {col})");
        self.row1.clear();
        self.row2.clear();
        self.walk(row, col)
    }

    fn walk(&mut self, row: usize, col: usize) -> bool {
        if self.mode.is_base(row, col, &self.matrix[(row, col)]) {
            self.found
                .push(Alignment::from_reversed(&self.row1, &self.row2));
            return true;
        }

        let mut success = false;
        let mut ind = 0;
        while let Some(edge) = self.matrix.predecessor(row, col, ind) {
            let (s1, s2): (char, char) = match Move::between((edge.row, edge.col), (row, col)) {
                Some(Move::Diagonal) => (
                    (*self.seq1.at(row - 1)).into(),
                    (*self.seq2.at(col - 1)).into(),
                ),
                Some(Move::Up) => ((*self.seq1.at(row - 1)).into(), GAP),
                Some(Move::Left) => (GAP, (*self.seq2.at(col - 1)).into()),
                // The fill only records edges from adjacent cells
                None => unreachable!(
                    "Predecessor ({}, {}) is not adjacent to ({row}, {col})",
                    edge.row, edge.col
                ),
            };

            self.row1.push(s1);
            self.row2.push(s2);
            let reached = self.walk(edge.row, edge.col);
            self.row1.pop();
            self.row2.pop();

            if reached {
                self.matrix.mark_optimal(row, col, ind);
                success = true;
            }
            ind += 1;
        }
        success
    }

    /// Alignments in discovery order, duplicates included.
    pub fn finalize(self) -> Vec<Alignment> {
        self.found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairwise::dp::{algo, storage::Best};
    use crate::pairwise::scoring::{compose, gaps, symbols};

    fn matrix(mode: Mode, seq1: &[u8], seq2: &[u8]) -> (ScoreMatrix<i32>, Vec<(usize, usize)>) {
        let scheme = compose(
            symbols::Equality::<i32, u8>::new(1, -1),
            gaps::Linear { penalty: -1 },
        );
        let mut best = Best::new();
        let matrix = algo::fill(mode, &seq1, &seq2, &scheme, &mut best);
        let terminals = match mode {
            Mode::Global => vec![(seq1.len(), seq2.len())],
            Mode::Local => best.finalize().1,
        };
        (matrix, terminals)
    }

    fn rows(alignments: &[Alignment]) -> Vec<(&str, &str)> {
        alignments
            .iter()
            .map(|x| (x.seq1().as_str(), x.seq2().as_str()))
            .collect()
    }

    #[test]
    fn test_single_path() {
        let (seq1, seq2) = (b"AC".as_slice(), b"A".as_slice());
        let (mut matrix, _) = matrix(Mode::Global, seq1, seq2);
        let mut traceback = Traceback::new(Mode::Global, &mut matrix, &seq1, &seq2);
        assert!(traceback.run(2, 1));
        let found = traceback.finalize();
        assert_eq!(rows(&found), vec![("AC", "A-")]);

        let optimal: Vec<_> = matrix.optimal_edges().collect();
        assert_eq!(optimal, vec![((0, 0), (1, 1)), ((1, 1), (2, 1))]);
    }

    #[test]
    fn test_all_ties_are_enumerated_in_order() {
        // Every move into (1, 1) ties at -2
        let scheme = compose(
            symbols::Equality::<i32, u8>::new(1, -2),
            gaps::Linear { penalty: -1 },
        );
        let (seq1, seq2) = (b"A".as_slice(), b"C".as_slice());
        let mut matrix = algo::fill(Mode::Global, &seq1, &seq2, &scheme, &mut Best::new());
        let mut traceback = Traceback::new(Mode::Global, &mut matrix, &seq1, &seq2);
        assert!(traceback.run(1, 1));
        assert_eq!(
            rows(&traceback.finalize()),
            vec![("A", "C"), ("-A", "C-"), ("A-", "-C")]
        );
        assert!(matrix[(1, 1)].edges().iter().all(|x| x.is_optimal()));
        assert!(matrix[(0, 1)].edges().iter().all(|x| x.is_optimal()));
        assert!(matrix[(1, 0)].edges().iter().all(|x| x.is_optimal()));
    }

    #[test]
    fn test_local_stops_at_zero() {
        let (seq1, seq2) = (b"TTACG".as_slice(), b"GACGT".as_slice());
        let (mut matrix, terminals) = matrix(Mode::Local, seq1, seq2);
        assert_eq!(terminals, vec![(5, 4)]);
        let mut traceback = Traceback::new(Mode::Local, &mut matrix, &seq1, &seq2);
        for (row, col) in terminals {
            assert!(traceback.run(row, col));
        }
        assert_eq!(rows(&traceback.finalize()), vec![("ACG", "ACG")]);
        // Edges outside of the optimal path stay unmarked
        assert_eq!(matrix.optimal_edges().count(), 3);
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_rejects_non_adjacent_predecessor() {
        use crate::pairwise::dp::{Cell, Edge};

        let (seq1, seq2) = (b"AA".as_slice(), b"AA".as_slice());
        let (mut matrix, _) = matrix(Mode::Global, seq1, seq2);
        matrix.set(2, 2, Cell::linked(2, vec![Edge::new(0, 0)]));
        let mut traceback = Traceback::new(Mode::Global, &mut matrix, &seq1, &seq2);
        traceback.run(2, 2);
    }

    #[test]
    fn test_empty_path_from_base_cell() {
        let (seq1, seq2) = (b"AA".as_slice(), b"CC".as_slice());
        let (mut matrix, terminals) = matrix(Mode::Local, seq1, seq2);
        let mut traceback = Traceback::new(Mode::Local, &mut matrix, &seq1, &seq2);
        for (row, col) in terminals {
            assert!(traceback.run(row, col));
        }
        let found = traceback.finalize();
        assert_eq!(found.len(), 4);
        assert!(found.iter().all(|x| x.is_empty()));
        assert_eq!(matrix.optimal_edges().count(), 0);
    }
}
