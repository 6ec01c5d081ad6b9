use dpalign_alignment_rs::pairwise::scoring::{MatrixChoice, SubstitutionMatrix};
use dpalign_alignment_rs::pairwise::{align, AlignmentResult, Mode, Params};

mod global;
mod local;

pub type Score = i32;

pub struct Workload<'a> {
    seq1: &'a str,
    seq2: &'a str,
    params: Params<Score>,
    score: Score,
    alignments: Vec<(&'a str, &'a str)>,
}

impl<'a> Workload<'a> {
    pub fn new(
        seq1: &'a str,
        seq2: &'a str,
        score: Score,
        alignments: Vec<(&'a str, &'a str)>,
    ) -> Self {
        Self {
            seq1,
            seq2,
            params: Params::default(),
            score,
            alignments,
        }
    }

    pub fn with_params(mut self, params: Params<Score>) -> Self {
        self.params = params;
        self
    }
}

pub fn rows(result: &AlignmentResult<Score>) -> Vec<(&str, &str)> {
    result
        .alignments()
        .iter()
        .map(|x| (x.seq1().as_str(), x.seq2().as_str()))
        .collect()
}

/// Properties every result must satisfy regardless of the inputs.
pub fn check_invariants(mode: Mode, seq1: &str, seq2: &str, params: &Params<Score>) {
    let result = align(mode, seq1, seq2, params);
    let matrix = result.matrix();
    let (n, m) = (seq1.chars().count(), seq2.chars().count());

    assert_eq!((matrix.rows(), matrix.cols()), (n + 1, m + 1));
    assert_eq!(matrix.score(0, 0), 0);
    assert!(matrix[(0, 0)].is_base());
    assert!(!result.alignments().is_empty());

    match mode {
        Mode::Global => {
            let gap = *params.gap_penalty();
            for row in 0..=n {
                assert_eq!(matrix.score(row, 0), row as Score * gap);
            }
            for col in 0..=m {
                assert_eq!(matrix.score(0, col), col as Score * gap);
            }
            assert_eq!(*result.score(), matrix.score(n, m));
        }
        Mode::Local => {
            for (_, cell) in matrix.cells() {
                assert!(*cell.score() >= 0);
                assert_eq!(cell.is_base(), *cell.score() == 0);
            }
            let top = matrix.cells().map(|(_, x)| *x.score()).max().unwrap_or(0);
            assert_eq!(*result.score(), top);
            for &(row, col) in result.terminals() {
                assert_eq!(matrix.score(row, col), top);
            }
        }
    }

    // Every non-base cell has at least one predecessor
    for (_, cell) in matrix.cells() {
        if let Some(edges) = cell.predecessors() {
            assert!(!edges.is_empty());
        }
    }

    for alignment in result.alignments() {
        assert_eq!(alignment.seq1().chars().count(), alignment.seq2().chars().count());
        let (ungapped1, ungapped2) = (alignment.ungapped_seq1(), alignment.ungapped_seq2());
        match mode {
            Mode::Global => {
                assert_eq!(ungapped1, seq1);
                assert_eq!(ungapped2, seq2);
            }
            Mode::Local => {
                assert!(seq1.contains(&ungapped1));
                assert!(seq2.contains(&ungapped2));
            }
        }
    }

    // Deduplicated and deterministic
    let mut seen = std::collections::HashSet::new();
    assert!(result.alignments().iter().all(|x| seen.insert(x.clone())));
    let again = align(mode, seq1, seq2, params);
    assert_eq!(again.alignments(), result.alignments());
    assert_eq!(again.matrix(), result.matrix());
}

#[test]
fn test_invariants() {
    let sequences = [
        ("", ""),
        ("", "ACGT"),
        ("ACGT", ""),
        ("A", "A"),
        ("AC", "A"),
        ("GAATTC", "GATTA"),
        ("ACGTTGCA", "TGCATGCA"),
        ("AAAA", "AA"),
        ("HEAGAWGHEE", "PAWHEAE"),
        ("kitten", "sitting"),
        ("ΑΒΓΔ", "ΑΓΔ"),
    ];
    let params = [
        Params::default(),
        Params::new(2, -1, -2, MatrixChoice::None),
        Params::new(1, -3, 0, MatrixChoice::None),
        Params::new(1, -1, -8, SubstitutionMatrix::Blosum50.into()),
        Params::new(1, -1, -4, SubstitutionMatrix::Pam120.into()),
    ];
    for (seq1, seq2) in sequences {
        for params in &params {
            for mode in [Mode::Global, Mode::Local] {
                check_invariants(mode, seq1, seq2, params);
            }
        }
    }
}

#[test]
fn test_unknown_matrix_pairs_fall_back_to_match_mismatch() {
    let with_table = Params::new(2, -1, -2, SubstitutionMatrix::Blosum62.into());
    let without = Params::new(2, -1, -2, MatrixChoice::None);
    let unknown = Params::new(2, -1, -2, MatrixChoice::from_name("BLOSUM99"));
    for mode in [Mode::Global, Mode::Local] {
        let expected = align(mode, "JOJO", "JOXO", &without);
        for params in [&with_table, &unknown] {
            let result = align(mode, "JOJO", "JOXO", params);
            assert_eq!(result.score(), expected.score());
            assert_eq!(result.alignments(), expected.alignments());
            assert_eq!(result.matrix(), expected.matrix());
        }
        assert_eq!(*expected.score(), 5);
        assert_eq!(rows(&expected), vec![("JOJO", "JOXO")]);
    }
}
