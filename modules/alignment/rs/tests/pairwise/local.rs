use dpalign_alignment_rs::pairwise::scoring::SubstitutionMatrix;
use dpalign_alignment_rs::pairwise::{align_local, Params};

use super::*;

fn ensure(w: Workload<'_>, terminals: Vec<(usize, usize)>) {
    let result = align_local(w.seq1, w.seq2, &w.params);
    assert_eq!(*result.score(), w.score);
    assert_eq!(result.terminals(), &terminals);
    for &(row, col) in &terminals {
        assert_eq!(result.matrix().score(row, col), w.score);
    }
    assert_eq!(rows(&result), w.alignments);
}

#[test]
fn test_single_terminal() {
    ensure(Workload::new("AC", "A", 1, vec![("A", "A")]), vec![(1, 1)]);
    ensure(
        Workload::new("GAATTC", "GATTA", 3, vec![("ATT", "ATT"), ("GAATT", "GA-TT")]),
        vec![(5, 4)],
    );
    ensure(
        Workload::new("TTACG", "GACGT", 3, vec![("ACG", "ACG")]),
        vec![(5, 4)],
    );
}

#[test]
fn test_tied_terminals() {
    ensure(
        Workload::new("ACGTTGCA", "TGCATGCA", 4, vec![("TGCA", "TGCA")]),
        vec![(8, 4), (8, 8)],
    );
    ensure(
        Workload::new("AAAA", "AA", 2, vec![("AA", "AA")]),
        vec![(2, 2), (3, 2), (4, 2)],
    );
}

#[test]
fn test_nothing_scores_above_zero() {
    let result = align_local("AAA", "CC", &Params::<Score>::default());
    assert_eq!(*result.score(), 0);
    assert_eq!(result.terminals().len(), 6);
    assert_eq!(rows(&result), vec![("", "")]);
    assert_eq!(result.matrix().optimal_edges().count(), 0);
    assert!(result.matrix().cells().all(|(_, x)| x.is_base()));
}

#[test]
fn test_empty() {
    ensure(Workload::new("", "", 0, vec![("", "")]), vec![(0, 0)]);
    ensure(Workload::new("ACGT", "", 0, vec![("", "")]), vec![(0, 0)]);
    ensure(Workload::new("", "ACGT", 0, vec![("", "")]), vec![(0, 0)]);
}

#[test]
fn test_substitution_matrices() {
    ensure(
        Workload::new("HEAGAWGHEE", "PAWHEAE", 28, vec![("AWGHE", "AW-HE")])
            .with_params(Params::new(1, -1, -8, SubstitutionMatrix::Blosum50.into())),
        vec![(9, 5)],
    );
    ensure(
        Workload::new("heagawghee", "PAWHEAE", 20, vec![("awghe", "AW-HE")])
            .with_params(Params::new(1, -1, -8, SubstitutionMatrix::Blosum62.into())),
        vec![(9, 5)],
    );
}

#[test]
fn test_optimal_edges_follow_the_best_path() {
    let result = align_local("TTACG", "GACGT", &Params::<Score>::default());
    let edges: Vec<_> = result.matrix().optimal_edges().collect();
    assert_eq!(
        edges,
        vec![((2, 1), (3, 2)), ((3, 2), (4, 3)), ((4, 3), (5, 4))]
    );
}
