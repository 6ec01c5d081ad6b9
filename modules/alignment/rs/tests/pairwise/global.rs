use dpalign_alignment_rs::pairwise::alignment::Alignment;
use dpalign_alignment_rs::pairwise::scoring::SubstitutionMatrix;
use dpalign_alignment_rs::pairwise::{align_global, Params};

use super::*;

fn ensure(w: Workload<'_>) {
    let result = align_global(w.seq1, w.seq2, &w.params);
    let (n, m) = (w.seq1.chars().count(), w.seq2.chars().count());
    assert_eq!(*result.score(), w.score);
    assert_eq!(result.matrix().score(n, m), w.score);
    assert_eq!(result.terminals(), &vec![(n, m)]);
    assert_eq!(rows(&result), w.alignments);
}

#[test]
fn test_no_ties() {
    let workload = vec![
        Workload::new("AC", "A", 0, vec![("AC", "A-")]),
        Workload::new("ACGT", "ACGT", 4, vec![("ACGT", "ACGT")]),
        Workload::new("JOJO", "JOXO", 5, vec![("JOJO", "JOXO")])
            .with_params(Params::new(2, -1, -2, Default::default())),
    ];
    for w in workload {
        ensure(w);
    }
}

#[test]
fn test_empty() {
    let workload = vec![
        Workload::new("", "", 0, vec![("", "")]),
        Workload::new("", "AB", -2, vec![("--", "AB")]),
        Workload::new("ABC", "", -3, vec![("ABC", "---")]),
    ];
    for w in workload {
        ensure(w);
    }
}

#[test]
fn test_ties_are_enumerated_in_diag_up_left_order() {
    let workload = vec![
        Workload::new(
            "GAATTC",
            "GATTA",
            2,
            vec![("GAATTC", "G-ATTA"), ("GAATTC", "GA-TTA")],
        ),
        Workload::new(
            "AAAA",
            "AA",
            0,
            vec![
                ("AAAA", "--AA"),
                ("AAAA", "-A-A"),
                ("AAAA", "A--A"),
                ("AAAA", "-AA-"),
                ("AAAA", "A-A-"),
                ("AAAA", "AA--"),
            ],
        ),
        Workload::new(
            "ACGTTGCA",
            "TGCATGCA",
            1,
            vec![
                ("-ACGTTGCA", "TGC-ATGCA"),
                ("A-CGTTGCA", "TGC-ATGCA"),
                ("ACG-TTGCA", "-TGCATGCA"),
                ("ACG-TTGCA", "T-GCATGCA"),
                ("-ACGTTGCA", "TGCA-TGCA"),
                ("A-CGTTGCA", "TGCA-TGCA"),
                ("ACGT-TGCA", "-TGCATGCA"),
                ("ACGT-TGCA", "T-GCATGCA"),
                ("-ACGTTGCA", "TGCAT-GCA"),
                ("A-CGTTGCA", "TGCAT-GCA"),
            ],
        ),
    ];
    for w in workload {
        ensure(w);
    }
}

#[test]
fn test_substitution_matrices() {
    let workload = vec![
        Workload::new(
            "HEAGAWGHEE",
            "PAWHEAE",
            1,
            vec![
                ("HEAGAWGHE-E", "--P-AW-HEAE"),
                ("HEAGAWGHE-E", "-P--AW-HEAE"),
                ("HEAGAWGHE-E", "-PA--W-HEAE"),
            ],
        )
        .with_params(Params::new(1, -1, -8, SubstitutionMatrix::Blosum50.into())),
        // Tables are case-insensitive, the alignment keeps the input symbols
        Workload::new(
            "heagawghee",
            "PAWHEAE",
            -8,
            vec![
                ("heagawghee", "--P-AWHEAE"),
                ("heagawghee", "-P--AWHEAE"),
                ("heagawghee", "-PA--WHEAE"),
                ("heagawghe-e", "--P-AW-HEAE"),
                ("heagawghe-e", "-P--AW-HEAE"),
                ("heagawghe-e", "-PA--W-HEAE"),
            ],
        )
        .with_params(Params::new(1, -1, -8, SubstitutionMatrix::Blosum62.into())),
    ];
    for w in workload {
        ensure(w);
    }
}

#[test]
fn test_optimal_edges() {
    let result = align_global("GAATTC", "GATTA", &Params::<Score>::default());
    let matrix = result.matrix();
    assert_eq!(matrix.optimal_edges().count(), 8);

    // Both alignments start with the G/G diagonal and end with the C/A diagonal
    assert!(matrix[(1, 1)].edges()[0].is_optimal());
    assert!(matrix[(6, 5)].edges()[0].is_optimal());

    // The branch point: (3, 2) is reached via diag (G-ATTA) and up (GA-TTA)
    let branch: Vec<_> = matrix[(3, 2)].optimal_predecessors().collect();
    assert_eq!(branch.len(), 2);
    assert_eq!((branch[0].row, branch[0].col), (2, 1));
    assert_eq!((branch[1].row, branch[1].col), (2, 2));

    // Off-path edges stay unmarked
    let total: usize = matrix.cells().map(|(_, x)| x.edges().len()).sum();
    assert!(total > 8);
}

#[test]
fn test_alignment_views() {
    let result = align_global("GAATTC", "GATTA", &Params::<Score>::default());
    let rle: Vec<_> = result.alignments().iter().map(Alignment::rle).collect();
    assert_eq!(rle, vec!["1=1^3=1X", "2=1^2=1X"]);
    assert_eq!(result.alignments()[1].to_string(), "GAATTC\nGA-TTA");
}
