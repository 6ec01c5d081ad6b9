use std::ops::Index;

use derive_getters::{Dissolve, Getters};

use crate::Score;

/// Direction of a backpointer, named after the move that leads into the current cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Move {
    /// From `(row - 1, col - 1)`: both sequences advance.
    Diagonal,
    /// From `(row - 1, col)`: the first sequence advances against a gap.
    Up,
    /// From `(row, col - 1)`: the second sequence advances against a gap.
    Left,
}

impl Move {
    /// Tie-break order for predecessors; traceback enumerates alignments in this order.
    pub const ORDER: [Move; 3] = [Move::Diagonal, Move::Up, Move::Left];

    /// The cell this move starts from when it ends at `(row, col)`.
    pub fn origin(&self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Move::Diagonal => (row - 1, col - 1),
            Move::Up => (row - 1, col),
            Move::Left => (row, col - 1),
        }
    }

    /// Classify the edge `from -> to`, `None` if the cells are not adjacent in the DP sense.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Move> {
        let drow = to.0.checked_sub(from.0)?;
        let dcol = to.1.checked_sub(from.1)?;
        match (drow, dcol) {
            (1, 1) => Some(Move::Diagonal),
            (1, 0) => Some(Move::Up),
            (0, 1) => Some(Move::Left),
            _ => None,
        }
    }
}

/// Backpointer to a predecessor cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Edge {
    pub row: usize,
    pub col: usize,
    /// Set once the edge is proven to lie on at least one optimal path.
    pub optimal: bool,
}

impl Edge {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            optimal: false,
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.optimal
    }
}

/// A DP cell: its score and every predecessor attaining it.
/// `predecessors == None` marks a base case for the traceback.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Getters, Dissolve)]
pub struct Cell<S: Score> {
    score: S,
    predecessors: Option<Vec<Edge>>,
}

impl<S: Score> Cell<S> {
    pub fn base(score: S) -> Self {
        Self {
            score,
            predecessors: None,
        }
    }

    pub fn linked(score: S, predecessors: Vec<Edge>) -> Self {
        debug_assert!(!predecessors.is_empty());
        Self {
            score,
            predecessors: Some(predecessors),
        }
    }

    /// True if the cell has no recorded predecessors.
    pub fn is_base(&self) -> bool {
        self.predecessors.is_none()
    }

    /// Predecessor edges, empty for base cells.
    pub fn edges(&self) -> &[Edge] {
        self.predecessors.as_deref().unwrap_or_default()
    }

    pub fn optimal_predecessors(&self) -> impl Iterator<Item = &Edge> {
        self.edges().iter().filter(|x| x.optimal)
    }
}

/// Row-major `(rows x cols)` grid of cells; `rows = len(seq1) + 1`, `cols = len(seq2) + 1`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ScoreMatrix<S: Score> {
    rows: usize,
    cols: usize,
    cells: Vec<Cell<S>>,
}

impl<S: Score> ScoreMatrix<S> {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::base(S::zero()); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell<S>> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[self.offset(row, col)])
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn score(&self, row: usize, col: usize) -> S {
        self[(row, col)].score
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell<S>) {
        let offset = self.offset(row, col);
        self.cells[offset] = cell;
    }

    /// The `ind`-th predecessor of the cell, in the order they were recorded.
    pub(crate) fn predecessor(&self, row: usize, col: usize, ind: usize) -> Option<Edge> {
        self[(row, col)].edges().get(ind).copied()
    }

    pub(crate) fn mark_optimal(&mut self, row: usize, col: usize, ind: usize) {
        let offset = self.offset(row, col);
        if let Some(edge) = self.cells[offset]
            .predecessors
            .as_mut()
            .and_then(|x| x.get_mut(ind))
        {
            edge.optimal = true;
        }
    }

    /// Cells of the given row.
    pub fn row(&self, row: usize) -> &[Cell<S>] {
        let start = self.offset(row, 0);
        &self.cells[start..start + self.cols]
    }

    /// All cells with their `(row, col)` coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell<S>)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(ind, cell)| ((ind / cols, ind % cols), cell))
    }

    /// Every backpointer lying on an optimal path as a `(from, to)` pair of coordinates.
    pub fn optimal_edges(&self) -> impl Iterator<Item = ((usize, usize), (usize, usize))> + '_ {
        self.cells().flat_map(|(to, cell)| {
            cell.optimal_predecessors()
                .map(move |edge| ((edge.row, edge.col), to))
        })
    }
}

impl<S: Score> Index<(usize, usize)> for ScoreMatrix<S> {
    type Output = Cell<S>;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[self.offset(row, col)]
    }
}
