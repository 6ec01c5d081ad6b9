use crate::Score;

/// Tracks the best score seen so far and every cell attaining it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Best<S: Score> {
    score: S,
    cells: Vec<(usize, usize)>,
}

impl<S: Score> Best<S> {
    /// Start from zero: local alignments never score below it.
    pub fn new() -> Self {
        Self {
            score: S::zero(),
            cells: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn observe(&mut self, row: usize, col: usize, score: S) {
        if score > self.score {
            self.score = score;
            self.cells.clear();
            self.cells.push((row, col));
        } else if score == self.score {
            self.cells.push((row, col));
        }
    }

    /// Terminal cells in the order they were observed. Falls back to the origin when nothing
    /// was observed, i.e. one of the sequences is empty.
    pub fn finalize(&mut self) -> (S, Vec<(usize, usize)>) {
        let mut cells = std::mem::take(&mut self.cells);
        if cells.is_empty() {
            cells.push((0, 0));
        }
        (self.score, cells)
    }
}

impl<S: Score> Default for Best<S> {
    fn default() -> Self {
        Self::new()
    }
}
