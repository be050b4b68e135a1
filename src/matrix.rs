use crate::model::PairwiseResult;

/// Square sample-by-sample table. Cells start unset and only the canonical
/// (row < col) cell of each pair is ever populated, so the mirror cells and
/// the diagonal read back as None.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    n: usize,
    cells: Vec<Option<T>>,
}

impl<T: Copy> SquareMatrix<T> {
    fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![None; n * n],
        }
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(row < col, "pairwise cells live in the upper triangle");
        self.cells[self.n * row + col] = Some(value);
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.cells[self.n * row + col]
    }
}

/// The three pairwise matrices over one sample set, indexed by input column
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrices {
    samples: Vec<String>,
    means: SquareMatrix<Option<f64>>,
    usable: SquareMatrix<u64>,
    missing: SquareMatrix<u64>,
}

impl SimilarityMatrices {
    pub fn new(samples: Vec<String>) -> Self {
        let n = samples.len();
        Self {
            samples,
            means: SquareMatrix::new(n),
            usable: SquareMatrix::new(n),
            missing: SquareMatrix::new(n),
        }
    }

    /// Writes one pair's aggregate into the canonical (i < j) cell of all
    /// three matrices.
    pub fn insert(&mut self, i: usize, j: usize, result: PairwiseResult) {
        self.means.set(i, j, result.mean);
        self.usable.set(i, j, result.usable);
        self.missing.set(i, j, result.missing);
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Some(mean) for a populated cell, where the inner Option is None when
    /// the pair had zero usable sites; None for the mirror and the diagonal.
    pub fn mean(&self, row: usize, col: usize) -> Option<Option<f64>> {
        self.means.get(row, col)
    }

    pub fn usable(&self, row: usize, col: usize) -> Option<u64> {
        self.usable.get(row, col)
    }

    pub fn missing(&self, row: usize, col: usize) -> Option<u64> {
        self.missing.get(row, col)
    }
}
