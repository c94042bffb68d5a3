//! Dense pairwise cosine similarity.

use crate::tfidf::SparseVector;

/// Symmetric `n × n` cosine similarity matrix, stored row-major.
///
/// Cells lie in `[0, 1]`. The diagonal is exactly 1 for rows with a
/// non-zero vector and 0 for rows without any vocabulary tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute all pairs from vectors that are already L2-normalized, where
    /// cosine similarity reduces to the dot product.
    #[must_use]
    pub fn from_normalized(vectors: &[SparseVector]) -> Self {
        let n = vectors.len();
        let mut cells = vec![0.0; n * n];

        for i in 0..n {
            if vectors[i].is_zero() {
                continue;
            }
            cells[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let score = vectors[i].dot(&vectors[j]).clamp(0.0, 1.0);
                cells[i * n + j] = score;
                cells[j * n + i] = score;
            }
        }

        Self { n, cells }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.n && j < self.n).then(|| self.cells[i * self.n + j])
    }

    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.n).then(|| &self.cells[i * self.n..(i + 1) * self.n])
    }
}
