//! TF-IDF vectorization over a capped vocabulary.
//!
//! Weighting:
//! ```text
//! tf(t, d)  = count of t in d
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//! w(t, d)   = tf(t, d) * idf(t), then each row is L2-normalized
//! ```
//!
//! The vocabulary keeps the `max_features` tokens with the highest total
//! count across the corpus (ties broken alphabetically) and orders its
//! columns alphabetically.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Options controlling how the tag index is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexOptions {
    /// Maximum vocabulary size.
    pub max_features: usize,

    /// Remove English stop words before counting.
    pub stop_words: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            max_features: 5000,
            stop_words: true,
        }
    }
}

impl IndexOptions {
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    #[must_use]
    pub fn with_stop_words(mut self, stop_words: bool) -> Self {
        self.stop_words = stop_words;
        self
    }
}

/// A sparse feature vector: `(column, weight)` pairs sorted by column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_weights(weights: BTreeMap<usize, f64>) -> Self {
        Self {
            entries: weights.into_iter().filter(|&(_, w)| w != 0.0).collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero features.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of a column, zero when absent.
    #[must_use]
    pub fn get(&self, column: usize) -> f64 {
        self.entries
            .binary_search_by_key(&column, |&(c, _)| c)
            .map_or(0.0, |i| self.entries[i].1)
    }

    #[must_use]
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product, merging the two sorted column lists.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ci, wi) = self.entries[i];
            let (cj, wj) = other.entries[j];
            match ci.cmp(&cj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wi * wj;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }
}

/// A fitted vocabulary with its inverse document frequencies.
#[derive(Debug, Clone, Default)]
pub struct TfidfModel {
    vocabulary: Vec<String>,
    columns: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Learn the vocabulary and idf weights from tokenized documents.
    pub fn fit<S: AsRef<str>>(documents: &[Vec<S>], max_features: usize) -> Self {
        let mut term_freq: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();

        for doc in documents {
            let mut seen = HashSet::new();
            for token in doc {
                let token = token.as_ref();
                *term_freq.entry(token).or_insert(0) += 1;
                if seen.insert(token) {
                    *doc_freq.entry(token).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(&str, usize)> = term_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_features);

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort_unstable();

        let n_docs = documents.len() as f64;
        let idf = vocabulary
            .iter()
            .map(|term| {
                let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let columns = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Self {
            vocabulary,
            columns,
            idf,
        }
    }

    /// Weight one tokenized document. Out-of-vocabulary tokens are ignored.
    pub fn transform<S: AsRef<str>>(&self, tokens: &[S]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(&column) = self.columns.get(token.as_ref()) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }
        for (column, weight) in &mut counts {
            *weight *= self.idf[*column];
        }
        SparseVector::from_weights(counts).normalized()
    }

    /// Fit on the documents, then weight each of them.
    pub fn fit_transform<S: AsRef<str>>(
        documents: &[Vec<S>],
        max_features: usize,
    ) -> (Self, Vec<SparseVector>) {
        let model = Self::fit(documents, max_features);
        let vectors = documents.iter().map(|doc| model.transform(doc)).collect();
        (model, vectors)
    }

    /// Vocabulary terms in column order.
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    #[must_use]
    pub fn column(&self, term: &str) -> Option<usize> {
        self.columns.get(term).copied()
    }

    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.column(term).map(|c| self.idf[c])
    }
}
