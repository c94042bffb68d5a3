//! Content-based recommendations over catalog tags.
//!
//! A [`Recommender`] is built once from a [`Catalog`] and is read-only
//! afterwards, so it can be shared freely between callers.
//!
//! # Example
//!
//! ```
//! use marquee_core::{Catalog, CatalogEntry};
//! use marquee_search::{IndexOptions, Recommender};
//!
//! let catalog = Catalog::from_entries(vec![
//!     CatalogEntry::new("A", "comedy drama"),
//!     CatalogEntry::new("B", "comedy"),
//!     CatalogEntry::new("C", "horror"),
//! ]);
//! let recommender = Recommender::build(catalog, &IndexOptions::default());
//!
//! assert_eq!(recommender.recommend("A", 2), vec!["B", "C"]);
//! assert!(recommender.recommend("Z", 2).is_empty());
//! ```

use std::collections::HashMap;

use marquee_core::Catalog;
use serde::{Deserialize, Serialize};

use crate::similarity::SimilarityMatrix;
use crate::tfidf::{IndexOptions, SparseVector, TfidfModel};
use crate::tokenize::TagTokenizer;

/// Number of recommendations returned when the caller has no preference.
pub const DEFAULT_TOP_N: usize = 7;

/// A recommended title with its cosine similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub score: f64,
}

/// Title to catalog position.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    positions: HashMap<String, usize>,
}

impl TitleIndex {
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let mut positions = HashMap::with_capacity(catalog.len());
        for (i, entry) in catalog.iter().enumerate() {
            positions.entry(entry.title.clone()).or_insert(i);
        }
        Self { positions }
    }

    #[must_use]
    pub fn position(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Precomputed tag similarity index over a catalog snapshot.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    model: TfidfModel,
    vectors: Vec<SparseVector>,
    similarity: SimilarityMatrix,
    titles: TitleIndex,
}

impl Recommender {
    /// Vectorize every entry's tags and compute the pairwise similarities.
    ///
    /// An empty catalog yields an empty index for which every query returns
    /// nothing.
    #[must_use]
    pub fn build(catalog: Catalog, options: &IndexOptions) -> Self {
        let tokenizer = if options.stop_words {
            TagTokenizer::english()
        } else {
            TagTokenizer::without_stop_words()
        };

        let documents: Vec<Vec<String>> = catalog
            .iter()
            .map(|entry| tokenizer.tokenize(&entry.tags))
            .collect();

        let (model, vectors) = TfidfModel::fit_transform(&documents, options.max_features);
        let similarity = SimilarityMatrix::from_normalized(&vectors);
        let titles = TitleIndex::new(&catalog);

        let untagged = vectors.iter().filter(|v| v.is_zero()).count();
        if untagged > 0 {
            log::warn!(
                "{} entries have no indexable tags and will never be recommended by similarity",
                untagged
            );
        }
        log::info!(
            "Built similarity index: {} entries, {} vocabulary terms",
            catalog.len(),
            model.vocabulary_size()
        );

        Self {
            catalog,
            model,
            vectors,
            similarity,
            titles,
        }
    }

    /// Titles most similar to `title`, best first.
    ///
    /// Returns at most `top_n` titles and never `title` itself. An unknown
    /// title yields an empty list.
    #[must_use]
    pub fn recommend(&self, title: &str, top_n: usize) -> Vec<String> {
        self.recommend_scored(title, top_n)
            .into_iter()
            .map(|r| r.title)
            .collect()
    }

    /// Like [`recommend`](Self::recommend), keeping each similarity score.
    ///
    /// Equal scores keep catalog order.
    #[must_use]
    pub fn recommend_scored(&self, title: &str, top_n: usize) -> Vec<Recommendation> {
        let Some(query) = self.titles.position(title) else {
            log::debug!("No catalog entry titled {:?}", title);
            return Vec::new();
        };
        let Some(row) = self.similarity.row(query) else {
            return Vec::new();
        };

        let mut ranked: Vec<(usize, f64)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(i, _)| i != query)
            .collect();
        // sort_by is stable, so ties stay in catalog order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranked
            .into_iter()
            .take(top_n)
            .filter_map(|(i, score)| {
                self.catalog.get(i).map(|entry| Recommendation {
                    title: entry.title.clone(),
                    score,
                })
            })
            .collect()
    }

    /// Similarity between two catalog titles, if both are known.
    #[must_use]
    pub fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.titles.position(a)?;
        let j = self.titles.position(b)?;
        self.similarity.get(i, j)
    }

    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.titles.position(title).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        self.model.vocabulary()
    }

    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary_size()
    }

    /// The feature vector of a title, if known.
    #[must_use]
    pub fn vector(&self, title: &str) -> Option<&SparseVector> {
        self.titles.position(title).and_then(|i| self.vectors.get(i))
    }

    #[must_use]
    pub fn similarity_matrix(&self) -> &SimilarityMatrix {
        &self.similarity
    }
}
