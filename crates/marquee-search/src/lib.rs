//! Tag similarity search for marquee.
//!
//! Builds a TF-IDF index over catalog tag text, precomputes pairwise cosine
//! similarity, and answers "more like this" queries by title.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod recommender;
pub mod similarity;
pub mod stopwords;
pub mod tfidf;
pub mod tokenize;

pub use recommender::{Recommendation, Recommender, TitleIndex, DEFAULT_TOP_N};
pub use similarity::SimilarityMatrix;
pub use stopwords::StopWords;
pub use tfidf::{IndexOptions, SparseVector, TfidfModel};
pub use tokenize::{normalize_tags, TagTokenizer};
