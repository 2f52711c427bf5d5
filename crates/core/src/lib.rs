//! Core library: block segmentation, normalization, TF-IDF indexing, and
//! two-stage query ranking over a harvested page corpus.

pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod search;
pub mod segmenter;
pub mod vectorizer;
