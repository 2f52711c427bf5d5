//! Sparse TF-IDF vectorization with smoothed inverse document frequency
//! and L2-normalized rows, so cosine similarity reduces to a sparse dot
//! product.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SparseVector {
    pub indices: Vec<u32>,
    pub values: Vec<f32>,
}

impl SparseVector {
    /// Dot product over the sorted index lists. Equals cosine similarity
    /// when both vectors are L2-normalized.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn l2_normalize(&mut self) {
        let norm: f32 = self.values.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut self.values {
                *v /= norm;
            }
        }
    }
}

/// Vectorizer fitted once over the normalized block corpus. The vocabulary
/// is frozen after `fit`; query-time terms outside it are silently ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    vocabulary: BTreeMap<String, u32>,
    idf: Vec<f32>,
}

impl TfIdfVectorizer {
    /// Fit vocabulary and document frequencies over the training corpus.
    /// Input is expected to be already normalized (lowercased, space
    /// separated); terms are taken case-sensitively as-is.
    pub fn fit<S: AsRef<str>>(corpus: &[S]) -> Self {
        let mut df: BTreeMap<String, u32> = BTreeMap::new();
        for text in corpus {
            let distinct: BTreeSet<&str> = text.as_ref().split_whitespace().collect();
            for term in distinct {
                *df.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        let n = corpus.len() as f32;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(df.len());
        for (i, (term, count)) in df.into_iter().enumerate() {
            vocabulary.insert(term, i as u32);
            // Smoothed idf, never zero: every fitted term keeps some weight.
            idf.push(((1.0 + n) / (1.0 + count as f32)).ln() + 1.0);
        }
        Self { vocabulary, idf }
    }

    /// Vectorize one text against the frozen vocabulary.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<u32, f32> = BTreeMap::new();
        for term in text.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = SparseVector::default();
        for (index, count) in counts {
            vector.indices.push(index);
            vector.values.push(count * self.idf[index as usize]);
        }
        vector.l2_normalize();
        vector
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}
