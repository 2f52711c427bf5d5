//! Index artifact set: the fitted vectorizer, the block-vector matrix, and
//! the block map, persisted together and loaded together. Build-or-load is
//! all-or-nothing; a partial or stale set triggers a full rebuild.

use crate::models::{Document, ProcessedDocument};
use crate::vectorizer::{SparseVector, TfIdfVectorizer};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use storage::ArtifactStore;
use tracing::{info, warn};

pub const VECTORIZER_KEY: &str = "vectorizer";
pub const MATRIX_KEY: &str = "matrix";
pub const BLOCK_MAP_KEY: &str = "block_map";

/// Joins matrix row `i` back to its source block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockRef {
    pub document_id: u64,
    pub block_index: usize,
}

/// Row-order map of the matrix, plus the fingerprint of the corpus the
/// index was built against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockMap {
    pub fingerprint: String,
    pub entries: Vec<BlockRef>,
}

/// Frozen snapshot of the searchable corpus. Immutable once built;
/// rebuilt wholesale, never incrementally updated.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub vectorizer: TfIdfVectorizer,
    pub matrix: Vec<SparseVector>,
    pub block_map: BlockMap,
}

pub struct IndexStore {
    store: ArtifactStore,
}

impl IndexStore {
    pub fn new(store: ArtifactStore) -> Self {
        Self { store }
    }

    /// Fit the vectorizer over all normalized blocks and vectorize them in
    /// document-then-block order.
    pub fn build(documents: &[ProcessedDocument], fingerprint: String) -> ArtifactSet {
        let mut corpus = Vec::new();
        let mut entries = Vec::new();
        for doc in documents {
            for (block_index, block) in doc.blocks.iter().enumerate() {
                corpus.push(block.normalized.as_str());
                entries.push(BlockRef {
                    document_id: doc.id,
                    block_index,
                });
            }
        }

        let vectorizer = TfIdfVectorizer::fit(&corpus);
        let matrix = corpus.iter().map(|text| vectorizer.transform(text)).collect();
        ArtifactSet {
            vectorizer,
            matrix,
            block_map: BlockMap {
                fingerprint,
                entries,
            },
        }
    }

    /// Load the cached artifact set. Absence is a normal outcome: any
    /// missing, corrupt, mutually inconsistent, or stale artifact makes the
    /// whole set read as absent.
    pub fn load(&self, fingerprint: &str) -> Option<ArtifactSet> {
        let vectorizer: TfIdfVectorizer = self.store.get(VECTORIZER_KEY)?;
        let matrix: Vec<SparseVector> = self.store.get(MATRIX_KEY)?;
        let block_map: BlockMap = self.store.get(BLOCK_MAP_KEY)?;

        if block_map.entries.len() != matrix.len() {
            warn!(
                "Index artifacts disagree ({} map entries, {} matrix rows); treating the set as absent.",
                block_map.entries.len(),
                matrix.len()
            );
            return None;
        }
        if block_map.fingerprint != fingerprint {
            info!("Corpus fingerprint changed; cached index is stale.");
            return None;
        }

        Some(ArtifactSet {
            vectorizer,
            matrix,
            block_map,
        })
    }

    /// The three artifacts always travel together.
    pub fn save(&self, set: &ArtifactSet) -> anyhow::Result<()> {
        self.store.put(VECTORIZER_KEY, &set.vectorizer)?;
        self.store.put(MATRIX_KEY, &set.matrix)?;
        self.store.put(BLOCK_MAP_KEY, &set.block_map)?;
        Ok(())
    }

    pub fn load_or_build(
        &self,
        documents: &[ProcessedDocument],
        fingerprint: &str,
    ) -> anyhow::Result<ArtifactSet> {
        if let Some(set) = self.load(fingerprint) {
            info!(
                "Loaded cached index ({} blocks, {} terms).",
                set.block_map.entries.len(),
                set.vectorizer.vocabulary_len()
            );
            return Ok(set);
        }

        info!("Building index over {} documents.", documents.len());
        let set = Self::build(documents, fingerprint.to_string());
        self.save(&set).context("persist index artifacts")?;
        Ok(set)
    }

    /// Where a given artifact lives on disk.
    pub fn artifact_path(&self, key: &str) -> std::path::PathBuf {
        self.store.path(key)
    }
}

/// Stable fingerprint of a corpus snapshot; a mismatch against the stored
/// block map forces a rebuild.
pub fn corpus_fingerprint(documents: &[Document]) -> String {
    let mut hasher = blake3::Hasher::new();
    for doc in documents {
        hasher.update(&doc.id.to_le_bytes());
        for field in [&doc.title, &doc.url, &doc.text] {
            hasher.update(&(field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
    }
    hasher.finalize().to_hex().to_string()
}
