//! Query engine: cosine ranking over the block-vector matrix, followed by
//! a lexical token-overlap gate that rejects semantically-close but
//! lexically-unrelated candidates.

use crate::config::{AppConfig, SearchConfig, DEFAULT_THRESHOLD, DEFAULT_TOP_K};
use crate::error::EngineError;
use crate::index::{corpus_fingerprint, ArtifactSet, IndexStore};
use crate::models::{Block, Document, ProcessedDocument, QueryResult};
use crate::normalizer::Normalizer;
use crate::pipeline;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use storage::ArtifactStore;
use tracing::debug;

pub struct QueryEngine {
    documents: Vec<ProcessedDocument>,
    by_id: HashMap<u64, usize>,
    normalizer: Normalizer,
    artifacts: ArtifactSet,
}

impl QueryEngine {
    /// Process the corpus into blocks, then reuse the persisted index if it
    /// is complete and matches the corpus, else rebuild and persist it.
    pub fn new(
        corpus: &[Document],
        store: &IndexStore,
        target_block_count: usize,
    ) -> anyhow::Result<Self> {
        let normalizer = Normalizer::new();
        let documents = pipeline::process(corpus, &normalizer, target_block_count)?;
        let fingerprint = corpus_fingerprint(corpus);
        let artifacts = store.load_or_build(&documents, &fingerprint)?;
        let by_id = documents
            .iter()
            .enumerate()
            .map(|(pos, doc)| (doc.id, pos))
            .collect();
        Ok(Self {
            documents,
            by_id,
            normalizer,
            artifacts,
        })
    }

    /// Construct from loaded application settings: the corpus file, the
    /// index directory, and the block count all come from the config.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let corpus = storage::corpus::load(&config.corpus.path)?;
        let store = IndexStore::new(ArtifactStore::new(&config.index.dir));
        Self::new(&corpus, &store, config.segmentation.target_block_count)
    }

    pub fn search_with_defaults(&self, query: &str) -> Result<Vec<QueryResult>, EngineError> {
        self.search(query, DEFAULT_THRESHOLD, DEFAULT_TOP_K)
    }

    pub fn search_configured(
        &self,
        query: &str,
        search: &SearchConfig,
    ) -> Result<Vec<QueryResult>, EngineError> {
        self.search(query, search.threshold, search.top_k)
    }

    /// Rank all blocks by cosine similarity to the query, keep the `top_k`
    /// best, then keep only candidates whose normalized token set covers at
    /// least `threshold` of the query's token set. The overlap gate removes
    /// candidates but never reorders them.
    pub fn search(
        &self,
        query: &str,
        threshold: f32,
        top_k: usize,
    ) -> Result<Vec<QueryResult>, EngineError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(EngineError::InvalidThreshold(threshold));
        }
        if top_k == 0 {
            return Err(EngineError::InvalidTopK(top_k));
        }

        let cleaned = self.normalizer.normalize(query);
        let query_tokens: HashSet<&str> = cleaned.split_whitespace().collect();
        if query_tokens.is_empty() {
            debug!("Query normalized to an empty token set; nothing can match.");
            return Ok(Vec::new());
        }

        let query_vector = self.artifacts.vectorizer.transform(&cleaned);

        let mut ranked: Vec<(usize, f32)> = self
            .artifacts
            .matrix
            .iter()
            .map(|row| query_vector.dot(row))
            .enumerate()
            .collect();
        // Stable sort: tied scores keep document-then-block order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let mut results = Vec::new();
        for (rank, &(row, score)) in ranked.iter().take(top_k).enumerate() {
            let Some((entry, block)) = self.resolve_row(row) else {
                continue;
            };

            let block_tokens = self.normalizer.token_set(&block.original);
            let overlap = query_tokens
                .iter()
                .filter(|t| block_tokens.contains(**t))
                .count();
            let ratio = overlap as f32 / query_tokens.len() as f32;
            debug!(
                "Candidate doc {} block {}: cosine {:.4}, overlap {:.2}.",
                entry.0, entry.1, score, ratio
            );
            if ratio < threshold {
                continue;
            }

            let doc = &self.documents[self.by_id[&entry.0]];
            results.push(QueryResult {
                document_id: entry.0,
                url: doc.url.clone(),
                block_index: entry.1,
                block_text: block.original.trim().to_string(),
                similarity_rank: rank + 1,
            });
        }
        Ok(results)
    }

    fn resolve_row(&self, row: usize) -> Option<((u64, usize), &Block)> {
        let entry = self.artifacts.block_map.entries.get(row)?;
        let doc = self.documents.get(*self.by_id.get(&entry.document_id)?)?;
        let block = doc.blocks.get(entry.block_index)?;
        Some(((entry.document_id, entry.block_index), block))
    }
}
