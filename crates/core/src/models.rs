use serde::Serialize;

pub use storage::models::Document;

/// A contiguous span of a document's text, the unit of indexing and
/// retrieval. Blocks are derived data; only their vector rows are
/// persisted.
#[derive(Debug, Clone)]
pub struct Block {
    pub original: String,
    pub normalized: String,
}

/// A document with its ordered block sequence; the block position is the
/// join key back to the source document.
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub blocks: Vec<Block>,
}

/// Read-only projection returned to the caller; never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryResult {
    pub document_id: u64,
    pub url: String,
    pub block_index: usize,
    pub block_text: String,
    /// 1-based position in the similarity ranking of step one, before the
    /// overlap filter.
    pub similarity_rank: usize,
}
