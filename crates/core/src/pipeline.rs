//! Glue between the collaborators and the engine: page ingestion into
//! documents, corpus processing into blocks, and result hand-off to the
//! answer side.

use crate::error::EngineError;
use crate::models::{Block, Document, ProcessedDocument, QueryResult};
use crate::normalizer::Normalizer;
use crate::segmenter;
use providers::answer::SourcedBlock;
use providers::ParsedPage;
use tracing::{debug, info};

/// Turn parsed pages into corpus documents: ids assigned densely in input
/// order, non-breaking spaces scrubbed from the scraped fields.
pub fn ingest(pages: Vec<ParsedPage>) -> Vec<Document> {
    pages
        .into_iter()
        .enumerate()
        .map(|(id, page)| Document {
            id: id as u64,
            title: scrub(&page.title),
            url: page.url,
            text: scrub(&page.text),
        })
        .collect()
}

fn scrub(field: &str) -> String {
    field.replace('\u{00A0}', " ")
}

/// Segment and normalize every document. Blocks are derived data,
/// recomputed on each startup; only their vector rows get persisted.
pub fn process(
    documents: &[Document],
    normalizer: &Normalizer,
    target_block_count: usize,
) -> Result<Vec<ProcessedDocument>, EngineError> {
    let mut processed = Vec::with_capacity(documents.len());
    let mut total_blocks = 0;
    for doc in documents {
        let blocks: Vec<Block> = segmenter::segment(&doc.text, target_block_count)?
            .into_iter()
            .map(|original| {
                let normalized = normalizer.normalize(&original);
                Block {
                    original,
                    normalized,
                }
            })
            .collect();
        debug!("Document {} segmented into {} blocks.", doc.id, blocks.len());
        total_blocks += blocks.len();
        processed.push(ProcessedDocument {
            id: doc.id,
            title: doc.title.clone(),
            url: doc.url.clone(),
            blocks,
        });
    }
    info!(
        "Processed {} documents into {} blocks.",
        processed.len(),
        total_blocks
    );
    Ok(processed)
}

/// Project ranked results into the shape the answer collaborator consumes.
pub fn to_sourced_blocks(results: &[QueryResult]) -> Vec<SourcedBlock> {
    results
        .iter()
        .map(|r| SourcedBlock {
            url: r.url.clone(),
            text: r.block_text.clone(),
        })
        .collect()
}
