//! Reading and writing the harvested document collection.
//!
//! The corpus is a JSON array of documents, fully materialized before
//! segmentation starts. A missing or unparsable file is fatal: the engine
//! cannot construct without its corpus.

use crate::models::Document;
use anyhow::Context;
use std::path::Path;

pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Vec<Document>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read corpus file {}", path.display()))?;
    let documents: Vec<Document> =
        serde_json::from_str(&raw).with_context(|| format!("parse corpus file {}", path.display()))?;
    Ok(documents)
}

pub fn save(path: impl AsRef<Path>, documents: &[Document]) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(documents)?;
    std::fs::write(path, raw).with_context(|| format!("write corpus file {}", path.display()))?;
    Ok(())
}
