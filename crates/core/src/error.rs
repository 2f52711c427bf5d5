use thiserror::Error;

/// Caller errors, reported synchronously before any work is attempted.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("target block count must be positive (got {0})")]
    InvalidBlockCount(usize),
    #[error("overlap threshold must be within [0, 1] (got {0})")]
    InvalidThreshold(f32),
    #[error("top_k must be positive (got {0})")]
    InvalidTopK(usize),
}
