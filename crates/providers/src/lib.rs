//! Collaborators around the retrieval engine: page fetching, page parsing
//! strategies, and answer-context assembly.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

pub mod answer;
pub mod fetch;
pub mod noop;
pub mod parse;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("not implemented")]
    NotImplemented,
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unknown parser: {0}")]
    UnknownParser(String),
}

/// A raw page as delivered by a fetcher.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub url: String,
    pub html: String,
}

/// Parser output. Document ids are assigned later, at ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    pub title: String,
    pub url: String,
    pub text: String,
}

/// One parser strategy per page family; callers select an implementation
/// value at construction time.
#[derive(Default, Clone)]
pub struct ParserRegistry {
    parsers: HashMap<String, Arc<dyn parse::PageParser>>,
    pub preferred: Option<String>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parser(mut self, name: &str, parser: Arc<dyn parse::PageParser>) -> Self {
        self.parsers.insert(name.to_string(), parser);
        self
    }

    pub fn set_preferred(mut self, name: &str) -> Self {
        self.preferred = Some(name.to_string());
        self
    }

    pub fn parser(&self, name: Option<&str>) -> Result<Arc<dyn parse::PageParser>, ProviderError> {
        let key = name
            .map(str::to_string)
            .or_else(|| self.preferred.clone())
            .ok_or_else(|| ProviderError::UnknownParser("no parser configured".into()))?;
        self.parsers
            .get(&key)
            .cloned()
            .ok_or(ProviderError::UnknownParser(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::PlainTextParser;

    #[test]
    fn registry_resolves_preferred_parser() {
        let registry = ParserRegistry::new()
            .with_parser("plain", Arc::new(PlainTextParser::new()))
            .set_preferred("plain");
        assert!(registry.parser(None).is_ok());
        assert!(registry.parser(Some("plain")).is_ok());
        assert!(matches!(
            registry.parser(Some("tilda")),
            Err(ProviderError::UnknownParser(_))
        ));
    }
}
