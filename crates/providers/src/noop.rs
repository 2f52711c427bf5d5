use crate::answer::{AnswerProvider, SourcedBlock};
use crate::fetch::PageFetcher;
use crate::{ProviderError, RawPage};

#[derive(Debug, Default)]
pub struct NoopProvider;

#[async_trait::async_trait]
impl PageFetcher for NoopProvider {
    async fn fetch(&self, _urls: &[String]) -> Result<Vec<RawPage>, ProviderError> {
        Ok(Vec::new())
    }
}

#[async_trait::async_trait]
impl AnswerProvider for NoopProvider {
    async fn answer(&self, _query: &str, _blocks: &[SourcedBlock]) -> Result<String, ProviderError> {
        Err(ProviderError::NotImplemented)
    }
}
