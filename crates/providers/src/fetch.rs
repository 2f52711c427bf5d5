//! Concurrent page retrieval. Failed URLs are skipped with a warning; no
//! retries are performed here.

use crate::{ProviderError, RawPage};
use reqwest::Client;
use tracing::warn;

#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the given URLs, preserving input order in the output. URLs
    /// that fail are dropped from the result.
    async fn fetch(&self, urls: &[String]) -> Result<Vec<RawPage>, ProviderError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; retriever/0.1)")
            .build()
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, urls: &[String]) -> Result<Vec<RawPage>, ProviderError> {
        let mut tasks = tokio::task::JoinSet::new();
        for (pos, url) in urls.iter().enumerate() {
            let client = self.client.clone();
            let url = url.clone();
            tasks.spawn(async move {
                let resp = match client
                    .get(&url)
                    .header(
                        reqwest::header::ACCEPT,
                        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                    )
                    .send()
                    .await
                {
                    Ok(resp) => resp,
                    Err(err) => {
                        warn!("Failed to fetch {}: {}", url, err);
                        return None;
                    }
                };
                match resp.text().await {
                    Ok(html) => Some((pos, RawPage { url, html })),
                    Err(err) => {
                        warn!("Failed to read body of {}: {}", url, err);
                        None
                    }
                }
            });
        }

        let mut pages: Vec<Option<RawPage>> = vec![None; urls.len()];
        while let Some(joined) = tasks.join_next().await {
            if let Ok(Some((pos, page))) = joined {
                pages[pos] = Some(page);
            }
        }
        Ok(pages.into_iter().flatten().collect())
    }
}
