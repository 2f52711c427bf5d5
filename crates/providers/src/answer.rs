//! Answer-side collaborator: assembles the numbered-source context an LLM
//! wrapper grounds its reply on. Prompt construction and the model call
//! live outside this crate.

use crate::ProviderError;

pub const NO_RESULTS_MESSAGE: &str = "По вашему запросу релевантные данные не найдены.";

/// A ranked block paired with its source URL, as handed over by the
/// retrieval engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedBlock {
    pub url: String,
    pub text: String,
}

#[async_trait::async_trait]
pub trait AnswerProvider: Send + Sync {
    async fn answer(&self, query: &str, blocks: &[SourcedBlock]) -> Result<String, ProviderError>;
}

/// Build the grounding context: unique source URLs numbered in first-seen
/// order, each block suffixed with its `[n]` reference, sources listed first.
pub fn build_context(blocks: &[SourcedBlock]) -> String {
    let mut unique_urls: Vec<&str> = Vec::new();
    for block in blocks {
        if !block.url.is_empty() && !unique_urls.contains(&block.url.as_str()) {
            unique_urls.push(&block.url);
        }
    }

    let numbered: Vec<String> = blocks
        .iter()
        .map(|block| {
            let text = block.text.trim();
            match unique_urls.iter().position(|u| *u == block.url) {
                Some(pos) => format!("{} [{}]", text, pos + 1),
                None => text.to_string(),
            }
        })
        .collect();

    let sources: Vec<String> = unique_urls
        .iter()
        .enumerate()
        .map(|(i, url)| format!("[{}] {}", i + 1, url))
        .collect();

    format!(
        "Источники информации:\n{}\n\n{}",
        sources.join("\n"),
        numbered.join("\n\n")
    )
}

/// Returns the bare context (or the no-results message); a real LLM
/// provider would wrap this context into a prompt instead.
#[derive(Debug, Default)]
pub struct ContextAnswerProvider;

#[async_trait::async_trait]
impl AnswerProvider for ContextAnswerProvider {
    async fn answer(&self, _query: &str, blocks: &[SourcedBlock]) -> Result<String, ProviderError> {
        if blocks.is_empty() {
            return Ok(NO_RESULTS_MESSAGE.to_string());
        }
        Ok(build_context(blocks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(url: &str, text: &str) -> SourcedBlock {
        SourcedBlock {
            url: url.into(),
            text: text.into(),
        }
    }

    #[test]
    fn urls_are_numbered_in_first_seen_order() {
        let context = build_context(&[
            block("https://a", "первый блок"),
            block("https://b", "второй блок"),
            block("https://a", "третий блок"),
        ]);
        assert!(context.starts_with("Источники информации:\n[1] https://a\n[2] https://b"));
        assert!(context.contains("первый блок [1]"));
        assert!(context.contains("второй блок [2]"));
        assert!(context.contains("третий блок [1]"));
    }

    #[test]
    fn blocks_without_url_carry_no_reference() {
        let context = build_context(&[block("", "без источника")]);
        assert!(context.contains("без источника"));
        assert!(!context.contains("без источника ["));
    }

    #[tokio::test]
    async fn empty_results_produce_the_no_results_message() {
        let provider = ContextAnswerProvider;
        let reply = provider.answer("вопрос", &[]).await.unwrap();
        assert_eq!(reply, NO_RESULTS_MESSAGE);
    }
}
