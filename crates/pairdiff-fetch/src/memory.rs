use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{FetchError, FetchResult};
use crate::fetcher::DocumentFetcher;

/// Serves documents from a fixed URL → document table.
#[derive(Clone, Debug, Default)]
pub struct MemoryFetcher {
    documents: HashMap<String, Value>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: impl Into<String>, document: Value) -> Self {
        self.insert(url, document);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, document: Value) {
        self.documents.insert(url.into(), document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentFetcher for MemoryFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<Value> {
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::fetch_pair;
    use serde_json::json;

    #[tokio::test]
    async fn serves_known_documents() {
        let fetcher = MemoryFetcher::new().with_document("https://h/a", json!({"a": 1}));
        assert_eq!(fetcher.len(), 1);
        assert_eq!(fetcher.fetch("https://h/a").await.unwrap(), json!({"a": 1}));
    }

    #[tokio::test]
    async fn unknown_url_is_not_found() {
        let fetcher = MemoryFetcher::new();
        assert!(fetcher.is_empty());
        let err = fetcher.fetch("https://h/x").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound(ref url) if url == "https://h/x"));
    }

    #[tokio::test]
    async fn pair_through_trait_object() {
        let fetcher: Box<dyn DocumentFetcher> = Box::new(
            MemoryFetcher::new()
                .with_document("https://h/1", json!(1))
                .with_document("https://h/2", json!(2)),
        );
        let urls = ["https://h/1".to_string(), "https://h/2".to_string()];
        let (a, b) = fetch_pair(fetcher.as_ref(), &urls).await.unwrap();
        assert_eq!((a, b), (json!(1), json!(2)));
    }
}
