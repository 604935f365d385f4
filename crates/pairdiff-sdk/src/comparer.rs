use std::sync::Arc;

use pairdiff_fetch::{fetch_pair, DocumentFetcher, FetchConfig, HttpFetcher};
use pairdiff_types::ComparisonTarget;

use crate::error::SdkResult;
use crate::report::ComparisonReport;

/// Runs comparisons against a [`DocumentFetcher`].
#[derive(Clone)]
pub struct Comparer {
    fetcher: Arc<dyn DocumentFetcher>,
    scheme: String,
}

impl Comparer {
    /// A comparer that resolves targets to `https://` URLs.
    pub fn new(fetcher: Arc<dyn DocumentFetcher>) -> Self {
        Self { fetcher, scheme: "https".into() }
    }

    /// A comparer backed by a fresh [`HttpFetcher`].
    pub fn http(config: &FetchConfig) -> SdkResult<Self> {
        Ok(Self::new(Arc::new(HttpFetcher::new(config)?)))
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Parse a request path such as `updated/host/api/{1,2}` and compare.
    pub async fn compare(&self, path: &str) -> SdkResult<ComparisonReport> {
        let target = ComparisonTarget::parse(path)?;
        self.compare_target(&target).await
    }

    pub async fn compare_target(&self, target: &ComparisonTarget) -> SdkResult<ComparisonReport> {
        let urls = target.urls(&self.scheme);
        tracing::debug!(mode = %target.mode(), original = %urls[0], changed = %urls[1], "comparing");

        let (original, changed) = fetch_pair(self.fetcher.as_ref(), &urls).await?;
        Ok(ComparisonReport::from_documents(target.mode(), urls, &original, &changed))
    }
}

impl std::fmt::Debug for Comparer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparer").field("scheme", &self.scheme).finish_non_exhaustive()
    }
}
