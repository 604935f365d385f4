use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;

use crate::error::{FetchError, FetchResult};

/// Something that can turn a URL into a parsed JSON document.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult<Value>;
}

/// Fetch the original and target documents concurrently.
///
/// Both requests are in flight at once. The first failure is returned and the
/// other request is dropped.
pub async fn fetch_pair<F>(fetcher: &F, urls: &[String; 2]) -> FetchResult<(Value, Value)>
where
    F: DocumentFetcher + ?Sized,
{
    let [original, target] = urls;
    tokio::try_join!(fetcher.fetch(original), fetcher.fetch(target))
}

/// Settings for [`HttpFetcher`].
#[derive(Clone, Debug)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("pairdiff/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Fetches documents over HTTP(S) with a shared connection pool.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<Value> {
        tracing::debug!(url, "fetching document");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| FetchError::Decode { url: url.to_string(), source })
    }
}
