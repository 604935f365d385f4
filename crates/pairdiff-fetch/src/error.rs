use thiserror::Error;

/// Errors raised while retrieving a document.
///
/// Every variant is terminal for the comparison that triggered it; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} did not return a JSON document: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no document at {0}")]
    NotFound(String),
}

impl FetchError {
    /// The URL that failed, if the error is tied to one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Client(_) => None,
            Self::Request { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                Some(url)
            }
            Self::NotFound(url) => Some(url),
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
