use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error(transparent)]
    Target(#[from] pairdiff_types::TargetError),

    #[error(transparent)]
    Fetch(#[from] pairdiff_fetch::FetchError),
}

impl SdkError {
    /// Returns `true` if the request path itself was unusable.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Target(_))
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
