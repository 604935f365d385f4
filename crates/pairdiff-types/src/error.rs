use thiserror::Error;

/// Errors produced while turning a request path into a comparison target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("no comparison target found: expected a {{a,b}} placeholder in the path")]
    MissingComparisonTarget,

    /// The placeholder did not split into exactly two non-empty fragments.
    #[error("You must provide two files to compare.")]
    InvalidComparisonTarget { found: usize },

    #[error("expected exactly one {{a,b}} placeholder, found {groups}")]
    AmbiguousComparisonTarget { groups: usize },

    #[error("unknown diff mode: {0}")]
    UnknownMode(String),
}

pub type TargetResult<T> = Result<T, TargetError>;
