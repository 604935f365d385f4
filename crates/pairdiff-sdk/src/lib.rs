//! High-level SDK for pairdiff.
//!
//! [`Comparer`] runs a whole comparison: parse the `{a,b}` path, fetch both
//! documents concurrently, then compute the requested diff view and the
//! matching fields. This is the entry point used by the server and the CLI.

pub mod comparer;
pub mod error;
pub mod report;

pub use comparer::Comparer;
pub use error::{SdkError, SdkResult};
pub use report::ComparisonReport;

// Re-export key types
pub use pairdiff_fetch::{DocumentFetcher, FetchConfig, HttpFetcher, MemoryFetcher};
pub use pairdiff_types::{ComparisonTarget, DiffMode, MatchingField};
