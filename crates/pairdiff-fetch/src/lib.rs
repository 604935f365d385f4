//! Document fetching for pairdiff.
//!
//! The diff engine only needs two parsed JSON documents. This crate defines
//! the [`DocumentFetcher`] seam that produces them, an HTTP implementation on
//! top of `reqwest`, and [`fetch_pair`], which issues both fetches at once.

pub mod error;
pub mod fetcher;
pub mod memory;

pub use error::{FetchError, FetchResult};
pub use fetcher::{fetch_pair, DocumentFetcher, FetchConfig, HttpFetcher};
pub use memory::MemoryFetcher;
