//! HTTP server for pairdiff.
//!
//! Serves `GET /<mode>/<host>/<path-with-{a,b}>`: both documents are fetched,
//! diffed, and returned in the standard response envelope together with the
//! fields they agree on.

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use auth::{AllowAllAuth, AuthProvider, Credentials};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use server::PairdiffServer;
