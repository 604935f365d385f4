//! Response envelopes for pairdiff.
//!
//! Every HTTP response is an [`Envelope`]: a static [`ApiDescription`], a
//! `data` payload, and the calling [`User`]. The payload is a [`DiffPayload`]
//! on success and an [`ErrorPayload`] otherwise.

pub mod endpoint;
pub mod envelope;

pub use endpoint::{endpoints, ApiDescription, HealthResponse, RootResponse};
pub use envelope::{DiffPayload, Envelope, ErrorPayload, User};
