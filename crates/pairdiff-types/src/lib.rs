//! Foundation types for pairdiff.
//!
//! This crate provides the request-level types shared by every other pairdiff
//! crate: which diff view was asked for, which two documents to compare, and
//! the shape of a matching-field entry.
//!
//! # Key Types
//!
//! - [`DiffMode`] — One of `added`, `deleted`, `updated`, `detailed`
//! - [`ComparisonTarget`] — A path template holding one `{a,b}` placeholder group
//! - [`MatchingField`] — A dotted path whose value is equal in both documents

pub mod error;
pub mod matching;
pub mod mode;
pub mod target;

pub use error::{TargetError, TargetResult};
pub use matching::MatchingField;
pub use mode::DiffMode;
pub use target::{split_mode, ComparisonTarget};
