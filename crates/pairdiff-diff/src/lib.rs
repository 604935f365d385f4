//! Diff engine for pairdiff.
//!
//! Computes structural differences between two JSON documents and reports the
//! fields both documents agree on. Everything here is pure and synchronous:
//! inputs are already-parsed [`serde_json::Value`] trees.
//!
//! # Key Types
//!
//! - [`ChangeSet`] -- The `detailed` view: added, deleted and updated trees side by side
//! - [`diff_values`] -- Dispatch on [`DiffMode`] to one of the four views
//! - [`find_matching_fields`] -- Dotted paths whose values are equal in both documents

pub mod equality;
pub mod matching;
pub mod object_diff;

pub use equality::values_equal;
pub use matching::find_matching_fields;
pub use object_diff::{
    added_diff, deleted_diff, detailed_diff, diff_values, updated_diff, ChangeSet,
};
pub use pairdiff_types::{DiffMode, MatchingField};
