use serde::{Deserialize, Serialize};
use serde_json::Value;

use pairdiff_types::MatchingField;

use crate::endpoint::ApiDescription;

/// The caller a response was produced for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub authenticated: bool,
}

impl User {
    pub fn anonymous() -> Self {
        Self { name: "anonymous".into(), authenticated: false }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), authenticated: true }
    }
}

/// The outer shape of every comparison response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub api: ApiDescription,
    pub data: T,
    pub user: User,
}

impl<T> Envelope<T> {
    pub fn new(api: ApiDescription, data: T, user: User) -> Self {
        Self { api, data, user }
    }
}

/// A successful comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffPayload {
    pub diff: Value,
    pub matching_fields: Vec<MatchingField>,
}

/// A failed comparison. `success` is always `false`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub success: bool,
    pub error: String,
}

impl ErrorPayload {
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into() }
    }
}
