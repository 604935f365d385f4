use serde::{Deserialize, Serialize};
use serde_json::Value;

use pairdiff_diff::{diff_values, find_matching_fields};
use pairdiff_protocol::DiffPayload;
use pairdiff_types::{DiffMode, MatchingField};

/// Everything learned from comparing one pair of documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub mode: DiffMode,
    /// Where the original and target documents came from.
    pub sources: [String; 2],
    pub diff: Value,
    pub matching_fields: Vec<MatchingField>,
}

impl ComparisonReport {
    /// Compare two already-loaded documents.
    pub fn from_documents(
        mode: DiffMode,
        sources: [String; 2],
        original: &Value,
        target: &Value,
    ) -> Self {
        Self {
            mode,
            sources,
            diff: diff_values(mode, original, target),
            matching_fields: find_matching_fields(original, target),
        }
    }

    pub fn into_payload(self) -> DiffPayload {
        DiffPayload {
            diff: self.diff,
            matching_fields: self.matching_fields,
        }
    }
}
