use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A location that is present, and equal, in both compared documents.
///
/// `path` is dotted (`"b.c"`) and is relative to the document root.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchingField {
    pub path: String,
    pub value: Value,
}

impl MatchingField {
    pub fn new(path: impl Into<String>, value: Value) -> Self {
        Self { path: path.into(), value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_path_and_value() {
        let field = MatchingField::new("b.c", json!(2));
        assert_eq!(serde_json::to_value(&field).unwrap(), json!({"path": "b.c", "value": 2}));
    }
}
