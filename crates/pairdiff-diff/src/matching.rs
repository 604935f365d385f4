//! Matching-field discovery: the fields both documents agree on.
//!
//! Only agreement is reported. Keys present on one side only, or holding
//! different values, produce nothing here; that is what the diff views are for.

use serde_json::{Map, Value};

use pairdiff_types::MatchingField;

use crate::equality::values_equal;

/// Collect every dotted path whose value is equal in `original` and `target`.
///
/// Walks `original` depth-first in key order. Objects on both sides are
/// descended into; anything else (scalars, `null`, arrays) is compared whole.
/// Documents that are not both objects have no matching fields.
pub fn find_matching_fields(original: &Value, target: &Value) -> Vec<MatchingField> {
    let mut fields = Vec::new();
    if let (Value::Object(original), Value::Object(target)) = (original, target) {
        collect(original, target, "", &mut fields);
    }
    fields
}

fn collect(
    original: &Map<String, Value>,
    target: &Map<String, Value>,
    prefix: &str,
    fields: &mut Vec<MatchingField>,
) {
    for (key, left) in original {
        let Some(right) = target.get(key) else {
            continue;
        };
        match (left, right) {
            (Value::Object(l), Value::Object(r)) => {
                collect(l, r, &format!("{prefix}{key}."), fields);
            }
            _ if values_equal(left, right) => {
                fields.push(MatchingField::new(format!("{prefix}{key}"), left.clone()));
            }
            _ => {}
        }
    }
}
