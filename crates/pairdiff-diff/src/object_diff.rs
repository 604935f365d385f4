//! Structural diff between two JSON documents.
//!
//! Objects are compared key by key and arrays index by index, recursively.
//! Each view returns a tree that mirrors the input, pruned to the paths that
//! changed. Array positions appear as object keys holding the decimal index,
//! so `[1, 2] -> [1, 3]` is reported as `{"1": 3}` under `updated`.
//!
//! A container replaced by a value of another kind (object by array, array by
//! scalar) is a leaf change and only shows up under `updated`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use pairdiff_types::DiffMode;

use crate::equality::values_equal;

/// The `detailed` view: all three change trees side by side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Paths present only in the target document, with their target values.
    pub added: Value,
    /// Paths present only in the original document, each set to `null`.
    pub deleted: Value,
    /// Paths present in both whose values differ, with their target values.
    pub updated: Value,
}

impl ChangeSet {
    /// Compute all three views for a pair of documents.
    pub fn between(original: &Value, target: &Value) -> Self {
        Self {
            added: added_diff(original, target),
            deleted: deleted_diff(original, target),
            updated: updated_diff(original, target),
        }
    }

    /// Returns `true` if the documents are structurally equal.
    pub fn is_empty(&self) -> bool {
        is_empty_tree(&self.added) && is_empty_tree(&self.deleted) && is_empty_tree(&self.updated)
    }

    pub fn into_value(self) -> Value {
        let mut out = Map::new();
        out.insert("added".into(), self.added);
        out.insert("deleted".into(), self.deleted);
        out.insert("updated".into(), self.updated);
        Value::Object(out)
    }
}

/// Compute the view selected by `mode`.
pub fn diff_values(mode: DiffMode, original: &Value, target: &Value) -> Value {
    match mode {
        DiffMode::Added => added_diff(original, target),
        DiffMode::Deleted => deleted_diff(original, target),
        DiffMode::Updated => updated_diff(original, target),
        DiffMode::Detailed => detailed_diff(original, target),
    }
}

/// Paths present in `target` but absent from `original`.
///
/// A subtree that exists only in `target` is included whole. Documents that
/// are not both containers of the same kind have no additions.
pub fn added_diff(original: &Value, target: &Value) -> Value {
    Value::Object(one_sided(original, target, &|value| value.clone()))
}

/// Paths present in `original` but absent from `target`, each set to `null`.
pub fn deleted_diff(original: &Value, target: &Value) -> Value {
    Value::Object(one_sided(target, original, &|_| Value::Null))
}

/// Paths present in both documents whose values differ, holding the target
/// value at each changed leaf.
///
/// When the documents themselves are not containers of the same kind, the
/// whole target is the update (or an empty object if they are equal).
pub fn updated_diff(original: &Value, target: &Value) -> Value {
    match Node::pair(original, target) {
        Some((old, new)) => Value::Object(updated_entries(old, new)),
        None if values_equal(original, target) => Value::Object(Map::new()),
        None => target.clone(),
    }
}

/// The `added`, `deleted` and `updated` trees under one object.
pub fn detailed_diff(original: &Value, target: &Value) -> Value {
    ChangeSet::between(original, target).into_value()
}

/// Walk `present` looking for paths that `absent` lacks.
///
/// `added` and `deleted` are the same walk with the sides swapped; `leaf`
/// decides what is recorded at a missing path.
fn one_sided(absent: &Value, present: &Value, leaf: &dyn Fn(&Value) -> Value) -> Map<String, Value> {
    let mut out = Map::new();
    let Some((absent, present)) = Node::pair(absent, present) else {
        return out;
    };
    for (key, value) in present.entries() {
        match absent.get(&key) {
            Some(other) => {
                let nested = one_sided(other, value, leaf);
                if !nested.is_empty() {
                    out.insert(key, Value::Object(nested));
                }
            }
            None => {
                out.insert(key, leaf(value));
            }
        }
    }
    out
}

fn updated_entries(old: Node<'_>, new: Node<'_>) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, new_value) in new.entries() {
        let Some(old_value) = old.get(&key) else {
            continue;
        };
        match Node::pair(old_value, new_value) {
            Some((old_child, new_child)) => {
                let nested = updated_entries(old_child, new_child);
                if !nested.is_empty() {
                    out.insert(key, Value::Object(nested));
                }
            }
            None if values_equal(old_value, new_value) => {}
            None => {
                out.insert(key, new_value.clone());
            }
        }
    }
    out
}

fn is_empty_tree(value: &Value) -> bool {
    value.as_object().is_some_and(Map::is_empty)
}

/// A container whose children can be addressed by string key.
#[derive(Clone, Copy)]
enum Node<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
}

impl<'a> Node<'a> {
    /// Both values as containers, if they are containers of the same kind.
    fn pair(a: &'a Value, b: &'a Value) -> Option<(Self, Self)> {
        match (a, b) {
            (Value::Object(a), Value::Object(b)) => Some((Self::Object(a), Self::Object(b))),
            (Value::Array(a), Value::Array(b)) => Some((Self::Array(a), Self::Array(b))),
            _ => None,
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        match self {
            Self::Object(map) => map.get(key),
            Self::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        }
    }

    fn entries(&self) -> Vec<(String, &'a Value)> {
        match self {
            Self::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
            Self::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn end_to_end_detailed() {
        let original = json!({"a": 1, "b": {"c": 2}});
        let target = json!({"a": 1, "b": {"c": 3, "d": 4}});
        assert_eq!(
            detailed_diff(&original, &target),
            json!({
                "added": {"b": {"d": 4}},
                "deleted": {},
                "updated": {"b": {"c": 3}},
            })
        );
    }

    #[test]
    fn added_includes_new_subtrees_whole() {
        let original = json!({"a": 1});
        let target = json!({"a": 1, "b": {"c": {"d": [1, 2]}}});
        assert_eq!(added_diff(&original, &target), json!({"b": {"c": {"d": [1, 2]}}}));
    }

    #[test]
    fn deleted_marks_removed_paths_null() {
        let original = json!({"a": 1, "b": {"c": 2, "d": 3}, "e": {"f": 1}});
        let target = json!({"a": 1, "b": {"c": 2}});
        assert_eq!(
            deleted_diff(&original, &target),
            json!({"b": {"d": null}, "e": null})
        );
    }

    #[test]
    fn updated_holds_target_values() {
        let original = json!({"a": 1, "b": {"c": "x", "d": true}, "gone": 1});
        let target = json!({"a": 2, "b": {"c": "y", "d": true}, "new": 1});
        assert_eq!(updated_diff(&original, &target), json!({"a": 2, "b": {"c": "y"}}));
    }

    #[test]
    fn kind_change_is_an_update() {
        let original = json!({"a": {"x": 1}, "b": [1], "c": null});
        let target = json!({"a": 5, "b": {"0": 1}, "c": {}});
        assert_eq!(added_diff(&original, &target), json!({}));
        assert_eq!(deleted_diff(&original, &target), json!({}));
        assert_eq!(
            updated_diff(&original, &target),
            json!({"a": 5, "b": {"0": 1}, "c": {}})
        );
    }

    #[test]
    fn emptied_container_is_a_deletion_not_an_update() {
        let original = json!({"a": {"x": 1}, "b": [1, 2]});
        let target = json!({"a": {}, "b": []});
        assert_eq!(deleted_diff(&original, &target), json!({"a": {"x": null}, "b": {"0": null, "1": null}}));
        assert_eq!(updated_diff(&original, &target), json!({}));
        assert_eq!(added_diff(&target, &original), json!({"a": {"x": 1}, "b": {"0": 1, "1": 2}}));
    }

    #[test]
    fn arrays_compare_by_index() {
        let original = json!({"tags": ["a", "b"]});
        let target = json!({"tags": ["b", "a", "c"]});
        assert_eq!(added_diff(&original, &target), json!({"tags": {"2": "c"}}));
        assert_eq!(updated_diff(&original, &target), json!({"tags": {"0": "b", "1": "a"}}));
        assert_eq!(deleted_diff(&target, &original), json!({"tags": {"2": null}}));
    }

    #[test]
    fn scalar_documents() {
        assert_eq!(updated_diff(&json!(1), &json!(2)), json!(2));
        assert_eq!(updated_diff(&json!("x"), &json!("x")), json!({}));
        assert_eq!(added_diff(&json!(1), &json!(2)), json!({}));
        assert_eq!(deleted_diff(&json!(1), &json!(2)), json!({}));
    }

    #[test]
    fn numeric_formatting_is_not_an_update() {
        let original: Value = serde_json::from_str(r#"{"price": 10}"#).unwrap();
        let target: Value = serde_json::from_str(r#"{"price": 10.0}"#).unwrap();
        assert!(ChangeSet::between(&original, &target).is_empty());
    }

    #[test]
    fn diff_values_dispatches_on_mode() {
        let original = json!({"a": 1, "b": 2});
        let target = json!({"a": 9, "c": 3});
        assert_eq!(diff_values(DiffMode::Added, &original, &target), json!({"c": 3}));
        assert_eq!(diff_values(DiffMode::Deleted, &original, &target), json!({"b": null}));
        assert_eq!(diff_values(DiffMode::Updated, &original, &target), json!({"a": 9}));
        assert_eq!(
            diff_values(DiffMode::Detailed, &original, &target),
            json!({"added": {"c": 3}, "deleted": {"b": null}, "updated": {"a": 9}})
        );
    }

    #[test]
    fn change_set_serializes_like_detailed() {
        let original = json!({"a": 1});
        let target = json!({"b": 1});
        let set = ChangeSet::between(&original, &target);
        assert_eq!(serde_json::to_value(&set).unwrap(), detailed_diff(&original, &target));
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i32>().prop_map(Value::from),
            "[a-z]{0,4}".prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-e]{1,2}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    fn arb_object() -> impl Strategy<Value = Map<String, Value>> {
        prop::collection::btree_map("[a-e]{1,2}", arb_json(), 0..5)
            .prop_map(|m| m.into_iter().collect())
    }

    proptest! {
        #[test]
        fn identical_documents_have_no_changes(doc in arb_json()) {
            let set = ChangeSet::between(&doc, &doc);
            prop_assert!(set.is_empty());
        }

        #[test]
        fn disjoint_objects_are_pure_add_and_delete(original in arb_object(), target in arb_object()) {
            let target: Map<String, Value> = target
                .into_iter()
                .filter(|(k, _)| !original.contains_key(k))
                .collect();
            let expected_deleted: Map<String, Value> =
                original.keys().map(|k| (k.clone(), Value::Null)).collect();
            let original = Value::Object(original);
            let target = Value::Object(target);

            prop_assert_eq!(added_diff(&original, &target), target.clone());
            prop_assert_eq!(deleted_diff(&original, &target), Value::Object(expected_deleted));
            prop_assert_eq!(updated_diff(&original, &target), json!({}));
        }

        #[test]
        fn updated_keys_exist_in_both(original in arb_object(), target in arb_object()) {
            let updated = updated_diff(&Value::Object(original.clone()), &Value::Object(target.clone()));
            for key in updated.as_object().unwrap().keys() {
                prop_assert!(original.contains_key(key));
                prop_assert!(target.contains_key(key));
            }
        }
    }
}
