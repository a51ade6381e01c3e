//! Recursive merge of caller overrides onto computed defaults.
//!
//! The merge drives every configuration surface in the crate: option maps,
//! label sets, and the modify-existing-entity registration path. Semantics
//! are replace-recursive: objects merge per key, arrays merge per position,
//! and anything else is replaced wholesale by the override.

use serde_json::{Map, Value};

/// Nested configuration map exchanged with the host.
pub type ConfigMap = Map<String, Value>;

/// Merge `overrides` onto `defaults`, returning a new value.
///
/// Keys present only in the overrides are added; keys present only in the
/// defaults are preserved. A type mismatch at any depth (map vs scalar,
/// array vs map) resolves in favor of the override. Neither input is
/// mutated.
pub fn merge_values(defaults: &Value, overrides: &Value) -> Value {
    match (defaults, overrides) {
        (Value::Object(base), Value::Object(over)) => Value::Object(merge_maps(base, over)),
        (Value::Array(base), Value::Array(over)) => {
            // Positional replace-recursive: element i of the override merges
            // over element i of the default; the longer side's tail survives.
            // No dedup or union.
            let mut merged = base.clone();
            for (idx, item) in over.iter().enumerate() {
                if idx < merged.len() {
                    let replacement = merge_values(&merged[idx], item);
                    merged[idx] = replacement;
                } else {
                    merged.push(item.clone());
                }
            }
            Value::Array(merged)
        }
        (_, over) => over.clone(),
    }
}

/// Object-level convenience over [`merge_values`].
pub fn merge_maps(defaults: &ConfigMap, overrides: &ConfigMap) -> ConfigMap {
    let mut merged = defaults.clone();
    for (key, value) in overrides {
        match merged.get_mut(key) {
            Some(existing) => {
                let replacement = merge_values(existing, value);
                *existing = replacement;
            }
            None => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn override_wins_and_siblings_survive() {
        let merged = merge_values(&json!({"a": {"b": 1, "c": 2}}), &json!({"a": {"b": 9}}));
        assert_eq!(merged, json!({"a": {"b": 9, "c": 2}}));
    }

    #[test]
    fn override_only_keys_are_added() {
        let merged = merge_values(&json!({"a": 1}), &json!({"b": 2}));
        assert_eq!(merged, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn type_mismatch_resolves_to_override() {
        let merged = merge_values(&json!({"a": {"b": 1}}), &json!({"a": "flat"}));
        assert_eq!(merged, json!({"a": "flat"}));

        let merged = merge_values(&json!({"a": "flat"}), &json!({"a": {"b": 1}}));
        assert_eq!(merged, json!({"a": {"b": 1}}));
    }

    #[test]
    fn arrays_merge_positionally() {
        let merged = merge_values(&json!([1, 2, 3]), &json!([9]));
        assert_eq!(merged, json!([9, 2, 3]));

        let merged = merge_values(&json!([1]), &json!([9, 8, 7]));
        assert_eq!(merged, json!([9, 8, 7]));

        // Nested objects inside arrays still merge per key.
        let merged = merge_values(&json!([{"a": 1, "b": 2}]), &json!([{"a": 9}]));
        assert_eq!(merged, json!([{"a": 9, "b": 2}]));
    }

    #[test]
    fn inputs_are_not_mutated() {
        let defaults = json!({"a": {"b": 1}});
        let overrides = json!({"a": {"b": 2}});
        let _ = merge_values(&defaults, &overrides);
        assert_eq!(defaults, json!({"a": {"b": 1}}));
        assert_eq!(overrides, json!({"a": {"b": 2}}));
    }
}
