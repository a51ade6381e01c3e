//! Default admin label sets.
//!
//! The host expects a flat map of thirteen label keys; every key is filled
//! from the entity's singular/plural forms unless the caller overrides it.

use crate::merge::{ConfigMap, merge_maps};
use crate::names::NameSet;
use serde_json::Value;

/// Compute the full default label map from the derived names.
pub fn default_labels(names: &NameSet) -> ConfigMap {
    let NameSet {
        singular, plural, ..
    } = names;

    let mut labels = ConfigMap::new();
    let mut put = |key: &str, value: String| {
        labels.insert(key.to_string(), Value::String(value));
    };

    put("name", plural.clone());
    put("singular_name", singular.clone());
    put("menu_name", plural.clone());
    put("all_items", plural.clone());
    put("add_new", "Add New".to_string());
    put("add_new_item", format!("Add New {singular}"));
    put("edit_item", format!("Edit {singular}"));
    put("new_item", format!("New {singular}"));
    put("view_item", format!("View {singular}"));
    put("search_items", format!("Search {plural}"));
    put("not_found", format!("No {plural} found"));
    put("not_found_in_trash", format!("No {plural} found in Trash"));
    put("parent_item_colon", format!("Parent {singular}:"));

    labels
}

/// Defaults with any caller overrides merged on top.
///
/// Callers override any subset; untouched keys keep their computed values.
pub fn build_labels(names: &NameSet, overrides: &ConfigMap) -> ConfigMap {
    merge_maps(&default_labels(names), overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::Names;
    use serde_json::json;

    fn book_names() -> NameSet {
        NameSet::derive(&Names::new("book")).unwrap()
    }

    #[test]
    fn every_label_key_is_present() {
        let labels = default_labels(&book_names());
        assert_eq!(labels.len(), 13);
        for key in [
            "name",
            "singular_name",
            "menu_name",
            "all_items",
            "add_new",
            "add_new_item",
            "edit_item",
            "new_item",
            "view_item",
            "search_items",
            "not_found",
            "not_found_in_trash",
            "parent_item_colon",
        ] {
            assert!(labels.contains_key(key), "missing label {key}");
        }
    }

    #[test]
    fn defaults_follow_the_name_templates() {
        let labels = default_labels(&book_names());
        assert_eq!(labels["name"], json!("Books"));
        assert_eq!(labels["singular_name"], json!("Book"));
        assert_eq!(labels["add_new"], json!("Add New"));
        assert_eq!(labels["add_new_item"], json!("Add New Book"));
        assert_eq!(labels["not_found_in_trash"], json!("No Books found in Trash"));
        assert_eq!(labels["parent_item_colon"], json!("Parent Book:"));
    }

    #[test]
    fn override_touches_only_its_key() {
        let names = book_names();
        let mut overrides = ConfigMap::new();
        overrides.insert("add_new".to_string(), json!("Add New Book"));

        let labels = build_labels(&names, &overrides);
        let defaults = default_labels(&names);

        assert_eq!(labels["add_new"], json!("Add New Book"));
        for (key, value) in &defaults {
            if key != "add_new" {
                assert_eq!(&labels[key], value, "label {key} changed unexpectedly");
            }
        }
    }
}
