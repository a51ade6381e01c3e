//! Capability-name mappings and the roles that receive them.
//!
//! Until an entity's `capabilities()` builder method runs, the set stays
//! empty and nothing is injected into the registration config or granted to
//! roles. Once built, the mapping is fixed for the entity's lifetime.

use crate::names::NameSet;
use std::collections::{BTreeMap, BTreeSet};

/// Capability-action keys mapped to host capability names, plus the roles
/// whitelisted to hold every capability in the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    map: BTreeMap<String, String>,
    whitelisted_roles: BTreeSet<String>,
}

impl Capabilities {
    /// Build the post-type capability set.
    ///
    /// A non-empty `explicit` map is used verbatim; otherwise the eight
    /// standard actions are derived from the slug and lowercased singular.
    /// Whitelisted roles are recorded in both branches.
    pub fn for_post_type(
        names: &NameSet,
        explicit: BTreeMap<String, String>,
        whitelisted_roles: impl IntoIterator<Item = String>,
    ) -> Self {
        let map = if explicit.is_empty() {
            post_type_defaults(names)
        } else {
            explicit
        };
        Self {
            map,
            whitelisted_roles: whitelisted_roles.into_iter().collect(),
        }
    }

    /// Build the taxonomy capability set (four term-management actions).
    pub fn for_taxonomy(
        names: &NameSet,
        explicit: BTreeMap<String, String>,
        whitelisted_roles: impl IntoIterator<Item = String>,
    ) -> Self {
        let map = if explicit.is_empty() {
            taxonomy_defaults(names)
        } else {
            explicit
        };
        Self {
            map,
            whitelisted_roles: whitelisted_roles.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn map(&self) -> &BTreeMap<String, String> {
        &self.map
    }

    /// Capability names in stable order, for the grant cross product.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.values().map(String::as_str)
    }

    pub fn whitelisted_roles(&self) -> &BTreeSet<String> {
        &self.whitelisted_roles
    }
}

fn post_type_defaults(names: &NameSet) -> BTreeMap<String, String> {
    let singular = names.singular.to_lowercase();
    let slug = &names.slug;
    BTreeMap::from([
        ("edit_post".to_string(), format!("edit_{singular}")),
        ("read_post".to_string(), format!("read_{singular}")),
        ("delete_post".to_string(), format!("delete_{singular}")),
        ("edit_posts".to_string(), format!("edit_{slug}")),
        ("edit_others_posts".to_string(), format!("edit_others_{slug}")),
        ("publish_posts".to_string(), format!("publish_{slug}")),
        ("read_private_posts".to_string(), format!("read_private_{slug}")),
        ("create_posts".to_string(), format!("edit_{slug}")),
    ])
}

fn taxonomy_defaults(names: &NameSet) -> BTreeMap<String, String> {
    let slug = &names.slug;
    BTreeMap::from([
        ("manage_terms".to_string(), format!("manage_{slug}")),
        ("edit_terms".to_string(), format!("edit_{slug}")),
        ("delete_terms".to_string(), format!("delete_{slug}")),
        ("assign_terms".to_string(), format!("assign_{slug}")),
    ])
}
