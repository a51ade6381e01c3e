//! Fluent builder for custom taxonomies.

use crate::capabilities::Capabilities;
use crate::columns::{Columns, SortOrder};
use crate::entity::{EntityCore, Registration};
use crate::error::Result;
use crate::host::{EntityKind, HookPoint, Host};
use crate::merge::{ConfigMap, merge_maps};
use crate::names::{NameSet, Names};
use log::debug;
use serde_json::Value;
use std::collections::BTreeMap;

/// A custom taxonomy declaration.
///
/// The mirror image of [`PostType`](crate::PostType): it holds the list of
/// post types the taxonomy attaches to instead of taxonomy associations, and
/// targets the taxonomy registration surface.
#[derive(Debug)]
pub struct Taxonomy {
    core: EntityCore,
    post_types: Vec<String>,
}

impl Taxonomy {
    /// Create a taxonomy from a bare identifier or partial names.
    pub fn new(names: impl Into<Names>) -> Result<Self> {
        Ok(Self {
            core: EntityCore::new(EntityKind::Taxonomy, &names.into())?,
            post_types: Vec::new(),
        })
    }

    /// Caller options, merged over the host defaults at build time.
    pub fn options(mut self, options: ConfigMap) -> Self {
        self.core.set_options(options);
        self
    }

    /// Label overrides, merged over the computed label defaults.
    pub fn labels(mut self, labels: ConfigMap) -> Self {
        self.core.set_labels(labels);
        self
    }

    /// Attach this taxonomy to a post type.
    pub fn post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_types.push(post_type.into());
        self
    }

    /// Attach this taxonomy to several post types at once.
    pub fn post_types<I, S>(mut self, post_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post_types
            .extend(post_types.into_iter().map(Into::into));
        self
    }

    /// Fix the capability set: the four derived term-management actions, or
    /// a non-empty explicit map used verbatim.
    pub fn capabilities(
        mut self,
        explicit: BTreeMap<String, String>,
        whitelisted_roles: impl IntoIterator<Item = String>,
    ) -> Self {
        let capabilities =
            Capabilities::for_taxonomy(self.core.names(), explicit, whitelisted_roles);
        self.core.set_capabilities(capabilities);
        self
    }

    /// Configure the admin column registry.
    pub fn columns(mut self, configure: impl FnOnce(&mut Columns)) -> Self {
        configure(&mut self.core.columns);
        self
    }

    pub fn names(&self) -> &NameSet {
        self.core.names()
    }

    pub fn registration(&self) -> Registration {
        self.core.state()
    }

    pub fn associated_post_types(&self) -> &[String] {
        &self.post_types
    }

    /// Ordered hook table for the host dispatcher.
    pub fn hooks(&self) -> Vec<HookPoint> {
        let mut hooks = vec![
            HookPoint::Register,
            HookPoint::GrantCapabilities,
            HookPoint::Associate,
        ];
        if !self.core.columns.is_empty() {
            hooks.extend([
                HookPoint::ManageColumns,
                HookPoint::PopulateColumns,
                HookPoint::SortableColumns,
                HookPoint::QuerySort,
            ]);
        }
        hooks
    }

    /// Expand the declaration into the full registration config.
    pub fn build_config(&self) -> ConfigMap {
        self.core.build_config(&self.host_defaults(), None)
    }

    /// Merge this declaration into an already-registered entity's args.
    pub fn modify_args(&self, existing: &ConfigMap) -> ConfigMap {
        merge_maps(existing, &self.build_config())
    }

    /// Run the registration lifecycle against the host.
    pub fn register(&mut self, host: &mut dyn Host) {
        if !self.core.begin_registration() {
            return;
        }
        let key = self.core.names().key.clone();

        if host.entity_exists(EntityKind::Taxonomy, &key) {
            let existing = host
                .entity_args(EntityKind::Taxonomy, &key)
                .unwrap_or_default();
            host.update_entity_args(EntityKind::Taxonomy, &key, self.modify_args(&existing));
            debug!("merged config into existing taxonomy `{key}`");
        } else {
            host.register_entity(EntityKind::Taxonomy, &key, &self.build_config());
            debug!("registered taxonomy `{key}`");
        }

        self.core.grant_capabilities(host);

        for post_type in &self.post_types {
            host.associate_taxonomy(&key, post_type);
        }
    }

    /// Fold declared columns into the host's base admin columns.
    pub fn render_admin_columns(&self, base: &[(String, String)]) -> Vec<(String, String)> {
        self.core.columns.modify(base)
    }

    /// Render one custom cell; unregistered ids are a no-op.
    pub fn populate_column(&self, id: &str, record_id: u64) {
        self.core.columns.populate_column(id, record_id);
    }

    /// Sort adjustment for a requested sort key.
    pub fn query_sort(&self, requested: &str) -> Option<&SortOrder> {
        self.core.columns.sort_meta(requested)
    }

    /// Sortable declarations for the host's sortable-column filter.
    pub fn sortable_columns(&self) -> impl Iterator<Item = (&str, &SortOrder)> {
        self.core.columns.sortable_columns()
    }

    fn host_defaults(&self) -> ConfigMap {
        let mut rewrite = ConfigMap::new();
        rewrite.insert(
            "slug".to_string(),
            Value::String(self.core.names().slug.clone()),
        );

        let mut defaults = ConfigMap::new();
        defaults.insert("hierarchical".to_string(), Value::Bool(true));
        defaults.insert("show_admin_column".to_string(), Value::Bool(true));
        defaults.insert("rewrite".to_string(), Value::Object(rewrite));
        defaults
    }
}
