//! Fluent builder for custom post types.

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

/// A custom post type declaration.
///
/// Built fluently from a bare identifier or a partial [`Names`] record, then
/// handed to the host's init dispatcher via [`register`](Self::register).
///
/// ```ignore
/// let mut books = PostType::new("book")?
///     .taxonomy("genre")
///     .icon("dashicon-book-alt");
/// books.register(&mut host);
/// ```
#[derive(Debug)]
pub struct PostType {
    core: EntityCore,
    taxonomies: Vec<String>,
    filters: Option<Vec<String>>,
    icon: Option<String>,
}

impl PostType {
    /// Create a post type from a bare identifier or partial names.
    ///
    /// Name derivation runs here, so malformed input fails fast.
    pub fn new(names: impl Into<Names>) -> Result<Self> {
        Ok(Self {
            core: EntityCore::new(EntityKind::PostType, &names.into())?,
            taxonomies: Vec::new(),
            filters: None,
            icon: None,
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

    /// Associate a taxonomy with this post type.
    pub fn taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
        self.taxonomies.push(taxonomy.into());
        self
    }

    /// Associate several taxonomies at once.
    pub fn taxonomies<I, S>(mut self, taxonomies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.taxonomies
            .extend(taxonomies.into_iter().map(Into::into));
        self
    }

    /// Set the admin filter list explicitly.
    ///
    /// An explicit list wins over the derived taxonomy list, and an explicit
    /// empty list disables filters entirely rather than falling back.
    pub fn filters(mut self, filters: Vec<String>) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Menu icon, injected into the config unless the options already carry
    /// one.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Fix the capability set for this post type.
    ///
    /// A non-empty `explicit` map is used verbatim; an empty one selects the
    /// eight derived defaults. `whitelisted_roles` receive every capability
    /// during registration.
    pub fn capabilities(
        mut self,
        explicit: BTreeMap<String, String>,
        whitelisted_roles: impl IntoIterator<Item = String>,
    ) -> Self {
        let capabilities =
            Capabilities::for_post_type(self.core.names(), explicit, whitelisted_roles);
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

    /// Admin filter list under the explicit > derived > empty precedence.
    pub fn get_filters(&self) -> &[String] {
        match &self.filters {
            Some(filters) => filters,
            None if !self.taxonomies.is_empty() => &self.taxonomies,
            None => &[],
        }
    }

    /// Ordered hook table for the host dispatcher.
    ///
    /// Column hooks appear only when columns were declared, mirroring the
    /// conditional wiring of the admin screen.
    pub fn hooks(&self) -> Vec<HookPoint> {
        let mut hooks = vec![
            HookPoint::Register,
            HookPoint::GrantCapabilities,
            HookPoint::Associate,
            HookPoint::ManageFilters,
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
        self.core
            .build_config(&self.host_defaults(), self.icon.as_deref())
    }

    /// Merge this declaration into an already-registered entity's args.
    pub fn modify_args(&self, existing: &ConfigMap) -> ConfigMap {
        merge_maps(existing, &self.build_config())
    }

    /// Run the registration lifecycle against the host.
    ///
    /// Creates the post type when its key is unknown to the host, merges
    /// into the existing args otherwise, then grants capabilities and wires
    /// taxonomy associations. Repeat invocations are ignored.
    pub fn register(&mut self, host: &mut dyn Host) {
        if !self.core.begin_registration() {
            return;
        }
        let key = self.core.names().key.clone();

        if host.entity_exists(EntityKind::PostType, &key) {
            let existing = host
                .entity_args(EntityKind::PostType, &key)
                .unwrap_or_default();
            host.update_entity_args(EntityKind::PostType, &key, self.modify_args(&existing));
            debug!("merged config into existing post_type `{key}`");
        } else {
            host.register_entity(EntityKind::PostType, &key, &self.build_config());
            debug!("registered post_type `{key}`");
        }

        self.core.grant_capabilities(host);

        for taxonomy in &self.taxonomies {
            host.associate_taxonomy(taxonomy, &key);
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

    /// Sort adjustment for a requested sort key, `None` when the key is not
    /// a declared sortable column.
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
        defaults.insert("public".to_string(), Value::Bool(true));
        defaults.insert("rewrite".to_string(), Value::Object(rewrite));
        defaults
    }
}
