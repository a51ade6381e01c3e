//! The seam between the builders and the content-management host.
//!
//! Registration calls, the role store, taxonomy association, and the hook
//! dispatcher are environment-owned services. The crate configures them
//! exclusively through [`Host`]; nothing here touches global state. The
//! admin-column and query-sort hooks have no trait methods because they
//! delegate straight to the entity's column registry.

use crate::merge::ConfigMap;

/// Which registration surface an entity targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    PostType,
    Taxonomy,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::PostType => "post_type",
            EntityKind::Taxonomy => "taxonomy",
        }
    }
}

/// Lifecycle points an entity binds into.
///
/// Entities expose these as an explicit ordered table; the host's dispatcher
/// walks the table and invokes the matching entity operation at each phase.
/// There are no global hook registries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookPoint {
    /// Initialization: create the entity or merge into its existing args.
    Register,
    /// Initialization: grant capabilities to whitelisted roles.
    GrantCapabilities,
    /// Initialization: wire declared entity associations.
    Associate,
    /// Admin screen: compute taxonomy filter dropdowns.
    ManageFilters,
    /// Admin screen: fold declared columns into the base column set.
    ManageColumns,
    /// Admin screen: render custom column cells.
    PopulateColumns,
    /// Admin screen: expose sortable columns.
    SortableColumns,
    /// Query layer: rewrite the sort key for sortable columns.
    QuerySort,
}

/// Host platform surface consumed during registration.
///
/// Implementations are expected to be environment singletons (the CMS
/// runtime); tests substitute a recording mock.
pub trait Host {
    /// True when an entity with `key` is already registered.
    fn entity_exists(&self, kind: EntityKind, key: &str) -> bool;

    /// Create a new entity. Called only when `key` does not exist yet.
    fn register_entity(&mut self, kind: EntityKind, key: &str, config: &ConfigMap);

    /// Current arguments of an already-registered entity.
    fn entity_args(&self, kind: EntityKind, key: &str) -> Option<ConfigMap>;

    /// Replace an existing entity's arguments with the merged map.
    fn update_entity_args(&mut self, kind: EntityKind, key: &str, args: ConfigMap);

    /// True when the role exists in the host's role store.
    fn has_role(&self, role: &str) -> bool;

    /// Grant one capability to one role. Additive; never revokes.
    fn grant_capability(&mut self, role: &str, capability: &str);

    /// Associate a taxonomy with a post type.
    fn associate_taxonomy(&mut self, taxonomy_key: &str, post_type_key: &str);
}
