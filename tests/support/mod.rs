use posttypes::{ConfigMap, EntityKind, Host};
use std::collections::{BTreeMap, BTreeSet};

/// Recording host double.
///
/// Seeded with the roles and pre-existing entities a deployment would have;
/// records every side effect of the registration lifecycle so tests can
/// assert on exactly what the host was asked to do.
#[derive(Default)]
pub struct MockHost {
    roles: BTreeSet<String>,
    entities: BTreeMap<(EntityKind, String), ConfigMap>,
    pub registered: Vec<(EntityKind, String)>,
    pub updated: Vec<(EntityKind, String)>,
    pub grants: Vec<(String, String)>,
    pub associations: Vec<(String, String)>,
}

impl MockHost {
    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn seed_entity(&mut self, kind: EntityKind, key: &str, args: ConfigMap) {
        self.entities.insert((kind, key.to_string()), args);
    }

    pub fn args(&self, kind: EntityKind, key: &str) -> Option<&ConfigMap> {
        self.entities.get(&(kind, key.to_string()))
    }
}

impl Host for MockHost {
    fn entity_exists(&self, kind: EntityKind, key: &str) -> bool {
        self.entities.contains_key(&(kind, key.to_string()))
    }

    fn register_entity(&mut self, kind: EntityKind, key: &str, config: &ConfigMap) {
        self.registered.push((kind, key.to_string()));
        self.entities.insert((kind, key.to_string()), config.clone());
    }

    fn entity_args(&self, kind: EntityKind, key: &str) -> Option<ConfigMap> {
        self.entities.get(&(kind, key.to_string())).cloned()
    }

    fn update_entity_args(&mut self, kind: EntityKind, key: &str, args: ConfigMap) {
        self.updated.push((kind, key.to_string()));
        self.entities.insert((kind, key.to_string()), args);
    }

    fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    fn grant_capability(&mut self, role: &str, capability: &str) {
        self.grants.push((role.to_string(), capability.to_string()));
    }

    fn associate_taxonomy(&mut self, taxonomy_key: &str, post_type_key: &str) {
        self.associations
            .push((taxonomy_key.to_string(), post_type_key.to_string()));
    }
}
