//! Shared builder state for post types and taxonomies.
//!
//! Both public builders own an [`EntityCore`]: the derived name set, caller
//! options and labels, the capability set, the column registry, and the
//! registration state machine. The kind-specific pieces (filters, icon,
//! associations, host defaults) live in the `post_type` and `taxonomy`
//! modules.

use crate::capabilities::Capabilities;
use crate::columns::Columns;
use crate::error::Result;
use crate::host::{EntityKind, Host};
use crate::labels::build_labels;
use crate::merge::{ConfigMap, merge_maps};
use crate::names::{NameSet, Names};
use log::{debug, warn};
use serde_json::Value;

/// Registration lifecycle. `Pending` from construction until the host's
/// init phase runs the registration callback; `Registered` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Registration {
    #[default]
    Unregistered,
    Pending,
    Registered,
}

#[derive(Debug)]
pub(crate) struct EntityCore {
    kind: EntityKind,
    names: NameSet,
    options: ConfigMap,
    labels: ConfigMap,
    capabilities: Capabilities,
    pub(crate) columns: Columns,
    state: Registration,
}

impl EntityCore {
    /// Derive names and enter the `Pending` state.
    ///
    /// Name derivation runs eagerly so malformed input fails at construction
    /// and every later operation can rely on a complete, immutable name set.
    pub(crate) fn new(kind: EntityKind, names: &Names) -> Result<Self> {
        let names = NameSet::derive(names)?;
        debug!("{} `{}` pending registration", kind.as_str(), names.key);
        Ok(Self {
            kind,
            names,
            options: ConfigMap::new(),
            labels: ConfigMap::new(),
            capabilities: Capabilities::default(),
            columns: Columns::default(),
            state: Registration::Pending,
        })
    }

    pub(crate) fn names(&self) -> &NameSet {
        &self.names
    }

    pub(crate) fn state(&self) -> Registration {
        self.state
    }

    pub(crate) fn set_options(&mut self, options: ConfigMap) {
        self.options = options;
    }

    pub(crate) fn set_labels(&mut self, labels: ConfigMap) {
        self.labels = labels;
    }

    pub(crate) fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.capabilities = capabilities;
    }

    pub(crate) fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Expand the caller's compact input into the host configuration map.
    ///
    /// Pure over the builder state: merges caller options over the supplied
    /// kind defaults, then injects labels, the menu icon, and the capability
    /// map unless the caller already provided them. Safe to call repeatedly.
    pub(crate) fn build_config(&self, defaults: &ConfigMap, icon: Option<&str>) -> ConfigMap {
        let mut config = merge_maps(defaults, &self.options);

        if !config.contains_key("labels") {
            config.insert(
                "labels".to_string(),
                Value::Object(build_labels(&self.names, &self.labels)),
            );
        }

        if let Some(icon) = icon {
            if !config.contains_key("menu_icon") {
                config.insert("menu_icon".to_string(), Value::String(icon.to_string()));
            }
        }

        if !config.contains_key("capabilities") && !self.capabilities.is_empty() {
            let map = self
                .capabilities
                .map()
                .iter()
                .map(|(action, name)| (action.clone(), Value::String(name.clone())))
                .collect();
            config.insert("capabilities".to_string(), Value::Object(map));
        }

        config
    }

    /// Claim the registration callback.
    ///
    /// Returns false when the entity is already registered; the host may
    /// re-invoke init callbacks in pathological cases, and a repeat must not
    /// re-register.
    pub(crate) fn begin_registration(&mut self) -> bool {
        match self.state {
            Registration::Registered => {
                warn!(
                    "{} `{}` already registered, ignoring repeat registration",
                    self.kind.as_str(),
                    self.names.key
                );
                false
            }
            Registration::Unregistered | Registration::Pending => {
                self.state = Registration::Registered;
                true
            }
        }
    }

    /// Grant every capability in the map to each whitelisted role.
    ///
    /// Roles unknown to the host's role store are skipped, not errors:
    /// deployments differ in which roles exist. Granting is additive.
    pub(crate) fn grant_capabilities(&self, host: &mut dyn Host) {
        for role in self.capabilities.whitelisted_roles() {
            if !host.has_role(role) {
                debug!(
                    "skipping capability grant for unknown role `{role}` on {} `{}`",
                    self.kind.as_str(),
                    self.names.key
                );
                continue;
            }
            for capability in self.capabilities.names() {
                host.grant_capability(role, capability);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn core() -> EntityCore {
        EntityCore::new(EntityKind::PostType, &Names::new("book")).unwrap()
    }

    fn defaults() -> ConfigMap {
        let Value::Object(map) = json!({"public": true, "rewrite": {"slug": "books"}}) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn construction_enters_pending() {
        assert_eq!(core().state(), Registration::Pending);
    }

    #[test]
    fn build_config_injects_labels_only_when_absent() {
        let core = core();
        let config = core.build_config(&defaults(), None);
        assert!(config["labels"].is_object());

        let mut with_labels = core;
        let Value::Object(options) = json!({"labels": {"name": "Shelf"}}) else {
            unreachable!()
        };
        with_labels.set_options(options);
        let config = with_labels.build_config(&defaults(), None);
        assert_eq!(config["labels"], json!({"name": "Shelf"}));
    }

    #[test]
    fn build_config_injects_icon_and_capabilities_when_set() {
        let mut core = core();
        let names = core.names().clone();
        core.set_capabilities(Capabilities::for_post_type(&names, BTreeMap::new(), []));

        let config = core.build_config(&defaults(), Some("dashicon-book-alt"));
        assert_eq!(config["menu_icon"], json!("dashicon-book-alt"));
        assert_eq!(config["capabilities"]["edit_posts"], json!("edit_books"));
    }

    #[test]
    fn build_config_is_idempotent() {
        let core = core();
        assert_eq!(
            core.build_config(&defaults(), None),
            core.build_config(&defaults(), None)
        );
    }

    #[test]
    fn begin_registration_is_single_shot() {
        let mut core = core();
        assert!(core.begin_registration());
        assert_eq!(core.state(), Registration::Registered);
        assert!(!core.begin_registration());
    }
}
