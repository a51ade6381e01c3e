//! Fluent configuration builders for content-management entities.
//!
//! The crate expands a compact declaration (a name, optional options and
//! labels) into the fully-populated configuration map a CMS host expects
//! when registering a custom post type or taxonomy, plus the runtime glue
//! around it: an ordered hook table, admin-column rendering, and query-sort
//! adjustment. The host itself is an external collaborator reached only
//! through the [`Host`] trait; the crate owns no global state.
//!
//! The substantive logic is the derivation engine: canonical names from a
//! short identifier ([`names`]), recursive option merging ([`merge`]),
//! default label sets ([`labels`]), and capability-name mappings
//! ([`capabilities`]).

pub mod capabilities;
pub mod columns;
pub mod entity;
pub mod error;
pub mod host;
pub mod labels;
pub mod merge;
pub mod names;
pub mod post_type;
pub mod taxonomy;

pub use capabilities::Capabilities;
pub use columns::{Columns, PopulateFn, SortOrder};
pub use entity::Registration;
pub use error::{Error, Result};
pub use host::{EntityKind, Host, HookPoint};
pub use labels::{build_labels, default_labels};
pub use merge::{ConfigMap, merge_maps, merge_values};
pub use names::{NameSet, Names};
pub use post_type::PostType;
pub use taxonomy::Taxonomy;
