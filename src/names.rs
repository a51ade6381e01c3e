//! Entity naming: caller input and the derived canonical name set.
//!
//! A builder can be constructed from a bare identifier (everything else is
//! computed) or from a partial [`Names`] record where any explicit field wins
//! over derivation. Derivation is deterministic and runs once per entity; the
//! resulting [`NameSet`] never changes afterwards.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Caller-supplied names for an entity.
///
/// Only `name` is required; it becomes the registration key. The optional
/// fields override the derived singular/plural labels and the URL slug.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Names {
    pub name: String,
    #[serde(default)]
    pub singular: Option<String>,
    #[serde(default)]
    pub plural: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl Names {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn singular(mut self, singular: impl Into<String>) -> Self {
        self.singular = Some(singular.into());
        self
    }

    pub fn plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = Some(plural.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// True when the caller supplied only a bare identifier.
    fn is_bare(&self) -> bool {
        self.singular.is_none() && self.plural.is_none() && self.slug.is_none()
    }
}

impl From<&str> for Names {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Names {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Canonical names for an entity: registration key, display labels, slug.
///
/// All four fields are non-empty once derived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NameSet {
    pub key: String,
    pub singular: String,
    pub plural: String,
    pub slug: String,
}

impl NameSet {
    /// Derive the complete name set from caller input.
    ///
    /// Explicit non-empty fields are used verbatim; missing fields are
    /// computed from `name`. Pluralization is deliberately naive (trailing
    /// `y` becomes `ies`, otherwise append `s`) and is not a linguistic
    /// pluralizer.
    pub fn derive(names: &Names) -> Result<Self> {
        let key = names.name.trim();
        if key.is_empty() {
            if names.is_bare() {
                return Err(Error::InvalidName(names.name.clone()));
            }
            return Err(Error::MissingField("name"));
        }

        let explicit = |field: &Option<String>| {
            field
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let singular = explicit(&names.singular).unwrap_or_else(|| humanize(key));
        let plural = explicit(&names.plural).unwrap_or_else(|| pluralize(&humanize(key)));
        let slug = explicit(&names.slug).unwrap_or_else(|| pluralize(&sluggify(key)));

        Ok(Self {
            key: key.to_string(),
            singular,
            plural,
            slug,
        })
    }
}

/// Human-friendly form: `-`/`_` become spaces, then each word is capitalized.
fn humanize(key: &str) -> String {
    let spaced = key.replace(['-', '_'], " ").to_lowercase();
    let mut out = String::with_capacity(spaced.len());
    let mut boundary = true;
    for ch in spaced.chars() {
        if boundary {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        boundary = ch == ' ';
    }
    out
}

/// URL-friendly form: spaces and `_` become `-`, lowercased.
fn sluggify(key: &str) -> String {
    key.replace([' ', '_'], "-").to_lowercase()
}

fn pluralize(name: &str) -> String {
    match name.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{name}s"),
    }
}
