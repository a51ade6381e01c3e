//! Admin list-view column registry.
//!
//! Columns are declared against an entity and later folded into the host's
//! base column set when the admin screen renders. The registry also owns the
//! populate callbacks for custom cells and the sortable metadata the host's
//! query layer consults. Lookups for unknown ids are deliberately quiet: the
//! host probes sort state speculatively, so a miss is "no behavior", not an
//! error.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Render callback for a custom column cell, invoked with the column id and
/// the record id.
pub type PopulateFn = Box<dyn Fn(&str, u64)>;

/// Sort behavior for a sortable column.
///
/// `numeric` selects numeric rather than lexicographic comparison in the
/// host's query layer; collapsing the two would silently mis-sort numeric
/// meta values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub meta_key: String,
    pub numeric: bool,
}

/// Ordered column declarations for one entity's admin list view.
///
/// Insertion order is display order for newly added columns; the host's own
/// ordering is preserved for columns the entity does not touch.
#[derive(Default)]
pub struct Columns {
    items: Vec<(String, String)>,
    hidden: BTreeSet<String>,
    positions: BTreeMap<String, usize>,
    populate: BTreeMap<String, PopulateFn>,
    sortable: BTreeMap<String, SortOrder>,
}

impl Columns {
    /// Declare a column. Re-declaring an id the host already renders
    /// overrides its label in place; new ids are appended.
    pub fn add(&mut self, id: impl Into<String>, label: impl Into<String>) -> &mut Self {
        let id = id.into();
        let label = label.into();
        match self.items.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = label,
            None => self.items.push((id, label)),
        }
        self
    }

    /// Hide a column, including ones from the host's base set.
    pub fn hide(&mut self, id: impl Into<String>) -> &mut Self {
        self.hidden.insert(id.into());
        self
    }

    /// Pin a column to an explicit position in the rendered order.
    pub fn order(&mut self, id: impl Into<String>, position: usize) -> &mut Self {
        self.positions.insert(id.into(), position);
        self
    }

    /// Register the render callback for a column's cells.
    pub fn populate(
        &mut self,
        id: impl Into<String>,
        callback: impl Fn(&str, u64) + 'static,
    ) -> &mut Self {
        self.populate.insert(id.into(), Box::new(callback));
        self
    }

    /// Make a column sortable by a meta key.
    pub fn sortable(
        &mut self,
        id: impl Into<String>,
        meta_key: impl Into<String>,
        numeric: bool,
    ) -> &mut Self {
        self.sortable.insert(
            id.into(),
            SortOrder {
                meta_key: meta_key.into(),
                numeric,
            },
        );
        self
    }

    /// True when nothing was declared, so the entity can skip column hooks.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.hidden.is_empty()
            && self.positions.is_empty()
            && self.populate.is_empty()
            && self.sortable.is_empty()
    }

    pub fn is_sortable(&self, id: &str) -> bool {
        self.sortable.contains_key(id)
    }

    /// Sort metadata for a column, `None` when the id is not sortable.
    pub fn sort_meta(&self, id: &str) -> Option<&SortOrder> {
        self.sortable.get(id)
    }

    /// Sortable declarations in stable order, for merging into the host's
    /// sortable-column set.
    pub fn sortable_columns(&self) -> impl Iterator<Item = (&str, &SortOrder)> {
        self.sortable
            .iter()
            .map(|(id, order)| (id.as_str(), order))
    }

    /// Fold the declared columns into the host's base column set.
    ///
    /// Host ordering is preserved for untouched columns; hidden ids are
    /// dropped, re-declared ids keep their slot with the new label, new ids
    /// are appended in declaration order, and explicit positions are applied
    /// last.
    pub fn modify(&self, base: &[(String, String)]) -> Vec<(String, String)> {
        let declared: BTreeMap<&str, &str> = self
            .items
            .iter()
            .map(|(id, label)| (id.as_str(), label.as_str()))
            .collect();

        let mut merged: Vec<(String, String)> = Vec::with_capacity(base.len() + self.items.len());
        for (id, label) in base {
            if self.hidden.contains(id) {
                continue;
            }
            let label = declared.get(id.as_str()).map_or(label.as_str(), |l| *l);
            merged.push((id.clone(), label.to_string()));
        }

        for (id, label) in &self.items {
            if self.hidden.contains(id) {
                continue;
            }
            if !base.iter().any(|(existing, _)| existing == id) {
                merged.push((id.clone(), label.clone()));
            }
        }

        let mut pinned: Vec<(&String, &usize)> = self.positions.iter().collect();
        pinned.sort_by_key(|(_, position)| **position);
        for (id, position) in pinned {
            if let Some(current) = merged.iter().position(|(existing, _)| existing == id) {
                let column = merged.remove(current);
                merged.insert((*position).min(merged.len()), column);
            }
        }

        merged
    }

    /// Dispatch the render callback for one cell. Unregistered ids are a
    /// no-op.
    pub fn populate_column(&self, id: &str, record_id: u64) {
        if let Some(callback) = self.populate.get(id) {
            callback(id, record_id);
        }
    }
}

impl fmt::Debug for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Columns")
            .field("items", &self.items)
            .field("hidden", &self.hidden)
            .field("positions", &self.positions)
            .field("populate", &self.populate.keys().collect::<Vec<_>>())
            .field("sortable", &self.sortable)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn base_columns() -> Vec<(String, String)> {
        vec![
            ("cb".to_string(), "<input/>".to_string()),
            ("title".to_string(), "Title".to_string()),
            ("date".to_string(), "Date".to_string()),
        ]
    }

    #[test]
    fn new_columns_append_in_declaration_order() {
        let mut columns = Columns::default();
        columns.add("rating", "Rating").add("price", "Price");

        let merged = columns.modify(&base_columns());
        let ids: Vec<&str> = merged.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["cb", "title", "date", "rating", "price"]);
    }

    #[test]
    fn redeclared_id_keeps_its_slot_with_the_new_label() {
        let mut columns = Columns::default();
        columns.add("title", "Book Title");

        let merged = columns.modify(&base_columns());
        assert_eq!(merged[1], ("title".to_string(), "Book Title".to_string()));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn hidden_columns_are_dropped() {
        let mut columns = Columns::default();
        columns.hide("date");

        let merged = columns.modify(&base_columns());
        assert!(!merged.iter().any(|(id, _)| id == "date"));
    }

    #[test]
    fn explicit_positions_are_applied_last() {
        let mut columns = Columns::default();
        columns.add("rating", "Rating").order("rating", 1);

        let merged = columns.modify(&base_columns());
        let ids: Vec<&str> = merged.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["cb", "rating", "title", "date"]);
    }

    #[test]
    fn sort_meta_distinguishes_numeric_from_text() {
        let mut columns = Columns::default();
        columns
            .sortable("rating", "rating_meta", true)
            .sortable("isbn", "isbn_meta", false);

        assert!(columns.is_sortable("rating"));
        assert_eq!(
            columns.sort_meta("rating"),
            Some(&SortOrder {
                meta_key: "rating_meta".to_string(),
                numeric: true,
            })
        );
        assert_eq!(columns.sort_meta("isbn").map(|s| s.numeric), Some(false));
        assert!(!columns.is_sortable("title"));
        assert_eq!(columns.sort_meta("title"), None);
    }

    #[test]
    fn populate_dispatches_registered_callback_and_ignores_unknown_ids() {
        let seen: Rc<RefCell<Vec<(String, u64)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut columns = Columns::default();
        columns.populate("rating", move |id, record| {
            sink.borrow_mut().push((id.to_string(), record));
        });

        columns.populate_column("rating", 42);
        columns.populate_column("unknown", 7);

        assert_eq!(&*seen.borrow(), &[("rating".to_string(), 42)]);
    }
}
