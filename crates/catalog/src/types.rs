//! Core domain types for the e-book catalog.
//!
//! These mirror the records the library backend hands out: e-books that
//! carry a title, one or more authors and an optional section, and the
//! sections themselves. Edits replace the whole record; the only change
//! the index makes to an item itself is following a section rename or
//! deletion.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque identifier of an e-book, as assigned by the backend
pub type ItemId = String;

/// Opaque identifier of a section
pub type SectionId = String;

// =============================================================================
// Section Types
// =============================================================================

/// A named grouping under which e-books are filed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub name: String,
    pub description: Option<String>,
}

/// The section an e-book points at.
///
/// Listing payloads embed the section's name; edit payloads only carry the
/// id. A reference without a name is treated as uncategorized until
/// [`CatalogIndex::resolve_sections`] fills it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRef {
    pub id: SectionId,
    pub name: Option<String>,
}

impl From<&Section> for SectionRef {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id.clone(),
            name: Some(section.name.clone()),
        }
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A single e-book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    /// Authors in the order the librarian entered them
    pub author_names: Vec<String>,
    /// `None` when the e-book is uncategorized
    pub section: Option<SectionRef>,
    /// Body or link of the e-book; never searched
    pub content: Option<String>,
}

impl CatalogItem {
    /// Create an uncategorized item with the given authors
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        author_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author_names: author_names.into_iter().map(Into::into).collect(),
            section: None,
            content: None,
        }
    }

    /// File the item under a section (builder pattern)
    pub fn with_section(mut self, section: impl Into<SectionRef>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Attach the e-book body (builder pattern)
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Name of the section this item is filed under, if known
    pub fn section_name(&self) -> Option<&str> {
        self.section.as_ref().and_then(|s| s.name.as_deref())
    }

    /// Id of the section this item references, if any
    pub fn section_id(&self) -> Option<&str> {
        self.section.as_ref().map(|s| s.id.as_str())
    }
}

// =============================================================================
// CatalogIndex - The In-Memory Collection
// =============================================================================

/// The authoritative, ordered collection of e-books plus the section table.
///
/// Item order is the order the backend returned them in and is what every
/// filtered view preserves, so items live in a `Vec` with a side map from
/// id to position for O(1) lookups.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    pub(crate) items: Vec<CatalogItem>,
    pub(crate) positions: HashMap<ItemId, usize>,
    pub(crate) sections: HashMap<SectionId, Section>,
}

impl CatalogIndex {
    /// Creates a new, empty CatalogIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in source order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Get an item by id
    pub fn get_item(&self, id: &str) -> Option<&CatalogItem> {
        self.positions.get(id).map(|&pos| &self.items[pos])
    }

    /// Get a section by id
    pub fn get_section(&self, id: &str) -> Option<&Section> {
        self.sections.get(id)
    }

    /// All sections, sorted by name
    pub fn sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.values().collect();
        sections.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        sections
    }

    /// Items filed under `section_id`, in source order
    pub fn get_items_by_section(&self, section_id: &str) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.section_id() == Some(section_id))
            .collect()
    }

    /// Items with no section at all
    pub fn uncategorized_items(&self) -> Vec<&CatalogItem> {
        self.items.iter().filter(|item| item.section.is_none()).collect()
    }

    /// Insert or overwrite a section.
    ///
    /// Items filed under the section pick up its (possibly new) name, so a
    /// rename is visible to section searches straight away.
    pub fn insert_section(&mut self, section: Section) {
        for item in &mut self.items {
            if let Some(reference) = item.section.as_mut() {
                if reference.id == section.id {
                    reference.name = Some(section.name.clone());
                }
            }
        }
        self.sections.insert(section.id.clone(), section);
    }

    /// Delete a section; the e-books filed under it become uncategorized.
    pub fn remove_section(&mut self, id: &str) -> Option<Section> {
        let removed = self.sections.remove(id)?;
        for item in &mut self.items {
            if item.section_id() == Some(id) {
                item.section = None;
            }
        }
        Some(removed)
    }

    /// Replace the whole collection, as after a fresh fetch.
    ///
    /// Fails with `DuplicateId` if `items` repeats an id, leaving the
    /// current collection untouched.
    pub fn replace_items(&mut self, items: Vec<CatalogItem>) -> Result<()> {
        let mut positions = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if positions.insert(item.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId {
                    entity: "E-book".to_string(),
                    id: item.id.clone(),
                });
            }
        }
        self.positions = positions;
        self.items = items;
        Ok(())
    }

    /// Store an edited item in place, or append a newly created one.
    ///
    /// Returns `true` if an existing item was replaced.
    pub fn upsert_item(&mut self, item: CatalogItem) -> bool {
        match self.positions.get(&item.id) {
            Some(&pos) => {
                self.items[pos] = item;
                true
            }
            None => {
                self.positions.insert(item.id.clone(), self.items.len());
                self.items.push(item);
                false
            }
        }
    }

    /// Remove an item, keeping the remaining items in order
    pub fn remove_item(&mut self, id: &str) -> Option<CatalogItem> {
        let pos = self.positions.remove(id)?;
        let removed = self.items.remove(pos);
        for slot in self.positions.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// (sections, items) counts for logging and validation
    pub fn counts(&self) -> (usize, usize) {
        (self.sections.len(), self.items.len())
    }
}
