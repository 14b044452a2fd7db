//! CatalogIndex loading and integrity checks.
//!
//! This module builds a CatalogIndex from a catalog directory:
//! - Parse ebooks.json and sections.json in parallel
//! - Attach section names to items that only reference a section id
//! - Validate ids and section references

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

impl CatalogIndex {
    /// Load a catalog from a directory
    ///
    /// `ebooks.json` is required. `sections.json` is optional; without it
    /// items keep whatever section names they embed and section references
    /// are not checked.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", data_dir);

        let ebooks_path = data_dir.join("ebooks.json");
        let sections_path = data_dir.join("sections.json");

        let (items, sections) = rayon::join(
            || parser::parse_ebooks(&ebooks_path),
            || {
                if sections_path.exists() {
                    parser::parse_sections(&sections_path).map(Some)
                } else {
                    Ok(None)
                }
            },
        );
        let items = items?;
        let sections = sections?;

        let mut index = CatalogIndex::new();
        let has_sections = sections.is_some();
        for section in sections.unwrap_or_default() {
            index.insert_section(section);
        }
        index.replace_items(items)?;

        if has_sections {
            index.resolve_sections();
        }
        index.validate()?;

        let (sections, items) = index.counts();
        info!("Loaded {} e-books in {} sections", items, sections);
        Ok(index)
    }

    /// Fill in section names from the section table.
    ///
    /// Items referencing a known section get that section's current name;
    /// references to unknown sections are left as they are.
    pub fn resolve_sections(&mut self) {
        for item in &mut self.items {
            let Some(reference) = item.section.as_mut() else {
                continue;
            };
            match self.sections.get(&reference.id) {
                Some(section) => reference.name = Some(section.name.clone()),
                None => warn!(
                    "E-book {} references unknown section {}",
                    item.id, reference.id
                ),
            }
        }
    }

    /// Validate catalog integrity
    ///
    /// Checks that:
    /// - No two items share an id
    /// - Every section reference points at a known section, when any
    ///   sections are loaded
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    entity: "E-book".to_string(),
                    id: item.id.clone(),
                });
            }
        }

        if self.sections.is_empty() {
            return Ok(());
        }
        for item in &self.items {
            if let Some(section_id) = item.section_id() {
                if !self.sections.contains_key(section_id) {
                    return Err(CatalogError::MissingReference {
                        entity: "Section".to_string(),
                        id: section_id.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
