//! Parser for catalog JSON files.
//!
//! The files hold what the backend's list endpoints return:
//! - ebooks.json: `[{ "_id", "name", "authors", "section", "content" }, ...]`
//! - sections.json: `[{ "_id", "name", "description" }, ...]`
//!
//! Each record is decoded on its own so an error names the record that
//! caused it. Optional attributes that are missing degrade to empty values
//! rather than failing the record.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// `authors` arrives as a list from the listing endpoint and as a single
/// comma-separated string from the create/edit form.
#[derive(Deserialize)]
#[serde(untagged)]
enum AuthorsField {
    List(Vec<String>),
    Joined(String),
}

/// `section` is either the populated section document or just its id.
///
/// A document without an `_id` can't be tied to a section, so the e-book
/// is loaded as uncategorized.
#[derive(Deserialize)]
#[serde(untagged)]
enum SectionField {
    Embedded {
        #[serde(rename = "_id", default)]
        id: Option<SectionId>,
        #[serde(default)]
        name: Option<String>,
    },
    Id(SectionId),
}

#[derive(Deserialize)]
struct EbookRecord {
    #[serde(rename = "_id")]
    id: ItemId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    authors: Option<AuthorsField>,
    #[serde(default)]
    section: Option<SectionField>,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct SectionRecord {
    #[serde(rename = "_id")]
    id: SectionId,
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<EbookRecord> for CatalogItem {
    fn from(record: EbookRecord) -> Self {
        let author_names = match record.authors {
            Some(AuthorsField::List(names)) => names,
            Some(AuthorsField::Joined(joined)) => parse_author_list(&joined),
            None => Vec::new(),
        };
        let section = record.section.and_then(|field| match field {
            SectionField::Embedded { id: Some(id), name } => Some(SectionRef { id, name }),
            SectionField::Embedded { id: None, name } => {
                warn!(
                    "E-book {} has a section without an id ({:?}); loading it as uncategorized",
                    record.id, name
                );
                None
            }
            SectionField::Id(id) => Some(SectionRef { id, name: None }),
        });

        CatalogItem {
            id: record.id,
            title: record.name.unwrap_or_default(),
            author_names,
            section,
            content: record.content,
        }
    }
}

impl From<SectionRecord> for Section {
    fn from(record: SectionRecord) -> Self {
        Section {
            id: record.id,
            name: record.name,
            description: record.description,
        }
    }
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })
}

/// Decode a top-level JSON array record by record
fn parse_records<R, T>(file: &str, text: &str) -> Result<Vec<T>>
where
    R: for<'de> Deserialize<'de>,
    T: From<R>,
{
    let document: Value = serde_json::from_str(text).map_err(|source| CatalogError::JsonError {
        file: file.to_string(),
        source,
    })?;

    let Value::Array(records) = document else {
        return Err(CatalogError::ParseError {
            file: file.to_string(),
            record: 0,
            reason: "Expected a top-level array".to_string(),
        });
    };

    records
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            serde_json::from_value::<R>(value)
                .map(T::from)
                .map_err(|e| CatalogError::ParseError {
                    file: file.to_string(),
                    record: idx,
                    reason: e.to_string(),
                })
        })
        .collect()
}

/// Parse e-books from an in-memory JSON document
///
/// `file` is only used to label errors.
pub fn parse_ebooks_str(file: &str, text: &str) -> Result<Vec<CatalogItem>> {
    parse_records::<EbookRecord, CatalogItem>(file, text)
}

/// Parse sections from an in-memory JSON document
pub fn parse_sections_str(file: &str, text: &str) -> Result<Vec<Section>> {
    parse_records::<SectionRecord, Section>(file, text)
}

/// Parse the ebooks.json file
pub fn parse_ebooks(path: &Path) -> Result<Vec<CatalogItem>> {
    let text = read_document(path)?;
    parse_ebooks_str(&file_label(path), &text)
}

/// Parse the sections.json file
pub fn parse_sections(path: &Path) -> Result<Vec<Section>> {
    let text = read_document(path)?;
    parse_sections_str(&file_label(path), &text)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Split the comma-separated author field of the e-book form
///
/// Example: "Jane Smith, John Doe" -> vec!["Jane Smith", "John Doe"]
pub fn parse_author_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_author_list() {
        assert_eq!(
            parse_author_list("Jane Smith,  John Doe"),
            vec!["Jane Smith".to_string(), "John Doe".to_string()]
        );
        assert_eq!(parse_author_list("Solo"), vec!["Solo".to_string()]);
        assert!(parse_author_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_embedded_section() {
        let text = r#"[{"_id": "b1", "name": "Cooking 101", "authors": ["Alice Johnson"],
                        "section": {"_id": "s2", "name": "Culinary"}}]"#;
        let items = parse_ebooks_str("ebooks.json", text).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Cooking 101");
        assert_eq!(items[0].section_name(), Some("Culinary"));
        assert_eq!(items[0].section_id(), Some("s2"));
    }

    #[test]
    fn test_parse_section_id_only() {
        let text = r#"[{"_id": "b1", "name": "X", "authors": "A, B", "section": "s9"}]"#;
        let items = parse_ebooks_str("ebooks.json", text).unwrap();

        assert_eq!(items[0].author_names, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(items[0].section_id(), Some("s9"));
        assert_eq!(items[0].section_name(), None);
    }

    #[test]
    fn test_section_without_id_is_uncategorized() {
        let text = r#"[{"_id": "b1", "name": "Cooking 101", "section": {"name": "Culinary"}},
                        {"_id": "b2", "name": "Odd", "section": {}}]"#;
        let items = parse_ebooks_str("ebooks.json", text).unwrap();

        assert_eq!(items.len(), 2);
        assert!(items[0].section.is_none());
        assert!(items[1].section.is_none());
    }

    #[test]
    fn test_missing_optional_attributes() {
        let text = r#"[{"_id": "b1"}, {"_id": "b2", "name": "Y", "section": null}]"#;
        let items = parse_ebooks_str("ebooks.json", text).unwrap();

        assert_eq!(items[0].title, "");
        assert!(items[0].author_names.is_empty());
        assert!(items[0].section.is_none());
        assert!(items[1].section.is_none());
    }

    #[test]
    fn test_record_error_names_position() {
        let text = r#"[{"_id": "b1", "name": "ok"}, {"name": "no id"}]"#;
        let err = parse_ebooks_str("ebooks.json", text).unwrap_err();

        assert!(matches!(err, CatalogError::ParseError { record: 1, .. }));
    }

    #[test]
    fn test_top_level_must_be_array() {
        let err = parse_sections_str("sections.json", r#"{"_id": "s1"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { record: 0, .. }));

        let err = parse_sections_str("sections.json", "not json").unwrap_err();
        assert!(matches!(err, CatalogError::JsonError { .. }));
    }
}
