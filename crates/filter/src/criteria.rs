//! Search criteria and their per-field update operations.
//!
//! Criteria are plain values: every update returns a new `SearchCriteria`
//! and leaves its input alone, so the presentation layer can keep the
//! previous value around and compare.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a criteria update names a field outside the fixed set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid search field: {field} (expected one of title, authorNames, sectionName)")]
pub struct InvalidFieldError {
    pub field: String,
}

/// The fields a catalog search can constrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Title,
    AuthorNames,
    SectionName,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [
        SearchField::Title,
        SearchField::AuthorNames,
        SearchField::SectionName,
    ];

    /// The field's external name
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::AuthorNames => "authorNames",
            SearchField::SectionName => "sectionName",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = InvalidFieldError;

    /// Exact, case-sensitive match on the external name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| InvalidFieldError {
                field: s.to_string(),
            })
    }
}

/// Per-field text patterns. An empty pattern places no constraint.
///
/// Patterns are stored raw, exactly as typed; folding happens when a
/// filter is built from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    pub title: String,
    pub author_names: String,
    pub section_name: String,
}

impl SearchCriteria {
    /// Criteria with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// The pattern currently set for `field`
    pub fn get(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::AuthorNames => &self.author_names,
            SearchField::SectionName => &self.section_name,
        }
    }

    /// Copy of these criteria with `field` set to `value`
    pub fn with_field(&self, field: SearchField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            SearchField::Title => next.title = value,
            SearchField::AuthorNames => next.author_names = value,
            SearchField::SectionName => next.section_name = value,
        }
        next
    }

    /// Copy of these criteria with `field` cleared
    pub fn without_field(&self, field: SearchField) -> Self {
        self.with_field(field, String::new())
    }

    /// True when no field constrains anything
    pub fn is_empty(&self) -> bool {
        SearchField::ALL.iter().all(|&field| self.get(field).is_empty())
    }

    /// Fields with a non-empty pattern, in declaration order
    pub fn active_fields(&self) -> Vec<SearchField> {
        SearchField::ALL
            .into_iter()
            .filter(|&field| !self.get(field).is_empty())
            .collect()
    }
}

/// Replace the pattern for the field named `field`.
///
/// Fails without producing criteria when `field` is not one of
/// `title`, `authorNames` or `sectionName`.
pub fn set_criteria_field(
    criteria: &SearchCriteria,
    field: &str,
    value: impl Into<String>,
) -> Result<SearchCriteria, InvalidFieldError> {
    let field: SearchField = field.parse()?;
    Ok(criteria.with_field(field, value))
}

/// Same as setting the field named `field` to the empty string
pub fn clear_criteria_field(
    criteria: &SearchCriteria,
    field: &str,
) -> Result<SearchCriteria, InvalidFieldError> {
    set_criteria_field(criteria, field, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in SearchField::ALL {
            assert_eq!(field.as_str().parse::<SearchField>().unwrap(), field);
        }
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        assert!("Title".parse::<SearchField>().is_err());
        assert!("authornames".parse::<SearchField>().is_err());
        assert!("bookName".parse::<SearchField>().is_err());
    }

    #[test]
    fn test_set_leaves_other_fields() {
        let criteria = SearchCriteria::new()
            .with_field(SearchField::Title, "react")
            .with_field(SearchField::SectionName, "prog");

        let next = set_criteria_field(&criteria, "authorNames", "Doe").unwrap();

        assert_eq!(next.title, "react");
        assert_eq!(next.author_names, "Doe");
        assert_eq!(next.section_name, "prog");
        // input untouched
        assert_eq!(criteria.author_names, "");
    }

    #[test]
    fn test_set_keeps_raw_value() {
        let next = set_criteria_field(&SearchCriteria::new(), "title", "  MiXeD ").unwrap();
        assert_eq!(next.title, "  MiXeD ");
    }

    #[test]
    fn test_clear_field() {
        let criteria = SearchCriteria::new().with_field(SearchField::Title, "node");
        let cleared = clear_criteria_field(&criteria, "title").unwrap();

        assert!(cleared.is_empty());
        assert_eq!(cleared, SearchCriteria::new());
    }

    #[test]
    fn test_invalid_field() {
        let criteria = SearchCriteria::new().with_field(SearchField::Title, "keep");

        let err = set_criteria_field(&criteria, "bogusField", "x").unwrap_err();
        assert_eq!(err.field, "bogusField");
        assert_eq!(criteria.title, "keep");

        assert!(clear_criteria_field(&criteria, "").is_err());
    }

    #[test]
    fn test_active_fields() {
        let criteria = SearchCriteria::new()
            .with_field(SearchField::SectionName, "x")
            .with_field(SearchField::Title, "y");

        assert_eq!(
            criteria.active_fields(),
            vec![SearchField::Title, SearchField::SectionName]
        );
        assert!(SearchCriteria::new().active_fields().is_empty());
    }
}
