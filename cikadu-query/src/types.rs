//! Core types: the [`Record`] trait and per-listing [`FieldMapping`].

use serde::{Deserialize, Serialize};

/// One displayable content item (a news article, a business listing).
///
/// Implementors expose their free-text fields by name so one engine can
/// serve listings with different shapes. Records are never mutated by the
/// engine.
pub trait Record {
    /// Unique, stable identifier.
    fn id(&self) -> &str;

    /// Returns the named free-text field, or `None` if the record has no
    /// field with that name.
    fn field(&self, name: &str) -> Option<&str>;

    /// Category used for exact-match filtering. Records without one only
    /// pass the "all" filter.
    fn category(&self) -> Option<&str>;

    /// ISO-8601 creation timestamp.
    fn created_at(&self) -> &str;
}

/// Which record fields a listing searches and sorts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Fields matched against the search term; any one matching is enough.
    pub search_fields: Vec<String>,
    /// Field used by [`SortKey::PrimaryAscending`](crate::SortKey::PrimaryAscending).
    pub primary_field: String,
    /// Field used by [`SortKey::SecondaryAscending`](crate::SortKey::SecondaryAscending).
    pub secondary_field: String,
}

impl FieldMapping {
    /// Build a mapping from borrowed field names.
    pub fn new(search_fields: &[&str], primary_field: &str, secondary_field: &str) -> Self {
        Self {
            search_fields: search_fields.iter().map(|f| (*f).to_owned()).collect(),
            primary_field: primary_field.to_owned(),
            secondary_field: secondary_field.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_mapping_new_copies_names() {
        let mapping = FieldMapping::new(&["name", "description"], "name", "location");
        assert_eq!(mapping.search_fields, vec!["name", "description"]);
        assert_eq!(mapping.primary_field, "name");
        assert_eq!(mapping.secondary_field, "location");
    }

    #[test]
    fn field_mapping_serde_round_trip() {
        let mapping = FieldMapping::new(&["title", "excerpt"], "title", "author");
        let json = serde_json::to_string(&mapping).expect("serialize");
        let decoded: FieldMapping = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, mapping);
    }
}
