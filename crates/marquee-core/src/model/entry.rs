use serde::{Deserialize, Serialize};

/// A recommendable title and its category tags.
///
/// Tags are kept in their source form: free text, usually a comma-delimited
/// list of genre labels (e.g., "International TV Shows, TV Dramas").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display title, unique within a [`Catalog`](super::Catalog).
    pub title: String,

    /// Raw tag text.
    pub tags: String,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(title: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: tags.into(),
        }
    }

    /// Whether both the title and the tags carry a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new() {
        let entry = CatalogEntry::new("Dark", "TV Dramas, TV Mysteries");
        assert_eq!(entry.title, "Dark");
        assert_eq!(entry.tags, "TV Dramas, TV Mysteries");
    }

    #[test]
    fn test_entry_is_complete() {
        assert!(CatalogEntry::new("Dark", "Dramas").is_complete());
        assert!(!CatalogEntry::new("", "Dramas").is_complete());
        assert!(!CatalogEntry::new("Dark", "").is_complete());
    }
}
