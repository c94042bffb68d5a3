use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use super::CatalogEntry;

/// An ordered, immutable collection of catalog entries.
///
/// Titles are unique: when the source contains the same title more than
/// once, the first occurrence wins. Entries with an empty title or empty
/// tags are never admitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from entries in source order, dropping incomplete
    /// entries and duplicate titles.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for entry in entries {
            if !entry.is_complete() {
                continue;
            }
            if seen.contains(&entry.title) {
                log::debug!("Dropping duplicate title {:?}", entry.title);
                continue;
            }
            seen.insert(entry.title.clone());
            kept.push(entry);
        }

        Self { entries: kept }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at a catalog position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&CatalogEntry> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// All titles, sorted and distinct, for presenting a selection list.
    #[must_use]
    pub fn sorted_titles(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.title.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted titles containing `query`, compared case-insensitively.
    ///
    /// An empty query matches every title.
    #[must_use]
    pub fn search_titles(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.sorted_titles()
            .into_iter()
            .filter(|title| title.to_lowercase().contains(&needle))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogEntry>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_entries(vec![
            CatalogEntry::new("Narcos", "Crime TV Shows, TV Dramas"),
            CatalogEntry::new("Dark", "TV Dramas, TV Mysteries"),
            CatalogEntry::new("Narcos", "Docuseries"),
            CatalogEntry::new("", "Comedies"),
            CatalogEntry::new("Ozark", ""),
            CatalogEntry::new("Mindhunter", "Crime TV Shows"),
        ])
    }

    #[test]
    fn test_from_entries_drops_incomplete() {
        let catalog = sample();
        assert!(catalog.iter().all(CatalogEntry::is_complete));
        assert!(catalog.iter().all(|e| e.title != "Ozark"));
    }

    #[test]
    fn test_from_entries_first_duplicate_wins() {
        let catalog = sample();
        assert_eq!(catalog.len(), 3);
        let narcos = catalog.get(0).unwrap();
        assert_eq!(narcos.title, "Narcos");
        assert_eq!(narcos.tags, "Crime TV Shows, TV Dramas");
    }

    #[test]
    fn test_source_order_preserved() {
        let catalog = sample();
        let titles: Vec<&str> = catalog.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Narcos", "Dark", "Mindhunter"]);
    }

    #[test]
    fn test_sorted_titles() {
        assert_eq!(sample().sorted_titles(), vec!["Dark", "Mindhunter", "Narcos"]);
    }

    #[test]
    fn test_search_titles_case_insensitive() {
        let catalog = sample();
        assert_eq!(catalog.search_titles("NAR"), vec!["Narcos"]);
        assert_eq!(catalog.search_titles("n"), vec!["Mindhunter", "Narcos"]);
        assert_eq!(catalog.search_titles("").len(), 3);
        assert!(catalog.search_titles("zzz").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
        assert!(catalog.sorted_titles().is_empty());
    }
}
