//! Catalog building and lookup logic.
//!
//! - Load the catalog from the CSV snapshot
//! - Exact (case-insensitive) title lookup, used as the query fallback
//! - Substring title search, the non-scoring lookup path
//! - The overview subset that takes part in similarity scoring

use crate::error::Result;
use crate::parser;
use crate::types::{Catalog, CatalogIndex, MovieRecord};
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load the movie catalog from a CSV snapshot.
    ///
    /// This is the main entry point for loading data. A missing file is an
    /// error; callers treat it as fatal at startup.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);

        let records = parser::parse_catalog(path)?;
        let catalog = Catalog::from_records(records);

        info!(
            "Loaded {} movies ({} with an overview)",
            catalog.len(),
            catalog.overview_count()
        );
        Ok(catalog)
    }

    /// Find the first record whose title equals `title`, ignoring case.
    pub fn find_by_title(&self, title: &str) -> Option<(CatalogIndex, &MovieRecord)> {
        let wanted = title.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .find(|(_, record)| record.title.to_lowercase() == wanted)
    }

    /// Case-insensitive substring search over titles, in catalog order.
    ///
    /// An empty query matches every record.
    pub fn search_titles(&self, query: &str) -> Vec<(CatalogIndex, &MovieRecord)> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// The overviews that take part in similarity scoring, paired with their
    /// catalog positions, in catalog order.
    pub fn overview_documents(&self) -> Vec<(CatalogIndex, &str)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.has_overview())
            .map(|(index, record)| (index, record.overview.as_str()))
            .collect()
    }

    /// Number of records with a non-empty overview
    pub fn overview_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_overview()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataLoadError;
    use std::io::Write;

    fn sample_catalog() -> Catalog {
        Catalog::from_records(vec![
            MovieRecord::new("The Dark Knight", "Batman fights the Joker."),
            MovieRecord::new("Dark Water", ""),
            MovieRecord::new("Inception", "A thief steals secrets through dreams."),
            MovieRecord::new("the dark knight", "Duplicate title, lower case."),
        ])
    }

    #[test]
    fn test_find_by_title_ignores_case() {
        let catalog = sample_catalog();

        let (index, record) = catalog.find_by_title("THE DARK KNIGHT").unwrap();
        assert_eq!(index, 0);
        assert_eq!(record.title, "The Dark Knight");

        assert!(catalog.find_by_title("Dark").is_none());
        assert!(catalog.find_by_title("Memento").is_none());
    }

    #[test]
    fn test_search_titles_substring() {
        let catalog = sample_catalog();

        let hits: Vec<CatalogIndex> = catalog.search_titles("dark").iter().map(|(i, _)| *i).collect();
        assert_eq!(hits, vec![0, 1, 3]);

        assert!(catalog.search_titles("zzz").is_empty());
        assert_eq!(catalog.search_titles("").len(), 4);
    }

    #[test]
    fn test_overview_documents_skip_empty() {
        let catalog = sample_catalog();

        let docs = catalog.overview_documents();
        let indices: Vec<CatalogIndex> = docs.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 2, 3]);
        assert_eq!(docs[1].1, "A thief steals secrets through dreams.");
        assert_eq!(catalog.overview_count(), 3);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "original_title,overview,genres,production_companies,original_language,release_date,revenue"
        )
        .unwrap();
        writeln!(file, "Heat,\"A cop chases a thief, in LA.\",[],[],en,1995-12-15,187436818").unwrap();
        writeln!(file, "Ronin,,[],[],en,1998-09-12,0").unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.overview_count(), 1);
        assert_eq!(catalog.get(0).unwrap().overview, "A cop chases a thief, in LA.");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load_from_file(Path::new("no/such/catalog.csv"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_dataset() {
        // This test requires the actual dataset file
        // Place tmdb_5000_movies.csv in ../../data/
        let path = Path::new("../../data/tmdb_5000_movies.csv");

        if path.exists() {
            let catalog = Catalog::load_from_file(path).unwrap();
            assert_eq!(catalog.len(), 4803);
            assert!(catalog.find_by_title("Avatar").is_some());
        }
    }
}
