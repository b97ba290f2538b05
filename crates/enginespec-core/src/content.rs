//! Content catalog: engine pages loaded from JSON.
//!
//! ```json
//! {
//!   "pages": [{
//!     "slug": "bmw-n47",
//!     "name": "BMW N47 2.0 Diesel",
//!     "summary": "...",
//!     "sections": [
//!       {"title": "Specifications", "icon": "specs",
//!        "body": {"kind": "table", "mode": "tabular", "rows": [...]}}
//!     ]
//!   }]
//! }
//! ```
//!
//! Every table is built (and its schema validated) while loading, so
//! renderers only ever see well-formed [`Table`](crate::Table)s.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ContentError, ContentResult};
use crate::section::{RawSection, Section};

/// Sample catalog compiled into the crate
pub const BUNDLED_CATALOG: &str = include_str!("../content/engines.json");

#[derive(Clone, Debug, PartialEq)]
pub struct EnginePage {
    pub slug: String,
    pub name: String,
    pub summary: String,
    pub sections: Vec<Section>,
}

impl EnginePage {
    pub fn table_count(&self) -> usize {
        self.sections.iter().filter(|s| s.table().is_some()).count()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pages: Vec<EnginePage>,
}

#[derive(Deserialize)]
struct RawCatalog {
    pages: Vec<RawPage>,
}

#[derive(Deserialize)]
struct RawPage {
    slug: String,
    name: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    sections: Vec<RawSection>,
}

impl Catalog {
    /// Parse and validate a catalog
    pub fn from_json_str(json: &str) -> ContentResult<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        let mut pages = Vec::with_capacity(raw.pages.len());
        for page in raw.pages {
            if !seen.insert(page.slug.clone()) {
                return Err(ContentError::DuplicateSlug(page.slug));
            }

            let mut sections = Vec::with_capacity(page.sections.len());
            for raw_section in page.sections {
                let title = raw_section.title.clone();
                let section = raw_section.build().map_err(|source| ContentError::Table {
                    page: page.slug.clone(),
                    section: title,
                    source,
                })?;
                sections.push(section);
            }

            pages.push(EnginePage {
                slug: page.slug,
                name: page.name,
                summary: page.summary,
                sections,
            });
        }

        tracing::debug!(pages = pages.len(), "catalog loaded");
        Ok(Self { pages })
    }

    /// Read and parse a catalog file
    pub fn load(path: impl AsRef<Path>) -> ContentResult<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading catalog");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The sample catalog shipped with the crate
    pub fn bundled() -> ContentResult<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    pub fn pages(&self) -> &[EnginePage] {
        &self.pages
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, slug: &str) -> ContentResult<&EnginePage> {
        self.pages
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ContentError::PageNotFound(slug.to_string()))
    }

    pub fn table_count(&self) -> usize {
        self.pages.iter().map(EnginePage::table_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionBody;
    use crate::error::TableError;

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.table_count() > 0);
        let first = &catalog.pages()[0];
        assert!(catalog.page(&first.slug).is_ok());
    }

    #[test]
    fn bundled_catalog_has_citations() {
        let catalog = Catalog::bundled().unwrap();
        let cited = catalog
            .pages()
            .iter()
            .flat_map(|p| p.sections.iter())
            .filter_map(|s| s.table())
            .any(|(table, _)| table.has_citation());
        assert!(cited);
    }

    #[test]
    fn duplicate_slug_rejected() {
        let json = r#"{"pages": [
            {"slug": "a", "name": "A"},
            {"slug": "a", "name": "A again"}
        ]}"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug(ref s) if s == "a"));
    }

    #[test]
    fn table_error_names_page_and_section() {
        let json = r#"{"pages": [{"slug": "n47", "name": "N47", "sections": [
            {"title": "Specs", "body": {"kind": "table",
                "columns": [{"name": "source", "role": "citation"}, {"name": "value"}],
                "rows": []}}
        ]}]}"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        match err {
            ContentError::Table {
                page,
                section,
                source,
            } => {
                assert_eq!(page, "n47");
                assert_eq!(section, "Specs");
                assert_eq!(source, TableError::CitationNotLast("source".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = Catalog::from_json_str("{\"pages\": [").unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }

    #[test]
    fn unknown_page_is_not_found() {
        let catalog = Catalog::from_json_str(r#"{"pages": []}"#).unwrap();
        assert!(matches!(catalog.page("x"), Err(ContentError::PageNotFound(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"pages": [{"slug": "m57", "name": "M57", "sections": [
                {"title": "Notes", "body": {"kind": "unlabeled_list", "items": ["Robust"]}}
            ]}]}"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        let page = catalog.page("m57").unwrap();
        assert!(matches!(page.sections[0].body, SectionBody::UnlabeledList(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Catalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, ContentError::Io(_)));
    }
}
