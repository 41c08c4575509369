//! Documentation page catalog.
//!
//! Each page lives in its own `dNNN_*` module: a category enum, a zero-sized
//! page type implementing [`DocPage`] and the static panel content.

pub mod d001_queries;
pub mod d002_schema;
pub mod d003_joins;
pub mod d004_aggregation;
pub mod validation;

pub use d001_queries::{QueriesPage, QueryLevel};
pub use d002_schema::{SchemaPage, SchemaTopic};
pub use d003_joins::{JoinKind, JoinsPage};
pub use d004_aggregation::{AggregationPage, AggregationTopic};
pub use validation::{validate_catalog, validate_page, CatalogError};

use crate::shared::tabbed_view::TabCategory;

/// Route prefix shared by every documentation page.
pub const DOCS_PREFIX: &str = "/docs";

/// Every documentation page the site knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocPageKey {
    Queries,
    Schema,
    Joins,
    Aggregation,
}

impl DocPageKey {
    pub const ALL: [DocPageKey; 4] = [
        DocPageKey::Queries,
        DocPageKey::Schema,
        DocPageKey::Joins,
        DocPageKey::Aggregation,
    ];

    /// Route segment after `/docs/`.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Queries => "queries",
            Self::Schema => "schema",
            Self::Joins => "joins",
            Self::Aggregation => "aggregation",
        }
    }

    pub fn path(&self) -> String {
        format!("{}/{}", DOCS_PREFIX, self.slug())
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Queries => "Querying data",
            Self::Schema => "Schema design",
            Self::Joins => "Joining tables",
            Self::Aggregation => "Aggregation",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Queries => "From a plain SELECT to recursive and lateral queries",
            Self::Schema => "Tables, indexes and the constraints that keep data honest",
            Self::Joins => "Combining rows from several tables",
            Self::Aggregation => "Summarising rows with GROUP BY, window functions and rollups",
        }
    }

    /// Icon name understood by the frontend icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Queries => "search",
            Self::Schema => "database",
            Self::Joins => "link",
            Self::Aggregation => "bar-chart",
        }
    }

    pub fn summary(&self) -> PageSummary {
        match self {
            Self::Queries => PageSummary::of::<QueriesPage>(),
            Self::Schema => PageSummary::of::<SchemaPage>(),
            Self::Joins => PageSummary::of::<JoinsPage>(),
            Self::Aggregation => PageSummary::of::<AggregationPage>(),
        }
    }
}

/// A formatted example shown inside a content panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSample {
    pub title: &'static str,
    pub language: &'static str,
    pub code: &'static str,
}

impl CodeSample {
    pub const fn sql(title: &'static str, code: &'static str) -> Self {
        Self {
            title,
            language: "sql",
            code,
        }
    }
}

/// Static content rendered for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelContent {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub samples: &'static [CodeSample],
}

impl PanelContent {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.samples.is_empty()
    }
}

/// A documentation page with its own category enumeration.
pub trait DocPage: 'static {
    type Category: TabCategory;

    const KEY: DocPageKey;

    /// Content panel for `category`.
    fn panel(category: Self::Category) -> PanelContent;
}

/// Flattened page description used by the home index and the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub key: DocPageKey,
    pub path: String,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub categories: Vec<&'static str>,
}

impl PageSummary {
    pub fn of<P: DocPage>() -> Self {
        Self {
            key: P::KEY,
            path: P::KEY.path(),
            title: P::KEY.title(),
            subtitle: P::KEY.subtitle(),
            categories: P::Category::ALL.iter().map(|c| c.label()).collect(),
        }
    }
}

/// One summary per page, in navigation order.
pub fn catalog() -> Vec<PageSummary> {
    DocPageKey::ALL.iter().map(|k| k.summary()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for key in DocPageKey::ALL {
            assert_eq!(DocPageKey::from_slug(key.slug()), Some(key));
        }
        assert_eq!(DocPageKey::from_slug("missing"), None);
        assert_eq!(DocPageKey::from_slug(""), None);
    }

    #[test]
    fn test_paths_live_under_docs_prefix() {
        assert_eq!(DocPageKey::Queries.path(), "/docs/queries");
        for key in DocPageKey::ALL {
            assert!(key.path().starts_with("/docs/"));
        }
    }

    #[test]
    fn test_catalog_order_and_labels() {
        let pages = catalog();
        assert_eq!(pages.len(), DocPageKey::ALL.len());
        assert_eq!(pages[0].key, DocPageKey::Queries);
        assert_eq!(pages[0].categories, vec!["Basic", "Advanced", "Specialized"]);
        assert_eq!(pages[2].categories.len(), 2);
    }

    #[test]
    fn test_summary_key_matches_page() {
        for key in DocPageKey::ALL {
            assert_eq!(key.summary().key, key);
        }
    }
}
