//! Construction-time completeness checks for the page catalog.

use std::collections::HashSet;

use thiserror::Error;

use super::{AggregationPage, DocPage, DocPageKey, JoinsPage, QueriesPage, SchemaPage};
use crate::shared::tabbed_view::TabCategory;

/// Upper bound on tabs per page; wider selector rows stop fitting the header.
pub const MAX_CATEGORIES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("page '{page}' declares no categories")]
    EmptyCategories { page: &'static str },

    #[error(
        "page '{page}' declares {count} categories, at most {max} are allowed",
        max = MAX_CATEGORIES
    )]
    TooManyCategories { page: &'static str, count: usize },

    #[error("page '{page}' lists category '{key}' more than once")]
    DuplicateCategory {
        page: &'static str,
        key: &'static str,
    },

    #[error("page '{page}' defaults to '{key}', which is not one of its categories")]
    DefaultNotListed {
        page: &'static str,
        key: &'static str,
    },

    #[error("page '{page}' has no content for category '{key}'")]
    EmptyPanel {
        page: &'static str,
        key: &'static str,
    },

    #[error("slug '{slug}' is used by more than one page")]
    DuplicateSlug { slug: &'static str },

    #[error("slug '{slug}' does not resolve back to its page")]
    UnresolvableSlug { slug: &'static str },
}

/// Check a category enumeration on its own.
pub fn validate_categories<C: TabCategory>(page: &'static str) -> Result<(), CatalogError> {
    let count = C::ALL.len();
    if count == 0 {
        return Err(CatalogError::EmptyCategories { page });
    }
    if count > MAX_CATEGORIES {
        return Err(CatalogError::TooManyCategories { page, count });
    }

    let mut seen = HashSet::new();
    for category in C::ALL {
        if !seen.insert(category.key()) {
            return Err(CatalogError::DuplicateCategory {
                page,
                key: category.key(),
            });
        }
    }

    if !C::ALL.contains(&C::DEFAULT) {
        return Err(CatalogError::DefaultNotListed {
            page,
            key: C::DEFAULT.key(),
        });
    }

    Ok(())
}

/// Check that every selector control of `P` leads to a non-empty panel.
pub fn validate_page<P: DocPage>() -> Result<(), CatalogError> {
    let page = P::KEY.slug();
    validate_categories::<P::Category>(page)?;

    for category in P::Category::ALL {
        let panel = P::panel(*category);
        if panel.heading.trim().is_empty() || panel.is_empty() {
            return Err(CatalogError::EmptyPanel {
                page,
                key: category.key(),
            });
        }
    }

    Ok(())
}

/// Check every page plus the routing table built from their slugs.
pub fn validate_catalog() -> Result<(), CatalogError> {
    validate_page::<QueriesPage>()?;
    validate_page::<SchemaPage>()?;
    validate_page::<JoinsPage>()?;
    validate_page::<AggregationPage>()?;

    let mut slugs = HashSet::new();
    for key in DocPageKey::ALL {
        let slug = key.slug();
        if !slugs.insert(slug) {
            return Err(CatalogError::DuplicateSlug { slug });
        }
        if DocPageKey::from_slug(slug) != Some(key) {
            return Err(CatalogError::UnresolvableSlug { slug });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::{CodeSample, PanelContent};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Orphan {
        Listed,
        Forgotten,
    }

    impl TabCategory for Orphan {
        const ALL: &'static [Self] = &[Orphan::Listed];
        const DEFAULT: Self = Orphan::Forgotten;

        fn key(&self) -> &'static str {
            match self {
                Orphan::Listed => "listed",
                Orphan::Forgotten => "forgotten",
            }
        }

        fn label(&self) -> &'static str {
            self.key()
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Twin {
        A,
        B,
    }

    impl TabCategory for Twin {
        const ALL: &'static [Self] = &[Twin::A, Twin::B];
        const DEFAULT: Self = Twin::A;

        fn key(&self) -> &'static str {
            "same"
        }

        fn label(&self) -> &'static str {
            match self {
                Twin::A => "A",
                Twin::B => "B",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Wide {
        One,
        Two,
        Three,
        Four,
        Five,
    }

    impl TabCategory for Wide {
        const ALL: &'static [Self] = &[Wide::One, Wide::Two, Wide::Three, Wide::Four, Wide::Five];
        const DEFAULT: Self = Wide::One;

        fn key(&self) -> &'static str {
            match self {
                Wide::One => "one",
                Wide::Two => "two",
                Wide::Three => "three",
                Wide::Four => "four",
                Wide::Five => "five",
            }
        }

        fn label(&self) -> &'static str {
            self.key()
        }
    }

    struct HollowPage;

    impl DocPage for HollowPage {
        type Category = Twin;

        const KEY: DocPageKey = DocPageKey::Joins;

        fn panel(_category: Twin) -> PanelContent {
            PanelContent {
                heading: "Hollow",
                paragraphs: &[],
                samples: &[],
            }
        }
    }

    #[test]
    fn test_shipped_catalog_is_complete() {
        assert_eq!(validate_catalog(), Ok(()));
    }

    #[test]
    fn test_default_must_be_listed() {
        assert_eq!(
            validate_categories::<Orphan>("orphan"),
            Err(CatalogError::DefaultNotListed {
                page: "orphan",
                key: "forgotten"
            })
        );
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        assert_eq!(
            validate_categories::<Twin>("twin"),
            Err(CatalogError::DuplicateCategory {
                page: "twin",
                key: "same"
            })
        );
    }

    #[test]
    fn test_too_many_categories_rejected() {
        assert_eq!(
            validate_categories::<Wide>("wide"),
            Err(CatalogError::TooManyCategories {
                page: "wide",
                count: 5
            })
        );
    }

    #[test]
    fn test_empty_panel_rejected() {
        const FILLED: &[CodeSample] = &[CodeSample::sql("x", "SELECT 1;")];

        struct HollowQueries;
        impl DocPage for HollowQueries {
            type Category = crate::docs::QueryLevel;
            const KEY: DocPageKey = DocPageKey::Queries;
            fn panel(category: crate::docs::QueryLevel) -> PanelContent {
                match category {
                    crate::docs::QueryLevel::Advanced => PanelContent {
                        heading: "Advanced",
                        paragraphs: &[],
                        samples: &[],
                    },
                    _ => PanelContent {
                        heading: "Filled",
                        paragraphs: &[],
                        samples: FILLED,
                    },
                }
            }
        }

        assert_eq!(
            validate_page::<HollowQueries>(),
            Err(CatalogError::EmptyPanel {
                page: "queries",
                key: "advanced"
            })
        );
        assert!(matches!(
            validate_page::<HollowPage>(),
            Err(CatalogError::DuplicateCategory { .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_page() {
        let err = CatalogError::EmptyPanel {
            page: "schema",
            key: "indexes",
        };
        assert_eq!(err.to_string(), "page 'schema' has no content for category 'indexes'");
    }
}
