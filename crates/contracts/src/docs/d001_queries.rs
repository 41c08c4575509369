use super::{CodeSample, DocPage, DocPageKey, PanelContent};
use crate::shared::tabbed_view::TabCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryLevel {
    Basic,
    Advanced,
    Specialized,
}

impl TabCategory for QueryLevel {
    const ALL: &'static [Self] = &[Self::Basic, Self::Advanced, Self::Specialized];
    const DEFAULT: Self = Self::Basic;

    fn key(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
            Self::Specialized => "specialized",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Advanced => "Advanced",
            Self::Specialized => "Specialized",
        }
    }
}

pub struct QueriesPage;

impl DocPage for QueriesPage {
    type Category = QueryLevel;

    const KEY: DocPageKey = DocPageKey::Queries;

    fn panel(category: QueryLevel) -> PanelContent {
        match category {
            QueryLevel::Basic => BASIC,
            QueryLevel::Advanced => ADVANCED,
            QueryLevel::Specialized => SPECIALIZED,
        }
    }
}

const BASIC: PanelContent = PanelContent {
    heading: "Selecting, filtering and sorting",
    paragraphs: &[
        "Every query starts with SELECT. List the columns you need instead of reaching for *, so the query keeps working when the table grows new columns.",
        "WHERE narrows the rows before they are returned, ORDER BY fixes their order and LIMIT caps how many come back.",
    ],
    samples: &[
        CodeSample::sql(
            "Columns and filters",
            "SELECT id, name, email FROM customers WHERE country = 'NL' AND active = true ORDER BY name LIMIT 20;",
        ),
        CodeSample::sql(
            "Pattern matching",
            "SELECT title FROM books WHERE title LIKE 'The %' ORDER BY title;",
        ),
    ],
};

const ADVANCED: PanelContent = PanelContent {
    heading: "Subqueries and common table expressions",
    paragraphs: &[
        "A subquery computes an intermediate result inline. When the same intermediate result is needed more than once, name it with a WITH clause.",
        "Common table expressions are evaluated once per statement and read top to bottom, which keeps long queries readable.",
    ],
    samples: &[
        CodeSample::sql(
            "Correlated subquery",
            "SELECT name FROM customers c WHERE EXISTS (SELECT 1 FROM orders o WHERE o.customer_id = c.id AND o.total > 500);",
        ),
        CodeSample::sql(
            "WITH clause",
            "WITH recent AS (SELECT customer_id, total FROM orders WHERE placed_at > now() - interval '30 days') SELECT customer_id, SUM(total) AS spent FROM recent GROUP BY customer_id;",
        ),
    ],
};

const SPECIALIZED: PanelContent = PanelContent {
    heading: "Recursive and lateral queries",
    paragraphs: &[
        "WITH RECURSIVE walks hierarchical data such as category trees or org charts: an anchor query seeds the result and the recursive part joins back onto it until no new rows appear.",
        "A LATERAL subquery may reference columns of the tables listed before it, which makes top-N-per-group queries straightforward.",
    ],
    samples: &[
        CodeSample::sql(
            "Walking a tree",
            "WITH RECURSIVE tree AS (SELECT id, parent_id, name FROM categories WHERE parent_id IS NULL UNION ALL SELECT c.id, c.parent_id, c.name FROM categories c JOIN tree t ON c.parent_id = t.id) SELECT * FROM tree;",
        ),
        CodeSample::sql(
            "Latest three orders per customer",
            "SELECT c.name, o.total FROM customers c CROSS JOIN LATERAL (SELECT total FROM orders WHERE customer_id = c.id ORDER BY placed_at DESC LIMIT 3) o;",
        ),
    ],
};
