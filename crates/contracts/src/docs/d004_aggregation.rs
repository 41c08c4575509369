use super::{CodeSample, DocPage, DocPageKey, PanelContent};
use crate::shared::tabbed_view::TabCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationTopic {
    Grouping,
    Window,
    Filtering,
    Rollup,
}

impl TabCategory for AggregationTopic {
    const ALL: &'static [Self] = &[Self::Grouping, Self::Window, Self::Filtering, Self::Rollup];
    const DEFAULT: Self = Self::Grouping;

    fn key(&self) -> &'static str {
        match self {
            Self::Grouping => "grouping",
            Self::Window => "window",
            Self::Filtering => "filtering",
            Self::Rollup => "rollup",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Grouping => "GROUP BY",
            Self::Window => "Window functions",
            Self::Filtering => "HAVING & FILTER",
            Self::Rollup => "ROLLUP",
        }
    }
}

pub struct AggregationPage;

impl DocPage for AggregationPage {
    type Category = AggregationTopic;

    const KEY: DocPageKey = DocPageKey::Aggregation;

    fn panel(category: AggregationTopic) -> PanelContent {
        match category {
            AggregationTopic::Grouping => GROUPING,
            AggregationTopic::Window => WINDOW,
            AggregationTopic::Filtering => FILTERING,
            AggregationTopic::Rollup => ROLLUP,
        }
    }
}

const GROUPING: PanelContent = PanelContent {
    heading: "Grouping rows",
    paragraphs: &[
        "GROUP BY collapses rows that share the same values into one output row. Every selected column must either be grouped or wrapped in an aggregate such as COUNT, SUM or AVG.",
    ],
    samples: &[CodeSample::sql(
        "Revenue per country",
        "SELECT c.country, COUNT(*) AS orders, SUM(o.total) AS revenue FROM orders o JOIN customers c ON c.id = o.customer_id GROUP BY c.country ORDER BY revenue DESC;",
    )],
};

const WINDOW: PanelContent = PanelContent {
    heading: "Window functions",
    paragraphs: &[
        "A window function computes a value over related rows without collapsing them. PARTITION BY chooses the related rows, ORDER BY inside OVER sets their order.",
    ],
    samples: &[
        CodeSample::sql(
            "Running total",
            "SELECT placed_at, total, SUM(total) OVER (ORDER BY placed_at) AS running_total FROM orders;",
        ),
        CodeSample::sql(
            "Rank inside a partition",
            "SELECT customer_id, total, rank() OVER (PARTITION BY customer_id ORDER BY total DESC) AS position FROM orders;",
        ),
    ],
};

const FILTERING: PanelContent = PanelContent {
    heading: "Filtering groups",
    paragraphs: &[
        "WHERE filters rows before grouping; HAVING filters the groups afterwards. A FILTER clause restricts the rows a single aggregate sees.",
    ],
    samples: &[CodeSample::sql(
        "Loyal customers",
        "SELECT customer_id, COUNT(*) AS orders, COUNT(*) FILTER (WHERE total > 100) AS large_orders FROM orders GROUP BY customer_id HAVING COUNT(*) >= 5;",
    )],
};

const ROLLUP: PanelContent = PanelContent {
    heading: "Subtotals with ROLLUP",
    paragraphs: &[
        "ROLLUP adds subtotal rows for each prefix of the grouping columns plus a grand total. The rolled-up columns are NULL in the subtotal rows.",
    ],
    samples: &[CodeSample::sql(
        "Revenue per year and month",
        "SELECT extract(year FROM placed_at) AS year, extract(month FROM placed_at) AS month, SUM(total) AS revenue FROM orders GROUP BY ROLLUP (1, 2) ORDER BY 1, 2;",
    )],
};
