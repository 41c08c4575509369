use super::{CodeSample, DocPage, DocPageKey, PanelContent};
use crate::shared::tabbed_view::TabCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Inner,
    Outer,
}

impl TabCategory for JoinKind {
    const ALL: &'static [Self] = &[Self::Inner, Self::Outer];
    const DEFAULT: Self = Self::Inner;

    fn key(&self) -> &'static str {
        match self {
            Self::Inner => "inner",
            Self::Outer => "outer",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Inner => "Inner joins",
            Self::Outer => "Outer joins",
        }
    }
}

pub struct JoinsPage;

impl DocPage for JoinsPage {
    type Category = JoinKind;

    const KEY: DocPageKey = DocPageKey::Joins;

    fn panel(category: JoinKind) -> PanelContent {
        match category {
            JoinKind::Inner => INNER,
            JoinKind::Outer => OUTER,
        }
    }
}

const INNER: PanelContent = PanelContent {
    heading: "Inner joins",
    paragraphs: &[
        "An inner join keeps only the row pairs that satisfy the ON condition. Rows without a partner on the other side disappear from the result.",
    ],
    samples: &[CodeSample::sql(
        "Orders with their customer",
        "SELECT o.id, c.name, o.total FROM orders o INNER JOIN customers c ON c.id = o.customer_id;",
    )],
};

const OUTER: PanelContent = PanelContent {
    heading: "Outer joins",
    paragraphs: &[
        "LEFT JOIN keeps every row of the left table and fills the right side with NULL where no partner exists. It is the usual way to find rows that have no match.",
        "FULL JOIN keeps unmatched rows from both sides.",
    ],
    samples: &[
        CodeSample::sql(
            "Customers without orders",
            "SELECT c.name FROM customers c LEFT JOIN orders o ON o.customer_id = c.id WHERE o.id IS NULL;",
        ),
        CodeSample::sql(
            "Reconciling two lists",
            "SELECT a.sku, b.sku FROM warehouse_a a FULL JOIN warehouse_b b ON a.sku = b.sku WHERE a.sku IS NULL OR b.sku IS NULL;",
        ),
    ],
};
