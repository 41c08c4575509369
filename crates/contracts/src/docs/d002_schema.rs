use super::{CodeSample, DocPage, DocPageKey, PanelContent};
use crate::shared::tabbed_view::TabCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaTopic {
    Tables,
    Indexes,
    Constraints,
}

impl TabCategory for SchemaTopic {
    const ALL: &'static [Self] = &[Self::Tables, Self::Indexes, Self::Constraints];
    const DEFAULT: Self = Self::Tables;

    fn key(&self) -> &'static str {
        match self {
            Self::Tables => "tables",
            Self::Indexes => "indexes",
            Self::Constraints => "constraints",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Tables => "Tables",
            Self::Indexes => "Indexes",
            Self::Constraints => "Constraints",
        }
    }
}

pub struct SchemaPage;

impl DocPage for SchemaPage {
    type Category = SchemaTopic;

    const KEY: DocPageKey = DocPageKey::Schema;

    fn panel(category: SchemaTopic) -> PanelContent {
        match category {
            SchemaTopic::Tables => TABLES,
            SchemaTopic::Indexes => INDEXES,
            SchemaTopic::Constraints => CONSTRAINTS,
        }
    }
}

const TABLES: PanelContent = PanelContent {
    heading: "Creating and changing tables",
    paragraphs: &[
        "A table definition names each column and its type. Pick the narrowest type that fits the data: it documents intent and lets the database reject nonsense early.",
        "ALTER TABLE adds, renames or drops columns on a live table. Adding a nullable column without a default is cheap; rewriting every row is not.",
    ],
    samples: &[
        CodeSample::sql(
            "CREATE TABLE",
            "CREATE TABLE customers (id bigint PRIMARY KEY, name text NOT NULL, email text, created_at timestamptz DEFAULT now());",
        ),
        CodeSample::sql(
            "ALTER TABLE",
            "ALTER TABLE customers ADD COLUMN country char(2);",
        ),
    ],
};

const INDEXES: PanelContent = PanelContent {
    heading: "Indexes",
    paragraphs: &[
        "An index trades write speed and disk space for faster lookups. Index the columns that appear in WHERE, JOIN and ORDER BY clauses of frequent queries.",
        "Column order matters in a composite index: it serves lookups on a prefix of its columns, not on the columns further right alone.",
    ],
    samples: &[
        CodeSample::sql(
            "Composite index",
            "CREATE INDEX orders_customer_placed_idx ON orders (customer_id, placed_at);",
        ),
        CodeSample::sql(
            "Partial index",
            "CREATE INDEX orders_open_idx ON orders (placed_at) WHERE status = 'open';",
        ),
    ],
};

const CONSTRAINTS: PanelContent = PanelContent {
    heading: "Constraints",
    paragraphs: &[
        "Constraints state the rules the data must obey. The database enforces them on every write, so application bugs cannot slip invalid rows past them.",
    ],
    samples: &[
        CodeSample::sql(
            "Foreign key and check",
            "CREATE TABLE orders (id bigint PRIMARY KEY, customer_id bigint NOT NULL REFERENCES customers (id), total numeric(12, 2) CHECK (total >= 0));",
        ),
        CodeSample::sql(
            "Unique constraint",
            "ALTER TABLE customers ADD CONSTRAINT customers_email_key UNIQUE (email);",
        ),
    ],
};
