//! PageFrame: standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`         : `"{page}--{kind}"`, e.g. `"queries--doc"`
//!   - `data-page`  : the page kind, see [`PageKind`]

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Topic index at `/`.
    Home,
    /// A tabbed documentation page.
    Doc,
    /// Fallback for unknown routes.
    Missing,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Doc => "doc",
            PageKind::Missing => "missing",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            PageKind::Home => "page page--home",
            PageKind::Doc => "page page--doc",
            PageKind::Missing => "page page--missing",
        }
    }
}

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// Entity part of the id, e.g. the page slug.
    page_id: &'static str,
    kind: PageKind,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=format!("{}--{}", page_id, kind.as_str())
            class=kind.class()
            data-page=kind.as_str()
        >
            {children()}
        </div>
    }
}
