//! Sidebar with one entry per documentation page

use contracts::docs::{catalog, PageSummary};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// `pathname` names the same page as `path`, ignoring a trailing slash.
fn is_active(pathname: &str, path: &str) -> bool {
    let trim = |p: &str| -> String {
        match p.trim_end_matches('/') {
            "" => "/".to_string(),
            rest => rest.to_string(),
        }
    };
    trim(pathname) == trim(path)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <div class="app-sidebar__content">
            <a
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || is_active(&pathname.get(), "/")
                href="/"
            >
                <div class="app-sidebar__item-content">
                    {icon("book-open")}
                    <span>"Overview"</span>
                </div>
            </a>
            {catalog()
                .into_iter()
                .map(|page: PageSummary| {
                    let path = StoredValue::new(page.path.clone());
                    view! {
                        <a
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                path.with_value(|p| is_active(&pathname.get(), p))
                            }
                            href=page.path
                        >
                            <div class="app-sidebar__item-content">
                                {icon(page.key.icon())}
                                <span>{page.title}</span>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_still_active() {
        assert!(is_active("/docs/queries", "/docs/queries"));
        assert!(is_active("/docs/queries/", "/docs/queries"));
        assert!(is_active("/", "/"));
    }

    #[test]
    fn test_other_pages_inactive() {
        assert!(!is_active("/docs/queries", "/"));
        assert!(!is_active("/docs/queries", "/docs/schema"));
        assert!(!is_active("/docs/queries-old", "/docs/queries"));
    }
}
