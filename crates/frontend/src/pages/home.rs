use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageKind};
use contracts::docs::catalog;
use leptos::prelude::*;

/// Topic index: one card per documentation page.
#[component]
pub fn HomePage() -> impl IntoView {
    let pages = catalog();

    view! {
        <PageFrame page_id="index" kind=PageKind::Home>
            <PageHeader
                title="SQL Guide"
                subtitle="Short, runnable examples of SQL query and schema features".to_string()
            />
            <div class="page__content topic-grid">
                {pages
                    .into_iter()
                    .map(|page| {
                        view! {
                            <a class="topic-card" href=page.path.clone()>
                                <div class="topic-card__icon">{icon(page.key.icon())}</div>
                                <div class="topic-card__body">
                                    <h2 class="topic-card__title">{page.title}</h2>
                                    <p class="topic-card__subtitle">{page.subtitle}</p>
                                    <ul class="topic-card__tabs">
                                        {page
                                            .categories
                                            .iter()
                                            .map(|label| view! { <li>{*label}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                                <div class="topic-card__chevron">{icon("chevron-right")}</div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
