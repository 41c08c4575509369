//! Tabbed documentation pages.
//!
//! `render_doc_page` is the only place that maps a [`DocPageKey`] to its page
//! type; the match is exhaustive, so a new key cannot ship without a view.

use super::not_found::NotFoundPage;
use crate::shared::components::{CodeSampleView, PageHeader};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageKind};
use crate::shared::tabbed_view::{TabBar, TabPanels, TabbedViewVm};
use contracts::docs::{
    AggregationPage, DocPage, DocPageKey, JoinsPage, PanelContent, QueriesPage, SchemaPage,
};
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Route target for `/docs/:slug`.
#[component]
pub fn DocRoute() -> impl IntoView {
    let params = use_params_map();
    let key = Memo::new(move |_| {
        params.with(|p| p.get("slug").and_then(|slug| DocPageKey::from_slug(&slug)))
    });

    move || match key.get() {
        Some(key) => render_doc_page(key),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}

/// Render the page registered for `key`.
pub fn render_doc_page(key: DocPageKey) -> AnyView {
    match key {
        DocPageKey::Queries => doc_page::<QueriesPage>(),
        DocPageKey::Schema => doc_page::<SchemaPage>(),
        DocPageKey::Joins => doc_page::<JoinsPage>(),
        DocPageKey::Aggregation => doc_page::<AggregationPage>(),
    }
}

fn doc_page<P: DocPage>() -> AnyView {
    let key = P::KEY;
    let vm = TabbedViewVm::<P::Category>::new();

    log!("doc page created: {}", key.slug());
    on_cleanup(move || {
        log!("doc page destroyed: {}", key.slug());
    });

    view! {
        <PageFrame page_id=key.slug() kind=PageKind::Doc>
            <PageHeader title=key.title() subtitle=key.subtitle().to_string()>
                <a href="/" class="page-header__back">
                    {icon("home")}
                    <span>"All topics"</span>
                </a>
            </PageHeader>
            <div class="page__content doc-tabs">
                <TabBar vm=vm />
                <TabPanels
                    vm=vm
                    render=|category: P::Category| {
                        view! { <PanelBody content=P::panel(category) /> }.into_any()
                    }
                />
            </div>
        </PageFrame>
    }
    .into_any()
}

#[component]
fn PanelBody(content: PanelContent) -> impl IntoView {
    view! {
        <article class="doc-panel">
            <h2 class="doc-panel__heading">{content.heading}</h2>
            {content
                .paragraphs
                .iter()
                .map(|text| view! { <p class="doc-panel__text">{*text}</p> })
                .collect_view()}
            {content
                .samples
                .iter()
                .map(|sample| view! { <CodeSampleView sample=*sample /> })
                .collect_view()}
        </article>
    }
}
