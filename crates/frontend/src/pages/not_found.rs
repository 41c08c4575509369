use crate::shared::components::PageHeader;
use crate::shared::page_frame::{PageFrame, PageKind};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not-found" kind=PageKind::Missing>
            <PageHeader title="Page not found" subtitle="There is no topic at this address.".to_string() />
            <div class="page__content">
                <a href="/" class="page-header__back">"Back to all topics"</a>
            </div>
        </PageFrame>
    }
}
