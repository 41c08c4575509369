use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use contracts::docs::validate_catalog;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    if let Err(e) = validate_catalog() {
        log::error!("documentation catalog is incomplete: {}", e);
    }

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
