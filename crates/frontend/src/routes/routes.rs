use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::pages::{DocRoute, HomePage, NotFoundPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn PageRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/docs/:slug") view=DocRoute />
        </Routes>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <PageRoutes /> }.into_any()
            />
        </Router>
    }
}
