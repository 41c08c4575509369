use super::view_model::TabbedViewVm;
use contracts::shared::tabbed_view::TabCategory;
use leptos::prelude::*;
use thaw::*;

/// Selector row: one button per category, the active one highlighted.
#[component]
pub fn TabBar<C: TabCategory>(vm: TabbedViewVm<C>) -> impl IntoView {
    view! {
        <div class="doc-tabs__bar" role="tablist">
            <Space>
                {C::ALL
                    .iter()
                    .copied()
                    .map(|category| {
                        view! {
                            <Button
                                appearance=move || {
                                    if vm.is_selected(category) {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                }
                                on_click=move |_| vm.select(category)
                            >
                                {category.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Space>
        </div>
    }
}

/// All panels are mounted once; only the active one lacks the hidden modifier.
#[component]
pub fn TabPanels<C, F>(vm: TabbedViewVm<C>, render: F) -> impl IntoView
where
    C: TabCategory,
    F: Fn(C) -> AnyView + 'static,
{
    view! {
        <div class="doc-tabs__panels">
            {C::ALL
                .iter()
                .copied()
                .map(|category| {
                    view! {
                        <section
                            id=format!("panel-{}", category.key())
                            class="doc-tabs__panel"
                            class:doc-tabs__panel--hidden=move || !vm.is_visible(category)
                            role="tabpanel"
                            data-tab=category.key()
                        >
                            {render(category)}
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
