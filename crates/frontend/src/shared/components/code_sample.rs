use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::icons::icon;
use crate::shared::sql_format::{format_sql, highlight_sql};
use contracts::docs::CodeSample;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

/// How long the "Copied" label stays after a successful copy.
const COPIED_FEEDBACK_MS: u32 = 1500;

/// Formatted code block with a copy button.
#[component]
pub fn CodeSampleView(sample: CodeSample) -> impl IntoView {
    let copied = RwSignal::new(false);
    let plain = format_sql(sample.code);
    let html = if sample.language == "sql" {
        highlight_sql(sample.code)
    } else {
        crate::shared::sql_format::html_escape(sample.code)
    };

    let on_copy = move |_| {
        copy_to_clipboard(&plain, move || {
            copied.set(true);
            Timeout::new(COPIED_FEEDBACK_MS, move || copied.set(false)).forget();
        });
    };

    view! {
        <figure class="code-sample" data-language=sample.language>
            <figcaption class="code-sample__header">
                <span class="code-sample__title">{sample.title}</span>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=on_copy
                >
                    {icon("copy")}
                    {move || if copied.get() { "Copied" } else { "Copy" }}
                </Button>
            </figcaption>
            <pre class="code-sample__body"><code inner_html=html></code></pre>
        </figure>
    }
}
