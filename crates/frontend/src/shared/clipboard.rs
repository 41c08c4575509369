//! Clipboard access for the copy buttons on code samples.

use wasm_bindgen_futures::spawn_local;

/// Write `text` to the system clipboard and run `on_success` once it landed.
///
/// Failures (no window, permission denied) are logged and otherwise ignored.
pub fn copy_to_clipboard<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            log::warn!("clipboard: no window available");
            return;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_success(),
            Err(e) => log::warn!("clipboard: write failed: {:?}", e),
        }
    });
}
