//! Browser-side utilities shared by the admin components.
//!
//! - **User Feedback**: temporary "toast" notifications for the outcome of
//!   every request, green for success and red for errors.
//! - **Confirmation**: the blocking yes/no prompt shown before a deletion.

use common::admin::soil::Notice;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How long a toast stays on screen, in milliseconds.
const TOAST_LIFETIME_MS: u32 = 3000;

/// Displays a temporary toast notification at the bottom of the page.
///
/// The element is styled inline so it needs no stylesheet, appended to
/// `<body>`, and removed after `TOAST_LIFETIME_MS`. The message is set as text,
/// never as HTML, since it can carry server-provided content.
pub fn show_toast(notice: &Notice) {
    let (message, background) = match notice {
        Notice::Success(message) => (message, "rgba(16, 185, 129, 0.95)"),
        Notice::Error(message) => (message, "rgba(220, 38, 38, 0.95)"),
    };
    if message.is_empty() {
        return;
    }

    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message.as_str()));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Shows the browser's confirmation dialog. Anything but an explicit "OK",
/// including a missing window, counts as a refusal.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
