//! Session plumbing for the protected views.
//!
//! `App` owns the `AuthSession` and hands it down through a Yew context
//! together with the callback used to record a successful verification. The
//! token itself comes from `localStorage["auth"]`, written by the login flow
//! as `{ "token": "..." }`.

use common::auth::AuthSession;
use serde::Deserialize;
use yew::Callback;

const STORAGE_KEY: &str = "auth";

#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub session: AuthSession,
    /// Records that the given token passed verification.
    pub on_verified: Callback<String>,
}

#[derive(Deserialize)]
struct StoredAuth {
    #[serde(default)]
    token: Option<String>,
}

/// Token saved by the login flow, if any.
pub fn stored_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    match serde_json::from_str::<StoredAuth>(&raw) {
        Ok(stored) => stored.token,
        Err(e) => {
            gloo_console::warn!(format!("Ignoring unreadable stored auth: {}", e));
            None
        }
    }
}

pub fn clear_stored_auth() {
    if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
        storage.remove_item(STORAGE_KEY).ok();
    }
}
