//! Per-tab session identifier sent with every API request.
//!
//! The identifier lives in `sessionStorage`, so each browser tab works on its
//! own invoice lists and a reload keeps them.

use web_sys::{window, Storage};

pub const SESSION_HEADER: &str = "x-session-id";
const KEY_SESSION_ID: &str = "debtdesk_session_id";

thread_local! {
    static PAGE_SESSION_ID: String = generate_session_id();
}

fn storage() -> Option<Storage> {
    window()?.session_storage().ok().flatten()
}

fn generate_session_id() -> String {
    let random = (js_sys::Math::random() * u32::MAX as f64) as u32;
    let now = js_sys::Date::now() as u64;
    format!("{:x}-{:08x}", now, random)
}

/// Returns this tab's session identifier, creating one on first use.
pub fn session_id() -> String {
    let Some(storage) = storage() else {
        log::warn!("sessionStorage unavailable, using a per-page session");
        return PAGE_SESSION_ID.with(Clone::clone);
    };

    if let Ok(Some(id)) = storage.get_item(KEY_SESSION_ID) {
        return id;
    }

    let id = generate_session_id();
    if let Err(e) = storage.set_item(KEY_SESSION_ID, &id) {
        log::error!("Failed to store session id: {:?}", e);
    }
    log::info!("Started new session {}", id);
    id
}

/// Forgets the current identifier so the next request starts a new session.
pub fn reset_session_id() {
    if let Some(storage) = storage() {
        if let Err(e) = storage.remove_item(KEY_SESSION_ID) {
            log::error!("Failed to clear session id: {:?}", e);
        }
    }
}
