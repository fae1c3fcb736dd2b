//! Browser storage.
//!
//! Tokens live in `localStorage` under `access_token` / `refresh_token`.
//! Page-to-page hand-offs (selected discussion, pending registration) use
//! `sessionStorage` and die with the tab.

use agora_client::{SessionStore, StoreError};
use agora_types::Session;
use serde::de::DeserializeOwned;
use serde::Serialize;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Discussion opened from the list page.
pub const SELECTED_DISCUSSION_KEY: &str = "selectedDiscussionId";
/// Registration form carried over to the developer page.
pub const PENDING_REGISTRATION_KEY: &str = "tempUserData";

fn unavailable(what: &str) -> StoreError {
    StoreError::Unavailable(format!("{what} is not available"))
}

fn js_error(err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Unavailable(format!("{err:?}"))
}

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| unavailable("localStorage"))
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// [`SessionStore`] over `localStorage`.
///
/// Holds no handle itself: `web_sys::Storage` is not `Send`, so the storage
/// object is looked up on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        let storage = local_storage()?;
        let access = storage.get_item(ACCESS_TOKEN_KEY).map_err(js_error)?;
        let refresh = storage.get_item(REFRESH_TOKEN_KEY).map_err(js_error)?;
        Ok(access.filter(|t| !t.is_empty()).map(|token| Session::new(token, refresh)))
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let storage = local_storage()?;
        storage.set_item(ACCESS_TOKEN_KEY, &session.access_token).map_err(js_error)?;
        match session.refresh_token.as_deref() {
            Some(refresh) => storage.set_item(REFRESH_TOKEN_KEY, refresh).map_err(js_error)?,
            None => storage.remove_item(REFRESH_TOKEN_KEY).map_err(js_error)?,
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let storage = local_storage()?;
        storage.remove_item(ACCESS_TOKEN_KEY).map_err(js_error)?;
        storage.remove_item(REFRESH_TOKEN_KEY).map_err(js_error)?;
        Ok(())
    }
}

pub fn session_get(key: &str) -> Option<String> {
    session_storage()?.get_item(key).ok().flatten()
}

pub fn session_set(key: &str, value: &str) {
    if let Some(storage) = session_storage() {
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("sessionStorage write failed for {}: {:?}", key, e);
        }
    }
}

pub fn session_remove(key: &str) {
    if let Some(storage) = session_storage() {
        drop(storage.remove_item(key));
    }
}

/// Read a JSON hand-off; unreadable values count as absent.
pub fn session_get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = session_get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding unreadable {}: {}", key, e);
            session_remove(key);
            None
        },
    }
}

pub fn session_set_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => session_set(key, &raw),
        Err(e) => log::warn!("Failed to serialize {}: {}", key, e),
    }
}
