//! `window.localStorage` backend for the token store

use broker_core::{KeyValueStore, SessionError, SessionResult};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Browser local storage. Survives reloads, not clearing site data.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> SessionResult<Storage> {
        web_sys::window()
            .ok_or_else(|| SessionError::storage("no window"))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| SessionError::storage("localStorage unavailable"))
    }
}

fn js_error(value: JsValue) -> SessionError {
    SessionError::storage(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> SessionResult<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}
