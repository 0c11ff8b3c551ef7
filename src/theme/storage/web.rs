use futures::future::{ FutureExt, LocalBoxFuture };
use wasm_bindgen::JsValue;

use super::PreferenceStorage;
use crate::error::PreferenceError;

/// Browser `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    fn storage(&self) -> Result<web_sys::Storage, PreferenceError> {
        let window = web_sys::window()
            .ok_or_else(|| PreferenceError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| PreferenceError::Unavailable(js_reason(e)))?
            .ok_or_else(|| PreferenceError::Unavailable("localStorage disabled".to_string()))
    }
}

fn js_reason(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl PreferenceStorage for WebStorage {
    fn get<'a>(&'a self, key: &'a str) -> LocalBoxFuture<'a, Result<Option<String>, PreferenceError>> {
        async move {
            let storage = self.storage().map_err(|e| PreferenceError::read(key, e))?;
            storage.get_item(key).map_err(|e| PreferenceError::read(key, js_reason(e)))
        }.boxed_local()
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> LocalBoxFuture<'a, Result<(), PreferenceError>> {
        async move {
            let storage = self.storage().map_err(|e| PreferenceError::write(key, e))?;
            storage.set_item(key, value).map_err(|e| PreferenceError::write(key, js_reason(e)))
        }.boxed_local()
    }
}
