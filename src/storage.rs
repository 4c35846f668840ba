//! Browser Persistence Adapter
//!
//! `localStorage`-backed implementation of the model's storage boundary.

use todo_model::{TodoStorage, STORAGE_KEY};
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// Wraps `window.localStorage`; the serialized list lives under the fixed
/// `todos` key.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn new(window: &Window) -> Result<Self, JsValue> {
        let storage = window
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("localStorage is unavailable"))?;
        Ok(Self { storage })
    }
}

impl TodoStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        self.storage.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&self, json: &str) {
        if self.storage.set_item(STORAGE_KEY, json).is_err() {
            web_sys::console::warn_1(&JsValue::from_str("failed to persist todos"));
        }
    }
}
