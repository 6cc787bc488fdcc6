//! Synchronous best-effort preference storage for the browser shell.
//!
//! Preferences are small JSON-encoded values keyed by versioned string keys.
//! On WASM targets they live in `window.localStorage`; everywhere else the
//! in-memory store stands in so callers and tests share one code path.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

/// Minimal key-value surface shared by the browser and in-memory stores.
pub trait PrefsStore {
    /// Returns the raw string stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    /// Removes `key` if present.
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

/// In-memory [`PrefsStore`] used on non-WASM targets and in tests.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    entries: RefCell<HashMap<String, String>>,
}

impl PrefsStore for MemoryPrefs {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `localStorage`-backed [`PrefsStore`].
#[cfg(target_arch = "wasm32")]
pub struct LocalStoragePrefs {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStoragePrefs {
    /// Opens the window-local storage area, if the browser exposes one.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl PrefsStore for LocalStoragePrefs {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage
            .set_item(key, value)
            .map_err(|_| format!("localStorage write rejected for {key}"))
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.storage
            .remove_item(key)
            .map_err(|_| format!("localStorage remove rejected for {key}"))
    }
}

/// Loads and decodes a typed preference. Missing or malformed values read as `None`.
pub fn load_pref_typed<T: DeserializeOwned>(store: &dyn PrefsStore, key: &str) -> Option<T> {
    let raw = store.get_item(key)?;
    serde_json::from_str(&raw).ok()
}

/// Encodes and stores a typed preference.
pub fn save_pref_typed<T: Serialize + ?Sized>(
    store: &dyn PrefsStore,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw =
        serde_json::to_string(value).map_err(|err| format!("serialize pref {key} failed: {err}"))?;
    store.set_item(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleAccent {
        hue: u16,
        label: String,
    }

    #[test]
    fn typed_prefs_round_trip_through_memory_store() {
        let store = MemoryPrefs::default();
        let accent = SampleAccent {
            hue: 212,
            label: "ocean".to_string(),
        };

        save_pref_typed(&store, "test.accent.v1", &accent).expect("save pref");
        let loaded = load_pref_typed::<SampleAccent>(&store, "test.accent.v1");

        assert_eq!(loaded, Some(accent));
    }

    #[test]
    fn missing_key_loads_as_none() {
        let store = MemoryPrefs::default();
        assert_eq!(load_pref_typed::<bool>(&store, "test.absent.v1"), None);
    }

    #[test]
    fn malformed_value_loads_as_none() {
        let store = MemoryPrefs::default();
        store
            .set_item("test.broken.v1", "{not json")
            .expect("raw write");

        assert_eq!(
            load_pref_typed::<SampleAccent>(&store, "test.broken.v1"),
            None
        );
    }

    #[test]
    fn remove_clears_stored_value() {
        let store = MemoryPrefs::default();
        save_pref_typed(&store, "test.flag.v1", &true).expect("save pref");
        store.remove_item("test.flag.v1").expect("remove pref");

        assert_eq!(load_pref_typed::<bool>(&store, "test.flag.v1"), None);
    }
}
