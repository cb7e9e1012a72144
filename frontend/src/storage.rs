//! Browser-side persistence behind the core's key-value seam.

use gloo::storage::{LocalStorage, Storage};
use rankup_core::KeyValueStore;

/// `localStorage`-backed [`KeyValueStore`]. Stateless; every instance reads
/// the same browser storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::set(key, value) {
            log::error!("localStorage write for {key} failed: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}
