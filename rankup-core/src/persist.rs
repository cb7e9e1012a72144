use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/* ------------------------- persisted key catalogue ------------------------ */

/// Opaque bearer credential written on login, removed on logout.
pub const TOKEN_KEY: &str = "token";
/// Identifier of the last-selected section.
pub const SECTION_KEY: &str = "sectionId";

/// Seam between the stores and whatever actually persists key-value pairs.
///
/// The stores call `set` *before* updating their in-memory state, so a reload
/// never observes persisted state the stores had not yet committed to.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/* ----------------------------- test double ------------------------------- */

/// In-memory [`KeyValueStore`]; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartialEq for MemoryStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || *self.0.borrow() == *other.0.borrow()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(TOKEN_KEY), None);

        store.set(TOKEN_KEY, "abc123");
        assert_eq!(store.get(TOKEN_KEY), Some("abc123".into()));

        store.remove(TOKEN_KEY);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn clones_share_the_same_map() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set(SECTION_KEY, "42");
        assert_eq!(b.get(SECTION_KEY), Some("42".into()));
    }
}
