// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The key-value store seam and an in-memory implementation.
//!
//! Platform stores (shared-preferences files, registries, browser storage) live
//! on the host side and implement [`KeyValueStore`]. [`MemoryStore`] is enough
//! for tests and for hosts that persist elsewhere.

use alloc::string::String;

use hashbrown::HashMap;

use crate::value::PrefValue;

/// A string-keyed store of [`PrefValue`]s.
///
/// Handles are passed explicitly to whatever needs them; there is no global instance.
pub trait KeyValueStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<PrefValue>;

    /// Stores `value` under `key`, replacing any previous value of any kind.
    fn put(&mut self, key: &str, value: PrefValue);

    /// Removes `key`, returning its previous value.
    fn remove(&mut self, key: &str) -> Option<PrefValue>;

    /// Removes every key.
    fn clear(&mut self);

    /// Returns `true` if `key` holds a value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<PrefValue> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: PrefValue) {
        (**self).put(key, value);
    }

    fn remove(&mut self, key: &str) -> Option<PrefValue> {
        (**self).remove(key)
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }
}

/// In-memory [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, PrefValue>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over stored keys and values in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PrefValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: PrefValue) {
        self.entries.insert(key.into(), value);
    }

    fn remove(&mut self, key: &str) -> Option<PrefValue> {
        self.entries.remove(key)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_replaces_across_kinds() {
        let mut store = MemoryStore::new();
        store.put("k", PrefValue::Int(1));
        store.put("k", PrefValue::Bool(true));
        assert_eq!(store.get("k"), Some(PrefValue::Bool(true)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_and_clear() {
        let mut store = MemoryStore::new();
        store.put("a", PrefValue::Int(1));
        store.put("b", PrefValue::Int(2));

        assert_eq!(store.remove("a"), Some(PrefValue::Int(1)));
        assert_eq!(store.remove("a"), None);
        assert!(store.contains("b"));

        store.clear();
        assert!(store.is_empty());
        assert!(!store.contains("b"));
    }

    #[test]
    fn mutable_reference_is_a_store() {
        fn write<S: KeyValueStore>(mut store: S) {
            store.put("via_ref", PrefValue::Long(9));
        }

        let mut store = MemoryStore::new();
        write(&mut store);
        assert_eq!(store.get("via_ref"), Some(PrefValue::Long(9)));
    }
}
