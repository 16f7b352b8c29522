// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_prefs` crate.
//!
//! These exercise `Preferences` against both the bundled `MemoryStore` and a
//! host-defined store, the way an application would inject one.

use std::collections::BTreeMap;

use understory_prefs::{KeyValueStore, MemoryStore, PrefKind, PrefValue, Preferences};

/// A host-side store that records every write, standing in for a platform backend.
#[derive(Default)]
struct JournalStore {
    values: BTreeMap<String, PrefValue>,
    writes: Vec<String>,
}

impl KeyValueStore for JournalStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: PrefValue) {
        self.writes.push(key.to_owned());
        self.values.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) -> Option<PrefValue> {
        self.writes.push(key.to_owned());
        self.values.remove(key)
    }

    fn clear(&mut self) {
        self.writes.push(String::from("*"));
        self.values.clear();
    }
}

#[test]
fn every_kind_round_trips_through_memory_store() {
    let mut prefs = Preferences::new(MemoryStore::new());
    prefs.set_int("i", -3);
    prefs.set_long("l", 1 << 40);
    prefs.set_float("f", 0.25);
    prefs.set_bool("b", true);
    prefs.set_string("s", "front");

    assert_eq!(prefs.get_int("i", 0), -3);
    assert_eq!(prefs.get_long("l", 0), 1 << 40);
    assert_eq!(prefs.get_float("f", 0.0), 0.25);
    assert!(prefs.get_bool("b", false));
    assert_eq!(prefs.get_string("s", ""), "front");
    assert_eq!(prefs.store().len(), 5);
}

#[test]
fn overwrite_with_other_kind_changes_reads() {
    let mut prefs = Preferences::new(MemoryStore::new());
    prefs.set_int("mode", 1);
    prefs.set_string("mode", "auto");

    assert_eq!(prefs.get_int("mode", -1), -1);
    let err = prefs.try_get_int("mode").unwrap_err();
    assert_eq!((err.expected, err.found), (PrefKind::Int, PrefKind::Str));
    assert_eq!(prefs.try_get_string("mode"), Ok(Some(String::from("auto"))));
}

#[test]
fn host_store_is_used_through_injection() {
    let mut prefs = Preferences::new(JournalStore::default());
    prefs.set_bool("bubble.magnetic", false);
    prefs.set_int("bubble.x", 12);
    assert!(prefs.remove("bubble.x"));
    assert!(!prefs.get_bool("bubble.magnetic", true));
    // Default `contains` goes through `get`.
    assert!(prefs.contains("bubble.magnetic"));
    assert!(!prefs.contains("bubble.x"));

    prefs.clear();
    let store = prefs.into_inner();
    assert!(store.values.is_empty());
    assert_eq!(
        store.writes,
        vec!["bubble.magnetic", "bubble.x", "bubble.x", "*"]
    );
}

#[test]
fn two_handles_over_one_store_share_state() {
    let mut store = MemoryStore::new();

    Preferences::new(&mut store).set_long("launches", 1);
    let launches = Preferences::new(&mut store).get_long("launches", 0);
    Preferences::new(&mut store).set_long("launches", launches + 1);

    assert_eq!(store.get("launches"), Some(PrefValue::Long(2)));
}

#[test]
fn type_mismatch_is_a_std_error() {
    let mut prefs = Preferences::new(MemoryStore::new());
    prefs.set_float("zoom", 2.0);

    let err: Box<dyn std::error::Error> = Box::new(prefs.try_get_bool("zoom").unwrap_err());
    assert_eq!(
        err.to_string(),
        "preference \"zoom\" holds a float value, not a bool"
    );
}
