// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed accessors over a [`KeyValueStore`].

use alloc::string::String;
use core::fmt;

use crate::store::KeyValueStore;
use crate::value::{PrefKind, PrefType};

/// Error returned when a stored value has a different kind than requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMismatch {
    /// The key that was read.
    pub key: String,
    /// The kind the caller asked for.
    pub expected: PrefKind,
    /// The kind actually stored.
    pub found: PrefKind,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "preference {:?} holds a {} value, not a {}",
            self.key, self.found, self.expected
        )
    }
}

impl core::error::Error for TypeMismatch {}

/// Typed preference access over an injected store.
///
/// `Preferences` owns its store handle. Pass `&mut store` to borrow instead.
///
/// ```
/// use understory_prefs::{MemoryStore, Preferences};
///
/// let mut prefs = Preferences::new(MemoryStore::new());
///
/// assert_eq!(prefs.get_int("camera_index", 0), 0);
/// prefs.set_int("camera_index", 2);
/// assert_eq!(prefs.get_int("camera_index", 0), 2);
///
/// // Reading with the wrong type reports the mismatch...
/// assert!(prefs.try_get_bool("camera_index").is_err());
/// // ...while the defaulting accessor falls back.
/// assert!(prefs.get_bool("camera_index", true));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    /// Wraps a store handle.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the underlying store mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwraps the store handle.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Reads `key` as `T`.
    ///
    /// Returns `Ok(None)` when the key is absent and an error when it holds another kind.
    pub fn try_get<T: PrefType>(&self, key: &str) -> Result<Option<T>, TypeMismatch> {
        let Some(value) = self.store.get(key) else {
            return Ok(None);
        };
        let found = value.kind();
        T::from_value(value).map(Some).ok_or_else(|| TypeMismatch {
            key: key.into(),
            expected: T::KIND,
            found,
        })
    }

    /// Reads `key` as `T`, falling back to `default` when absent or of another kind.
    ///
    /// A kind mismatch is logged at `warn` level.
    pub fn get<T: PrefType>(&self, key: &str, default: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                tracing::warn!(%err, "returning default for mistyped preference");
                default
            }
        }
    }

    /// Stores `value` under `key`.
    pub fn set<T: PrefType>(&mut self, key: &str, value: T) {
        self.store.put(key, value.into_value());
    }

    /// Removes `key`. Returns `true` if it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.store.remove(key).is_some()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Returns `true` if `key` holds a value of any kind.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.store.contains(key)
    }

    /// Reads an `i32`.
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.get(key, default)
    }

    /// Reads an `i64`.
    pub fn get_long(&self, key: &str, default: i64) -> i64 {
        self.get(key, default)
    }

    /// Reads an `f32`.
    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        self.get(key, default)
    }

    /// Reads a `bool`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key, default)
    }

    /// Reads a string.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key, String::from(default))
    }

    /// Reads an `i32`, reporting kind mismatches.
    pub fn try_get_int(&self, key: &str) -> Result<Option<i32>, TypeMismatch> {
        self.try_get(key)
    }

    /// Reads an `i64`, reporting kind mismatches.
    pub fn try_get_long(&self, key: &str) -> Result<Option<i64>, TypeMismatch> {
        self.try_get(key)
    }

    /// Reads an `f32`, reporting kind mismatches.
    pub fn try_get_float(&self, key: &str) -> Result<Option<f32>, TypeMismatch> {
        self.try_get(key)
    }

    /// Reads a `bool`, reporting kind mismatches.
    pub fn try_get_bool(&self, key: &str) -> Result<Option<bool>, TypeMismatch> {
        self.try_get(key)
    }

    /// Reads a string, reporting kind mismatches.
    pub fn try_get_string(&self, key: &str) -> Result<Option<String>, TypeMismatch> {
        self.try_get(key)
    }

    /// Stores an `i32`.
    pub fn set_int(&mut self, key: &str, value: i32) {
        self.set(key, value);
    }

    /// Stores an `i64`.
    pub fn set_long(&mut self, key: &str, value: i64) {
        self.set(key, value);
    }

    /// Stores an `f32`.
    pub fn set_float(&mut self, key: &str, value: f32) {
        self.set(key, value);
    }

    /// Stores a `bool`.
    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, value);
    }

    /// Stores a string.
    pub fn set_string(&mut self, key: &str, value: &str) {
        self.set(key, String::from(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::value::PrefValue;

    #[test]
    fn missing_key_returns_default() {
        let prefs = Preferences::new(MemoryStore::new());
        assert_eq!(prefs.get_long("nope", -1), -1);
        assert_eq!(prefs.get_string("nope", "fallback"), "fallback");
        assert_eq!(prefs.try_get_float("nope"), Ok(None));
    }

    #[test]
    fn mismatch_reports_both_kinds() {
        let mut prefs = Preferences::new(MemoryStore::new());
        prefs.set_string("k", "hello");

        let err = prefs.try_get_int("k").unwrap_err();
        assert_eq!(err.key, "k");
        assert_eq!(err.expected, PrefKind::Int);
        assert_eq!(err.found, PrefKind::Str);
        assert_eq!(
            alloc::format!("{err}"),
            "preference \"k\" holds a string value, not a int"
        );
    }

    #[test]
    fn int_and_long_do_not_alias() {
        let mut prefs = Preferences::new(MemoryStore::new());
        prefs.set_long("n", 5);
        assert_eq!(prefs.get_int("n", 0), 0);
        assert_eq!(prefs.get_long("n", 0), 5);
    }

    #[test]
    fn remove_reports_presence() {
        let mut prefs = Preferences::new(MemoryStore::new());
        prefs.set_bool("flag", true);
        assert!(prefs.remove("flag"));
        assert!(!prefs.remove("flag"));
        assert!(!prefs.contains("flag"));
    }

    #[test]
    fn borrowed_store_sees_writes() {
        let mut store = MemoryStore::new();
        {
            let mut prefs = Preferences::new(&mut store);
            prefs.set_float("scale", 1.5);
        }
        assert_eq!(store.get("scale"), Some(PrefValue::Float(1.5)));
    }
}
