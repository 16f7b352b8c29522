// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Prefs: typed preference access over an injected key-value store.
//!
//! Applications tend to keep a handful of small settings (a selected camera,
//! whether a floating bubble snaps to edges, the last used zoom). This crate
//! separates *how* those values are persisted from *how* they are read:
//!
//! - [`KeyValueStore`]: the seam a host implements over its platform store.
//! - [`MemoryStore`]: an in-memory implementation for tests and simple hosts.
//! - [`Preferences`]: typed `get_*` / `set_*` accessors with caller-supplied defaults.
//!
//! There is no global instance. Construct a store in your composition root and
//! hand a [`Preferences`] (or `&mut` to the store) to whatever needs it.
//!
//! ## Usage
//!
//! ```rust
//! use understory_prefs::{KeyValueStore, MemoryStore, PrefValue, Preferences};
//!
//! let mut store = MemoryStore::new();
//! store.put("bubble.magnetic", PrefValue::Bool(false));
//!
//! let mut prefs = Preferences::new(&mut store);
//! assert!(!prefs.get_bool("bubble.magnetic", true));
//!
//! prefs.set_string("camera.id", "front");
//! assert_eq!(prefs.get_string("camera.id", "back"), "front");
//! ```
//!
//! ## Type mismatches
//!
//! Values are stored with their kind. Reading a key as a different kind is an
//! error on the `try_get_*` accessors ([`TypeMismatch`]); the defaulting `get_*`
//! accessors log the mismatch through [`tracing`] and return the default.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod prefs;
mod store;
mod value;

pub use prefs::{Preferences, TypeMismatch};
pub use store::{KeyValueStore, MemoryStore};
pub use value::{PrefKind, PrefType, PrefValue};
