// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stored preference values and the Rust types that map onto them.

use alloc::string::String;
use core::fmt;

/// A single stored preference value.
#[derive(Clone, Debug, PartialEq)]
pub enum PrefValue {
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 32-bit float.
    Float(f32),
    /// Boolean flag.
    Bool(bool),
    /// UTF-8 string.
    Str(String),
}

impl PrefValue {
    /// Returns the kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> PrefKind {
        match self {
            Self::Int(_) => PrefKind::Int,
            Self::Long(_) => PrefKind::Long,
            Self::Float(_) => PrefKind::Float,
            Self::Bool(_) => PrefKind::Bool,
            Self::Str(_) => PrefKind::Str,
        }
    }
}

/// Type tag of a [`PrefValue`], used in error reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrefKind {
    /// See [`PrefValue::Int`].
    Int,
    /// See [`PrefValue::Long`].
    Long,
    /// See [`PrefValue::Float`].
    Float,
    /// See [`PrefValue::Bool`].
    Bool,
    /// See [`PrefValue::Str`].
    Str,
}

impl fmt::Display for PrefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "string",
        })
    }
}

/// A Rust type that can be stored as a [`PrefValue`].
///
/// Conversions are exact: an `Int` is never widened into an `i64`, and a `Long`
/// is never narrowed into an `i32`.
pub trait PrefType: Sized {
    /// The kind this type is stored as.
    const KIND: PrefKind;

    /// Extracts `Self` from a value of the matching kind.
    fn from_value(value: PrefValue) -> Option<Self>;

    /// Wraps `self` as a stored value.
    fn into_value(self) -> PrefValue;
}

macro_rules! impl_pref_type {
    ($ty:ty, $variant:ident) => {
        impl PrefType for $ty {
            const KIND: PrefKind = PrefKind::$variant;

            fn from_value(value: PrefValue) -> Option<Self> {
                match value {
                    PrefValue::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn into_value(self) -> PrefValue {
                PrefValue::$variant(self)
            }
        }

        impl From<$ty> for PrefValue {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        }
    };
}

impl_pref_type!(i32, Int);
impl_pref_type!(i64, Long);
impl_pref_type!(f32, Float);
impl_pref_type!(bool, Bool);
impl_pref_type!(String, Str);

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_are_exact() {
        assert_eq!(i32::from_value(PrefValue::Int(7)), Some(7));
        assert_eq!(i64::from_value(PrefValue::Int(7)), None);
        assert_eq!(i32::from_value(PrefValue::Long(7)), None);
        assert_eq!(f32::from_value(PrefValue::Float(0.5)), Some(0.5));
        assert_eq!(bool::from_value(PrefValue::Str("true".into())), None);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(PrefValue::from(3_i64).kind(), PrefKind::Long);
        assert_eq!(PrefValue::from("x").kind(), PrefKind::Str);
        assert_eq!(PrefValue::from(true).kind(), <bool as PrefType>::KIND);
    }
}
