//! Typed access to preference values.

use crate::core::value::{Kind, PrefValue};

mod sealed {
    pub trait Sealed {}
    impl Sealed for String {}
    impl Sealed for i32 {}
    impl Sealed for bool {}
    impl Sealed for f32 {}
    impl Sealed for i64 {}
}

/// A Rust type that maps onto one of the five stored scalar kinds.
///
/// Implemented for exactly `String`, `i32`, `bool`, `f32` and `i64`; the
/// trait is sealed, so requesting any other type from a store is a compile
/// error rather than a runtime failure. The caller's default value picks
/// the accessor: `store.get("volume", 0.5f32)` reads the key as a float.
pub trait PrefScalar: sealed::Sealed + Clone + Send + Sync + 'static {
    /// The stored kind this type maps onto.
    const KIND: Kind;

    /// Wrap this value in its tagged store representation.
    fn into_value(self) -> PrefValue;

    /// Unwrap a stored value, or `None` if the kinds do not match.
    fn from_value(value: PrefValue) -> Option<Self>;
}

impl PrefScalar for String {
    const KIND: Kind = Kind::Text;

    fn into_value(self) -> PrefValue {
        PrefValue::Text(self)
    }

    fn from_value(value: PrefValue) -> Option<Self> {
        match value {
            PrefValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl PrefScalar for i32 {
    const KIND: Kind = Kind::Int;

    fn into_value(self) -> PrefValue {
        PrefValue::Int(self)
    }

    fn from_value(value: PrefValue) -> Option<Self> {
        match value {
            PrefValue::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl PrefScalar for bool {
    const KIND: Kind = Kind::Bool;

    fn into_value(self) -> PrefValue {
        PrefValue::Bool(self)
    }

    fn from_value(value: PrefValue) -> Option<Self> {
        match value {
            PrefValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl PrefScalar for f32 {
    const KIND: Kind = Kind::Float;

    fn into_value(self) -> PrefValue {
        PrefValue::Float(self)
    }

    fn from_value(value: PrefValue) -> Option<Self> {
        match value {
            PrefValue::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl PrefScalar for i64 {
    const KIND: Kind = Kind::Long;

    fn into_value(self) -> PrefValue {
        PrefValue::Long(self)
    }

    fn from_value(value: PrefValue) -> Option<Self> {
        match value {
            PrefValue::Long(v) => Some(v),
            _ => None,
        }
    }
}
