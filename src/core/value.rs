//! The closed set of scalar kinds a preference store can hold.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a stored preference value.
///
/// Preference stores hold exactly five scalar kinds; there is no nesting
/// and no open extension point. Typed accessors dispatch on this enum at
/// the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// UTF-8 text (`String`)
    Text,
    /// 32-bit signed integer (`i32`)
    Int,
    /// Boolean (`bool`)
    Bool,
    /// 32-bit floating point (`f32`)
    Float,
    /// 64-bit signed integer (`i64`)
    Long,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Text => "text",
            Kind::Int => "int",
            Kind::Bool => "bool",
            Kind::Float => "float",
            Kind::Long => "long",
        };
        write!(f, "{}", name)
    }
}

/// A single stored preference value.
///
/// The serde representation is externally tagged (`{"Int": 42}`), which
/// keeps `Int`/`Long` and `Float` distinguishable in the persisted map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrefValue {
    /// UTF-8 text
    Text(String),
    /// 32-bit signed integer
    Int(i32),
    /// Boolean
    Bool(bool),
    /// 32-bit floating point
    Float(f32),
    /// 64-bit signed integer
    Long(i64),
}

impl PrefValue {
    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            PrefValue::Text(_) => Kind::Text,
            PrefValue::Int(_) => Kind::Int,
            PrefValue::Bool(_) => Kind::Bool,
            PrefValue::Float(_) => Kind::Float,
            PrefValue::Long(_) => Kind::Long,
        }
    }
}
