//! Core value model and reactive state handle.

mod scalar;
mod state;
mod value;

pub use scalar::PrefScalar;
pub use state::PrefState;
pub use value::{Kind, PrefValue};
