//! tie-value - dynamic value tree used by the tie-helper utilities.
//!
//! A [`Value`] is a tagged union over mappings, sequences, function
//! references and scalars (number, string, boolean, null, undefined).
//! Mappings keep insertion order.
//!
//! [`Value`] converts from any [`serde_json::Value`]; the reverse direction
//! goes through [`to_json`] (or `TryFrom`) and fails for values JSON cannot
//! carry.

mod convert;
mod error;
mod value;

pub use convert::to_json;
pub use error::ValueError;
pub use value::{lookup, FunctionRef, Mapping, Value, ValueKind};
