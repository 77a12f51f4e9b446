//! tie-helper - object and array utilities over [`tie_value::Value`].
//!
//! - [`copy`] deep clone
//! - [`is_equal`] deep structural equality
//! - [`diff`] / [`diff_with`] / [`diff_value`] deep diff into a [`DiffResult`]
//! - [`apply_diff`] replay a [`DiffResult`] onto a mapping
//! - [`dedupe`] / [`arrays_match`] sequence helpers
//! - [`is_plain_object`] / [`add_to_object`] mapping helpers
//!
//! All functions are pure: inputs are borrowed and never mutated.

pub mod arrays;
pub mod copy;
pub mod diff;
pub mod equal;
pub mod object;
pub mod options;

pub use arrays::{arrays_match, dedupe};
pub use copy::{copy, copy_mapping};
pub use diff::{apply_diff, diff, diff_value, diff_value_with, diff_with, Change, DiffResult};
pub use equal::{is_equal, strict_equals};
pub use object::{add_to_object, is_plain_object};
pub use options::{DiffOptions, MissingKey};

pub use tie_value::{FunctionRef, Mapping, Value, ValueKind};
