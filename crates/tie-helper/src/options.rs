//! Diff configuration.

use serde::{Deserialize, Serialize};

/// How the target-driven pass of a diff decides that a key is missing from
/// the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingKey {
    /// The base has no such key, or holds `undefined` under it. A key holding
    /// `undefined` on both sides is unchanged.
    #[default]
    Absent,
    /// The base value is falsy (`0`, `false`, `""`, `null`, ...) and not
    /// strictly equal to the target value. Present-but-falsy keys are then
    /// reported again as additions.
    Falsy,
}

/// Options for [`diff_with`](crate::diff_with).
///
/// ```
/// use tie_helper::{DiffOptions, MissingKey};
///
/// let opts = DiffOptions {
///     missing_key: MissingKey::Falsy,
///     ..Default::default()
/// };
/// assert_eq!(opts.nested_threshold, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    pub missing_key: MissingKey,
    /// A nested mapping diff is recorded only when it has more than this many
    /// entries.
    pub nested_threshold: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            missing_key: MissingKey::Absent,
            nested_threshold: 0,
        }
    }
}

impl DiffOptions {
    /// Historical behaviour: falsy base values count as missing, and nested
    /// diffs with a single entry are dropped.
    pub fn legacy() -> Self {
        Self {
            missing_key: MissingKey::Falsy,
            nested_threshold: 1,
        }
    }
}
