use thiserror::Error;

use crate::ValueKind;

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    /// The value has no JSON counterpart (functions, undefined).
    #[error("{kind} cannot be represented as json")]
    Unrepresentable { kind: ValueKind },
    #[error("non-finite number cannot be represented as json: {0}")]
    NonFiniteNumber(f64),
}
