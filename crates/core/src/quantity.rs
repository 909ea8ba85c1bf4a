//! Quantity and threshold validation.
//!
//! Quantities cross the API boundary as `i64` so that negative input can be
//! expressed and rejected, the same way stock deltas are signed elsewhere.

use crate::error::{InventoryError, InventoryResult};

/// Validate a quantity that may be zero (additions).
pub fn ensure_non_negative(field: &str, value: i64) -> InventoryResult<i64> {
    if value < 0 {
        return Err(InventoryError::invalid_argument(format!(
            "'{field}' must be non-negative (got {value})"
        )));
    }
    Ok(value)
}

/// Validate a quantity that must be at least one (removals).
pub fn ensure_positive(field: &str, value: i64) -> InventoryResult<i64> {
    if value <= 0 {
        return Err(InventoryError::invalid_argument(format!(
            "'{field}' must be positive (got {value})"
        )));
    }
    Ok(value)
}
