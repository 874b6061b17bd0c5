//! Sum reduction over numeric sequences.

use crate::error::{InvalidInputError, Result};
use crate::numeric::Numeric;

/// Arithmetic sum of all elements, zero for an empty slice.
///
/// Uses plain `+` on `T`: integer overflow and float rounding behave as they
/// do for the element type.
pub fn sum<T: Numeric>(data: &[T]) -> T {
    data.iter().fold(T::zero(), |acc, &value| acc + value)
}

/// Arithmetic mean as `f64`.
///
/// Accumulates in `f64`, so narrow integer types cannot overflow here.
pub fn mean<T: Numeric>(data: &[T]) -> Result<f64> {
    if data.is_empty() {
        return Err(InvalidInputError::EmptySequence);
    }
    let total: f64 = data
        .iter()
        .map(|value| value.to_f64().unwrap_or(f64::NAN))
        .sum();
    Ok(total / data.len() as f64)
}
