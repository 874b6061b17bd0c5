//! Element bound shared by the sorter and the summation.

use std::fmt::Debug;

use num_traits::{Num, ToPrimitive};

use crate::error::{InvalidInputError, Result};

/// A numeric value that can be compared, added and widened to `f64`.
///
/// Implemented for every primitive integer and float type.
pub trait Numeric: Num + PartialOrd + ToPrimitive + Copy + Debug {
    /// Whether the value has a defined order relative to itself.
    ///
    /// False only for NaN-like values.
    #[inline]
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }
}

impl<T> Numeric for T where T: Num + PartialOrd + ToPrimitive + Copy + Debug {}

/// Reject the first element that has no defined order.
pub fn validate<T: Numeric>(data: &[T]) -> Result<()> {
    match data.iter().position(|value| !value.is_comparable()) {
        Some(index) => Err(InvalidInputError::NotComparable {
            index,
            value: format!("{:?}", data[index]),
        }),
        None => Ok(()),
    }
}
