//! Bubble sort and sum over numeric sequences.
//!
//! The sorter works in place: every entry point takes `&mut [T]` and leaves the
//! caller's slice ordered ascending. Inputs containing values without a total
//! order (NaN) are rejected before anything moves.

pub mod benchmark;
pub mod bubble_sort;
pub mod error;
pub mod input;
pub mod numeric;
pub mod sum;

pub use bubble_sort::{is_sorted, sort, sort_batch, sort_with_stats, SortStats};
pub use error::{InvalidInputError, Result};
pub use input::parse_sequence;
pub use numeric::Numeric;
pub use sum::{mean, sum};
