//! Bubble Sort Implementation
//!
//! Textbook adjacent-swap sort with two refinements:
//! - **Early exit**: a pass that performs no swaps ends the sort, so already
//!   sorted input costs a single pass of n-1 comparisons.
//! - **Shrinking boundary**: after each pass the largest unsorted element has
//!   reached its final slot, so the next pass stops one position earlier.
//!
//! Complexity: O(n²) comparisons and swaps worst case, O(n) best case, O(1) extra memory.
//!
//! All entry points sort in place.

use log::debug;
use rayon::prelude::*;

use crate::error::Result;
use crate::numeric::{validate, Numeric};

/// Counters collected while sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of passes started, including the final swap-free pass.
    pub passes: usize,
    /// Number of adjacent comparisons.
    pub comparisons: usize,
    /// Number of adjacent swaps.
    pub swaps: usize,
}

/// Sort a slice in-place in ascending order.
///
/// Fails without touching the slice if any element is NaN.
///
/// # Example
///
/// ```
/// let mut data = vec![5, 2, 9, 1, 5, 6];
/// bubble_sum::sort(&mut data).unwrap();
/// assert_eq!(data, vec![1, 2, 5, 5, 6, 9]);
/// ```
#[inline]
pub fn sort<T: Numeric>(data: &mut [T]) -> Result<()> {
    sort_with_stats(data).map(|_| ())
}

/// Sort a slice in-place and report how much work the sort did.
pub fn sort_with_stats<T: Numeric>(data: &mut [T]) -> Result<SortStats> {
    validate(data)?;

    let mut stats = SortStats::default();
    // Elements at and beyond `boundary` are in their final positions.
    let mut boundary = data.len();

    while boundary > 1 {
        stats.passes += 1;
        let mut swapped = false;

        for i in 0..boundary - 1 {
            stats.comparisons += 1;
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
        boundary -= 1;
    }

    debug!(
        "bubble sort: {} elements, {} passes, {} comparisons, {} swaps",
        data.len(),
        stats.passes,
        stats.comparisons,
        stats.swaps
    );

    Ok(stats)
}

/// Sort independent sequences concurrently on the rayon thread pool.
///
/// Every valid sequence is sorted even when another one is rejected; the
/// first rejection in batch order is returned.
pub fn sort_batch<T: Numeric + Send>(batches: &mut [Vec<T>]) -> Result<Vec<SortStats>> {
    let results: Vec<Result<SortStats>> = batches
        .par_iter_mut()
        .map(|batch| sort_with_stats(batch.as_mut_slice()))
        .collect();

    results.into_iter().collect()
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
