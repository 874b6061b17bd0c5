//! Timing comparison of bubble sort against the standard library sort.

use std::fmt::Write;
use std::time::Instant;

use log::warn;
use rand::Rng;

use crate::bubble_sort::{self, SortStats};

/// Sizes used when none are given; bubble sort is quadratic, keep them small.
pub const DEFAULT_SIZES: [usize; 4] = [1 << 6, 1 << 8, 1 << 10, 1 << 12];

/// One measured size.
#[derive(Debug, Clone)]
pub struct BenchmarkRow {
    pub size: usize,
    pub bubble_ms: f64,
    pub std_ms: f64,
    pub stats: SortStats,
    /// Bubble sort output is ordered and matches `sort_unstable`.
    pub verified: bool,
}

/// Sort one batch of random data both ways and compare the results.
pub fn measure<R: Rng>(size: usize, rng: &mut R) -> BenchmarkRow {
    let data: Vec<u32> = (0..size).map(|_| rng.gen()).collect();

    let mut bubble_data = data.clone();
    let bubble_start = Instant::now();
    // u32 has a total order, so validation cannot fail.
    let stats = bubble_sort::sort_with_stats(&mut bubble_data).unwrap_or_default();
    let bubble_ms = bubble_start.elapsed().as_secs_f64() * 1000.0;

    let mut std_data = data;
    let std_start = Instant::now();
    std_data.sort_unstable();
    let std_ms = std_start.elapsed().as_secs_f64() * 1000.0;

    let verified = bubble_sort::is_sorted(&bubble_data) && bubble_data == std_data;
    if !verified {
        warn!("bubble sort result differs from std sort at size {}", size);
    }

    BenchmarkRow {
        size,
        bubble_ms,
        std_ms,
        stats,
        verified,
    }
}

/// Measure every size with a thread-local RNG.
pub fn run(sizes: &[usize]) -> Vec<BenchmarkRow> {
    let mut rng = rand::thread_rng();
    sizes.iter().map(|&size| measure(size, &mut rng)).collect()
}

/// Render rows as a fixed-width table.
///
/// Writing into a `String` cannot fail.
pub fn render_table(rows: &[BenchmarkRow]) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "{:>8} | {:>12} | {:>12} | {:>8} | {:>10} | {:>8}",
        "Size", "Bubble (ms)", "Std (ms)", "Passes", "Swaps", "Verified"
    )
    .unwrap();
    writeln!(
        output,
        "{:-<8}-+-{:-<12}-+-{:-<12}-+-{:-<8}-+-{:-<10}-+-{:-<8}",
        "", "", "", "", "", ""
    )
    .unwrap();

    for row in rows {
        writeln!(
            output,
            "{:>8} | {:>12.3} | {:>12.3} | {:>8} | {:>10} | {:>8}",
            row.size,
            row.bubble_ms,
            row.std_ms,
            row.stats.passes,
            row.stats.swaps,
            if row.verified { "OK" } else { "FAILED" }
        )
        .unwrap();
    }

    output
}
