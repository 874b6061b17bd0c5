//! Bubble Sort and Sum
//!
//! Sorts a sequence of numbers in place with bubble sort, then prints the
//! ordered sequence, its sum and its mean. With `--benchmark` it instead times
//! bubble sort against the standard library sort on random data.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see per-sort
//! pass and swap counts.

use std::process;

use bubble_sum::benchmark::{self, DEFAULT_SIZES};
use bubble_sum::{mean, parse_sequence, sort_with_stats, sum};
use clap::Parser;
use log::{error, info};

/// Sequence used when no values are given on the command line.
const DEFAULT_VALUES: [f64; 6] = [5.0, 2.0, 9.0, 1.0, 5.0, 6.0];

#[derive(Parser, Debug)]
#[command(name = "bubble-sum", version, about = "Bubble sort a sequence and report its sum")]
struct Cli {
    /// Numbers to sort, separated by spaces or commas (default: 5 2 9 1 5 6)
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Print pass, comparison and swap counts
    #[arg(long)]
    stats: bool,

    /// Time bubble sort against the standard library sort instead
    #[arg(long)]
    benchmark: bool,

    /// Array sizes for --benchmark
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<usize>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.benchmark {
        run_benchmark(&cli.sizes);
        return;
    }

    let mut data = if cli.values.is_empty() {
        DEFAULT_VALUES.to_vec()
    } else {
        match parse_sequence(&cli.values) {
            Ok(values) => values,
            Err(e) => {
                error!("rejected input: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    };

    println!("Before sorting: {:?}", data);

    let stats = match sort_with_stats(&mut data) {
        Ok(stats) => stats,
        Err(e) => {
            error!("sort failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("After sorting: {:?}", data);
    println!("Sum: {}", sum(&data));
    match mean(&data) {
        Ok(average) => println!("Mean: {}", average),
        Err(e) => info!("no mean: {}", e),
    }

    if cli.stats {
        println!(
            "Passes: {}, comparisons: {}, swaps: {}",
            stats.passes, stats.comparisons, stats.swaps
        );
    }
}

fn run_benchmark(sizes: &[usize]) {
    let sizes = if sizes.is_empty() {
        &DEFAULT_SIZES[..]
    } else {
        sizes
    };

    println!("Bubble sort vs std sort_unstable (random u32 data)");
    println!("==================================================\n");

    let rows = benchmark::run(sizes);
    print!("{}", benchmark::render_table(&rows));

    if rows.iter().any(|row| !row.verified) {
        eprintln!("ERROR: bubble sort failed verification");
        process::exit(1);
    }
}
