//! Times each algorithm on random inputs of doubling length.
//!
//! ```text
//! sort-timing [ALGORITHM..] [--len N] [--runs N] [--seed N] [--max N] [--print]
//! ```

mod config;

use std::fmt::Debug;
use std::time::Instant;

use classic_sort::Algorithm;
use sort_test_tools::{is_sorted, patterns};

use crate::config::Config;

/// How many leading elements `--print` shows.
const PRINT_LEN: usize = 10;

fn main() {
    let config = Config::from_args(std::env::args().skip(1));

    for algorithm in &config.algorithms {
        time_algorithm(*algorithm, &config);
    }
}

fn time_algorithm(algorithm: Algorithm, config: &Config) {
    println!("{algorithm}");
    println!();

    let mut len = config.initial_len;

    for run in 0..config.runs {
        // Every algorithm sees the same sequence of inputs.
        let mut v = patterns::random_seeded(len, run_seed(config.seed, run), 0..config.max_value);

        if config.print {
            println!("Array({len}) elements before sort:");
            print_head(&v);
        }

        let start = Instant::now();
        algorithm.sort(&mut v);
        let elapsed = start.elapsed();

        if config.print {
            println!("Array({len}) elements after sort:");
            print_head(&v);
        }

        if !is_sorted(&v) {
            panic!("not sorted afterward: {v:?}");
        }

        println!(
            "Time taken for {:10} elements  =>  {:6} ms",
            len,
            elapsed.as_millis()
        );
        println!();

        len = len
            .checked_mul(2)
            .unwrap_or_else(|| panic!("Input length overflows after doubling {len}"));
    }
}

/// Seed of the input for `run`. The first run uses `seed` itself.
fn run_seed(seed: u64, run: usize) -> u64 {
    seed.wrapping_add(run as u64)
}

fn print_head<T: Debug>(v: &[T]) {
    println!("{:?}", &v[..v.len().min(PRINT_LEN)]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_get_distinct_reproducible_inputs() {
        assert_eq!(run_seed(42, 0), 42);

        let first = patterns::random_seeded(100, run_seed(42, 0), 0..1_000_000);
        let second = patterns::random_seeded(100, run_seed(42, 1), 0..1_000_000);

        assert_ne!(first, second);
        assert_eq!(
            first,
            patterns::random_seeded(100, run_seed(42, 0), 0..1_000_000)
        );
    }
}
