//! Input patterns for tests, benchmarks and the timing tool.
//!
//! Random patterns draw from a seed that is picked once per process and printed by the test suite,
//! so a failure can be reproduced by setting `OVERRIDE_SEED`. Benchmarks call
//! [`reseed_each_call`] to get fresh values from every call instead.

use std::env;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zipf::ZipfDistribution;

struct ProcessSeed {
    value: u64,
    overridden: bool,
}

static PROCESS_SEED: Lazy<ProcessSeed> = Lazy::new(|| match env::var("OVERRIDE_SEED") {
    Ok(value) => ProcessSeed {
        value: value
            .parse()
            .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: {value}")),
        overridden: true,
    },
    Err(_) => ProcessSeed {
        value: rand::thread_rng().gen(),
        overridden: false,
    },
});

static RESEED_EACH_CALL: AtomicBool = AtomicBool::new(false);

/// The seed the next random pattern is drawn from.
pub fn seed() -> u64 {
    if RESEED_EACH_CALL.load(Ordering::Relaxed) {
        rand::thread_rng().gen()
    } else {
        PROCESS_SEED.value
    }
}

/// Makes every random pattern call draw from a new seed.
pub fn reseed_each_call() {
    assert!(
        !PROCESS_SEED.overridden,
        "OVERRIDE_SEED pins the inputs, it can't be combined with a new seed per call"
    );

    RESEED_EACH_CALL.store(true, Ordering::Relaxed);
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(seed())
}

/// Uniformly random values over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    random_uniform(len, i32::MIN..=i32::MAX)
}

/// Uniformly random values in `range`. Narrow ranges give many duplicates.
pub fn random_uniform(len: usize, range: impl Into<Uniform<i32>>) -> Vec<i32> {
    rng().sample_iter(range.into()).take(len).collect()
}

/// Values in `range` drawn from a generator seeded with `seed`, independent of the process seed.
/// The same arguments always give the same values.
pub fn random_seeded(len: usize, seed: u64, range: Range<i32>) -> Vec<i32> {
    StdRng::seed_from_u64(seed)
        .sample_iter(Uniform::from(range))
        .take(len)
        .collect()
}

/// Zipf distributed values in `1..=len`, small values are far more common than large ones.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).expect("exponent must be positive");
    rng().sample_iter(dist).take(len).map(|val| val as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Ascending up to the middle, then descending. The first and last element are equal.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let half = len / 2;
    (0..half as i32).chain((0..(len - half) as i32).rev()).collect()
}

/// `teeth` runs of about equal length, alternating between ascending and descending.
pub fn sawtooth(len: usize, teeth: usize) -> Vec<i32> {
    let teeth = teeth.max(1);
    let tooth_len = ((len + teeth - 1) / teeth).max(1);

    (0..len)
        .map(|i| {
            let pos = (i % tooth_len) as i32;
            if (i / tooth_len) % 2 == 0 {
                pos
            } else {
                tooth_len as i32 - pos
            }
        })
        .collect()
}
