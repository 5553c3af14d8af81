use crate::constants::{RETRY_SEED_STRIDE, SPAWN_SEED_STRIDE};

/// Polynomial rolling hash (`h * 31 + unit`) over the UTF-16 code units of
/// `key`, offset by `spawn_index * 100000`. All arithmetic wraps at 32 bits.
pub fn seed_for(key: &str, spawn_index: u32) -> i32 {
    let hash = key.encode_utf16().fold(0_i32, |hash, unit| {
        (unit as i32).wrapping_add((hash << 5).wrapping_sub(hash))
    });
    hash.wrapping_add((spawn_index as i32).wrapping_mul(SPAWN_SEED_STRIDE))
}

/// Seed used for the `tries`-th collision retry of a candidate.
#[inline]
pub fn perturb(seed: i32, tries: u32) -> i32 {
    seed.wrapping_add((tries as i32).wrapping_mul(RETRY_SEED_STRIDE))
}

/// Map a seed to `[0, 1)` via `frac(sin(seed) * 10000)`.
#[inline]
pub fn seeded_random(seed: i32) -> f64 {
    let x = (seed as f64).sin() * 10000.0;
    x - x.floor()
}
