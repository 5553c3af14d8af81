// Host-side tests for the deterministic seed hash and sine PRNG.

use void_core::{perturb, seed_for, seeded_random, RETRY_SEED_STRIDE, SPAWN_SEED_STRIDE};

// Reference hash: h * 31 + unit over UTF-16, reduced mod 2^32
fn reference_seed(key: &str, spawn: u32) -> i32 {
    let mut h: u32 = 0;
    for unit in key.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(unit as u32);
    }
    h.wrapping_add(spawn.wrapping_mul(SPAWN_SEED_STRIDE as u32)) as i32
}

#[test]
fn seed_for_small_keys() {
    assert_eq!(seed_for("", 0), 0);
    assert_eq!(seed_for("a", 0), 97);
    assert_eq!(seed_for("ab", 0), 97 * 31 + 98);
    assert_eq!(seed_for("", 3), 300_000);
    assert_eq!(seed_for("a", 1), 97 + 100_000);
}

#[test]
fn seed_for_matches_wrapping_reference() {
    let keys = [
        "hello",
        "KxP3vY8mQ2rT7wZ1",
        "a much longer message id that will overflow thirty-two bits many times over",
        "naïve café",
        "emoji 😀 uses a surrogate pair",
    ];
    for key in keys {
        for spawn in [0, 1, 39, 40_000] {
            assert_eq!(
                seed_for(key, spawn),
                reference_seed(key, spawn),
                "mismatch for {key:?} spawn {spawn}"
            );
        }
    }
}

#[test]
fn seed_for_counts_utf16_units_not_bytes() {
    // One astral char = two UTF-16 units; hashing bytes would give a third term
    let (hi, lo) = (0xD83D_i32, 0xDE00_i32);
    assert_eq!(seed_for("😀", 0), hi * 31 + lo);
}

#[test]
fn seed_for_is_stable_across_calls() {
    let first: Vec<i32> = (0..40).map(|s| seed_for("stable-id", s)).collect();
    for _ in 0..5 {
        let again: Vec<i32> = (0..40).map(|s| seed_for("stable-id", s)).collect();
        assert_eq!(first, again);
    }
}

#[test]
fn perturb_steps_by_retry_stride() {
    assert_eq!(perturb(5, 0), 5);
    assert_eq!(perturb(5, 3), 5 + 3 * RETRY_SEED_STRIDE);
    assert_eq!(perturb(i32::MAX, 1), i32::MIN + RETRY_SEED_STRIDE - 1);
}

#[test]
fn seeded_random_known_values() {
    assert_eq!(seeded_random(0), 0.0);
    // sin(1) * 10000 = 8414.709848078965
    assert!((seeded_random(1) - 0.709_848_078_965).abs() < 1e-9);
    // sin(-1) * 10000 = -8414.709848078965, floor is -8415
    assert!((seeded_random(-1) - 0.290_151_921_035).abs() < 1e-9);
}

#[test]
fn seeded_random_stays_in_unit_interval() {
    for seed in (-200_000..200_000).step_by(7) {
        let r = seeded_random(seed);
        assert!((0.0..1.0).contains(&r), "seed {seed} -> {r}");
    }
    for seed in [i32::MIN, i32::MIN + 1, i32::MAX - 1, i32::MAX] {
        let r = seeded_random(seed);
        assert!((0.0..1.0).contains(&r), "seed {seed} -> {r}");
    }
}
