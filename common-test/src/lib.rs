use std::env;

use rand::{random, rngs::StdRng, SeedableRng};

pub const TEST_SEED_ENV: &str = "TEST_SEED";

/// Builds a `StdRng` seeded from the `TEST_SEED` environment variable, or
/// from a random seed when the variable is absent or unparsable. The seed is
/// printed so a failing run can be replayed.
pub fn seeded_rng() -> StdRng {
    let seed = env::var(TEST_SEED_ENV)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(random);
    println!("Using seed {} ({})", seed, TEST_SEED_ENV);
    StdRng::seed_from_u64(seed)
}
