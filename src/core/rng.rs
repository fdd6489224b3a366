//! Random source
//!
//! Every random draw in the engine (initial seeding, fragment parameters,
//! explosion kind) goes through one `EngineRng` owned by the engine instance.
//! Seed it explicitly for reproducible runs; `entropy_seed()` reproduces the
//! unseeded behavior of a live display.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::SeedableRng;

pub use rand::rngs::SmallRng as EngineRng;

/// Distinguishes engines created within the same clock tick.
static SEED_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Build the engine's random source from a fixed seed.
pub fn seeded(seed: u64) -> EngineRng {
    EngineRng::seed_from_u64(seed)
}

/// Clock-derived seed for non-reproducible runs.
pub fn entropy_seed() -> u64 {
    let sequence = SEED_SEQUENCE
        .fetch_add(1, Ordering::Relaxed)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15);

    #[cfg(target_arch = "wasm32")]
    {
        let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let now = js_sys::Date::now() as u64;
        ((noise << 32) ^ now) ^ sequence
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        now ^ sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..16 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }

    #[test]
    fn entropy_seeds_differ_between_calls() {
        assert_ne!(entropy_seed(), entropy_seed());
    }
}
