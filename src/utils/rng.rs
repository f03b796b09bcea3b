//! Seedable pseudo-random source for question composition.
//!
//! Each ledger gets its own seed derived from the engine's master seed, the
//! session id and the ledger's creation generation. Each draw attempt gets a
//! child stream derived from that seed, so sessions never share a cursor and
//! a fixed master seed with a fixed call order replays a session exactly.

use rand::{RngCore, SeedableRng};
use sha2::{Digest, Sha256};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// xorshift64* seeded through SplitMix64.
#[derive(Debug, Clone)]
pub struct QuestionRng {
    state: u64,
}

impl QuestionRng {
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        let state = splitmix64(&mut sm);
        Self {
            // xorshift must never sit at zero
            state: if state == 0 { GOLDEN_GAMMA } else { state },
        }
    }

    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// Stream for one composition attempt of one draw in one session.
    pub fn for_draw(session_seed: u64, draw_index: u64, attempt: u32) -> Self {
        let mut sm = session_seed ^ draw_index.wrapping_mul(GOLDEN_GAMMA);
        let mixed = splitmix64(&mut sm) ^ (attempt as u64).rotate_left(32);
        Self::new(mixed)
    }

    /// Uniform in `[0, 1)` with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform index in `0..len`; returns 0 for an empty range.
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_f64() * len as f64) as usize % len
    }
}

impl RngCore for QuestionRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for QuestionRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// Derives a ledger seed from the first eight bytes of
/// `sha256(master_seed || generation || session_id)`.
///
/// `generation` counts ledger creations across the engine, so a session id
/// that is cleared or evicted and then reused starts from a fresh stream.
pub fn session_seed(master_seed: u64, session_id: &str, generation: u64) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(master_seed.to_le_bytes());
    hasher.update(generation.to_le_bytes());
    hasher.update(session_id.as_bytes());
    let digest = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(prefix)
}

pub fn clock_seed() -> u64 {
    let now = chrono::Utc::now();
    let nanos = now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp_micros());
    nanos as u64 ^ (std::process::id() as u64).rotate_left(48)
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(GOLDEN_GAMMA);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn mean_of_ten_thousand_samples_is_centered() {
        let mut rng = QuestionRng::from_clock();
        let sum: f64 = (0..10_000).map(|_| rng.next_f64()).sum();
        let mean = sum / 10_000.0;
        assert!(mean > 0.4 && mean < 0.6, "mean was {mean}");
    }

    #[test]
    fn samples_stay_in_unit_interval() {
        let mut rng = QuestionRng::new(0);
        for _ in 0..10_000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = QuestionRng::new(42);
        let mut b = QuestionRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn draw_streams_are_independent() {
        let seed = session_seed(7, "session-a", 0);
        let mut first = QuestionRng::for_draw(seed, 0, 0);
        let mut retry = QuestionRng::for_draw(seed, 0, 1);
        let mut next = QuestionRng::for_draw(seed, 1, 0);
        let a = first.next_u64();
        assert_ne!(a, retry.next_u64());
        assert_ne!(a, next.next_u64());
    }

    #[test]
    fn sessions_get_distinct_seeds() {
        assert_ne!(session_seed(1, "alpha", 0), session_seed(1, "beta", 0));
        assert_eq!(session_seed(1, "alpha", 0), session_seed(1, "alpha", 0));
        assert_ne!(session_seed(1, "alpha", 0), session_seed(2, "alpha", 0));
    }

    #[test]
    fn recreated_ledgers_get_fresh_seeds() {
        assert_ne!(session_seed(1, "alpha", 0), session_seed(1, "alpha", 1));
    }

    #[test]
    fn session_seed_is_pinned() {
        assert_eq!(session_seed(42, "replay", 0), 0xd996_1b0d_dfc0_a110);
    }

    #[test]
    fn works_with_rand_distributions() {
        let mut rng = QuestionRng::new(99);
        let roll: u32 = rng.gen_range(1..=6);
        assert!((1..=6).contains(&roll));
        assert!(rng.next_index(0) == 0);
        assert!(rng.next_index(5) < 5);
    }
}
