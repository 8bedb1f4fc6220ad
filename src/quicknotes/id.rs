//! Note identifiers.
//!
//! Ids are 16 random bytes rendered as unpadded URL-safe base64, which gives
//! 22 characters drawn from `[A-Za-z0-9_-]`. The random source is picked once,
//! when the generator is built: the operating system's CSPRNG if a one-byte
//! read from it succeeds, otherwise a time-seeded PRNG. Generating an id never fails.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

const ID_BYTES: usize = 16;

enum Source {
    Os,
    Seeded(RefCell<StdRng>),
}

pub struct IdGenerator {
    source: Source,
}

impl IdGenerator {
    /// Tries the OS random source and picks the strongest one available.
    pub fn detect() -> Self {
        let mut sample = [0u8; 1];
        match getrandom::getrandom(&mut sample) {
            Ok(()) => Self { source: Source::Os },
            Err(e) => {
                tracing::warn!(error = %e, "OS random source unavailable, falling back to seeded PRNG");
                Self::seeded(weak_seed())
            }
        }
    }

    /// A generator backed by a PRNG with a fixed seed. Output is reproducible
    /// for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            source: Source::Seeded(RefCell::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn is_os_backed(&self) -> bool {
        matches!(self.source, Source::Os)
    }

    pub fn generate(&self) -> String {
        let mut bytes = [0u8; ID_BYTES];
        match &self.source {
            Source::Os => {
                if let Err(e) = getrandom::getrandom(&mut bytes) {
                    tracing::warn!(error = %e, "OS random source failed, using seeded PRNG for this id");
                    StdRng::seed_from_u64(weak_seed()).fill_bytes(&mut bytes);
                }
            }
            Source::Seeded(rng) => rng.borrow_mut().fill_bytes(&mut bytes),
        }
        URL_SAFE_NO_PAD.encode(bytes)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::detect()
    }
}

fn weak_seed() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    let bump = COUNTER.fetch_add(1, Ordering::Relaxed);
    nanos ^ (u64::from(std::process::id()) << 32) ^ bump.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_url_safe(id: &str) -> bool {
        id.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    #[test]
    fn ids_are_22_url_safe_chars() {
        let ids = IdGenerator::detect();
        for _ in 0..100 {
            let id = ids.generate();
            assert_eq!(id.len(), 22);
            assert!(is_url_safe(&id), "unexpected character in {id}");
            assert!(!id.contains('='));
        }
    }

    #[test]
    fn ids_do_not_repeat() {
        let ids = IdGenerator::detect();
        let seen: HashSet<String> = (0..1_000).map(|_| ids.generate()).collect();
        assert_eq!(seen.len(), 1_000);
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let a = IdGenerator::seeded(7);
        let b = IdGenerator::seeded(7);
        assert_eq!(a.generate(), b.generate());
        assert!(!a.is_os_backed());
    }

    #[test]
    fn seeded_generator_advances() {
        let ids = IdGenerator::seeded(7);
        assert_ne!(ids.generate(), ids.generate());
    }
}
