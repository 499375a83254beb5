//! Deterministic sub-stream derivation. The final confrontation rolls
//! from its own ChaCha20 stream so its outcome depends only on the seed
//! and the player's choices, not on how many rolls earlier days consumed.

use hmac::{Hmac, Mac};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;

const BOSS_DOMAIN: &str = "refactor.boss.v1";

/// Derives a 64-bit sub-seed from the game seed and a domain tag.
#[must_use]
pub fn derive_stream_seed(seed: u64, domain: &str) -> u64 {
    let mut mac = Hmac::<Sha256>::new_from_slice(&seed.to_le_bytes())
        .expect("64-bit seed is a valid HMAC key");
    mac.update(domain.as_bytes());
    let digest = mac.finalize().into_bytes();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Dedicated stream for the boss fight.
#[must_use]
pub fn boss_stream(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(derive_stream_seed(seed, BOSS_DOMAIN))
}
