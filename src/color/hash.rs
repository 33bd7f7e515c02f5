use sha2::{Digest as _, Sha256};

/// Number of leading hex digits of the SHA-256 digest kept by [`stable_hash`].
pub const STABLE_HASH_HEX_DIGITS: usize = 16;

/// Modulus applied by [`default_seed`].
pub const SEED_MODULUS: u64 = 2_000_000_000;

/// Stable content hash of `text`.
///
/// SHA-256 over the UTF-8 bytes, truncated to the first [`STABLE_HASH_HEX_DIGITS`] hex digits
/// (the first eight digest bytes, big-endian). The value is identical on every platform and run.
pub fn stable_hash(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut head = [0u8; STABLE_HASH_HEX_DIGITS / 2];
    head.copy_from_slice(&digest[..STABLE_HASH_HEX_DIGITS / 2]);
    u64::from_be_bytes(head)
}

/// Seed a front-end derives for `word` when none is given explicitly.
pub fn default_seed(word: &str) -> u64 {
    stable_hash(word.trim()) % SEED_MODULUS
}

#[cfg(test)]
#[path = "../../tests/unit/color/hash.rs"]
mod tests;
