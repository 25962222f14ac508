//! Stable hashing helpers.
//!
//! Image selection must map the same scenario to the same picture across
//! restarts and builds, so it cannot use `std::hash` (randomly seeded).

use sha2::{Digest, Sha256};

/// First 8 bytes of the SHA-256 digest of `text`, read big-endian.
pub fn stable_hash(text: &str) -> u64 {
    let hash = Sha256::digest(text.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash[..8]);
    u64::from_be_bytes(prefix)
}

/// Map `text` onto an index in `0..len`. Returns 0 for an empty range.
pub fn stable_index(text: &str, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (stable_hash(text) % len as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_hash_uses_digest_prefix() {
        // e3b0c44298fc1c14 is the first 8 bytes of SHA-256("").
        assert_eq!(stable_hash(""), 0xe3b0_c442_98fc_1c14);
    }

    #[test]
    fn stable_index_stays_in_range() {
        for text in ["a", "trolley", "a much longer scenario about a dam"] {
            assert!(stable_index(text, 7) < 7);
        }
        assert_eq!(stable_index("anything", 0), 0);
    }
}
