//! Cryptographic utilities

use rand::Rng;
use sha2::{Digest, Sha256};

/// Hash a flag value using SHA-256, returning a lowercase hex digest.
///
/// Submitted values and stored flags are always compared through this digest
/// so raw flag strings are never compared (or kept) directly.
pub fn hash_flag(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Compare a candidate flag against a stored digest.
///
/// Both sides go through the fixed-width digest, so comparison time does not
/// depend on how much of the submitted plaintext matches.
pub fn verify_flag(candidate: &str, stored_hash: &str) -> bool {
    hash_flag(candidate) == stored_hash
}

/// Generate a random alphanumeric token
pub fn generate_secure_token(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate a random team join code
pub fn generate_join_code() -> String {
    generate_secure_token(crate::constants::JOIN_CODE_LENGTH).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_flag_is_deterministic() {
        let hash1 = hash_flag("CTF{test}");
        let hash2 = hash_flag("CTF{test}");
        let hash3 = hash_flag("CTF{different}");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);
    }

    #[test]
    fn test_verify_flag() {
        let hash = hash_flag("CTF{secret}");

        assert!(verify_flag("CTF{secret}", &hash));
        assert!(!verify_flag("CTF{wrong}", &hash));
        assert!(!verify_flag("", &hash));
    }

    #[test]
    fn test_generate_join_code() {
        let code1 = generate_join_code();
        let code2 = generate_join_code();

        assert_eq!(code1.len(), crate::constants::JOIN_CODE_LENGTH);
        assert_ne!(code1, code2);
        assert!(code1.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
