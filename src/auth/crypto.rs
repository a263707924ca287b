//! Password hashing and token generation for doorman.
//!
//! Digests are salted SHA-256 in the form `<hexSalt>:<hexHash>`. The
//! primitive is part of the on-disk format: swapping it for a slow KDF
//! would break verification of every stored digest, so a stronger
//! algorithm needs a new, distinguishable digest format instead.

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng, TryRngCore};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// Default salt length in bytes (32 hex characters once encoded).
pub const DEFAULT_SALT_LEN: usize = 16;

/// Default token length in bytes.
pub const DEFAULT_TOKEN_LEN: usize = 32;

/// Which random source actually produced the bytes.
///
/// Anything below [`RngTier::OsEntropy`] degrades the security guarantee
/// and is logged as a warning at the point of fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngTier {
    /// OS cryptographically secure generator.
    OsEntropy,
    /// Thread-local userspace PRNG.
    ThreadLocal,
    /// Time-seeded non-cryptographic generator. Last resort.
    TimeSeeded,
}

impl RngTier {
    /// Stable label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            RngTier::OsEntropy => "os_entropy",
            RngTier::ThreadLocal => "thread_local",
            RngTier::TimeSeeded => "time_seeded",
        }
    }
}

/// Fill a buffer from an ordered list of random providers.
///
/// Tries the OS CSPRNG first, then the thread-local PRNG, then a
/// time-seeded generator. The chain never fails: registration must not
/// hard-fail just because the secure source is transiently unavailable,
/// so degradation is surfaced in the returned tier (and a warning)
/// rather than as an error.
pub fn random_bytes(len: usize) -> (Vec<u8>, RngTier) {
    let mut buf = vec![0u8; len];

    if OsRng.try_fill_bytes(&mut buf).is_ok() {
        return (buf, RngTier::OsEntropy);
    }
    warn!(tier = RngTier::ThreadLocal.as_str(), "OS entropy source unavailable, falling back to thread-local PRNG");

    if rand::rng().try_fill_bytes(&mut buf).is_ok() {
        return (buf, RngTier::ThreadLocal);
    }
    warn!(tier = RngTier::TimeSeeded.as_str(), "thread-local PRNG unavailable, falling back to time-seeded generator");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64);
    SmallRng::seed_from_u64(seed).fill_bytes(&mut buf);
    (buf, RngTier::TimeSeeded)
}

/// Generate a random hex-encoded salt of `len` bytes.
pub fn generate_salt(len: usize) -> String {
    let (bytes, _tier) = random_bytes(len);
    hex::encode(bytes)
}

/// Generate a random hex-encoded token of `len` bytes.
///
/// Same byte source as salt generation.
pub fn generate_token(len: usize) -> String {
    generate_salt(len)
}

/// Hash a password into a storable digest.
///
/// When `salt` is `None`, a fresh random salt of [`DEFAULT_SALT_LEN`]
/// bytes is generated. The digest is
/// `salt + ":" + hex(SHA-256(password ++ salt))`, all lowercase hex.
///
/// # Examples
///
/// ```
/// use doorman::auth::crypto::hash_password;
///
/// let digest = hash_password("Secret123", None);
/// assert_eq!(digest.split(':').count(), 2);
/// ```
pub fn hash_password(password: &str, salt: Option<&str>) -> String {
    let salt = match salt {
        Some(s) => s.to_string(),
        None => generate_salt(DEFAULT_SALT_LEN),
    };

    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    let digest = hasher.finalize();

    format!("{}:{}", salt, hex::encode(digest))
}

/// Verify a password against a stored digest.
///
/// Splits the stored digest on the first `:` into salt and expected
/// hash, recomputes, and compares the hex portions byte-for-byte. A
/// digest without a `:` fails verification; this function never panics.
///
/// # Examples
///
/// ```
/// use doorman::auth::crypto::{hash_password, verify_password};
///
/// let digest = hash_password("Secret123", None);
/// assert!(verify_password("Secret123", &digest));
/// assert!(!verify_password("wrong", &digest));
/// assert!(!verify_password("Secret123", "no-colon-here"));
/// ```
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, expected)) = stored.split_once(':') else {
        return false;
    };

    let recomputed = hash_password(password, Some(salt));
    let Some((_, computed)) = recomputed.split_once(':') else {
        return false;
    };

    computed == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify_round_trip() {
        let digest = hash_password("test_password_123", None);
        assert!(verify_password("test_password_123", &digest));
    }

    #[test]
    fn test_verify_wrong_password() {
        let digest = hash_password("correct_password", None);
        assert!(!verify_password("wrong_password", &digest));
    }

    #[test]
    fn test_digest_shape() {
        let digest = hash_password("anything", None);
        let (salt, hash) = digest.split_once(':').unwrap();
        // Default 16-byte salt -> 32 hex chars; SHA-256 -> 64 hex chars
        assert_eq!(salt.len(), DEFAULT_SALT_LEN * 2);
        assert_eq!(hash.len(), 64);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_with_explicit_salt_is_deterministic() {
        let a = hash_password("password", Some("abcdef0123456789"));
        let b = hash_password("password", Some("abcdef0123456789"));
        assert_eq!(a, b);
        assert!(a.starts_with("abcdef0123456789:"));
    }

    #[test]
    fn test_hash_different_salts() {
        let a = hash_password("same_password", None);
        let b = hash_password("same_password", None);
        // Fresh random salts should produce different digests
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_malformed_digest() {
        assert!(!verify_password("anything", "no-colon-here"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn test_verify_empty_password() {
        let digest = hash_password("", None);
        assert!(verify_password("", &digest));
        assert!(!verify_password("x", &digest));
    }

    #[test]
    fn test_generate_token_length() {
        let token = generate_token(DEFAULT_TOKEN_LEN);
        assert_eq!(token.len(), DEFAULT_TOKEN_LEN * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_token_unique() {
        assert_ne!(generate_token(16), generate_token(16));
    }

    #[test]
    fn test_random_bytes_tier() {
        let (bytes, tier) = random_bytes(16);
        assert_eq!(bytes.len(), 16);
        // OS entropy should be available in the test environment
        assert_eq!(tier, RngTier::OsEntropy);
    }

    #[test]
    fn test_rng_tier_labels() {
        assert_eq!(RngTier::OsEntropy.as_str(), "os_entropy");
        assert_eq!(RngTier::ThreadLocal.as_str(), "thread_local");
        assert_eq!(RngTier::TimeSeeded.as_str(), "time_seeded");
    }

    #[test]
    fn test_password_with_unicode() {
        let digest = hash_password("パスワード123", None);
        assert!(verify_password("パスワード123", &digest));
    }
}
