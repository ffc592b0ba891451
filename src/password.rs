//! Hashing and verification of per-post delete passwords.
//!
//! Every thread and reply carries a shared secret chosen by its author;
//! whoever presents it may delete the content. The plaintext is never
//! stored, only an Argon2id PHC string with a per-call random salt.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use rand_core::OsRng;
use thiserror::Error;

/// Errors from the password codec.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// The hashing transform itself failed.
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Build the Argon2id hasher with fixed cost parameters.
///
/// Sized for anonymous-post delete secrets, not login credentials:
/// 19 MiB memory, 2 iterations, 1 lane.
fn argon2() -> Argon2<'static> {
    let params = Params::new(19_456, 2, 1, None).expect("valid Argon2 params");
    Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
}

/// Hash a delete password.
///
/// Returns a PHC-formatted string embedding the salt and parameters.
/// Two calls with the same plaintext produce different digests.
pub fn hash_delete_password(plain: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = argon2()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;
    Ok(digest.to_string())
}

/// Verify a plaintext against a stored digest.
///
/// Fails closed: a malformed digest or any internal verifier error counts
/// as a non-match, so callers only ever observe a yes/no answer.
pub fn verify_delete_password(plain: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };
    // Parameters come from the parsed digest, not from argon2().
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_produces_phc_string() {
        let digest = hash_delete_password("pwd").unwrap();
        assert!(digest.starts_with("$argon2id$"));
        assert!(digest.contains("$v=19$"));
    }

    #[test]
    fn test_hash_salts_per_call() {
        let a = hash_delete_password("same secret").unwrap();
        let b = hash_delete_password("same secret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_round_trip() {
        let digest = hash_delete_password("open sesame").unwrap();
        assert!(verify_delete_password("open sesame", &digest));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let digest = hash_delete_password("open sesame").unwrap();
        assert!(!verify_delete_password("close sesame", &digest));
    }

    #[test]
    fn test_verify_fails_closed_on_garbage_digest() {
        assert!(!verify_delete_password("anything", "not a phc string"));
        assert!(!verify_delete_password("anything", ""));
    }

    #[test]
    fn test_empty_password_round_trip() {
        // The board puts no constraints on the secret itself.
        let digest = hash_delete_password("").unwrap();
        assert!(verify_delete_password("", &digest));
        assert!(!verify_delete_password("x", &digest));
    }

    #[test]
    fn test_unicode_password() {
        let digest = hash_delete_password("パスワード123").unwrap();
        assert!(verify_delete_password("パスワード123", &digest));
    }
}
