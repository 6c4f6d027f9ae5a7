//! Salted PBKDF2 password hashes, stored as `base64(salt)$base64(hash)`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ring::rand::{SecureRandom, SystemRandom};
use ring::{digest, pbkdf2};
use std::num::NonZeroU32;
use thiserror::Error;

const ITERATIONS: NonZeroU32 = NonZeroU32::new(100_000).unwrap();
const SALT_LEN: usize = 16;
const HASH_LEN: usize = digest::SHA256_OUTPUT_LEN;
static ALGORITHM: pbkdf2::Algorithm = pbkdf2::PBKDF2_HMAC_SHA256;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to gather randomness for salt")]
    Random,
    #[error("stored password hash is malformed")]
    Malformed,
}

pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let mut salt = [0u8; SALT_LEN];
    SystemRandom::new().fill(&mut salt).map_err(|_| PasswordError::Random)?;

    let mut hash = [0u8; HASH_LEN];
    pbkdf2::derive(ALGORITHM, ITERATIONS, &salt, password.as_bytes(), &mut hash);

    Ok(format!("{}${}", STANDARD.encode(salt), STANDARD.encode(hash)))
}

/// Constant time comparison of `password` against a stored hash.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let (salt, hash) = stored.split_once('$').ok_or(PasswordError::Malformed)?;
    let salt = STANDARD.decode(salt).map_err(|_| PasswordError::Malformed)?;
    let hash = STANDARD.decode(hash).map_err(|_| PasswordError::Malformed)?;

    Ok(pbkdf2::verify(ALGORITHM, ITERATIONS, &salt, password.as_bytes(), &hash).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let stored = hash_password("rahasia").unwrap();
        assert!(verify_password("rahasia", &stored).unwrap());
        assert!(!verify_password("rahasib", &stored).unwrap());
    }

    #[test]
    fn test_salted() {
        assert_ne!(hash_password("rahasia").unwrap(), hash_password("rahasia").unwrap());
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(verify_password("x", "plaintext"), Err(PasswordError::Malformed)));
        assert!(matches!(verify_password("x", "!!$??"), Err(PasswordError::Malformed)));
    }
}
