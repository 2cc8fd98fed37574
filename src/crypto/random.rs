//! Salt and IV generation.
//!
//! Both draw from the operating system's secure random source via
//! `getrandom`. Entropy failure is surfaced as
//! `VaultError::RandomSourceUnavailable` — there is no fallback to a
//! weaker generator.

use crate::crypto::{IV_SIZE, SALT_SIZE};
use crate::errors::{Result, VaultError};

/// Fill `buf` with cryptographically secure random bytes.
fn secure_random(buf: &mut [u8]) -> Result<()> {
    getrandom::getrandom(buf).map_err(|e| VaultError::RandomSourceUnavailable(e.to_string()))
}

/// Generate a fresh random salt for key derivation.
///
/// Each call returns an independent value; the salt is stored in the
/// container and is not secret.
pub fn generate_salt() -> Result<[u8; SALT_SIZE]> {
    let mut salt = [0u8; SALT_SIZE];
    secure_random(&mut salt)?;
    Ok(salt)
}

/// Generate a fresh random initialization vector.
///
/// Must never be reused under the same key; the orchestrator calls this
/// once per encryption and stores the result in the container.
pub fn generate_iv() -> Result<[u8; IV_SIZE]> {
    let mut iv = [0u8; IV_SIZE];
    secure_random(&mut iv)?;
    Ok(iv)
}
