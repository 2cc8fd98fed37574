//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! PBKDF2 is an iterated, HMAC-based KDF: the iteration count makes
//! offline brute-force deliberately expensive. The same password, salt,
//! and iteration count always produce the same key — that determinism
//! is what lets decryption reconstruct the encryption key.

use hmac::Hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::crypto::KEY_SIZE;
use crate::errors::{Result, VaultError};

/// A derived 32-byte encryption key that zeroes its memory when
/// dropped.
///
/// Keys live only for the duration of a single encrypt or decrypt
/// call; they are never cached or persisted.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Access the raw key bytes (e.g. to build a cipher instance).
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

/// Derive a 32-byte key from a password and salt.
///
/// A wrong password does not fail here — it derives a different,
/// valid-looking key, and the mismatch is caught by the GCM tag check
/// at decrypt time. `KeyDerivationFailed` indicates a configuration
/// bug (iteration count of zero), not a user error.
pub fn derive_key(password: &[u8], salt: &[u8], iterations: u32) -> Result<DerivedKey> {
    if iterations < 1 {
        return Err(VaultError::KeyDerivationFailed(
            "iteration count must be at least 1".into(),
        ));
    }

    let mut bytes = [0u8; KEY_SIZE];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut bytes)
        .map_err(|e| VaultError::KeyDerivationFailed(format!("PBKDF2 failed: {e}")))?;

    Ok(DerivedKey { bytes })
}
