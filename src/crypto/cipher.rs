//! AES-256-GCM authenticated encryption.
//!
//! GCM appends a 16-byte authentication tag to the ciphertext, so a
//! wrong key (wrong password) and a tampered ciphertext both fail the
//! tag check deterministically instead of decrypting to garbage.
//!
//! The IV is supplied by the caller rather than generated here: the
//! container format owns where the IV lives, and decryption must reuse
//! the exact IV read back from the container.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::crypto::{DerivedKey, IV_SIZE};
use crate::errors::{Result, VaultError};

/// Encrypt `plaintext` under `key` with the given IV.
///
/// Total for well-formed inputs; the returned ciphertext is the
/// plaintext length plus the 16-byte GCM tag. The IV must be fresh —
/// reusing one under the same key destroys GCM's guarantees.
pub fn encrypt(key: &DerivedKey, iv: &[u8; IV_SIZE], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| VaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    cipher
        .encrypt(Nonce::from_slice(iv), plaintext)
        .map_err(|e| VaultError::EncryptionFailed(format!("encryption error: {e}")))
}

/// Decrypt data produced by `encrypt` with the same key and IV.
///
/// Fails with `DecryptionFailed` when the tag does not verify. The
/// error carries no detail: a wrong password and corrupted data are
/// indistinguishable by design.
pub fn decrypt(key: &DerivedKey, iv: &[u8; IV_SIZE], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| VaultError::DecryptionFailed)?;

    cipher
        .decrypt(Nonce::from_slice(iv), ciphertext)
        .map_err(|_| VaultError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{derive_key, TAG_SIZE};

    fn test_key() -> DerivedKey {
        derive_key(b"test-password", &[9u8; 16], 1_000).unwrap()
    }

    #[test]
    fn roundtrip() {
        let key = test_key();
        let iv = [3u8; IV_SIZE];
        let plaintext = b"attack at dawn";

        let ciphertext = encrypt(&key, &iv, plaintext).expect("encrypt");
        assert_eq!(ciphertext.len(), plaintext.len() + TAG_SIZE);

        let recovered = decrypt(&key, &iv, &ciphertext).expect("decrypt");
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn empty_plaintext_roundtrip() {
        let key = test_key();
        let iv = [5u8; IV_SIZE];

        let ciphertext = encrypt(&key, &iv, b"").expect("encrypt");
        // Even empty plaintext carries the authentication tag.
        assert_eq!(ciphertext.len(), TAG_SIZE);

        let recovered = decrypt(&key, &iv, &ciphertext).expect("decrypt");
        assert!(recovered.is_empty());
    }

    #[test]
    fn wrong_key_fails() {
        let key = test_key();
        let wrong_key = derive_key(b"other-password", &[9u8; 16], 1_000).unwrap();
        let iv = [4u8; IV_SIZE];

        let ciphertext = encrypt(&key, &iv, b"secret").expect("encrypt");
        let result = decrypt(&wrong_key, &iv, &ciphertext);

        assert!(matches!(result, Err(VaultError::DecryptionFailed)));
    }

    #[test]
    fn wrong_iv_fails() {
        let key = test_key();

        let ciphertext = encrypt(&key, &[1u8; IV_SIZE], b"secret").expect("encrypt");
        let result = decrypt(&key, &[2u8; IV_SIZE], &ciphertext);

        assert!(matches!(result, Err(VaultError::DecryptionFailed)));
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let key = test_key();
        let iv = [6u8; IV_SIZE];

        let mut ciphertext = encrypt(&key, &iv, b"secret").expect("encrypt");
        ciphertext[0] ^= 0x01;

        let result = decrypt(&key, &iv, &ciphertext);
        assert!(matches!(result, Err(VaultError::DecryptionFailed)));
    }

    #[test]
    fn truncated_ciphertext_fails() {
        let key = test_key();
        let iv = [7u8; IV_SIZE];

        // Shorter than the tag itself can never authenticate.
        let result = decrypt(&key, &iv, &[0u8; 5]);
        assert!(matches!(result, Err(VaultError::DecryptionFailed)));
    }
}
