//! The FileVault encryption engine.
//!
//! This module provides:
//! - The fixed-offset container byte format (`container`)
//! - `VaultConfig` — the engine's explicit configuration
//! - `FileVault` — the orchestrator composing random generation, key
//!   derivation, encryption, and container assembly

pub mod container;

use serde::{Deserialize, Serialize};

use crate::crypto::password::{validate_password, PasswordPolicy};
use crate::crypto::{decrypt, derive_key, encrypt, generate_iv, generate_salt, ITERATIONS};
use crate::errors::Result;

pub use container::Container;

/// Engine configuration.
///
/// Modeled as an explicit value passed at construction (rather than
/// hidden module state) so tests can exercise alternate parameters.
/// The iteration count is process-wide: it is not persisted in the
/// container, so both sides of a round-trip must agree on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VaultConfig {
    /// PBKDF2 iteration count used for every derivation.
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Password policy enforced on the encryption path.
    #[serde(default)]
    pub policy: PasswordPolicy,
}

fn default_iterations() -> u32 {
    ITERATIONS
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            policy: PasswordPolicy::default(),
        }
    }
}

/// Password-based file encryption engine.
///
/// Stateless: each call is a self-contained transaction over its
/// inputs, with no key cache or shared mutable state, so a single
/// `FileVault` is safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileVault {
    config: VaultConfig,
}

impl FileVault {
    /// Create an engine with the given configuration.
    pub fn new(config: VaultConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Encrypt `plaintext` under `password`, producing container bytes.
    ///
    /// Every successful call uses a freshly generated salt and IV, so
    /// encrypting the same input twice yields different containers —
    /// that non-determinism is intentional and required.
    pub fn encrypt_file(&self, password: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
        // 1. Enforce the password policy before any key material exists.
        validate_password(password, &self.config.policy)?;

        // 2. Fresh salt and IV for this operation only.
        let salt = generate_salt()?;
        let iv = generate_iv()?;

        // 3. Derive the key; zeroized on drop at the end of this call.
        let key = derive_key(password.as_bytes(), &salt, self.config.iterations)?;

        // 4. Encrypt and authenticate.
        let ciphertext = encrypt(&key, &iv, plaintext)?;

        // 5. Bind salt, IV, and ciphertext into one blob.
        Ok(Container {
            salt,
            iv,
            ciphertext,
        }
        .to_bytes())
    }

    /// Decrypt container bytes produced by `encrypt_file`.
    ///
    /// The password is not re-validated here: a wrong but policy-passing
    /// password derives a different key and fails the authentication
    /// check, surfacing as `DecryptionFailed` — indistinguishable from
    /// tampered ciphertext. `MalformedContainer` is the one structural
    /// failure reported before any cryptography runs.
    pub fn decrypt_file(&self, password: &str, container_bytes: &[u8]) -> Result<Vec<u8>> {
        // 1. Parse the fixed-offset layout.
        let container = Container::from_bytes(container_bytes)?;

        // 2. Re-derive the key from the embedded salt.
        let key = derive_key(
            password.as_bytes(),
            &container.salt,
            self.config.iterations,
        )?;

        // 3. Decrypt; the GCM tag catches wrong passwords and tampering.
        decrypt(&key, &container.iv, &container.ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VaultError;

    fn fast_vault() -> FileVault {
        FileVault::new(VaultConfig {
            iterations: 1_000,
            policy: PasswordPolicy::default(),
        })
    }

    #[test]
    fn encrypt_then_decrypt_recovers_plaintext() {
        let vault = fast_vault();

        let container = vault
            .encrypt_file("correct horse", b"battery staple")
            .expect("encrypt");
        let plaintext = vault
            .decrypt_file("correct horse", &container)
            .expect("decrypt");

        assert_eq!(plaintext, b"battery staple");
    }

    #[test]
    fn weak_password_rejected_before_encryption() {
        let vault = fast_vault();
        let result = vault.encrypt_file("short", b"data");
        assert!(matches!(result, Err(VaultError::WeakPassword(_))));
    }

    #[test]
    fn zero_iterations_is_a_configuration_bug() {
        let vault = FileVault::new(VaultConfig {
            iterations: 0,
            policy: PasswordPolicy::default(),
        });
        let result = vault.encrypt_file("long enough password", b"data");
        assert!(matches!(result, Err(VaultError::KeyDerivationFailed(_))));
    }

    #[test]
    fn mismatched_iteration_counts_fail_decryption() {
        // The container does not persist the iteration count, so both
        // sides must agree on it.
        let writer = FileVault::new(VaultConfig {
            iterations: 1_000,
            policy: PasswordPolicy::default(),
        });
        let reader = FileVault::new(VaultConfig {
            iterations: 2_000,
            policy: PasswordPolicy::default(),
        });

        let container = writer.encrypt_file("correct horse", b"data").unwrap();
        let result = reader.decrypt_file("correct horse", &container);

        assert!(matches!(result, Err(VaultError::DecryptionFailed)));
    }
}
