use thiserror::Error;

use crate::crypto::password::PolicyViolation;

/// All errors that can occur in FileVault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Password policy ---
    #[error("Weak password: {}", format_violations(.0))]
    WeakPassword(Vec<PolicyViolation>),

    // --- Crypto errors ---
    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Deliberately carries no detail: wrong password and tampered
    /// ciphertext must be indistinguishable to the caller.
    #[error("Decryption failed — wrong password or corrupted data")]
    DecryptionFailed,

    // --- Container errors ---
    #[error("Malformed container: {0}")]
    MalformedContainer(String),
}

fn format_violations(violations: &[PolicyViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience type alias for FileVault results.
pub type Result<T> = std::result::Result<T, VaultError>;
