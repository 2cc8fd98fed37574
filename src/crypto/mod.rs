//! Cryptographic primitives for FileVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`cipher`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - Salt and IV generation from the OS secure random source (`random`)
//! - Password strength validation (`password`)

pub mod cipher;
pub mod kdf;
pub mod password;
pub mod random;

// Re-export the most commonly used items so callers can write:
//   use filevault::crypto::{derive_key, generate_salt, ...};
pub use cipher::{decrypt, encrypt};
pub use kdf::{derive_key, DerivedKey};
pub use password::{validate_password, PasswordPolicy, PolicyViolation};
pub use random::{generate_iv, generate_salt};

/// Length of the key-derivation salt (16 bytes / 128 bits).
pub const SALT_SIZE: usize = 16;
/// Length of the AES-256-GCM initialization vector (12 bytes / 96 bits).
pub const IV_SIZE: usize = 12;
/// Length of the derived encryption key (32 bytes for AES-256).
pub const KEY_SIZE: usize = 32;
/// Length of the GCM authentication tag appended to the ciphertext.
pub const TAG_SIZE: usize = 16;

/// Default PBKDF2 iteration count.
///
/// Matches current OWASP guidance for PBKDF2-HMAC-SHA256. Fixed
/// process-wide: the container format does not persist it, so changing
/// this value breaks decryption of previously produced containers.
pub const ITERATIONS: u32 = 600_000;
