//! FileVault — password-based authenticated file encryption.
//!
//! The engine derives a key from a password with PBKDF2-HMAC-SHA256,
//! encrypts with AES-256-GCM, and packs everything needed to reverse
//! the operation into a single container blob:
//!
//! ```text
//! [salt: 16 bytes][iv: 12 bytes][ciphertext + GCM tag]
//! ```
//!
//! File I/O, CLI handling, and directory traversal are the caller's
//! responsibility — the engine works purely on in-memory byte buffers.
//!
//! ```
//! use filevault::{FileVault, PasswordPolicy, VaultConfig};
//!
//! let vault = FileVault::new(VaultConfig {
//!     iterations: 1_000, // keep doctests fast; default is 600 000
//!     policy: PasswordPolicy::default(),
//! });
//!
//! let container = vault.encrypt_file("correct horse", b"battery staple")?;
//! let plaintext = vault.decrypt_file("correct horse", &container)?;
//! assert_eq!(plaintext, b"battery staple");
//! # Ok::<(), filevault::VaultError>(())
//! ```

pub mod crypto;
pub mod errors;
pub mod vault;

// Re-export the public surface.
pub use crypto::{
    derive_key, generate_iv, generate_salt, validate_password, DerivedKey, PasswordPolicy,
    PolicyViolation, ITERATIONS, IV_SIZE, KEY_SIZE, SALT_SIZE, TAG_SIZE,
};
pub use errors::{Result, VaultError};
pub use vault::{Container, FileVault, VaultConfig};
