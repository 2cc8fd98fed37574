//! Container byte format.
//!
//! A container is the serialized form of one encrypted file:
//!
//! ```text
//! [salt: SALT_SIZE bytes][iv: IV_SIZE bytes][ciphertext + tag: rest]
//! ```
//!
//! The offsets are fixed because the salt and IV sizes are constants;
//! this layout is the interoperability contract — any implementation
//! must match it byte-for-byte to read existing containers. There is
//! no compression and no extra metadata.

use crate::crypto::{IV_SIZE, SALT_SIZE};
use crate::errors::{Result, VaultError};

/// Minimum container length: a salt and an IV with empty ciphertext.
pub const MIN_LEN: usize = SALT_SIZE + IV_SIZE;

/// One parsed (or to-be-serialized) encrypted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub salt: [u8; SALT_SIZE],
    pub iv: [u8; IV_SIZE],
    pub ciphertext: Vec<u8>,
}

impl Container {
    /// Serialize to the on-disk byte layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(MIN_LEN + self.ciphertext.len());
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.iv);
        buf.extend_from_slice(&self.ciphertext);
        buf
    }

    /// Parse a container from raw bytes.
    ///
    /// Structural check only — no key material is involved, which is
    /// what makes `MalformedContainer` legitimately distinguishable
    /// from `DecryptionFailed`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < MIN_LEN {
            return Err(VaultError::MalformedContainer(format!(
                "{} bytes is too short, need at least {MIN_LEN}",
                data.len()
            )));
        }

        // Lengths are checked above, so these conversions cannot fail.
        let salt: [u8; SALT_SIZE] = data[..SALT_SIZE]
            .try_into()
            .map_err(|_| VaultError::MalformedContainer("bad salt field".into()))?;
        let iv: [u8; IV_SIZE] = data[SALT_SIZE..MIN_LEN]
            .try_into()
            .map_err(|_| VaultError::MalformedContainer("bad iv field".into()))?;
        let ciphertext = data[MIN_LEN..].to_vec();

        Ok(Self {
            salt,
            iv,
            ciphertext,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let container = Container {
            salt: [1u8; SALT_SIZE],
            iv: [2u8; IV_SIZE],
            ciphertext: vec![3u8; 40],
        };

        let bytes = container.to_bytes();
        let parsed = Container::from_bytes(&bytes).unwrap();

        assert_eq!(parsed, container);
    }

    #[test]
    fn layout_offsets_are_fixed() {
        let container = Container {
            salt: [0xAA; SALT_SIZE],
            iv: [0xBB; IV_SIZE],
            ciphertext: vec![0xCC; 3],
        };

        let bytes = container.to_bytes();
        assert_eq!(&bytes[..SALT_SIZE], &[0xAA; SALT_SIZE]);
        assert_eq!(&bytes[SALT_SIZE..MIN_LEN], &[0xBB; IV_SIZE]);
        assert_eq!(&bytes[MIN_LEN..], &[0xCC; 3]);
    }

    #[test]
    fn empty_ciphertext_is_structurally_valid() {
        let bytes = vec![0u8; MIN_LEN];
        let parsed = Container::from_bytes(&bytes).unwrap();
        assert!(parsed.ciphertext.is_empty());
    }

    #[test]
    fn too_short_input_rejected() {
        let result = Container::from_bytes(&[0u8; MIN_LEN - 1]);
        assert!(matches!(result, Err(VaultError::MalformedContainer(_))));
    }

    #[test]
    fn empty_input_rejected() {
        let result = Container::from_bytes(&[]);
        assert!(matches!(result, Err(VaultError::MalformedContainer(_))));
    }
}
