//! Password strength validation.
//!
//! Runs on the encryption path before key derivation. The decryption
//! path never re-validates: a wrong but "strong" password is allowed to
//! attempt decryption and simply fails the authentication check.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

/// Password policy enforced before a password is accepted for
/// key derivation.
///
/// Every field has a default so the engine works out-of-the-box:
/// minimum length 8, no character-class requirements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Minimum password length in characters.
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Require at least one uppercase and one lowercase letter.
    #[serde(default)]
    pub require_mixed_case: bool,

    /// Require at least one ASCII digit.
    #[serde(default)]
    pub require_digit: bool,

    /// Require at least one character that is neither alphanumeric
    /// nor whitespace.
    #[serde(default)]
    pub require_symbol: bool,
}

fn default_min_length() -> usize {
    8
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            require_mixed_case: false,
            require_digit: false,
            require_symbol: false,
        }
    }
}

/// A single rule violated by a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    /// Shorter than `min_length` characters.
    TooShort { min_length: usize, actual: usize },
    /// Missing an uppercase or lowercase letter.
    MissingMixedCase,
    /// Missing a digit.
    MissingDigit,
    /// Missing a symbol character.
    MissingSymbol,
}

impl std::fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyViolation::TooShort { min_length, actual } => {
                write!(f, "must be at least {min_length} characters (got {actual})")
            }
            PolicyViolation::MissingMixedCase => {
                write!(f, "must contain both uppercase and lowercase letters")
            }
            PolicyViolation::MissingDigit => write!(f, "must contain a digit"),
            PolicyViolation::MissingSymbol => write!(f, "must contain a symbol"),
        }
    }
}

/// Validate `password` against `policy`.
///
/// Pure check with no side effects. On failure returns
/// `VaultError::WeakPassword` listing **every** violated rule, so a
/// caller can report them all at once instead of one per attempt.
pub fn validate_password(password: &str, policy: &PasswordPolicy) -> Result<()> {
    let mut violations = Vec::new();

    let char_count = password.chars().count();
    if char_count < policy.min_length {
        violations.push(PolicyViolation::TooShort {
            min_length: policy.min_length,
            actual: char_count,
        });
    }

    if policy.require_mixed_case {
        let has_upper = password.chars().any(|c| c.is_uppercase());
        let has_lower = password.chars().any(|c| c.is_lowercase());
        if !(has_upper && has_lower) {
            violations.push(PolicyViolation::MissingMixedCase);
        }
    }

    if policy.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(PolicyViolation::MissingDigit);
    }

    if policy.require_symbol {
        let has_symbol = password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace());
        if !has_symbol {
            violations.push(PolicyViolation::MissingSymbol);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(VaultError::WeakPassword(violations))
    }
}
