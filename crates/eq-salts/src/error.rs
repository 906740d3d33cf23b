//! Salt catalog errors.

use eq_core::EqError;
use thiserror::Error;

/// Result type for salt lookups and validation.
pub type SaltResult<T> = Result<T, SaltError>;

/// Errors raised while looking up or validating a salt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaltError {
    /// No catalog entry matches the identifier.
    #[error("Unknown salt: {id}")]
    UnknownSalt { id: String },

    /// Descriptor fails a chemical or numeric sanity check.
    #[error("Invalid salt {formula}: {what}")]
    Invalid { formula: String, what: &'static str },
}

impl From<SaltError> for EqError {
    fn from(err: SaltError) -> Self {
        match err {
            SaltError::UnknownSalt { .. } => EqError::InvalidArg { what: "unknown salt" },
            SaltError::Invalid { what, .. } => EqError::InvalidArg { what },
        }
    }
}
