//! Discriminator error types.

use thiserror::Error;

use crate::domain::discriminator::Discriminator;

/// Errors raised while parsing or checking discriminators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscriminatorError {
    /// Literal is not enclosed in square brackets
    #[error("Literal must be enclosed in square brackets: {0:?}")]
    MissingBrackets(String),

    /// Literal has the wrong number of entries
    #[error("Wrong number of bytes: expected {expected}, got {actual}")]
    WrongLength {
        /// Expected number of bytes
        expected: usize,
        /// Number of entries found in the literal
        actual: usize,
    },

    /// Literal entry is not a single hex byte
    #[error("Invalid byte at index {index}: {token:?}")]
    InvalidByte {
        /// Zero-based position of the entry
        index: usize,
        /// The offending entry, trimmed
        token: String,
    },

    /// Computed discriminator differs from the expected one
    #[error("Discriminator mismatch: expected {expected}, computed {actual}")]
    Mismatch {
        /// Discriminator the caller expected
        expected: Discriminator,
        /// Discriminator that was computed
        actual: Discriminator,
    },
}
