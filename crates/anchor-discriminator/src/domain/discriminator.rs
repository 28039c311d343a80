//! Discriminator derivation.
//!
//! A discriminator is the first [`DISCRIMINATOR_LEN`] bytes of
//! `SHA-256("{namespace}:{name}")`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::literal::{format_bytes, parse_literal};
use super::namespace::{ACCOUNT, EVENT, GLOBAL};
use crate::error::DiscriminatorError;

/// Number of bytes in a discriminator.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Build the string that gets hashed.
pub fn preimage(namespace: &str, name: &str) -> String {
    format!("{}:{}", namespace, name)
}

/// 8-byte identifier tagging an Anchor instruction, account or event.
///
/// `Display` renders the Rust array literal form, `{:x}` renders sixteen
/// contiguous hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Discriminator([u8; DISCRIMINATOR_LEN]);

impl Discriminator {
    /// Derive the discriminator for `name` scoped by `namespace`.
    pub fn compute(namespace: &str, name: &str) -> Self {
        let input = preimage(namespace, name);
        let digest = Sha256::digest(input.as_bytes());

        let mut bytes = [0u8; DISCRIMINATOR_LEN];
        bytes.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);

        debug!(preimage = %input, discriminator = %hex::encode(bytes), "Computed discriminator");
        Self(bytes)
    }

    /// Discriminator of an instruction handler (`global` namespace).
    pub fn instruction(name: &str) -> Self {
        Self::compute(GLOBAL, name)
    }

    /// Discriminator of an account type.
    pub fn account(name: &str) -> Self {
        Self::compute(ACCOUNT, name)
    }

    /// Discriminator of an event.
    pub fn event(name: &str) -> Self {
        Self::compute(EVENT, name)
    }

    /// Raw bytes.
    pub fn bytes(&self) -> [u8; DISCRIMINATOR_LEN] {
        self.0
    }

    /// Compact lowercase hex form, e.g. `afaf6d1f0d989bed`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Check that this discriminator equals `expected`.
    pub fn verify(&self, expected: &Discriminator) -> Result<(), DiscriminatorError> {
        if self == expected {
            Ok(())
        } else {
            Err(DiscriminatorError::Mismatch {
                expected: *expected,
                actual: *self,
            })
        }
    }
}

impl From<[u8; DISCRIMINATOR_LEN]> for Discriminator {
    fn from(bytes: [u8; DISCRIMINATOR_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Discriminator> for [u8; DISCRIMINATOR_LEN] {
    fn from(disc: Discriminator) -> Self {
        disc.0
    }
}

impl AsRef<[u8]> for Discriminator {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_bytes(&self.0))
    }
}

impl fmt::LowerHex for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Discriminator {
    type Err = DiscriminatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal(s).map(Self)
    }
}
