//! # Anchor Discriminator
//!
//! Derives the 8-byte discriminators Anchor programs use to tag instructions,
//! accounts and events in their binary encoding.
//!
//! ## Derivation
//!
//! ```text
//! "{namespace}:{name}" ──UTF-8──→ SHA-256 ──first 8 bytes──→ Discriminator
//! ```
//!
//! ## Components
//!
//! | Module | Contents |
//! |--------|----------|
//! | `domain::discriminator` | `Discriminator` newtype and its derivation |
//! | `domain::literal` | Rust array literal rendering and parsing |
//! | `domain::namespace` | Well-known Anchor namespaces |
//! | `error` | `DiscriminatorError` |
//!
//! ## Usage Example
//!
//! ```
//! use anchor_discriminator::Discriminator;
//!
//! let disc = Discriminator::instruction("initialize");
//! assert_eq!(
//!     disc.to_string(),
//!     "[0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed]"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod error;

// Re-exports
pub use domain::discriminator::{preimage, Discriminator, DISCRIMINATOR_LEN};
pub use domain::literal::format_bytes;
pub use domain::namespace::{ACCOUNT, DEFAULT_NAMESPACE, EVENT, GLOBAL};
pub use error::DiscriminatorError;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
