//! anchor-disc: Anchor discriminator calculator
//!
//! Hashes `"{namespace}:{name}"` with SHA-256 and prints the first eight
//! bytes both as raw integers and as a Rust array literal ready to paste into
//! a `const`.
//!
//! ```text
//! $ anchor-disc initialize
//! Namespace: global
//! Name:      initialize
//! Discriminator (raw bytes): [175, 175, 109, 31, 13, 152, 155, 237]
//! Rust literal: [0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed]
//! ```

pub mod args;
pub mod config;
pub mod logging;
pub mod report;

pub use args::Args;
pub use config::{CliConfig, OutputFormat};
pub use report::Report;
