//! Rendering of a computed discriminator.

use std::io::Write;

use anchor_discriminator::{Discriminator, DiscriminatorError};
use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::OutputFormat;

/// Everything printed for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Namespace that scoped the name
    pub namespace: String,
    /// Instruction, account or event name
    pub name: String,
    /// Computed bytes
    pub discriminator: Discriminator,
    /// Rust array literal form of `discriminator`
    pub literal: String,
}

impl Report {
    /// Compute the discriminator of `name` in `namespace`.
    pub fn new(namespace: &str, name: &str) -> Self {
        let discriminator = Discriminator::compute(namespace, name);
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            literal: discriminator.to_string(),
            discriminator,
        }
    }

    /// Write the report in the requested format.
    pub fn render<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => self.write_json(out),
        }
    }

    /// Four labelled lines.
    ///
    /// Raw bytes are printed as a Rust integer array (`[175, 175, ...]`) so
    /// both lines read as Rust source.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        let write = |out: &mut W| -> std::io::Result<()> {
            writeln!(out, "Namespace: {}", self.namespace)?;
            writeln!(out, "Name:      {}", self.name)?;
            writeln!(out, "Discriminator (raw bytes): {:?}", self.discriminator.bytes())?;
            writeln!(out, "Rust literal: {}", self.literal)
        };
        write(out).context("failed to write report")
    }

    /// One pretty-printed JSON object followed by a newline.
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self).context("failed to serialize report")?;
        writeln!(out).context("failed to write report")
    }

    /// Check the computed value against an expected literal.
    pub fn verify(&self, expected: &Discriminator) -> Result<(), DiscriminatorError> {
        self.discriminator.verify(expected)
    }
}
