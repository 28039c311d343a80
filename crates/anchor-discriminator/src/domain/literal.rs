//! Rust array literal form of byte sequences.
//!
//! Renders `[0xaf, 0xaf, ...]` and parses the same shape back, so values can
//! be pasted straight into or out of Rust constants.

use super::discriminator::DISCRIMINATOR_LEN;
use crate::error::DiscriminatorError;

/// Render bytes as `[0xHH, 0xHH, ...]` with lowercase, zero-padded digits.
pub fn format_bytes(bytes: &[u8]) -> String {
    let entries: Vec<String> = bytes.iter().map(|b| format!("0x{:02x}", b)).collect();
    format!("[{}]", entries.join(", "))
}

/// Parse a bracketed literal of exactly [`DISCRIMINATOR_LEN`] hex bytes.
///
/// Entries may carry a `0x`/`0X` prefix and use either case. A single
/// trailing comma is accepted, as in Rust source.
pub fn parse_literal(literal: &str) -> Result<[u8; DISCRIMINATOR_LEN], DiscriminatorError> {
    let inner = literal
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| DiscriminatorError::MissingBrackets(literal.to_string()))?;

    let mut tokens: Vec<&str> = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(str::trim).collect()
    };
    if tokens.len() > 1 && tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }

    if tokens.len() != DISCRIMINATOR_LEN {
        return Err(DiscriminatorError::WrongLength {
            expected: DISCRIMINATOR_LEN,
            actual: tokens.len(),
        });
    }

    let mut bytes = [0u8; DISCRIMINATOR_LEN];
    for (index, token) in tokens.into_iter().enumerate() {
        bytes[index] = parse_byte(token).ok_or_else(|| DiscriminatorError::InvalidByte {
            index,
            token: token.to_string(),
        })?;
    }
    Ok(bytes)
}

fn parse_byte(token: &str) -> Option<u8> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}
