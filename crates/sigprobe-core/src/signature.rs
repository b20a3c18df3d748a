//! Byte signature parsing.
//!
//! Signatures arrive as hex strings ("41 8B 44 80 18"); whitespace is
//! stripped before decoding, so "418B448018" is equally valid. Compiled
//! once at construction, byte-exact, no wildcards.

use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    bytes: Vec<u8>,
}

impl Signature {
    /// Compile a hex pattern string into a byte signature.
    pub fn parse(pattern: &str) -> Result<Self> {
        let cleaned: String = pattern
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        if cleaned.is_empty() {
            return Err(Error::InvalidSignature("pattern is empty".to_string()));
        }
        if !cleaned.len().is_multiple_of(2) {
            return Err(Error::InvalidSignature(format!(
                "odd number of hex digits in '{}'",
                pattern.trim()
            )));
        }

        let mut bytes = Vec::with_capacity(cleaned.len() / 2);
        for pair in cleaned.as_bytes().chunks(2) {
            let hi = hex_digit(pair[0])?;
            let lo = hex_digit(pair[1])?;
            bytes.push((hi << 4) | lo);
        }

        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn hex_digit(byte: u8) -> Result<u8> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        other => Err(Error::InvalidSignature(format!(
            "invalid hex character '{}'",
            other as char
        ))),
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&formatted)
    }
}
