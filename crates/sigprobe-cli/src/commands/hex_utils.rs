//! Hex parsing helpers shared by commands.

use anyhow::{Context, Result};

/// Parse a hex address with or without a `0x` prefix.
pub fn parse_hex_address(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    u64::from_str_radix(digits, 16).with_context(|| format!("invalid hex address '{}'", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_prefix() {
        assert_eq!(parse_hex_address("0x140000000").unwrap(), 0x140000000);
        assert_eq!(parse_hex_address("0X1f").unwrap(), 0x1F);
    }

    #[test]
    fn test_parse_without_prefix() {
        assert_eq!(parse_hex_address("1400").unwrap(), 0x1400);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_hex_address("zz").is_err());
        assert!(parse_hex_address("").is_err());
    }
}
