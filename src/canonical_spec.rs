//! Canonical Format Specification
//!
//! Byte-level conventions shared by every part of the tree engine: digest
//! width, hex rendering of commitments, and construction defaults.
//! Integers are always encoded big-endian.

/// Digest format constants
pub mod digest_format {
    /// Width of every digest produced by the supported hash functions
    pub const DIGEST_LEN: usize = 32;

    /// Prefix used when a digest or integer leaf is rendered as hex
    pub const HEX_PREFIX: &str = "0x";
}

/// Tree configuration constants
pub mod tree_config {
    /// Minimum nodes in a level before pairing switches to rayon
    pub const PARALLEL_THRESHOLD: usize = 1000;

    /// Leaf count below which a tree is flagged as degenerate
    pub const MIN_NON_DEGENERATE_LEAVES: usize = 2;
}

/// Render a digest as `0x`-prefixed lowercase hex
///
/// Leading zero bytes are kept, so the output is always
/// `2 + 2 * DIGEST_LEN` characters for a full digest.
pub fn prefixed_hex(bytes: &[u8]) -> String {
    format!("{}{}", digest_format::HEX_PREFIX, hex::encode(bytes))
}

/// Strip an optional `0x` / `0X` prefix
pub fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_hex_keeps_leading_zeros() {
        let mut digest = [0u8; digest_format::DIGEST_LEN];
        digest[31] = 0x01;

        let rendered = prefixed_hex(&digest);
        assert_eq!(rendered.len(), 2 + 2 * digest_format::DIGEST_LEN);
        assert!(rendered.starts_with("0x0000"));
        assert!(rendered.ends_with("01"));
    }

    #[test]
    fn test_strip_hex_prefix() {
        assert_eq!(strip_hex_prefix("0xabc"), Some("abc"));
        assert_eq!(strip_hex_prefix("0XABC"), Some("ABC"));
        assert_eq!(strip_hex_prefix("abc"), None);
    }
}
