//! Error types for chainaddr.
//!
//! This module provides the error hierarchy using `thiserror`. Address
//! derivation itself is total; errors come from key construction, decoding,
//! and registry configuration.

use thiserror::Error;

/// Result type alias using `ChainAddrError`.
pub type Result<T> = std::result::Result<T, ChainAddrError>;

/// Main error type for all chainaddr operations.
#[derive(Debug, Error)]
pub enum ChainAddrError {
    // ═══════════════════════════════════════════════════════════════════════════
    // KEY ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The point derivation rejected the private scalar (zero or >= n).
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Invalid key size.
    #[error("Invalid key: expected {expected} bytes, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    // ═══════════════════════════════════════════════════════════════════════════
    // DECODING ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Input could not be decoded into key or address bytes.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Invalid hex encoding.
    #[error("Invalid hex encoding: {0}")]
    HexError(#[from] hex::FromHexError),

    /// Address string is structurally wrong (length, prefix, alphabet).
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Embedded checksum does not match the recomputed one.
    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    // ═══════════════════════════════════════════════════════════════════════════
    // ENCODING ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Word swap was asked to reorder a buffer with a partial trailing word.
    #[error("Buffer of {len} bytes is not a whole number of 32-bit words")]
    UnalignedBuffer { len: usize },

    /// The chain has no parameters for the requested encoding.
    #[error("Chain '{chain}' does not support {encoding} encoding")]
    UnsupportedEncoding { chain: String, encoding: &'static str },

    /// Codec failure surfaced by an encoding backend.
    #[error("Encoding failed: {0}")]
    EncodingError(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Chain registry configuration is inconsistent.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ChainAddrError {
    /// Returns true if this error came from key material.
    pub fn is_key_error(&self) -> bool {
        matches!(
            self,
            ChainAddrError::InvalidKey(_) | ChainAddrError::InvalidKeySize { .. }
        )
    }

    /// Returns true if this error came from decoding untrusted input.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            ChainAddrError::DecodeError(_)
                | ChainAddrError::HexError(_)
                | ChainAddrError::InvalidAddress(_)
                | ChainAddrError::ChecksumMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChainAddrError::InvalidKeySize {
            expected: 32,
            actual: 31,
        };
        assert!(err.to_string().contains("32"));
        assert!(err.to_string().contains("31"));

        let err = ChainAddrError::UnalignedBuffer { len: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_error_classification() {
        assert!(ChainAddrError::InvalidKey("zero".into()).is_key_error());
        assert!(!ChainAddrError::InvalidKey("zero".into()).is_decode_error());

        assert!(ChainAddrError::DecodeError("empty".into()).is_decode_error());
        assert!(ChainAddrError::ChecksumMismatch {
            expected: "00".into(),
            actual: "01".into(),
        }
        .is_decode_error());
        assert!(!ChainAddrError::ConfigError("x".into()).is_decode_error());
    }

    #[test]
    fn test_hex_error_conversion() {
        let hex_result = hex::decode("zz");
        let result: Result<Vec<u8>> = hex_result.map_err(ChainAddrError::from);
        assert!(matches!(result, Err(ChainAddrError::HexError(_))));
    }
}
