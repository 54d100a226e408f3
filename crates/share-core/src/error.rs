//! Error type shared by every share reconstruction step.

use alloc::string::String;

use thiserror::Error;

/// Errors raised while decoding or verifying a share.
///
/// Every variant names the field that failed so callers can report exactly
/// which part of a submission was defective.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShareError {
    /// Hex input had odd length or a non-hex character.
    #[error("invalid hex in {field}: {reason}")]
    Decode {
        field: String,
        reason: hex::FromHexError,
    },

    /// A fixed-width field decoded to the wrong number of bytes.
    #[error("{field} must be {expected} bytes, got {actual}")]
    InvalidFieldLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// The reconstructed block hash differs from the one the share claimed.
    #[error("block hash mismatch: computed {computed}, claimed {claimed}")]
    HashMismatch { computed: String, claimed: String },
}

impl ShareError {
    /// Name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ShareError::Decode { field, .. } => field,
            ShareError::InvalidFieldLength { field, .. } => field,
            ShareError::HashMismatch { .. } => "block_hash",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_messages_name_the_field() {
        let err = ShareError::InvalidFieldLength {
            field: "nonce".to_string(),
            expected: 8,
            actual: 4,
        };
        assert_eq!(err.to_string(), "nonce must be 8 bytes, got 4");
        assert_eq!(err.field(), "nonce");

        let err = ShareError::Decode {
            field: "coinb1".to_string(),
            reason: hex::FromHexError::OddLength,
        };
        assert!(err.to_string().starts_with("invalid hex in coinb1"));
    }
}
