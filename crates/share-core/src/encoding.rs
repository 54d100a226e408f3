//! Hex decoding at the input boundary.
//!
//! Every binary field of a share arrives as a hex string. Decoding happens
//! here, before any hashing, and failures carry the name of the field.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::ShareError;

/// Decode a variable-length field.
pub fn decode_field(field: &str, hex_str: &str) -> Result<Vec<u8>, ShareError> {
    hex::decode(hex_str).map_err(|reason| ShareError::Decode {
        field: field.to_string(),
        reason,
    })
}

/// Decode a fixed-width field. Wrong widths are rejected, never padded.
pub fn decode_fixed<const N: usize>(field: &str, hex_str: &str) -> Result<[u8; N], ShareError> {
    let bytes = decode_field(field, hex_str)?;
    to_array(field, &bytes)
}

/// Copy a slice into a fixed-width array, checking its length.
pub fn to_array<const N: usize>(field: &str, bytes: &[u8]) -> Result<[u8; N], ShareError> {
    if bytes.len() != N {
        return Err(ShareError::InvalidFieldLength {
            field: field.to_string(),
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Encode bytes as lowercase hex.
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test]
    fn test_decode_field() {
        assert_eq!(decode_field("extranonce1", "99cfbade").unwrap(), vec![0x99, 0xcf, 0xba, 0xde]);
        assert_eq!(decode_field("extranonce1", "").unwrap(), Vec::<u8>::new());
    }

    #[test_case("abc"; "odd_length")]
    #[test_case("zz"; "non_hex_char")]
    #[test_case("0g"; "trailing_non_hex")]
    #[test_case("12 4"; "embedded_space")]
    fn test_decode_rejects_malformed(input: &str) {
        let err = decode_field("coinb2", input).unwrap_err();
        assert!(matches!(err, ShareError::Decode { ref field, .. } if field == "coinb2"));
    }

    #[test]
    fn test_decode_fixed_checks_width() {
        let nonce: [u8; 8] = decode_fixed("nonce", "40371d049700e893").unwrap();
        assert_eq!(nonce[0], 0x40);
        assert_eq!(nonce[7], 0x93);

        let err = decode_fixed::<8>("nonce", "40371d04").unwrap_err();
        assert_eq!(
            err,
            ShareError::InvalidFieldLength {
                field: "nonce".to_string(),
                expected: 8,
                actual: 4,
            }
        );
    }

    #[test]
    fn test_decode_error_precedes_length_check() {
        let err = decode_fixed::<32>("prevhash", "0").unwrap_err();
        assert!(matches!(err, ShareError::Decode { .. }));
    }

    proptest! {
        #[test]
        fn prop_hex_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
            let encoded = encode(&bytes);
            prop_assert_eq!(encoded.len(), bytes.len() * 2);
            prop_assert!(encoded.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));

            let decoded = decode_field("data", &encoded).unwrap();
            prop_assert_eq!(encode(&decoded), encoded);
        }
    }
}
