//! Short public-identifier codec.
//!
//! Images are addressed externally by a compact, URL-safe form of their
//! store-assigned UUID: the 16 raw bytes encoded as unpadded base64url,
//! always 22 characters. The mapping is bijective, so a public id can be
//! turned back into the storage key without a lookup.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use thiserror::Error;
use uuid::Uuid;

/// Length of every encoded public identifier.
pub const ENCODED_LEN: usize = 22;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("decodes to {got} bytes, expected 16")]
    Length { got: usize },
}

/// Encode a store-assigned identifier into its public form.
pub fn encode(id: Uuid) -> String {
    URL_SAFE_NO_PAD.encode(id.as_bytes())
}

/// Decode a public identifier back into the store-assigned identifier.
pub fn decode(public_id: &str) -> Result<Uuid, DecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(public_id)?;
    let bytes: [u8; 16] = bytes
        .try_into()
        .map_err(|rest: Vec<u8>| DecodeError::Length { got: rest.len() })?;
    Ok(Uuid::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_to_22_url_safe_chars() {
        let public_id = encode(Uuid::new_v4());
        assert_eq!(public_id.len(), ENCODED_LEN);
        assert!(public_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn round_trips_fixed_ids() {
        for id in [Uuid::nil(), Uuid::from_u128(u128::MAX), Uuid::new_v4()] {
            assert_eq!(decode(&encode(id)).unwrap(), id);
        }
    }

    #[test]
    fn nil_id_is_all_a() {
        assert_eq!(encode(Uuid::nil()), "AAAAAAAAAAAAAAAAAAAAAA");
    }

    #[test]
    fn rejects_non_base64() {
        let err = decode("not base64!!").unwrap_err();
        assert!(matches!(err, DecodeError::Encoding(_)));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = decode("AAAA").unwrap_err();
        assert!(matches!(err, DecodeError::Length { got: 3 }));
    }

    #[test]
    fn rejects_empty() {
        let err = decode("").unwrap_err();
        assert!(matches!(err, DecodeError::Length { got: 0 }));
    }

    #[test]
    fn distinct_ids_get_distinct_encodings() {
        assert_ne!(encode(Uuid::from_u128(1)), encode(Uuid::from_u128(2)));
    }
}
