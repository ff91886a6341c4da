use platzigram_core::shortid::{decode, encode, DecodeError, ENCODED_LEN};
use proptest::prelude::*;
use uuid::Uuid;

proptest! {
    /// Property: decode inverts encode for every identifier the store can assign
    #[test]
    fn prop_round_trip(bits in any::<u128>()) {
        let id = Uuid::from_u128(bits);
        prop_assert_eq!(decode(&encode(id)).unwrap(), id);
    }

    /// Property: distinct identifiers never collide on their public form
    #[test]
    fn prop_injective(a in any::<u128>(), b in any::<u128>()) {
        prop_assume!(a != b);
        prop_assert_ne!(encode(Uuid::from_u128(a)), encode(Uuid::from_u128(b)));
    }

    /// Property: every public form is fixed-length and URL-safe
    #[test]
    fn prop_encoded_shape(bits in any::<u128>()) {
        let public_id = encode(Uuid::from_u128(bits));
        prop_assert_eq!(public_id.len(), ENCODED_LEN);
        prop_assert!(public_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    /// Property: decode never panics on arbitrary input, it errors instead
    #[test]
    fn prop_decode_total(input in ".*") {
        if let Ok(id) = decode(&input) {
            // Anything that decodes must round-trip back to the same string
            prop_assert_eq!(encode(id), input);
        }
    }
}

#[test]
fn test_decode_rejects_padded_form() {
    // The padded variant of a valid id is not accepted
    let padded = format!("{}==", encode(Uuid::nil()));
    assert!(matches!(
        decode(&padded).unwrap_err(),
        DecodeError::Encoding(_)
    ));
}

#[test]
fn test_decode_rejects_oversized_input() {
    let err = decode("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA").unwrap_err();
    assert!(matches!(err, DecodeError::Length { got: 24 }));
}
