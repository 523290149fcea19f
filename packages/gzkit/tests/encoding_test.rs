//! Byte buffer <-> base64 / base64url / hex conversions

use gzkit::{
    base64_to_bytes, base64url_to_bytes, bytes_to_base64, bytes_to_base64url, bytes_to_hex,
    hex_to_bytes, text_to_bytes, InputEncoding,
};
use proptest::prelude::*;

const HELLO: [u8; 5] = [72, 101, 108, 108, 111];

#[test]
fn test_known_encodings_of_hello() {
    assert_eq!(bytes_to_base64(&HELLO), "SGVsbG8=");
    assert_eq!(bytes_to_base64url(&HELLO), "SGVsbG8");
    assert_eq!(bytes_to_hex(&HELLO), "48656c6c6f");

    assert_eq!(base64_to_bytes("SGVsbG8=").unwrap(), HELLO);
    assert_eq!(base64url_to_bytes("SGVsbG8").unwrap(), HELLO);
    assert_eq!(hex_to_bytes("48656c6c6f").unwrap(), HELLO);
}

#[test]
fn test_empty_inputs() {
    assert_eq!(bytes_to_base64(&[]), "");
    assert_eq!(bytes_to_base64url(&[]), "");
    assert_eq!(bytes_to_hex(&[]), "");

    assert!(base64_to_bytes("").unwrap().is_empty());
    assert!(base64url_to_bytes("").unwrap().is_empty());
    assert!(hex_to_bytes("").unwrap().is_empty());
}

#[test]
fn test_base64url_substitutes_alphabet_and_drops_padding() {
    // 0xfb 0xff encodes to "+/8=" in standard base64
    let bytes = [0xfb, 0xff];
    assert_eq!(bytes_to_base64(&bytes), "+/8=");
    assert_eq!(bytes_to_base64url(&bytes), "-_8");
}

#[test]
fn test_base64url_accepts_padded_and_unpadded_input() {
    assert_eq!(base64url_to_bytes("-_8").unwrap(), [0xfb, 0xff]);
    assert_eq!(base64url_to_bytes("-_8=").unwrap(), [0xfb, 0xff]);
    assert_eq!(base64url_to_bytes("SGVsbG8=").unwrap(), HELLO);
}

#[test]
fn test_base64url_accepts_standard_alphabet_symbols() {
    assert_eq!(base64url_to_bytes("+/8").unwrap(), [0xfb, 0xff]);
    assert_eq!(base64url_to_bytes("+/8=").unwrap(), [0xfb, 0xff]);
    assert_eq!(base64url_to_bytes("-/8").unwrap(), [0xfb, 0xff]);
}

#[test]
fn test_base64url_rejects_foreign_characters_and_bad_length() {
    for bad in ["SGVs bG8", "S*VsbG8", "SGVsb", "SGVsbG8==="] {
        let err = base64url_to_bytes(bad).unwrap_err();
        assert!(err.is_decode(), "{bad:?} should fail to decode");
    }
}

#[test]
fn test_base64_is_strict() {
    for bad in ["SGVsbG8", "SGVs bG8=", "SGVsbG8=\n", "S*VsbG8=", "-_8="] {
        let err = base64_to_bytes(bad).unwrap_err();
        assert!(err.is_decode(), "{bad:?} should fail to decode");
    }
}

#[test]
fn test_hex_rejects_odd_length_and_non_hex_digits() {
    assert!(hex_to_bytes("486").unwrap_err().is_decode());
    assert!(hex_to_bytes("zz").unwrap_err().is_decode());
    assert!(hex_to_bytes("48 65").unwrap_err().is_decode());
}

#[test]
fn test_hex_accepts_upper_case_and_emits_lower_case() {
    let bytes = hex_to_bytes("48656C6C6F").unwrap();
    assert_eq!(bytes, HELLO);
    assert_eq!(bytes_to_hex(&[0xab, 0xcd]), "abcd");
}

#[test]
fn test_text_to_bytes_is_utf8() {
    assert_eq!(text_to_bytes("Hello"), HELLO);
    assert_eq!(text_to_bytes("é"), [0xc3, 0xa9]);
}

#[test]
fn test_input_encoding_dispatch() {
    assert_eq!(InputEncoding::Base64.decode("SGVsbG8=").unwrap(), HELLO);
    assert_eq!(InputEncoding::Base64Url.decode("SGVsbG8").unwrap(), HELLO);
    assert_eq!(InputEncoding::Hex.decode("48656c6c6f").unwrap(), HELLO);
    assert!(InputEncoding::Hex.decode("SGVsbG8=").unwrap_err().is_decode());
}

proptest! {
    #[test]
    fn prop_base64_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(base64_to_bytes(&bytes_to_base64(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn prop_base64url_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = bytes_to_base64url(&bytes);
        prop_assert!(!encoded.contains('='));
        prop_assert_eq!(base64url_to_bytes(&encoded).unwrap(), bytes);
    }

    #[test]
    fn prop_hex_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = bytes_to_hex(&bytes);
        prop_assert_eq!(encoded.len(), bytes.len() * 2);
        prop_assert_eq!(hex_to_bytes(&encoded).unwrap(), bytes);
    }
}
