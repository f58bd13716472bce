use crate::bigint::codec::*;
use crate::bigint::conversion::to_i64;
use crate::bigint::util::limbs_for_width;

const LIMBS: usize = limbs_for_width(64);

#[test]
fn be_signed_round_trip() {
    let bytes = [0x01u8, 0x02, 0x03, 0x04];
    let x = decode_be_signed::<LIMBS>(32, &bytes).unwrap();
    assert!(!x.is_nan());
    assert_eq!(to_i64(&x), Some(0x0102_0304i64));

    let mut out = [0u8; 4];
    assert!(encode_be_into(&x, &mut out));
    assert_eq!(out, bytes);
}

#[test]
fn le_signed_round_trip() {
    let bytes = [0x04u8, 0x03, 0x02, 0x01];
    let x = decode_le_signed::<LIMBS>(32, &bytes).unwrap();
    assert_eq!(to_i64(&x), Some(0x0102_0304i64));

    let mut out = [0u8; 4];
    assert!(encode_le_into(&x, &mut out));
    assert_eq!(out, bytes);
}

#[test]
fn negative_be_signed_sign_extends_correctly() {
    let bytes = [0xFFu8, 0xFE]; // -2 as 16-bit big-endian two's complement
    let x = decode_be_signed::<LIMBS>(16, &bytes).unwrap();
    assert_eq!(to_i64(&x), Some(-2));
}

#[test]
fn unsigned_decode_rejects_negative_bit_pattern_checked() {
    let bytes = [0xFFu8];
    let x = decode_be_unsigned::<LIMBS>(8, &bytes).unwrap();
    assert!(x.is_nan());
    let x_trunc = decode_be_unsigned_trunc::<LIMBS>(8, &bytes).unwrap();
    assert!(!x_trunc.is_nan());
}

#[test]
fn nan_input_encodes_to_false_and_zeroed_buffer() {
    let nan = crate::bigint::BigInt::<LIMBS>::new(32).unwrap();
    let mut out = [0xAAu8; 4];
    assert!(!encode_be_into(&nan, &mut out));
    assert_eq!(out, [0u8; 4]);
}

#[test]
fn oversized_input_is_checked_lossy() {
    // A leading 0xFF byte beyond a declared 8-bit width is NOT a lossless
    // sign-extension of a positive value, so the checked decode must NaN.
    let bytes = [0xFFu8, 0x05];
    let checked = decode_be_signed::<LIMBS>(8, &bytes).unwrap();
    assert!(checked.is_nan());
    let truncated = decode_be_signed_trunc::<LIMBS>(8, &bytes).unwrap();
    assert!(!truncated.is_nan());
    assert_eq!(to_i64(&truncated), Some(5));
}
