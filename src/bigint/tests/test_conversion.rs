use crate::bigint::conversion::*;
use crate::bigint::util::limbs_for_width;
use crate::bigint::BigInt;

const LIMBS: usize = limbs_for_width(64);

#[test]
fn round_trips_in_range_values() {
    for x in [0i64, 1, -1, i32::MAX as i64, i32::MIN as i64, i64::MAX, i64::MIN] {
        let b = from_i64::<LIMBS>(64, x).unwrap();
        assert!(!b.is_nan());
        assert_eq!(to_i64(&b), Some(x));
    }
}

#[test]
fn narrow_width_rejects_out_of_range_checked() {
    // 200 doesn't fit in a signed 8-bit width (-128..=127).
    let b = from_i64::<LIMBS>(8, 200).unwrap();
    assert!(b.is_nan());
}

#[test]
fn narrow_width_truncating_wraps() {
    let b = from_i64_trunc::<LIMBS>(8, 200).unwrap();
    assert!(!b.is_nan());
    assert_eq!(to_i64(&b), Some(200i64 as i8 as i64));
}

#[test]
fn to_i64_rejects_nan() {
    let nan = BigInt::<LIMBS>::new(64).unwrap();
    assert_eq!(to_i64(&nan), None);
}

#[test]
fn to_u64_rejects_negative() {
    let neg = from_i64::<LIMBS>(64, -1).unwrap();
    assert_eq!(to_u64(&neg), None);
    let pos = from_i64::<LIMBS>(64, 42).unwrap();
    assert_eq!(to_u64(&pos), Some(42));
}

#[test]
fn from_u64_round_trips_in_range_values() {
    for x in [0u64, 1, 42, u32::MAX as u64, i64::MAX as u64] {
        let b = from_u64::<LIMBS>(64, x).unwrap();
        assert!(!b.is_nan());
        assert_eq!(to_u64(&b), Some(x));
    }
}

#[test]
fn from_u64_rejects_values_needing_the_sign_bit_checked() {
    // 200 needs bit 7 of an 8-bit width, which an unsigned value may not use.
    let b = from_u64::<LIMBS>(8, 200).unwrap();
    assert!(b.is_nan());
}

#[test]
fn from_u64_truncating_wraps() {
    let b = from_u64_trunc::<LIMBS>(8, 200).unwrap();
    assert!(!b.is_nan());
    assert_eq!(to_i64(&b), Some(200i64 as i8 as i64));
}

#[test]
fn to_u64_trunc_reinterprets_low_bits_unsigned() {
    let neg = from_i64::<LIMBS>(64, -1).unwrap();
    assert_eq!(to_u64_trunc(&neg), u64::MAX);
    let pos = from_i64::<LIMBS>(64, 42).unwrap();
    assert_eq!(to_u64_trunc(&pos), 42);
}

#[test]
fn to_u64_trunc_of_nan_is_zero() {
    let nan = BigInt::<LIMBS>::new(64).unwrap();
    assert_eq!(to_u64_trunc(&nan), 0);
}
