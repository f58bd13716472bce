use crate::bigint::conversion::{from_i64, to_i64};
use crate::bigint::shift::*;
use crate::bigint::util::limbs_for_width;
use crate::bigint::BigInt;

const LIMBS: usize = limbs_for_width(64);

fn v(x: i64) -> BigInt<LIMBS> {
    from_i64::<LIMBS>(64, x).unwrap()
}

#[test]
fn lsh_leaky_matches_hardware_in_range() {
    let got = lsh_leaky(&v(3), 4);
    assert_eq!(to_i64(&got), Some(3i64 << 4));
}

#[test]
fn lsh_protected_matches_leaky() {
    let a = v(-7);
    for count in [0u32, 1, 3, 8, 20] {
        assert_eq!(to_i64(&lsh_protected(&a, count)), to_i64(&lsh_leaky(&a, count)));
    }
}

#[test]
fn rsh_is_arithmetic_and_matches_hardware() {
    let got = rsh_leaky(&v(-16), 2);
    assert_eq!(to_i64(&got), Some(-16i64 >> 2));
    let got_pos = rsh_leaky(&v(16), 2);
    assert_eq!(to_i64(&got_pos), Some(4));
}

#[test]
fn rsh_protected_matches_leaky() {
    let a = v(-123);
    for count in [0u32, 1, 5, 10] {
        assert_eq!(to_i64(&rsh_protected(&a, count)), to_i64(&rsh_leaky(&a, count)));
    }
}

#[test]
fn lsh_checked_overflow_to_nan() {
    // Shifting the top bit out of the declared width must raise NaN.
    let near_max = from_i64::<LIMBS>(8, 100).unwrap();
    let shifted = lsh_leaky(&near_max, 4);
    assert!(shifted.is_nan());
}

#[test]
fn lsh_trunc_wraps_instead_of_nan() {
    let near_max = from_i64::<LIMBS>(8, 100).unwrap();
    let shifted = lsh_leaky_trunc(&near_max, 4);
    assert!(!shifted.is_nan());
}
