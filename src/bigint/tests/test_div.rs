use crate::bigint::conversion::{from_i64, to_i64};
use crate::bigint::div::{div_rounded, divrem, modulus, rem, Round};
use crate::bigint::util::limbs_for_width;
use crate::bigint::BigInt;

const LIMBS: usize = limbs_for_width(64);

fn v(x: i64) -> BigInt<LIMBS> {
    from_i64::<LIMBS>(64, x).unwrap()
}

#[test]
fn divrem_matches_truncating_hardware_semantics() {
    for (a, b) in [(7i64, 2i64), (-7, 2), (7, -2), (-7, -2), (0, 5)] {
        let (q, r) = divrem(&v(a), &v(b));
        assert_eq!(to_i64(&q), Some(a / b));
        assert_eq!(to_i64(&r), Some(a % b));
    }
}

#[test]
fn rem_matches_hardware() {
    assert_eq!(to_i64(&rem(&v(17), &v(5))), Some(17 % 5));
}

#[test]
fn division_by_zero_is_nan() {
    let (q, r) = divrem(&v(5), &v(0));
    assert!(q.is_nan());
    assert!(r.is_nan());
}

#[test]
fn min_value_divided_by_minus_one_overflows() {
    let min = from_i64::<LIMBS>(64, i64::MIN).unwrap();
    let (q, _r) = divrem(&min, &v(-1));
    assert!(q.is_nan());
}

#[test]
fn div_rounded_floor_and_ceiling() {
    // -7 / 2 truncates to -3 with remainder -1; floor should give -4.
    let floor = div_rounded(&v(-7), &v(2), Round::Floor);
    assert_eq!(to_i64(&floor), Some(-4));
    let ceil = div_rounded(&v(-7), &v(2), Round::Ceiling);
    assert_eq!(to_i64(&ceil), Some(-3));
    let exact = div_rounded(&v(8), &v(2), Round::Floor);
    assert_eq!(to_i64(&exact), Some(4));
}

#[test]
fn nan_operand_propagates() {
    let nan = BigInt::<LIMBS>::new(64).unwrap();
    let (q, r) = divrem(&nan, &v(1));
    assert!(q.is_nan());
    assert!(r.is_nan());
}

#[test]
fn modulus_is_always_nonnegative() {
    assert_eq!(to_i64(&modulus(&v(-7), &v(2))), Some(1));
    assert_eq!(to_i64(&modulus(&v(7), &v(-2))), Some(1));
    assert_eq!(to_i64(&modulus(&v(-7), &v(-2))), Some(1));
    assert_eq!(to_i64(&modulus(&v(7), &v(2))), Some(1));
    assert_eq!(to_i64(&modulus(&v(0), &v(5))), Some(0));
}

#[test]
fn modulus_matches_rem_when_dividend_nonnegative() {
    assert_eq!(to_i64(&modulus(&v(17), &v(5))), to_i64(&rem(&v(17), &v(5))));
}

#[test]
fn modulus_division_by_zero_is_nan() {
    assert!(modulus(&v(5), &v(0)).is_nan());
}
