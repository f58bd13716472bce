use crate::bigint::conversion::{from_i64, to_i64};
use crate::bigint::util::limbs_for_width;
use crate::bigint::BigInt;

const LIMBS: usize = limbs_for_width(64);
type Big = BigInt<LIMBS>;

fn v(x: i64) -> Big {
    from_i64::<LIMBS>(64, x).unwrap()
}

#[test]
fn add_matches_hardware_in_range() {
    for (a, b) in [(1i64, 2i64), (-5, 7), (0, 0), (i32::MAX as i64, 1)] {
        let got = crate::bigint::additive::add(&v(a), &v(b));
        assert_eq!(to_i64(&got), Some(a + b));
    }
}

#[test]
fn sub_matches_hardware_in_range() {
    let got = crate::bigint::additive::sub(&v(10), &v(3));
    assert_eq!(to_i64(&got), Some(7));
}

#[test]
fn neg_of_min_value_overflows_to_nan() {
    let true_min = from_i64::<LIMBS>(64, i64::MIN).unwrap();
    let negated = crate::bigint::additive::neg(&true_min);
    assert!(negated.is_nan());
}

#[test]
fn neg_trunc_of_min_value_wraps_to_itself() {
    let true_min = from_i64::<LIMBS>(64, i64::MIN).unwrap();
    let negated = crate::bigint::additive::neg_trunc(&true_min);
    assert!(!negated.is_nan());
    assert_eq!(to_i64(&negated), Some(i64::MIN));
}

#[test]
fn sub_of_min_value_from_itself_is_zero_not_nan() {
    // sub(a, MinValue) must not route through checked neg(MinValue): the
    // true result here is trivially in range even though -MinValue is not.
    let true_min = from_i64::<LIMBS>(64, i64::MIN).unwrap();
    let got = crate::bigint::additive::sub(&true_min, &true_min);
    assert!(!got.is_nan());
    assert_eq!(to_i64(&got), Some(0));
}

#[test]
fn sub_matches_hardware_across_minvalue_operands() {
    let true_min = from_i64::<LIMBS>(64, i64::MIN).unwrap();
    let got = crate::bigint::additive::sub(&v(1), &true_min);
    // 1 - i64::MIN overflows i64, so this exercises the genuine overflow path.
    assert!(got.is_nan());
}

#[test]
fn sub_trunc_of_min_value_from_itself_is_zero() {
    let true_min = from_i64::<LIMBS>(64, i64::MIN).unwrap();
    let got = crate::bigint::additive::sub_trunc(&true_min, &true_min);
    assert_eq!(to_i64(&got), Some(0));
}

#[test]
fn width_mismatch_yields_nan() {
    let a = from_i64::<LIMBS>(64, 1).unwrap();
    let b = from_i64::<LIMBS>(32, 1).unwrap();
    let got = crate::bigint::additive::add(&a, &b);
    assert!(got.is_nan());
}

#[test]
fn nan_propagates_through_add() {
    let nan = Big::new(64).unwrap();
    let got = crate::bigint::additive::add(&nan, &v(1));
    assert!(got.is_nan());
}
