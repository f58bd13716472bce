use crate::bigint::compare::*;
use crate::bigint::conversion::from_i64;
use crate::bigint::util::limbs_for_width;
use crate::bigint::BigInt;

const LIMBS: usize = limbs_for_width(64);

fn v(x: i64) -> BigInt<LIMBS> {
    from_i64::<LIMBS>(64, x).unwrap()
}

#[test]
fn eq_and_neq() {
    assert!(eq(&v(5), &v(5)).into_bool());
    assert!(neq(&v(5), &v(6)).into_bool());
}

#[test]
fn nan_never_equals_anything_including_itself() {
    let nan = BigInt::<LIMBS>::new(64).unwrap();
    assert!(!eq(&nan, &nan).into_bool());
    assert!(!eq(&nan, &v(0)).into_bool());
}

#[test]
fn ordering_matches_signed_semantics() {
    assert!(lt(&v(-1), &v(1)).into_bool());
    assert!(gt(&v(1), &v(-1)).into_bool());
    assert!(leq(&v(3), &v(3)).into_bool());
    assert!(geq(&v(3), &v(3)).into_bool());
    assert!(!lt(&v(3), &v(3)).into_bool());
}

#[test]
fn zero_predicates() {
    assert!(eq0(&v(0)).into_bool());
    assert!(neq0(&v(1)).into_bool());
    assert!(gt0(&v(1)).into_bool());
    assert!(lt0(&v(-1)).into_bool());
    assert!(geq0(&v(0)).into_bool());
    assert!(leq0(&v(0)).into_bool());
}

#[test]
fn cmp_is_none_for_nan_or_width_mismatch() {
    let nan = BigInt::<LIMBS>::new(64).unwrap();
    assert_eq!(cmp(&nan, &v(0)), None);
    let other_width = from_i64::<LIMBS>(32, 0).unwrap();
    assert_eq!(cmp(&v(0), &other_width), None);
    assert_eq!(cmp(&v(1), &v(2)), Some(core::cmp::Ordering::Less));
}
