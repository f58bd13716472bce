use crate::bigint::conversion::{from_i64, to_i64};
use crate::bigint::util::limbs_for_width;
use crate::bigint::BigInt;

const LIMBS: usize = limbs_for_width(64);

fn v(x: i64) -> BigInt<LIMBS> {
    from_i64::<LIMBS>(64, x).unwrap()
}

#[test]
fn and_or_xor_match_hardware() {
    for (a, b) in [(0b1100i64, 0b1010i64), (-1, 0), (5, 9)] {
        assert_eq!(to_i64(&crate::bigint::bitwise::and(&v(a), &v(b))), Some(a & b));
        assert_eq!(to_i64(&crate::bigint::bitwise::or(&v(a), &v(b))), Some(a | b));
        assert_eq!(to_i64(&crate::bigint::bitwise::xor(&v(a), &v(b))), Some(a ^ b));
    }
}

#[test]
fn not_matches_hardware() {
    assert_eq!(to_i64(&crate::bigint::bitwise::not(&v(0))), Some(!0i64));
    assert_eq!(to_i64(&crate::bigint::bitwise::not(&v(5))), Some(!5i64));
}

#[test]
fn eqv_is_not_of_xor() {
    let a = v(0b1100);
    let b = v(0b1010);
    let lhs = crate::bigint::bitwise::eqv(&a, &b);
    let rhs = crate::bigint::bitwise::not(&crate::bigint::bitwise::xor(&a, &b));
    assert_eq!(to_i64(&lhs), to_i64(&rhs));
}

#[test]
fn nan_propagates() {
    let nan = BigInt::<LIMBS>::new(64).unwrap();
    assert!(crate::bigint::bitwise::and(&nan, &v(1)).is_nan());
    assert!(crate::bigint::bitwise::not(&nan).is_nan());
}
