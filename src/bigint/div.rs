//! Division and remainder Ported from CTTK's `gendiv_inner`/
//! `gendiv`/`cttk_i31_divrem`/`cttk_i31_mod` in
//! `original_source/src/int31.c`: binary long division, one bit of quotient
//! per step, with an oblivious conditional subtraction standing in for the
//! usual "compare-then-maybe-subtract" — the comparison still happens every
//! step, but the subtraction's result is always computed and only
//! `Choice`-selected into the remainder, so the memory-access pattern is the
//! same whether or not the step "fires". The header's guard bits (`h - w`
//! extra bits per limb region, see [`super::util`]) are exactly what gives
//! the working remainder room to hold a transient one-bit-wider value
//! between the shift-in and the conditional subtraction.
//!
//! Degenerate cases, handled by the same bit-by-
//! bit process plus two explicit guards:
//! - division by zero: every step's comparison trivially succeeds against
//!   an all-zero divisor, which would silently produce an all-ones
//!   quotient magnitude indistinguishable from a legitimate huge quotient —
//!   so a zero divisor is checked once, up front (on a public-looking but
//!   still `Choice`-carried predicate), and forces NaN on both outputs.
//! - `MinValue / -1`: the magnitude quotient is `2^(w-1)`, one bit wider
//!   than the declared width holds signed — caught by the same guard-bit
//!   overflow check shared with [`super::additive`] and [`super::mul`].

use super::mul::to_magnitude;
use super::BigInt;
use crate::bigint::util::guard_consistent;
use crate::primitives::{u32_eq, Choice};

fn shift_left_1_insert(buf: &mut [u32], bit_in: u32) {
    let mut carry = bit_in & 1;
    for limb in buf.iter_mut() {
        let next_carry = (*limb >> 30) & 1;
        *limb = ((*limb << 1) | carry) & crate::bigint::util::CONTENT_MASK;
        carry = next_carry;
    }
}

fn get_bit(buf: &[u32], i: u32) -> u32 {
    let limb = (i / 31) as usize;
    let pos = i % 31;
    if limb >= buf.len() {
        0
    } else {
        (buf[limb] >> pos) & 1
    }
}

fn set_bit_choice(buf: &mut [u32], i: u32, v: Choice) {
    let limb = (i / 31) as usize;
    let pos = i % 31;
    let mask = 1u32 << pos;
    buf[limb] = (buf[limb] & !mask) | (v.mask32() & mask);
}

/// `a >= b` over equal-length plain magnitude limb arrays, most-significant
/// limb first.
fn geq_magnitude(a: &[u32], b: &[u32]) -> Choice {
    let mut gt = Choice::FALSE;
    let mut lt = Choice::FALSE;
    for i in (0..a.len()).rev() {
        let (av, bv) = (a[i], b[i]);
        let eq_here = u32_eq(av, bv);
        let gt_here = Choice::from_bool(av > bv);
        let decided = gt.or(lt);
        gt = gt.or(decided.not().and(eq_here.not()).and(gt_here));
        lt = lt.or(decided.not().and(eq_here.not()).and(gt_here.not()));
    }
    lt.not()
}

/// Oblivious conditional subtraction: computes `a - b` unconditionally,
/// commits it into `a` only where `cond` is true.
fn cond_sub_magnitude(a: &mut [u32], b: &[u32], cond: Choice) {
    let mut borrow = 0i64;
    for i in 0..a.len() {
        let diff = a[i] as i64 - b[i] as i64 - borrow;
        let (v, br) = if diff < 0 { (diff + (1i64 << 31), 1) } else { (diff, 0) };
        borrow = br;
        a[i] = cond.mux_u32(v as u32, a[i]);
    }
}

/// Binary long division of two equal-length (`n`-limb) magnitude arrays.
/// Always runs all `n * 31` steps; `divisor_is_zero` additionally gates the
/// final quotient/remainder so a zero divisor reliably yields NaN rather
/// than a merely-very-large quotient.
fn divmod_magnitude(dividend: &[u32], divisor: &[u32], n: usize) -> (Choice, [u32; 64], [u32; 64]) {
    assert!(n <= 64, "divmod_magnitude scratch exceeds the supported width");
    let mut rem = [0u32; 64];
    let mut quot = [0u32; 64];
    let total_bits = (n as u32) * 31;
    for i in (0..total_bits).rev() {
        shift_left_1_insert(&mut rem[..n], get_bit(dividend, i));
        let ge = geq_magnitude(&rem[..n], divisor);
        cond_sub_magnitude(&mut rem[..n], divisor, ge);
        set_bit_choice(&mut quot[..n], i, ge);
    }
    let divisor_is_zero = divisor[..n].iter().fold(Choice::TRUE, |acc, &w| acc.and(u32_eq(w, 0)));
    (divisor_is_zero, quot, rem)
}

struct DivResult<const LIMBS: usize> {
    quotient: BigInt<LIMBS>,
    remainder: BigInt<LIMBS>,
}

fn div_inner<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> DivResult<LIMBS> {
    let n = a.value_limbs();
    let mut mag_a = [0u32; LIMBS];
    let mut mag_b = [0u32; LIMBS];
    let neg_a = to_magnitude(a, &mut mag_a[..n]);
    let neg_b = to_magnitude(b, &mut mag_b[..n]);

    let (divisor_is_zero, quot, rem) = divmod_magnitude(&mag_a[..n], &mag_b[..n], n);

    let mut quotient = *a;
    let mut remainder = *a;
    let quot_neg = Choice::from_bool(neg_a != neg_b);
    for i in 0..n {
        quotient.set_limb(i, quot[i]);
        remainder.set_limb(i, rem[i]);
    }
    // Apply sign: quotient takes sign_a XOR sign_b, remainder takes sign_a
    // (truncating/"divrem" division, matching CTTK's `cttk_i31_divrem`).
    apply_sign(&mut quotient, quot_neg);
    apply_sign(&mut remainder, Choice::from_bool(neg_a));

    let quot_guard_ok = guard_consistent(quotient.top_limb(), quotient.sign_bit_pos());
    quotient.sign_extend_top();
    remainder.sign_extend_top();

    let bad = a.is_nan_choice().or(b.is_nan_choice()).or(divisor_is_zero).or(Choice::from_bool(!quot_guard_ok));
    quotient.set_nan_choice(bad);
    remainder.set_nan_choice(a.is_nan_choice().or(b.is_nan_choice()).or(divisor_is_zero));

    DivResult { quotient, remainder }
}

fn apply_sign<const LIMBS: usize>(x: &mut BigInt<LIMBS>, neg: Choice) {
    let n = x.value_limbs();
    let mut buf = [0u32; LIMBS];
    for i in 0..n {
        buf[i] = x.limb(i);
    }
    let mut negated = buf;
    super::mul::negate_buffer(&mut negated[..n]);
    for i in 0..n {
        x.set_limb(i, neg.mux_u32(negated[i], buf[i]));
    }
}

/// Truncating-toward-zero division and remainder in one pass: NaN on width mismatch, division by zero, or `MinValue / -1`
/// overflow of the quotient.
pub fn divrem<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> (BigInt<LIMBS>, BigInt<LIMBS>) {
    if !a.widths_match(b) {
        return (a.nan_like(), a.nan_like());
    }
    let r = div_inner(a, b);
    (r.quotient, r.remainder)
}

/// `a % b`, truncating-toward-zero remainder only. Never overflows (the
/// remainder is always strictly smaller in magnitude than the divisor), so
/// the only NaN sources are width mismatch, division by zero, or a NaN
/// operand.
pub fn rem<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    divrem(a, b).1
}

/// Mathematical modulus: like [`rem`], but the result always lands in
/// `[0, |b|)` rather than taking the dividend's sign — `modulus(-7, 2) == 1`
/// where `rem(-7, 2) == -1`. Ported from CTTK's `cttk_i31_mod`: since
/// `|r| < |b|` always holds, adding `|b|` to a negative `r` can never
/// overflow, so this is a plain oblivious correction on top of the
/// truncating remainder rather than a different division algorithm.
pub fn modulus<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    if !a.widths_match(b) {
        return a.nan_like();
    }
    let r = rem(a, b);
    let b_neg = super::compare::lt0(b);
    let abs_b = BigInt::mux(b_neg, &super::additive::neg_trunc(b), b);
    let r_neg = super::compare::lt0(&r);
    let adjusted = super::additive::add_trunc(&r, &abs_b);
    BigInt::mux(r_neg, &adjusted, &r)
}

/// Rounding modes for [`div_rounded`] — a convenience layered on top of
/// truncating `divrem`, not a change to its bit-level semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    TowardZero,
    Floor,
    Ceiling,
}

/// Division rounded per `mode`, built from [`divrem`] plus a correction
/// step — never touches the bit-level algorithm above, only its outputs.
pub fn div_rounded<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>, mode: Round) -> BigInt<LIMBS> {
    let (q, r) = divrem(a, b);
    if mode == Round::TowardZero || q.is_nan() {
        return q;
    }
    let r_nonzero = super::compare::neq0(&r).into_bool();
    if !r_nonzero {
        return q;
    }
    let dividend_neg = super::compare::lt0(a).into_bool();
    let divisor_neg = super::compare::lt0(b).into_bool();
    let result_neg = dividend_neg != divisor_neg;
    let needs_adjust = match mode {
        Round::Floor => result_neg,
        Round::Ceiling => !result_neg,
        Round::TowardZero => false,
    };
    if needs_adjust {
        super::additive::sub(&q, &super::conversion::one_like(&q))
    } else {
        q
    }
}

#[cfg(test)]
#[path = "tests/test_div.rs"]
mod test_div;
