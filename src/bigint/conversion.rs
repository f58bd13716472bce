//! Conversion to and from fixed-width machine scalars, generalised from a
//! fixed 256-bit layout to an arbitrary declared width, and expressed in
//! the checked/truncating duality used throughout this crate rather than
//! a `Result`-returning import/export pair.

use super::{BigInt, BigIntError};
use crate::bigint::util::{guard_consistent, CONTENT_MASK};

fn arithmetic_shift_i64(v: i64, amt: u32) -> i64 {
    if amt >= 64 {
        if v < 0 {
            -1
        } else {
            0
        }
    } else {
        v >> amt
    }
}

fn logical_shift_u64(v: u64, amt: u32) -> u64 {
    if amt >= 64 {
        0
    } else {
        v >> amt
    }
}

fn write_u64_limbs<const LIMBS: usize>(x: &mut BigInt<LIMBS>, v: u64) -> bool {
    let n = x.value_limbs();
    for i in 0..n {
        let limb = logical_shift_u64(v, 31 * i as u32) as u32 & CONTENT_MASK;
        x.set_limb(i, limb);
    }
    let in_range = logical_shift_u64(v, n as u32 * 31) == 0;
    let guard_ok = guard_consistent(x.top_limb(), x.sign_bit_pos());
    in_range && guard_ok
}

fn write_i64_limbs<const LIMBS: usize>(x: &mut BigInt<LIMBS>, v: i64) -> bool {
    let n = x.value_limbs();
    for i in 0..n {
        let limb = arithmetic_shift_i64(v, 31 * i as u32) as u32 & CONTENT_MASK;
        x.set_limb(i, limb);
    }
    let fill = if v < 0 { -1i64 } else { 0i64 };
    let in_range = arithmetic_shift_i64(v, n as u32 * 31) == fill;
    let guard_ok = guard_consistent(x.top_limb(), x.sign_bit_pos());
    in_range && guard_ok
}

/// Checked import: NaN (on a freshly NaN-initialised value of the right
/// width) if `v` does not fit in the declared width.
pub fn from_i64<const LIMBS: usize>(width: u32, v: i64) -> Result<BigInt<LIMBS>, BigIntError> {
    let mut x = BigInt::new(width)?;
    let ok = write_i64_limbs(&mut x, v);
    x.sign_extend_top();
    if ok {
        x.clear_nan();
    }
    Ok(x)
}

/// Truncating import: wraps `v` modulo 2^w.
pub fn from_i64_trunc<const LIMBS: usize>(width: u32, v: i64) -> Result<BigInt<LIMBS>, BigIntError> {
    let mut x = BigInt::new(width)?;
    write_i64_limbs(&mut x, v);
    x.sign_extend_top();
    x.clear_nan();
    Ok(x)
}

/// Checked unsigned import: NaN if `v` does not fit nonnegatively in the
/// declared width (i.e. `v >= 2^(w-1)`, which would require the sign bit).
pub fn from_u64<const LIMBS: usize>(width: u32, v: u64) -> Result<BigInt<LIMBS>, BigIntError> {
    let mut x = BigInt::new(width)?;
    let ok = write_u64_limbs(&mut x, v);
    x.sign_extend_top();
    if ok {
        x.clear_nan();
    }
    Ok(x)
}

/// Truncating unsigned import: wraps `v` modulo 2^w.
pub fn from_u64_trunc<const LIMBS: usize>(width: u32, v: u64) -> Result<BigInt<LIMBS>, BigIntError> {
    let mut x = BigInt::new(width)?;
    write_u64_limbs(&mut x, v);
    x.sign_extend_top();
    x.clear_nan();
    Ok(x)
}

/// Checked export: `None` if `x` is NaN or does not fit in an `i64`.
pub fn to_i64<const LIMBS: usize>(x: &BigInt<LIMBS>) -> Option<i64> {
    if x.is_nan() || !x.fits_in(64) {
        return None;
    }
    Some(to_i64_trunc(x))
}

/// Truncating export: the low 64 bits of `x`, sign-extended from bit 63.
/// `0` for a NaN input (there is no bit pattern to export).
pub fn to_i64_trunc<const LIMBS: usize>(x: &BigInt<LIMBS>) -> i64 {
    if x.is_nan() {
        return 0;
    }
    // Reassemble 31-bit limbs into a 64-bit word, low limb first, then
    // sign-extend from the declared width's own sign bit so a narrow value
    // (e.g. width = 8) still exports its true signed value rather than a
    // zero-extended one.
    let n = x.value_limbs();
    let mut bits: i64 = 0;
    for i in 0..n.min(3) {
        bits |= (x.limb(i) as i64) << (31 * i as u32);
    }
    let w = x.width();
    if w < 64 {
        let shift = 64 - w;
        bits = (bits << shift) >> shift;
    }
    bits
}

/// Checked unsigned export: `None` if `x` is NaN, negative, or does not fit
/// in a `u64`.
pub fn to_u64<const LIMBS: usize>(x: &BigInt<LIMBS>) -> Option<u64> {
    if x.is_nan() || !x.ufits_in(64) {
        return None;
    }
    let n = x.value_limbs();
    let mut bits: u64 = 0;
    for i in 0..n.min(3) {
        bits |= (x.limb(i) as u64) << (31 * i as u32);
    }
    Some(bits)
}

/// Truncating unsigned export: the same low-64-bit pattern as
/// [`to_i64_trunc`], reinterpreted as unsigned (reduce modulo 2^64, ignoring
/// NaN, per the signed/unsigned truncating export contract).
pub fn to_u64_trunc<const LIMBS: usize>(x: &BigInt<LIMBS>) -> u64 {
    to_i64_trunc(x) as u64
}

/// The constant `1` at the same declared width as `like`. Used internally
/// by [`super::div::div_rounded`]'s floor/ceiling correction step.
pub(crate) fn one_like<const LIMBS: usize>(like: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    from_i64_trunc(like.width(), 1).expect("like.width() already validated by its own construction")
}

#[cfg(test)]
#[path = "tests/test_conversion.rs"]
mod test_conversion;
