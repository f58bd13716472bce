//! Multiplication Ported from CTTK's `genmul_separate`/
//! `genmul`/`genmul_stack` in `original_source/src/int31.c`: operands are
//! reduced to sign/magnitude, multiplied as plain unsigned limb arrays with
//! the widened word multiply from [`crate::primitives`], then the sign is
//! reapplied and the double-width product is checked against (or truncated
//! to) the declared width.

use super::scratch::Scratch;
use super::BigInt;
use crate::bigint::util::{guard_consistent, CONTENT_MASK};
use crate::primitives::{mulu32w, Choice};

/// Overwrites `buf[..n]` with `|x|`'s limbs (`n = x.value_limbs()`) and
/// returns whether `x` was negative.
pub(crate) fn to_magnitude<const LIMBS: usize>(x: &BigInt<LIMBS>, buf: &mut [u32]) -> bool {
    let n = x.value_limbs();
    for i in 0..n {
        buf[i] = x.limb(i);
    }
    let neg = x.sign_bit() == 1;
    if neg {
        negate_buffer(&mut buf[..n]);
    }
    neg
}

/// Two's-complement negation of a plain 31-bit-limb buffer, independent of
/// any declared-width bookkeeping (used both for sign/magnitude conversion
/// and for flipping the product's sign).
pub(crate) fn negate_buffer(buf: &mut [u32]) {
    let mut carry = 1u32;
    for limb in buf.iter_mut() {
        let v = (*limb ^ CONTENT_MASK).wrapping_add(carry);
        *limb = v & CONTENT_MASK;
        carry = v >> 31;
    }
}

/// Schoolbook unsigned multiply of two 31-bit-limb magnitudes into `out`
/// (`out.len() >= a.len() + b.len()`, pre-zeroed).
fn unsigned_mul_limbs(a: &[u32], b: &[u32], out: &mut [u32]) {
    for (i, &ai) in a.iter().enumerate() {
        let mut carry: u64 = 0;
        for (j, &bj) in b.iter().enumerate() {
            let p = mulu32w(ai, bj) + out[i + j] as u64 + carry;
            out[i + j] = (p & CONTENT_MASK as u64) as u32;
            carry = p >> 31;
        }
        let mut k = i + b.len();
        while carry != 0 {
            let p = out[k] as u64 + carry;
            out[k] = (p & CONTENT_MASK as u64) as u32;
            carry = p >> 31;
            k += 1;
        }
    }
}

fn mul_inner<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> Option<(BigInt<LIMBS>, bool)> {
    let n = a.value_limbs();
    let mut mag_a = [0u32; LIMBS];
    let mut mag_b = [0u32; LIMBS];
    let neg_a = to_magnitude(a, &mut mag_a[..n]);
    let neg_b = to_magnitude(b, &mut mag_b[..n]);

    let mut scratch = Scratch::acquire(2 * n + 1)?;
    let prod = scratch.as_mut_slice();
    for v in prod.iter_mut() {
        *v = 0;
    }
    unsigned_mul_limbs(&mag_a[..n], &mag_b[..n], prod);
    if neg_a != neg_b {
        negate_buffer(prod);
    }

    let mut out = *a;
    for i in 0..n {
        out.set_limb(i, prod[i]);
    }

    // The product is exact within n limbs iff every limb above it is a
    // plain sign-extension fill of the n-limb chunk's own top bit. Folded
    // rather than `.all()`-short-circuited: the number of limbs touched
    // here must not depend on where (if anywhere) the mismatch is.
    let fill = 0u32.wrapping_sub((prod[n - 1] >> 30) & 1) & CONTENT_MASK;
    let extension_ok = prod[n..].iter().fold(0u32, |acc, &w| acc | (w ^ fill)) == 0;
    Some((out, extension_ok))
}

/// Checked multiplication: NaN on overflow, width mismatch, or a
/// scratch request this build cannot service (e.g. `no_std` without
/// `alloc` and an operand too wide for the stack budget).
pub fn mul<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    if !a.widths_match(b) {
        return a.nan_like();
    }
    let Some((mut out, extension_ok)) = mul_inner(a, b) else {
        return a.nan_like();
    };
    let guard_ok = guard_consistent(out.top_limb(), out.sign_bit_pos());
    out.sign_extend_top();
    let overflowed = Choice::from_bool(!(extension_ok && guard_ok));
    out.set_nan_choice(a.is_nan_choice().or(b.is_nan_choice()).or(overflowed));
    out
}

/// Truncating multiplication: wraps modulo 2^w.
pub fn mul_trunc<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    if !a.widths_match(b) {
        return a.nan_like();
    }
    let Some((mut out, _)) = mul_inner(a, b) else {
        return a.nan_like();
    };
    out.sign_extend_top();
    out.set_nan_choice(a.is_nan_choice().or(b.is_nan_choice()));
    out
}

#[cfg(test)]
#[path = "tests/test_mul.rs"]
mod test_mul;
