//! Left/right shifts Ported from CTTK's `genlsh`/`genrsh` in
//! `original_source/src/int31.c`, which decomposes a variable shift count
//! into powers of two and applies each conditionally — the `p2m31[]` table
//! there is exactly the set of `1 << k` amounts used below. That scan
//! always runs all 32 steps regardless of the actual count: the count never
//! changes the loop bound, only which steps are a no-op.
//!
//! Two independent axes:
//! - checked vs truncating: whether a shifted-out bit that disagrees with
//!   the result's sign raises NaN, or is silently dropped (mod 2^w).
//! - protected vs leaky: whether the shift count itself is treated as
//!   secret (protected: the 32-step oblivious scan) or as a public value
//!   safe to branch and index on directly (leaky: a single direct shift).

use super::BigInt;
use crate::bigint::util::{guard_consistent, CONTENT_MASK};
use crate::primitives::Choice;

fn limb_or_sign_fill<const LIMBS: usize>(a: &BigInt<LIMBS>, idx: usize, fill: u32) -> u32 {
    if idx < a.value_limbs() {
        a.limb(idx)
    } else {
        fill
    }
}

/// Shifts the limb array left by the public amount `amt`, discarding
/// whatever spills past the top limb's guard bits (callers check overflow
/// separately) and filling vacated low bits with zero.
fn shift_left_raw<const LIMBS: usize>(a: &BigInt<LIMBS>, amt: u32) -> BigInt<LIMBS> {
    let n = a.value_limbs();
    let total_bits = n as u32 * 31;
    let mut out = *a;
    if amt >= total_bits {
        for i in 0..n {
            out.set_limb(i, 0);
        }
        return out;
    }
    let limb_shift = (amt / 31) as usize;
    let bit_shift = amt % 31;
    for i in (0..n).rev() {
        let lo = if i >= limb_shift { a.limb(i - limb_shift) } else { 0 };
        let hi = if bit_shift > 0 && i > limb_shift { a.limb(i - limb_shift - 1) } else { 0 };
        let v = if bit_shift == 0 { lo } else { (lo << bit_shift) | (hi >> (31 - bit_shift)) };
        out.set_limb(i, v);
    }
    out
}

/// Shifts the limb array right (arithmetic, sign-preserving) by the public
/// amount `amt`.
fn shift_right_raw<const LIMBS: usize>(a: &BigInt<LIMBS>, amt: u32) -> BigInt<LIMBS> {
    let n = a.value_limbs();
    let total_bits = n as u32 * 31;
    let fill = 0u32.wrapping_sub(a.sign_bit()) & CONTENT_MASK;
    let mut out = *a;
    if amt >= total_bits {
        for i in 0..n {
            out.set_limb(i, fill);
        }
        out.sign_extend_top();
        return out;
    }
    let limb_shift = (amt / 31) as usize;
    let bit_shift = amt % 31;
    for i in 0..n {
        let lo = limb_or_sign_fill(a, i + limb_shift, fill);
        let hi = limb_or_sign_fill(a, i + limb_shift + 1, fill);
        let v = if bit_shift == 0 { lo } else { (lo >> bit_shift) | ((hi << (31 - bit_shift)) & CONTENT_MASK) };
        out.set_limb(i, v);
    }
    out.sign_extend_top();
    out
}

/// Oblivious variable shift: decomposes `count` bit by bit and conditionally
/// folds in each power-of-two shift via `Choice::mux`-style blending, so the
/// sequence of limb writes never depends on `count`'s value.
fn oblivious_apply<const LIMBS: usize, F>(a: &BigInt<LIMBS>, count: u32, raw: F) -> BigInt<LIMBS>
where
    F: Fn(&BigInt<LIMBS>, u32) -> BigInt<LIMBS>,
{
    let mut acc = *a;
    for k in 0..32u32 {
        let bit = Choice::from_u32_lsb((count >> k) & 1);
        let shifted = raw(&acc, 1u32 << k);
        acc = BigInt::mux(bit, &shifted, &acc);
    }
    acc
}

pub fn lsh_protected<const LIMBS: usize>(a: &BigInt<LIMBS>, count: u32) -> BigInt<LIMBS> {
    let mut out = oblivious_apply(a, count, shift_left_raw);
    let ok = guard_consistent(out.top_limb(), out.sign_bit_pos());
    out.sign_extend_top();
    out.set_nan_choice(a.is_nan_choice().or(Choice::from_bool(!ok)));
    out
}

pub fn lsh_protected_trunc<const LIMBS: usize>(a: &BigInt<LIMBS>, count: u32) -> BigInt<LIMBS> {
    let mut out = oblivious_apply(a, count, shift_left_raw);
    out.sign_extend_top();
    out.set_nan_choice(a.is_nan_choice());
    out
}

pub fn rsh_protected<const LIMBS: usize>(a: &BigInt<LIMBS>, count: u32) -> BigInt<LIMBS> {
    // Right shift of a well-formed value never loses information beyond the
    // declared width, so checked and truncating coincide; kept as a
    // separate entry point for symmetry with `lsh`.
    let mut out = oblivious_apply(a, count, shift_right_raw);
    out.set_nan_choice(a.is_nan_choice());
    out
}

pub fn rsh_protected_trunc<const LIMBS: usize>(a: &BigInt<LIMBS>, count: u32) -> BigInt<LIMBS> {
    rsh_protected(a, count)
}

/// Leaky variants: `count` is treated as public and used directly, with no
/// oblivious decomposition — cheaper, for call sites where the shift amount
/// is already known to be non-secret (e.g. a fixed protocol field).
pub fn lsh_leaky<const LIMBS: usize>(a: &BigInt<LIMBS>, count: u32) -> BigInt<LIMBS> {
    let mut out = shift_left_raw(a, count);
    let ok = guard_consistent(out.top_limb(), out.sign_bit_pos());
    out.sign_extend_top();
    out.set_nan_choice(a.is_nan_choice().or(Choice::from_bool(!ok)));
    out
}

pub fn lsh_leaky_trunc<const LIMBS: usize>(a: &BigInt<LIMBS>, count: u32) -> BigInt<LIMBS> {
    let mut out = shift_left_raw(a, count);
    out.sign_extend_top();
    out.set_nan_choice(a.is_nan_choice());
    out
}

pub fn rsh_leaky<const LIMBS: usize>(a: &BigInt<LIMBS>, count: u32) -> BigInt<LIMBS> {
    let mut out = shift_right_raw(a, count);
    out.set_nan_choice(a.is_nan_choice());
    out
}

pub fn rsh_leaky_trunc<const LIMBS: usize>(a: &BigInt<LIMBS>, count: u32) -> BigInt<LIMBS> {
    rsh_leaky(a, count)
}

#[cfg(test)]
#[path = "tests/test_shift.rs"]
mod test_shift;
