//! Addition, subtraction and negation Ported from CTTK's
//! `cttk_i31_add`/`cttk_i31_sub`/`cttk_i31_neg` in
//! `original_source/src/int31.c`.
//!
//! Every value limb reserves a handful of guard bits above the declared
//! width (the `h = w + w/31` header padding — see [`super::util`]):  a
//! carry/borrow that escapes the declared width but stays inside the guard
//! zone is still visible there. Overflow detection is then just "do the
//! guard bits still agree with a plain sign-extension of the true sign bit"
//! — no separate carry-out tracking, no branch on the operands' signs.

use super::BigInt;
use crate::bigint::util::{guard_consistent, CONTENT_MASK};
use crate::primitives::Choice;

/// Adds `a` and `b` limb by limb, propagating carry, without touching the
/// sign/guard bits yet. Returns the raw top limb alongside the rest so the
/// caller can run the overflow check appropriate to checked vs truncating
/// semantics.
fn raw_add<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    let mut out = *a;
    let mut carry: u32 = 0;
    for i in 0..a.value_limbs() {
        let s = a.limb(i).wrapping_add(b.limb(i)).wrapping_add(carry);
        out.set_limb(i, s);
        carry = s >> 31;
    }
    out
}

/// Subtracts `b` from `a` limb by limb, propagating borrow, without
/// touching the sign/guard bits yet — mirrors CTTK's `cttk_i31_sub`'s own
/// `wd = wa - wb - cc` loop rather than composing through [`neg`], so a
/// difference near `MinValue` is never routed through negation's own
/// narrower overflow condition.
fn raw_sub<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    let mut out = *a;
    let mut borrow: u32 = 0;
    for i in 0..a.value_limbs() {
        let d = a.limb(i).wrapping_sub(b.limb(i)).wrapping_sub(borrow);
        out.set_limb(i, d);
        borrow = (d >> 31) & 1;
    }
    out
}

fn raw_neg<const LIMBS: usize>(a: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    let mut out = *a;
    let mut carry: u32 = 1;
    for i in 0..a.value_limbs() {
        let s = ((a.limb(i) ^ CONTENT_MASK)).wrapping_add(carry);
        out.set_limb(i, s);
        carry = s >> 31;
    }
    out
}

/// Truncates the top limb to the declared width, discarding guard bits and
/// re-sign-extending from the true sign bit — the wraparound-mod-2^w
/// behaviour used by every `*_trunc` entry point.
fn truncate_top<const LIMBS: usize>(x: &mut BigInt<LIMBS>) {
    x.sign_extend_top();
}

/// Checked addition: NaN on overflow or width mismatch.
pub fn add<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    if !a.widths_match(b) {
        return a.nan_like();
    }
    let mut out = raw_add(a, b);
    let ok = guard_consistent(out.top_limb(), out.sign_bit_pos());
    out.sign_extend_top();
    let result_nan = a.is_nan_choice().or(b.is_nan_choice()).or(Choice::from_bool(!ok));
    out.set_nan_choice(result_nan);
    out
}

/// Truncating addition: wraps modulo 2^w, never sets NaN for overflow (only
/// for a pre-existing NaN operand or width mismatch).
pub fn add_trunc<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    if !a.widths_match(b) {
        return a.nan_like();
    }
    let mut out = raw_add(a, b);
    truncate_top(&mut out);
    out.set_nan_choice(a.is_nan_choice().or(b.is_nan_choice()));
    out
}

pub fn neg<const LIMBS: usize>(a: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    let mut out = raw_neg(a);
    let ok = guard_consistent(out.top_limb(), out.sign_bit_pos());
    out.sign_extend_top();
    out.set_nan_choice(a.is_nan_choice().or(Choice::from_bool(!ok)));
    out
}

pub fn neg_trunc<const LIMBS: usize>(a: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    let mut out = raw_neg(a);
    truncate_top(&mut out);
    out.set_nan_choice(a.is_nan_choice());
    out
}

/// Checked subtraction: NaN on overflow or width mismatch. Computed as a
/// direct borrow chain (see [`raw_sub`]), not as `add(a, neg(b))` — the
/// latter would spuriously raise NaN on every `b == MinValue`, since
/// checked `neg` alone cannot represent `-MinValue`, even though
/// `a - MinValue` is in range for most `a` (e.g. `MinValue - MinValue == 0`).
pub fn sub<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    if !a.widths_match(b) {
        return a.nan_like();
    }
    let mut out = raw_sub(a, b);
    let ok = guard_consistent(out.top_limb(), out.sign_bit_pos());
    out.sign_extend_top();
    let result_nan = a.is_nan_choice().or(b.is_nan_choice()).or(Choice::from_bool(!ok));
    out.set_nan_choice(result_nan);
    out
}

/// Truncating subtraction: wraps modulo 2^w.
pub fn sub_trunc<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    if !a.widths_match(b) {
        return a.nan_like();
    }
    let mut out = raw_sub(a, b);
    truncate_top(&mut out);
    out.set_nan_choice(a.is_nan_choice().or(b.is_nan_choice()));
    out
}

#[cfg(test)]
#[path = "tests/test_additive.rs"]
mod test_additive;
