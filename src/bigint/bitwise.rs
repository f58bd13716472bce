//! Bitwise logic These never overflow — two's-complement
//! bitwise operators are always defined at any width — so there is no
//! checked/truncating distinction, only NaN propagation on a NaN operand or
//! a width mismatch.

use super::BigInt;

macro_rules! binary_bitop {
    ($name:ident, $op:tt) => {
        pub fn $name<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
            if !a.widths_match(b) {
                return a.nan_like();
            }
            let mut out = *a;
            for i in 0..a.value_limbs() {
                out.set_limb(i, a.limb(i) $op b.limb(i));
            }
            out.set_nan_choice(a.is_nan_choice().or(b.is_nan_choice()));
            out
        }
    };
}

binary_bitop!(and, &);
binary_bitop!(or, |);
binary_bitop!(xor, ^);

/// `NOT (a XOR b)` — bitwise equivalence, included alongside CTTK's
/// `cttk_i31_not` degenerate case for completeness.
pub fn eqv<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    not(&xor(a, b))
}

pub fn not<const LIMBS: usize>(a: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    let mut out = *a;
    for i in 0..a.value_limbs() {
        out.set_limb(i, !a.limb(i));
    }
    out.set_nan_choice(a.is_nan_choice());
    out
}

#[cfg(test)]
#[path = "tests/test_bitwise.rs"]
mod test_bitwise;
