//! Operator overloads.
//! Every overload calls the *checked* entry point — never panics, never
//! truncates silently — since `+`/`-`/`*` reads as "the safe default" to a
//! caller skimming a call site; truncating behaviour stays opt-in via the
//! explicit `*_trunc` free functions.

use super::{additive, bitwise, compare, div, mul, shift, BigInt};
use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

macro_rules! bin_op {
    ($trait:ident, $method:ident, $func:path) => {
        impl<const LIMBS: usize> $trait for BigInt<LIMBS> {
            type Output = BigInt<LIMBS>;
            #[inline]
            fn $method(self, rhs: BigInt<LIMBS>) -> BigInt<LIMBS> {
                $func(&self, &rhs)
            }
        }
        impl<const LIMBS: usize> $trait for &BigInt<LIMBS> {
            type Output = BigInt<LIMBS>;
            #[inline]
            fn $method(self, rhs: &BigInt<LIMBS>) -> BigInt<LIMBS> {
                $func(self, rhs)
            }
        }
    };
}

fn div_only<const LIMBS: usize>(a: &BigInt<LIMBS>, b: &BigInt<LIMBS>) -> BigInt<LIMBS> {
    div::divrem(a, b).0
}

bin_op!(Add, add, additive::add);
bin_op!(Sub, sub, additive::sub);
bin_op!(Mul, mul, mul::mul);
bin_op!(Div, div, div_only);
bin_op!(Rem, rem, div::rem);
bin_op!(BitAnd, bitand, bitwise::and);
bin_op!(BitOr, bitor, bitwise::or);
bin_op!(BitXor, bitxor, bitwise::xor);

impl<const LIMBS: usize> Neg for BigInt<LIMBS> {
    type Output = BigInt<LIMBS>;
    #[inline]
    fn neg(self) -> BigInt<LIMBS> {
        additive::neg(&self)
    }
}

impl<const LIMBS: usize> Not for BigInt<LIMBS> {
    type Output = BigInt<LIMBS>;
    #[inline]
    fn not(self) -> BigInt<LIMBS> {
        bitwise::not(&self)
    }
}

impl<const LIMBS: usize> Shl<u32> for BigInt<LIMBS> {
    type Output = BigInt<LIMBS>;
    #[inline]
    fn shl(self, count: u32) -> BigInt<LIMBS> {
        shift::lsh_protected(&self, count)
    }
}

impl<const LIMBS: usize> Shr<u32> for BigInt<LIMBS> {
    type Output = BigInt<LIMBS>;
    #[inline]
    fn shr(self, count: u32) -> BigInt<LIMBS> {
        shift::rsh_protected(&self, count)
    }
}

impl<const LIMBS: usize> PartialOrd for BigInt<LIMBS> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        compare::cmp(self, other)
    }
}

#[cfg(test)]
#[path = "tests/test_traits.rs"]
mod test_traits;
