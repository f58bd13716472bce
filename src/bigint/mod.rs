//! The arbitrary-precision signed integer engine.
//!
//! [`BigInt`] is a fixed-width two's-complement integer. Its declared bit
//! width and its NaN flag travel with it; whichever of the two carries the
//! *value* never leaks into control flow or memory-access patterns.
//!
//! Layout: a little-endian array of `LIMBS` 31-bit
//! value limbs (`u32`, top bit always zero for a non-NaN value) plus a
//! logical header recording the declared width, the NaN flag, and (cached,
//! redundantly, exactly as the C reference does) the number of value limbs
//! in use and the bit position of the sign bit within the top one. Rust
//! expresses the header as typed struct fields rather than bit-packing it
//! into one machine word; any compact encoding that preserves these
//! invariants carries the same *information*.

use crate::primitives::Choice;

pub(crate) mod util;

pub mod additive;
pub mod bitwise;
pub mod codec;
pub mod compare;
pub mod conversion;
pub mod div;
pub mod fmt;
pub mod mul;
pub mod scratch;
pub mod shift;
pub mod traits;

pub use util::limbs_for_width;

/// Errors raised at construction time, a public, non-secret boundary:
/// nothing here ever depends on a BigInt's *value*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    /// A declared width of zero carries no value bits and is rejected at construction.
    #[error("declared bit width must be at least 1")]
    ZeroWidth,
    /// The requested width needs more value limbs than `LIMBS` provides.
    #[error("width {width} needs {needed} limbs but this BigInt only has capacity for {capacity}")]
    WidthExceedsCapacity {
        width: u32,
        needed: usize,
        capacity: usize,
    },
}

/// A fixed-width two's-complement signed integer with an in-band NaN flag.
///
/// `LIMBS` is the compile-time storage capacity in 31-bit value limbs; use
/// [`limbs_for_width`] to size it for a chosen maximum declared width. Two
/// `BigInt<LIMBS>` values of the same Rust type may still carry different
/// runtime-declared widths `w` — an operation between them then produces
/// NaN, exactly the CTTK behaviour this type is modelled on.
#[derive(Clone, Copy)]
pub struct BigInt<const LIMBS: usize> {
    width: u32,
    nan: Choice,
    value_limbs: u32,
    sign_bit_pos: u32,
    limbs: [u32; LIMBS],
}

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// Constructs a fresh BigInt of declared width `width`. Explicit
    /// initialisation yields NaN-of-width-`width`
    /// (CTTK's `cttk_i31_init` sets the NaN bit in the header); call one of
    /// the `conversion` module's `set_from_*` methods to give it a value.
    pub fn new(width: u32) -> Result<Self, BigIntError> {
        if width == 0 {
            return Err(BigIntError::ZeroWidth);
        }
        let needed = util::value_limb_count(width) as usize;
        if needed > LIMBS {
            return Err(BigIntError::WidthExceedsCapacity { width, needed, capacity: LIMBS });
        }
        Ok(BigInt {
            width,
            nan: Choice::TRUE,
            value_limbs: needed as u32,
            sign_bit_pos: util::top_index(util::header_h(width)),
            limbs: [0u32; LIMBS],
        })
    }

    /// Convenience: a non-NaN zero of declared width `width`.
    pub fn zero(width: u32) -> Result<Self, BigIntError> {
        let mut x = Self::new(width)?;
        x.nan = Choice::FALSE;
        Ok(x)
    }

    /// Declared bit width `w`. Public by contract: never secret.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Opaque boolean carrier form of the NaN flag.
    /// Prefer this over [`Self::is_nan`] inside further oblivious
    /// computation; use `is_nan` only at an intentional declassification
    /// point.
    #[inline]
    pub fn is_nan_choice(&self) -> Choice {
        self.nan
    }

    /// Declassified NaN test. Safe to branch on: the NaN flag is exactly
    /// the information this operation is meant to reveal.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.nan.into_bool()
    }

    #[inline]
    pub(crate) fn value_limbs(&self) -> usize {
        self.value_limbs as usize
    }

    #[inline]
    pub(crate) fn sign_bit_pos(&self) -> u32 {
        self.sign_bit_pos
    }

    #[inline]
    pub(crate) fn limb(&self, i: usize) -> u32 {
        self.limbs[i]
    }

    #[inline]
    pub(crate) fn set_limb(&mut self, i: usize, v: u32) {
        self.limbs[i] = v & util::CONTENT_MASK;
    }

    /// NaN is sticky within an operation: once raised it is never cleared by
    /// a later step of the same operation.
    #[inline]
    pub(crate) fn set_nan_choice(&mut self, nan: Choice) {
        self.nan = self.nan.or(nan);
    }

    #[inline]
    pub(crate) fn force_nan(&mut self) {
        self.nan = Choice::TRUE;
    }

    #[inline]
    pub(crate) fn clear_nan(&mut self) {
        self.nan = Choice::FALSE;
    }

    /// Top (sign-extended) limb of the value.
    #[inline]
    pub(crate) fn top_limb(&self) -> u32 {
        self.limbs[self.value_limbs() - 1]
    }

    /// Sign bit as 0/1, read from the top limb's reserved position.
    #[inline]
    pub(crate) fn sign_bit(&self) -> u32 {
        (self.top_limb() >> self.sign_bit_pos) & 1
    }

    /// Re-applies the sign-extension invariant to the top limb after a
    /// truncating operation has written raw bits into it.
    #[inline]
    pub(crate) fn sign_extend_top(&mut self) {
        let pos = self.sign_bit_pos;
        let idx = self.value_limbs() - 1;
        self.limbs[idx] = util::sign_extend32(self.limbs[idx], pos + 1) & util::CONTENT_MASK;
    }

    /// Returns true (as a [`Choice`]) iff `self` and `other` have equal
    /// declared widths. Comparisons must perform this check *before*
    /// touching value limbs: width is public, so this one test
    /// may use ordinary control flow.
    #[inline]
    pub(crate) fn widths_match(&self, other: &Self) -> bool {
        self.width == other.width
    }

    /// Builds a NaN of the same width as `self` — the standard "operation
    /// failed" destination value used throughout the layers.
    #[inline]
    pub(crate) fn nan_like(&self) -> Self {
        let mut x = *self;
        x.limbs = [0u32; LIMBS];
        x.force_nan();
        x
    }

    /// Oblivious selection between two same-shaped BigInts: `self` becomes
    /// `a` if `cond` else stays as `self`'s previous `b`-role value. Mirrors
    /// `cttk_i31_cond_copy` — used throughout the division algorithm.
    #[inline]
    pub fn cond_copy(&mut self, cond: Choice, a: &Self) {
        debug_assert_eq!(self.width, a.width);
        let mask = cond.mask32();
        for i in 0..self.value_limbs() {
            let d = self.limbs[i];
            let s = a.limbs[i];
            self.limbs[i] = (d ^ ((d ^ s) & mask)) & util::CONTENT_MASK;
        }
        self.nan = Choice::from_u32_lsb(self.nan.mask32() ^ ((self.nan.mask32() ^ a.nan.mask32()) & mask) & 1);
    }

    /// `if cond { a } else { b }`, computed obliviously over two full
    /// BigInts of identical width. Mirrors `cttk_i31_mux`.
    #[inline]
    pub fn mux(cond: Choice, a: &Self, b: &Self) -> Self {
        debug_assert_eq!(a.width, b.width);
        let mut out = *b;
        out.cond_copy(cond, a);
        out
    }

    /// Fewest bits necessary to express the signed value (CTTK's
    /// `bitsize`). NaN has no defined
    /// bitsize; callers must not call this on a NaN value.
    pub fn bitsize(&self) -> u32 {
        debug_assert!(!self.is_nan());
        // Fast path matching the two values whose signed bit length does
        // not equal "index of highest differing bit from the sign" + 1.
        if self.is_zero_value() || self.is_minus_one_value() {
            return 1;
        }
        let neg = self.sign_bit() == 1;
        let hi = self.highest_set_bit_from_magnitude(neg);
        if neg { hi } else { hi + 1 }
    }

    /// Fewest bits necessary to express the unsigned value. Undefined
    /// (debug-asserted) for negative or NaN values.
    pub fn ubitsize(&self) -> u32 {
        debug_assert!(!self.is_nan());
        debug_assert!(self.sign_bit() == 0);
        self.highest_set_bit_from_magnitude(false)
    }

    /// `true` iff the signed value fits in `bits` bits.
    pub fn fits_in(&self, bits: u32) -> bool {
        !self.is_nan() && self.bitsize() <= bits
    }

    /// `true` iff the (non-negative) value fits unsigned in `bits` bits.
    pub fn ufits_in(&self, bits: u32) -> bool {
        !self.is_nan() && self.sign_bit() == 0 && self.ubitsize() <= bits
    }

    /// Folded rather than `.all()`-short-circuited: the number of limbs
    /// touched must not depend on where (if anywhere) a nonzero one occurs.
    fn is_zero_value(&self) -> bool {
        (0..self.value_limbs()).fold(0u32, |acc, i| acc | self.limbs[i]) == 0
    }

    /// Folded rather than `.all()`-short-circuited, for the same reason as
    /// [`Self::is_zero_value`].
    fn is_minus_one_value(&self) -> bool {
        (0..self.value_limbs()).fold(0u32, |acc, i| acc | (self.limbs[i] ^ util::CONTENT_MASK)) == 0
    }

    /// Highest bit index set in `|value|` (for negative values, in
    /// `|value| - 1`, matching two's-complement magnitude bookkeeping),
    /// plus one; 0 if there is none. Loop bound is `value_limbs()`, public.
    fn highest_set_bit_from_magnitude(&self, neg: bool) -> u32 {
        let mut highest = 0u32;
        for i in 0..self.value_limbs() {
            let mut w = self.limbs[i];
            if neg {
                // bits of (|value|-1) equal bits of (~value) within the
                // value range; using !value & CONTENT_MASK keeps this a
                // closed-form per-limb expression.
                w = (!w) & util::CONTENT_MASK;
            }
            if w != 0 {
                let bl = crate::primitives::u32_bit_length(w);
                highest = (i as u32) * 31 + bl;
            }
        }
        highest
    }
}

impl<const LIMBS: usize> PartialEq for BigInt<LIMBS> {
    /// NaN never compares equal to anything, including
    /// itself, and mismatched widths never compare equal — so this
    /// relation is not reflexive and `BigInt` cannot implement `Eq`
    /// (the same reason `f32`/`f64` implement only `PartialEq`).
    fn eq(&self, other: &Self) -> bool {
        compare::eq::<LIMBS>(self, other).into_bool()
    }
}

#[cfg(test)]
#[path = "tests/test_construction.rs"]
mod test_construction;
