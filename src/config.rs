//! Compile-time configuration record.
//!
//! Three switches are recognised, mirroring `original_source/src/config.h`:
//!
//! - `word-ctmul` Cargo feature: skip the branch-free software emulation of
//!   32x32 and 32x32->64 word multiplication in [`crate::primitives`] and use
//!   the hardware `*` operator directly, for targets where that is known to
//!   run in constant time.
//! - `alloc` Cargo feature: allow the multiplicative/division layers to fall
//!   back to a heap allocation (see [`crate::bigint::scratch`]) for operands
//!   wider than [`DEFAULT_SCRATCH_LIMBS`]. Without it the crate is
//!   `#![no_std]` and oversized scratch requests produce NaN instead.
//! - [`DEFAULT_SCRATCH_LIMBS`]: the stack scratch budget, in limbs rather
//!   than bytes (CTTK's default is 4 kB of `uint32_t`s; this crate exposes
//!   the equivalent count of 31-bit value limbs).

/// Default stack scratch budget for multiplication/division temporaries,
/// expressed in limbs. CTTK's default of 4096 bytes of `uint32_t` is 1024
/// words; we reserve the same word count for scratch arrays.
pub const DEFAULT_SCRATCH_LIMBS: usize = 1024;

/// `true` when the crate was built with heap-scratch fallback available.
pub const fn heap_scratch_enabled() -> bool {
    cfg!(feature = "alloc") || cfg!(feature = "std")
}

/// `true` when word multiplication uses the hardware operator directly
/// rather than the branch-free software emulation.
pub const fn word_multiplier_is_constant_time() -> bool {
    cfg!(feature = "word-ctmul")
}
