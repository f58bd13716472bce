//! Constant-time arbitrary-precision signed integer engine.
//!
//! [`BigInt`] is a fixed-width two's-complement integer whose declared bit
//! width is public but whose value is not: every comparison, arithmetic,
//! shift and division operation runs in time and touches memory addresses
//! that depend only on the declared width (and, for the explicitly
//! count-leaky shift variants, the shift count) — never on the bits of the
//! operands. A dedicated NaN flag (see [`bigint`]) stands in for the usual
//! panics and `Result`s: overflow, division by zero and width mismatches are
//! all represented in-band and propagate through further computation rather
//! than aborting it.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod primitives;
pub mod config;
pub mod bigint;

pub use bigint::{BigInt, BigIntError};
pub use primitives::Choice;
