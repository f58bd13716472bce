//! Big/little-endian byte-string codec covering all four signed/unsigned ×
//! big/little-endian combinations, ported from CTTK's `cttk_i31_decbe_signed`/`decle_signed`/
//! `decbe_unsigned`/`decle_unsigned`/`encbe`/`encle` in
//! `original_source/src/int31.c`. One parameterised core handles all four
//! decode combinations; the public functions just fix the two booleans.

use super::{BigInt, BigIntError};
use crate::bigint::util::{guard_consistent, CONTENT_MASK};

fn byte_len(width: u32) -> usize {
    ((width + 7) / 8) as usize
}

fn input_bit(bytes: &[u8], idx: u32, big_endian: bool, fill: u32) -> u32 {
    let total_bits = bytes.len() as u32 * 8;
    if idx >= total_bits {
        return fill;
    }
    let byte_idx = if big_endian {
        bytes.len() - 1 - (idx / 8) as usize
    } else {
        (idx / 8) as usize
    };
    (bytes[byte_idx] as u32 >> (idx % 8)) & 1
}

fn sign_fill_of(bytes: &[u8], big_endian: bool, signed: bool) -> u32 {
    if !signed || bytes.is_empty() {
        return 0;
    }
    let msb_byte = if big_endian { bytes[0] } else { bytes[bytes.len() - 1] };
    (msb_byte as u32 >> 7) & 1
}

/// `true` iff every bit of `bytes` at or beyond `from_bit` already equals
/// `fill` — i.e. decoding lost no information by stopping at `from_bit`.
fn excess_matches_fill(bytes: &[u8], from_bit: u32, big_endian: bool, fill: u32) -> bool {
    let total_bits = bytes.len() as u32 * 8;
    let mut ok = true;
    let mut i = from_bit;
    while i < total_bits {
        if input_bit(bytes, i, big_endian, fill) != fill {
            ok = false;
        }
        i += 1;
    }
    ok
}

fn decode_core<const LIMBS: usize>(
    width: u32,
    bytes: &[u8],
    big_endian: bool,
    signed: bool,
    truncating: bool,
) -> Result<BigInt<LIMBS>, BigIntError> {
    let mut x = BigInt::new(width)?;
    let fill = sign_fill_of(bytes, big_endian, signed);
    let n = x.value_limbs();
    for i in 0..n {
        let mut limb = 0u32;
        for b in 0..31u32 {
            limb |= input_bit(bytes, 31 * i as u32 + b, big_endian, fill) << b;
        }
        x.set_limb(i, limb & CONTENT_MASK);
    }
    let total_bits = n as u32 * 31;
    let lossless = excess_matches_fill(bytes, total_bits, big_endian, fill)
        && guard_consistent(x.top_limb(), x.sign_bit_pos())
        && (signed || x.sign_bit() == 0);
    x.sign_extend_top();
    if truncating || lossless {
        x.clear_nan();
    }
    Ok(x)
}

pub fn decode_be_signed<const LIMBS: usize>(width: u32, bytes: &[u8]) -> Result<BigInt<LIMBS>, BigIntError> {
    decode_core(width, bytes, true, true, false)
}

pub fn decode_be_signed_trunc<const LIMBS: usize>(width: u32, bytes: &[u8]) -> Result<BigInt<LIMBS>, BigIntError> {
    decode_core(width, bytes, true, true, true)
}

pub fn decode_le_signed<const LIMBS: usize>(width: u32, bytes: &[u8]) -> Result<BigInt<LIMBS>, BigIntError> {
    decode_core(width, bytes, false, true, false)
}

pub fn decode_le_signed_trunc<const LIMBS: usize>(width: u32, bytes: &[u8]) -> Result<BigInt<LIMBS>, BigIntError> {
    decode_core(width, bytes, false, true, true)
}

pub fn decode_be_unsigned<const LIMBS: usize>(width: u32, bytes: &[u8]) -> Result<BigInt<LIMBS>, BigIntError> {
    decode_core(width, bytes, true, false, false)
}

pub fn decode_be_unsigned_trunc<const LIMBS: usize>(width: u32, bytes: &[u8]) -> Result<BigInt<LIMBS>, BigIntError> {
    decode_core(width, bytes, true, false, true)
}

pub fn decode_le_unsigned<const LIMBS: usize>(width: u32, bytes: &[u8]) -> Result<BigInt<LIMBS>, BigIntError> {
    decode_core(width, bytes, false, false, false)
}

pub fn decode_le_unsigned_trunc<const LIMBS: usize>(width: u32, bytes: &[u8]) -> Result<BigInt<LIMBS>, BigIntError> {
    decode_core(width, bytes, false, false, true)
}

/// Encodes `x`'s two's-complement bit pattern into `out`, sign-extending (or
/// zero-truncating high bytes) to exactly fill `out.len()`. Writes an
/// all-zero buffer and returns `false` for a NaN input rather than
/// encoding garbage.
fn encode_core<const LIMBS: usize>(x: &BigInt<LIMBS>, out: &mut [u8], big_endian: bool) -> bool {
    for b in out.iter_mut() {
        *b = 0;
    }
    if x.is_nan() {
        return false;
    }
    let fill_byte = if x.sign_bit() == 1 { 0xFFu8 } else { 0 };
    let out_len = out.len();
    for i in 0..out_len {
        let byte_idx = if big_endian { out_len - 1 - i } else { i };
        let bit_base = (i as u32) * 8;
        let mut byte = 0u8;
        for b in 0..8u32 {
            let idx = bit_base + b;
            let bit = value_bit(x, idx, fill_byte & 1);
            byte |= (bit as u8) << b;
        }
        out[byte_idx] = byte;
    }
    true
}

fn value_bit<const LIMBS: usize>(x: &BigInt<LIMBS>, idx: u32, fill: u8) -> u32 {
    let n = x.value_limbs();
    let total_bits = n as u32 * 31;
    if idx >= total_bits {
        return fill as u32;
    }
    let limb = (idx / 31) as usize;
    let pos = idx % 31;
    (x.limb(limb) >> pos) & 1
}

/// Encodes into exactly `byte_len(x.width())` bytes, big-endian. Returns
/// `None` for a NaN input.
#[cfg(any(feature = "alloc", feature = "std"))]
pub fn encode_be<const LIMBS: usize>(x: &BigInt<LIMBS>) -> Option<alloc_or_stack::Bytes> {
    let mut out = alloc_or_stack::Bytes::new(byte_len(x.width()));
    if encode_core(x, out.as_mut_slice(), true) {
        Some(out)
    } else {
        None
    }
}

/// Encodes into exactly `byte_len(x.width())` bytes, little-endian. Returns
/// `None` for a NaN input.
#[cfg(any(feature = "alloc", feature = "std"))]
pub fn encode_le<const LIMBS: usize>(x: &BigInt<LIMBS>) -> Option<alloc_or_stack::Bytes> {
    let mut out = alloc_or_stack::Bytes::new(byte_len(x.width()));
    if encode_core(x, out.as_mut_slice(), false) {
        Some(out)
    } else {
        None
    }
}

/// Encodes into a caller-supplied buffer (exactly `byte_len(width)` bytes
/// long) without needing `alloc`/`std`. Returns `false` (buffer zeroed) on a
/// NaN input or a buffer of the wrong length.
pub fn encode_be_into<const LIMBS: usize>(x: &BigInt<LIMBS>, out: &mut [u8]) -> bool {
    out.len() == byte_len(x.width()) && encode_core(x, out, true)
}

pub fn encode_le_into<const LIMBS: usize>(x: &BigInt<LIMBS>, out: &mut [u8]) -> bool {
    out.len() == byte_len(x.width()) && encode_core(x, out, false)
}

/// A tiny owned-bytes type so `encode_be`/`encode_le` can return a result
/// sized by the (only-known-at-runtime) declared width without forcing
/// every caller onto `encode_*_into`. Backed by `Vec` under `alloc`/`std`;
/// without either feature this module only exposes the `_into` functions.
#[cfg(any(feature = "alloc", feature = "std"))]
pub mod alloc_or_stack {
    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;

    pub struct Bytes(Vec<u8>);

    impl Bytes {
        pub(crate) fn new(len: usize) -> Self {
            #[cfg(feature = "std")]
            {
                Bytes(std::vec![0u8; len])
            }
            #[cfg(all(feature = "alloc", not(feature = "std")))]
            {
                Bytes(alloc::vec![0u8; len])
            }
        }

        pub fn as_slice(&self) -> &[u8] {
            &self.0
        }

        pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
            &mut self.0
        }
    }
}

#[cfg(not(any(feature = "alloc", feature = "std")))]
pub mod alloc_or_stack {
    pub struct Bytes;
}

#[cfg(test)]
#[path = "tests/test_codec.rs"]
mod test_codec;
