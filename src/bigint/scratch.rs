//! Scratch-space allocation for multiplication and division. Grounded on CTTK's `CTTK_MAX_INT_BUF` stack budget
//! and its `genmul_stack`/`gendiv_stack2`/`gendiv_stack3` helpers in
//! `original_source/src/inner.h` and `int31.c`: both algorithms need O(n)
//! temporary limbs beyond their operands and the two operands' own storage,
//! and the reference toolkit prefers a fixed stack buffer with a documented
//! ceiling over unconditional heap use.
//!
//! [`Scratch`] mirrors that: a stack array sized by [`crate::config::DEFAULT_SCRATCH_LIMBS`]
//! services requests up to its capacity; a request beyond that falls back
//! to a heap `Vec` only when the `alloc`/`std` feature is enabled, and
//! otherwise reports that it could not be serviced so the caller can
//! produce NaN rather than panic.

use crate::config::DEFAULT_SCRATCH_LIMBS;

#[cfg(any(feature = "alloc", feature = "std"))]
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

enum Storage {
    Stack([u32; DEFAULT_SCRATCH_LIMBS], usize),
    #[cfg(any(feature = "alloc", feature = "std"))]
    Heap(Vec<u32>),
}

/// A limb scratch buffer wide enough for one multiplication or division
/// temporary. Construct with [`Scratch::acquire`]; `None` means the request
/// could not be serviced in this build (no heap fallback configured).
pub struct Scratch {
    storage: Storage,
}

impl Scratch {
    /// Requests `limbs` scratch words. Logs (non-secret: only the limb
    /// count, a function of the public declared width, is logged) which
    /// strategy served the request.
    pub fn acquire(limbs: usize) -> Option<Scratch> {
        if limbs <= DEFAULT_SCRATCH_LIMBS {
            log::trace!("scratch: serving {limbs} limbs from the stack buffer");
            return Some(Scratch { storage: Storage::Stack([0u32; DEFAULT_SCRATCH_LIMBS], limbs) });
        }
        #[cfg(any(feature = "alloc", feature = "std"))]
        {
            log::trace!("scratch: {limbs} limbs exceeds stack budget, falling back to heap");
            return Some(Scratch { storage: Storage::Heap(alloc_vec(limbs)) });
        }
        #[cfg(not(any(feature = "alloc", feature = "std")))]
        {
            log::trace!("scratch: {limbs} limbs exceeds stack budget and no heap fallback is configured");
            None
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        match &mut self.storage {
            Storage::Stack(buf, len) => &mut buf[..*len],
            #[cfg(any(feature = "alloc", feature = "std"))]
            Storage::Heap(v) => v.as_mut_slice(),
        }
    }

    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Stack(_, len) => *len,
            #[cfg(any(feature = "alloc", feature = "std"))]
            Storage::Heap(v) => v.len(),
        }
    }
}

#[cfg(any(feature = "alloc", feature = "std"))]
fn alloc_vec(limbs: usize) -> Vec<u32> {
    #[cfg(feature = "std")]
    {
        std::vec![0u32; limbs]
    }
    #[cfg(all(feature = "alloc", not(feature = "std")))]
    {
        alloc::vec![0u32; limbs]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_in_budget_requests_from_the_stack() {
        let mut s = Scratch::acquire(4).expect("within budget");
        assert_eq!(s.len(), 4);
        s.as_mut_slice()[0] = 7;
        assert_eq!(s.as_mut_slice()[0], 7);
    }

    #[cfg(any(feature = "alloc", feature = "std"))]
    #[test]
    fn serves_over_budget_requests_from_the_heap() {
        let mut s = Scratch::acquire(DEFAULT_SCRATCH_LIMBS + 16).expect("heap fallback enabled");
        assert_eq!(s.len(), DEFAULT_SCRATCH_LIMBS + 16);
        s.as_mut_slice()[0] = 1;
    }
}
