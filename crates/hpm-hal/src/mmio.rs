// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! Memory-mapped register window
//!
//! [`Mmio`] is an owned view over a fixed physical window. Every access is
//! a single volatile 32-bit load or store; offsets are checked against the
//! window before the pointer is formed.

use core::ptr::NonNull;

use crate::error::{HalError, HalResult};
use crate::traits::RegisterBlock;

/// Volatile 32-bit register window
#[derive(Debug)]
pub struct Mmio {
    /// First register of the window
    base: NonNull<u32>,
    /// Window size in bytes
    size: usize,
}

// SAFETY: the window is device memory handed over by the platform for the
// lifetime of this value. All accesses are single volatile word operations,
// which the hardware serializes; no Rust-visible memory is shared.
unsafe impl Send for Mmio {}
// SAFETY: see `Send`; `RegisterBlock` only takes `&self` and never hands out
// references into the window.
unsafe impl Sync for Mmio {}

impl Mmio {
    /// Create a window of `size` bytes at `base`
    ///
    /// Returns `InvalidParameter` for a null or misaligned base, or a size
    /// that is not a whole number of registers.
    ///
    /// # Safety
    /// * `base..base + size` must be a mapped register region valid for the
    ///   lifetime of the returned value
    /// * No other code may access the region through ordinary references
    pub unsafe fn new(base: usize, size: usize) -> HalResult<Self> {
        if base % 4 != 0 || size % 4 != 0 {
            return Err(HalError::InvalidParameter);
        }
        let base = NonNull::new(base as *mut u32).ok_or(HalError::InvalidParameter)?;
        Ok(Self { base, size })
    }

    /// Base address of the window
    #[must_use]
    pub fn base(&self) -> usize {
        self.base.as_ptr() as usize
    }

    /// Window size in bytes
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Check that a 32-bit access at `offset` stays inside the window
    #[must_use]
    pub const fn contains(&self, offset: u32) -> bool {
        let offset = offset as usize;
        offset % 4 == 0 && offset + 4 <= self.size
    }

    fn register(&self, offset: u32) -> *mut u32 {
        assert!(self.contains(offset), "MMIO access outside register window");
        // SAFETY: `contains` keeps the word index inside the window that
        // `new`'s caller vouched for.
        unsafe { self.base.as_ptr().add(offset as usize / 4) }
    }
}

impl RegisterBlock for Mmio {
    fn read(&self, offset: u32) -> u32 {
        let reg = self.register(offset);
        // SAFETY: `reg` is an aligned in-window register. Volatile read
        // required for MMIO.
        unsafe { reg.read_volatile() }
    }

    fn write(&self, offset: u32, value: u32) {
        let reg = self.register(offset);
        // SAFETY: `reg` is an aligned in-window register. Volatile write
        // required for MMIO.
        unsafe { reg.write_volatile(value) }
    }
}
