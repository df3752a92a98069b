//! DMA descriptor definitions
//!
//! The STM32H7 DMA walks a contiguous array of 16-byte descriptors. Each
//! one points at a single buffer and carries an OWN bit that arbitrates
//! access: while it is set the DMA owns both descriptor and buffer, once
//! the DMA clears it ownership returns to software.
//!
//! Frames never span descriptors here, so every TX descriptor is marked
//! both first and last.

pub mod rx;
pub mod tx;

pub use rx::RxDescriptor;
pub use tx::TxDescriptor;

pub use crate::internal::constants::{DESCRIPTOR_SIZE, MAX_DESCRIPTOR_LEN};

/// Volatile cell wrapper for descriptor fields
///
/// Every access is volatile so the compiler neither caches nor elides
/// reads of words the DMA may change underneath us.
#[repr(transparent)]
pub struct VolatileCell<T: Copy> {
    value: core::cell::UnsafeCell<T>,
}

// Safety: u32 volatile accesses are single instructions on Cortex-M7 and
// the OWN bit decides which side may touch a descriptor.
unsafe impl<T: Copy> Sync for VolatileCell<T> {}

impl<T: Copy> VolatileCell<T> {
    /// Create a new volatile cell with the given initial value
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value: core::cell::UnsafeCell::new(value),
        }
    }

    /// Read the value (volatile read)
    #[inline(always)]
    pub fn get(&self) -> T {
        unsafe { core::ptr::read_volatile(self.value.get()) }
    }

    /// Write a value (volatile write)
    #[inline(always)]
    pub fn set(&self, value: T) {
        unsafe { core::ptr::write_volatile(self.value.get(), value) }
    }

    /// Read-modify-write
    #[inline(always)]
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(T) -> T,
    {
        let old = self.get();
        self.set(f(old));
    }
}

impl<T: Copy + Default> Default for VolatileCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy + core::fmt::Debug> core::fmt::Debug for VolatileCell<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.get().fmt(f)
    }
}

/// Bus address of a descriptor or buffer as the DMA sees it.
#[inline(always)]
pub(crate) fn bus_addr<T>(ptr: *const T) -> u32 {
    ptr as usize as u32
}
