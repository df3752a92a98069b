//! Memory-mapped register definitions for the STM32H7 Ethernet peripheral
//!
//! This module provides type-safe access to the MAC, MTL and DMA register
//! blocks. All register access is volatile to ensure proper hardware
//! interaction.
//!
//! Register access is expressed through the [`RegisterAccess`] capability
//! rather than free functions over fixed addresses, so every component that
//! touches the peripheral states it in its signature, and host tests can
//! substitute a simulated register file.

pub mod dma;
pub mod mac;
pub mod mtl;

/// Ethernet peripheral base address (AHB1, ETH1)
pub const ETH_BASE: usize = 0x4002_8000;

/// Read a 32-bit register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn read_reg(addr: usize) -> u32 {
    unsafe { core::ptr::read_volatile(addr as *const u32) }
}

/// Write a 32-bit value to a register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn write_reg(addr: usize, value: u32) {
    unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
}

// =============================================================================
// Register Access Capability
// =============================================================================

/// Access to a block of 32-bit hardware registers addressed by byte offset.
///
/// Implementations only need [`read`](Self::read) and [`write`](Self::write);
/// the bit-field helpers are derived from them. Methods take `&self` because
/// hardware registers behave like interior-mutable cells.
pub trait RegisterAccess {
    /// Read the register at `offset`
    fn read(&self, offset: usize) -> u32;

    /// Write `value` to the register at `offset`
    fn write(&self, offset: usize, value: u32);

    /// Read-modify-write using `f`
    #[inline]
    fn modify<F>(&self, offset: usize, f: F)
    where
        F: FnOnce(u32) -> u32,
        Self: Sized,
    {
        let value = self.read(offset);
        self.write(offset, f(value));
    }

    /// Set `bits` (read-modify-write)
    #[inline]
    fn set_bits(&self, offset: usize, bits: u32) {
        let value = self.read(offset);
        self.write(offset, value | bits);
    }

    /// Clear `bits` (read-modify-write)
    #[inline]
    fn clear_bits(&self, offset: usize, bits: u32) {
        let value = self.read(offset);
        self.write(offset, value & !bits);
    }

    /// Replace the field selected by `mask` with `value`, keeping other bits
    #[inline]
    fn replace_bits(&self, offset: usize, value: u32, mask: u32) {
        let old = self.read(offset);
        self.write(offset, (old & !mask) | (value & mask));
    }

    /// Check whether all of `bits` are set
    #[inline]
    fn has_bits(&self, offset: usize, bits: u32) -> bool {
        self.read(offset) & bits == bits
    }
}

impl<T: RegisterAccess + ?Sized> RegisterAccess for &T {
    #[inline(always)]
    fn read(&self, offset: usize) -> u32 {
        (**self).read(offset)
    }

    #[inline(always)]
    fn write(&self, offset: usize, value: u32) {
        (**self).write(offset, value);
    }
}

// =============================================================================
// Volatile MMIO
// =============================================================================

/// Volatile memory-mapped register block at a fixed base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// Register block of the on-chip Ethernet peripheral.
    ///
    /// # Safety
    ///
    /// The caller must own the ETH peripheral: no other code may access its
    /// registers while this handle (or a copy of it) is in use.
    pub const unsafe fn eth() -> Self {
        Self { base: ETH_BASE }
    }

    /// Register block at an arbitrary base address.
    ///
    /// # Safety
    ///
    /// `base` must be the address of a mapped Ethernet register block, and
    /// every offset used through this handle must be valid and 4-byte aligned.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Base address of the register block
    pub const fn base(&self) -> usize {
        self.base
    }
}

impl RegisterAccess for Mmio {
    #[inline(always)]
    fn read(&self, offset: usize) -> u32 {
        // SAFETY: construction of Mmio guarantees the block is mapped
        unsafe { read_reg(self.base + offset) }
    }

    #[inline(always)]
    fn write(&self, offset: usize, value: u32) {
        // SAFETY: construction of Mmio guarantees the block is mapped
        unsafe { write_reg(self.base + offset, value) }
    }
}
