//! Transmit DMA Descriptor
//!
//! Read format as software hands it to the DMA:
//!
//! | Word | Content |
//! |------|---------|
//! | TDES0 | Buffer 1 address |
//! | TDES1 | Unused (buffer 2) |
//! | TDES2 | Buffer 1 length, bits 13:0 |
//! | TDES3 | OWN (31), LD (29), FD (28) |
//!
//! The DMA clears OWN once the frame has left the MTL FIFO.

use super::{VolatileCell, bus_addr};
use crate::driver::error::{DmaError, DmaResult};
use crate::internal::descriptor_bits::{tdes2, tdes3};

/// TX DMA descriptor (16 bytes, 16-byte aligned)
#[repr(C, align(16))]
#[derive(Debug)]
pub struct TxDescriptor {
    /// TDES0: buffer 1 address
    tdes0: VolatileCell<u32>,
    /// TDES1: buffer 2 address, unused
    tdes1: VolatileCell<u32>,
    /// TDES2: buffer length
    tdes2: VolatileCell<u32>,
    /// TDES3: control and ownership
    tdes3: VolatileCell<u32>,
}

impl Default for TxDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl TxDescriptor {
    /// Create a zeroed, software-owned descriptor
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tdes0: VolatileCell::new(0),
            tdes1: VolatileCell::new(0),
            tdes2: VolatileCell::new(0),
            tdes3: VolatileCell::new(0),
        }
    }

    /// Returns true if DMA owns this descriptor.
    #[inline(always)]
    #[must_use]
    pub fn is_owned(&self) -> bool {
        (self.tdes3.get() & tdes3::OWN) != 0
    }

    /// Hand the descriptor to the DMA.
    #[inline(always)]
    pub fn set_owned(&self) {
        self.tdes3.update(|v| v | tdes3::OWN);
    }

    /// Fill in buffer and length for a single-descriptor frame.
    ///
    /// OWN is left clear; call [`set_owned`](Self::set_owned) once every
    /// other word is in memory.
    pub fn prepare(&self, buffer: &[u8]) -> DmaResult<()> {
        if buffer.is_empty() {
            return Err(DmaError::InvalidLength);
        }
        if buffer.len() > tdes2::B1L_MASK as usize {
            return Err(DmaError::FrameTooLarge);
        }

        self.tdes0.set(bus_addr(buffer.as_ptr()));
        self.tdes1.set(0);
        self.tdes2.set(buffer.len() as u32 & tdes2::B1L_MASK);
        self.tdes3.set(tdes3::FD | tdes3::LD);
        Ok(())
    }

    /// Buffer length field
    #[inline(always)]
    pub fn buffer_len(&self) -> usize {
        (self.tdes2.get() & tdes2::B1L_MASK) as usize
    }

    /// Buffer address field
    #[inline(always)]
    pub fn buffer_addr(&self) -> u32 {
        self.tdes0.get()
    }

    /// First descriptor of a frame
    #[inline(always)]
    pub fn is_first(&self) -> bool {
        (self.tdes3.get() & tdes3::FD) != 0
    }

    /// Last descriptor of a frame
    #[inline(always)]
    pub fn is_last(&self) -> bool {
        (self.tdes3.get() & tdes3::LD) != 0
    }

    /// Return the descriptor to its zeroed, software-owned state.
    pub fn reset(&self) {
        self.tdes0.set(0);
        self.tdes1.set(0);
        self.tdes2.set(0);
        self.tdes3.set(0);
    }

    /// All four words, for dumping
    pub fn raw_words(&self) -> [u32; 4] {
        [
            self.tdes0.get(),
            self.tdes1.get(),
            self.tdes2.get(),
            self.tdes3.get(),
        ]
    }

    /// Emulate the DMA finishing the frame.
    #[cfg(test)]
    pub(crate) fn complete(&self) {
        self.tdes3.update(|v| v & !tdes3::OWN);
    }
}

// =============================================================================
// Tests
// =============================================================================
