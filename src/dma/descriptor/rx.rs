//! Receive DMA Descriptor
//!
//! Software arms the descriptor with a buffer and sets OWN|BUF1V; the DMA
//! deposits a frame, writes the received length into RDES2[29:16] and
//! clears OWN.

use super::{VolatileCell, bus_addr};
use crate::internal::descriptor_bits::{rdes2, rdes3};

/// RX DMA descriptor (16 bytes, 16-byte aligned)
#[repr(C, align(16))]
#[derive(Debug)]
pub struct RxDescriptor {
    /// RDES0: buffer 1 address
    rdes0: VolatileCell<u32>,
    /// RDES1: reserved
    rdes1: VolatileCell<u32>,
    /// RDES2: received length
    rdes2: VolatileCell<u32>,
    /// RDES3: control and ownership
    rdes3: VolatileCell<u32>,
}

impl Default for RxDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl RxDescriptor {
    /// Create a zeroed, software-owned descriptor
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rdes0: VolatileCell::new(0),
            rdes1: VolatileCell::new(0),
            rdes2: VolatileCell::new(0),
            rdes3: VolatileCell::new(0),
        }
    }

    /// Point the descriptor at `buffer` and clear the length field.
    pub fn set_buffer(&self, buffer: *const u8) {
        self.rdes0.set(bus_addr(buffer));
        self.rdes1.set(0);
        self.rdes2.set(0);
    }

    /// Offer the buffer to the DMA.
    #[inline(always)]
    pub fn arm(&self) {
        self.rdes3.set(rdes3::OWN | rdes3::BUF1V);
    }

    /// Returns true if DMA owns this descriptor.
    #[inline(always)]
    #[must_use]
    pub fn is_owned(&self) -> bool {
        (self.rdes3.get() & rdes3::OWN) != 0
    }

    /// Buffer 1 address valid
    #[inline(always)]
    pub fn is_buffer_valid(&self) -> bool {
        (self.rdes3.get() & rdes3::BUF1V) != 0
    }

    /// Received length as written by the DMA
    #[inline(always)]
    pub fn frame_len(&self) -> usize {
        ((self.rdes2.get() & rdes2::LEN_MASK) >> rdes2::LEN_SHIFT) as usize
    }

    /// Buffer address field
    #[inline(always)]
    pub fn buffer_addr(&self) -> u32 {
        self.rdes0.get()
    }

    /// All four words, for dumping
    pub fn raw_words(&self) -> [u32; 4] {
        [
            self.rdes0.get(),
            self.rdes1.get(),
            self.rdes2.get(),
            self.rdes3.get(),
        ]
    }

    /// Emulate the DMA depositing a frame of `len` bytes.
    #[cfg(test)]
    pub(crate) fn complete(&self, len: usize) {
        self.rdes2
            .set(((len as u32) << rdes2::LEN_SHIFT) & rdes2::LEN_MASK);
        self.rdes3.set(rdes3::BUF1V);
    }
}
