//! Transmit descriptor ring
//!
//! A power-of-two array of [`TxDescriptor`]s driven by two free-running
//! counters: `tail` counts frames handed to the DMA, `cur` counts frames
//! the DMA has finished with. Both wrap at `usize::MAX`; `tail - cur`
//! (modulo 2^N) never exceeds the slot count and `index & mask` selects
//! the slot.
//!
//! Every slot owns a transmit buffer. [`TxRing::put`] copies the frame
//! into it, so the caller's buffer is free again as soon as `put` returns.
//!
//! ```ignore
//! static TX_DESC: [TxDescriptor; 4] = [const { TxDescriptor::new() }; 4];
//! // Four DMA-accessible buffers, e.g. in AXI SRAM
//! let tx_buffers: &'static mut [[u8; DEFAULT_BUFFER_SIZE]; 4] = /* ... */;
//!
//! let mut ring = TxRing::new();
//! ring.set_descriptors(gmac.regs(), &TX_DESC, tx_buffers)?;
//!
//! match ring.put(gmac.regs(), &frame) {
//!     Ok(_slot) => {}
//!     Err(e) if e.is_flow_control() => { ring.update(); }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use core::sync::atomic::{Ordering, fence};

use super::descriptor::{TxDescriptor, bus_addr};
use crate::driver::error::{ConfigError, ConfigResult, DmaError, DmaResult};
use crate::internal::constants::{DEFAULT_BUFFER_SIZE, DESCRIPTOR_SIZE, MAX_DESCRIPTOR_LEN};
use crate::internal::register::RegisterAccess;
use crate::internal::register::dma::{
    DMACRLR_MASK, DMACTXDLAR_OFFSET, DMACTXDTPR_OFFSET, DMACTXRLR_OFFSET,
};

/// Largest ring the DMACTxRLR field can describe
const MAX_RING_LEN: usize = DMACRLR_MASK as usize + 1;

/// Transmit descriptor ring with one `BUF_SIZE`-byte buffer per slot
///
/// The buffers are borrowed exclusively for `'a`, so nothing else can
/// rewrite one while the DMA may still read it.
#[derive(Debug)]
pub struct TxRing<'a, const BUF_SIZE: usize = DEFAULT_BUFFER_SIZE> {
    /// Active descriptors, clipped to a power of two
    descriptors: &'a [TxDescriptor],
    /// Transmit buffers, one per active descriptor
    buffers: &'a mut [[u8; BUF_SIZE]],
    /// Bus address of the first descriptor
    base: u32,
    /// Slot count minus one
    mask: usize,
    /// Frames reclaimed from the DMA (wrapping)
    cur: usize,
    /// Frames handed to the DMA (wrapping)
    tail: usize,
}

impl<const BUF_SIZE: usize> Default for TxRing<'_, BUF_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const BUF_SIZE: usize> TxRing<'a, BUF_SIZE> {
    /// Create an unconfigured ring
    pub fn new() -> Self {
        Self {
            descriptors: &[],
            buffers: &mut [],
            base: 0,
            mask: 0,
            cur: 0,
            tail: 0,
        }
    }

    /// Install descriptors and buffers and program the DMA with them.
    ///
    /// Only the largest power-of-two prefix shared by `slots` and
    /// `buffers` is used. Both counters restart at zero and the tail
    /// pointer is set to the base, so the DMA sees nothing to fetch.
    /// Returns the slot count.
    pub fn set_descriptors<R: RegisterAccess>(
        &mut self,
        regs: &R,
        slots: &'a [TxDescriptor],
        buffers: &'a mut [[u8; BUF_SIZE]],
    ) -> ConfigResult<usize> {
        let usable = slots.len().min(buffers.len());
        if usable == 0 {
            return Err(ConfigError::InvalidConfig);
        }

        let len = (1_usize << usable.ilog2()).min(MAX_RING_LEN);
        let slots = &slots[..len];
        for desc in slots {
            desc.reset();
        }

        self.descriptors = slots;
        self.buffers = &mut buffers[..len];
        self.base = bus_addr(slots.as_ptr());
        self.mask = len - 1;
        self.cur = 0;
        self.tail = 0;

        regs.write(DMACTXDLAR_OFFSET, self.base);
        regs.write(DMACTXRLR_OFFSET, self.mask as u32 & DMACRLR_MASK);
        regs.write(DMACTXDTPR_OFFSET, self.base);

        #[cfg(feature = "log")]
        log::debug!("TX ring: {len} slots at {:#010x}", self.base);
        #[cfg(feature = "defmt")]
        defmt::debug!("TX ring: {} slots at {:#x}", len, self.base);

        Ok(len)
    }

    /// Copy `frame` into the next slot's buffer, hand it to the DMA and
    /// return the slot index.
    ///
    /// [`DmaError::RingFull`] and [`DmaError::DescriptorBusy`] mean "try
    /// again after [`update`](Self::update)"; see
    /// [`DmaError::is_flow_control`].
    pub fn put<R: RegisterAccess>(&mut self, regs: &R, frame: &[u8]) -> DmaResult<usize> {
        let descriptors = self.descriptors;
        if descriptors.is_empty() {
            return Err(DmaError::NotConfigured);
        }
        if frame.is_empty() {
            return Err(DmaError::InvalidLength);
        }
        if frame.len() > BUF_SIZE.min(MAX_DESCRIPTOR_LEN) {
            return Err(DmaError::FrameTooLarge);
        }

        let slot = self.tail & self.mask;
        let desc = &descriptors[slot];

        if self.is_full() {
            // A single slot has no room to run ahead of `update`
            if self.capacity() == 1 && !desc.is_owned() {
                self.cur = self.cur.wrapping_add(1);
            } else {
                return Err(DmaError::RingFull);
            }
        }
        if desc.is_owned() {
            return Err(DmaError::DescriptorBusy);
        }

        let buffer = &mut self.buffers[slot][..frame.len()];
        buffer.copy_from_slice(frame);
        desc.prepare(buffer)?;
        fence(Ordering::Release);
        desc.set_owned();

        // Descriptor must be in memory before the DMA is told to fetch it
        fence(Ordering::SeqCst);
        regs.write(DMACTXDTPR_OFFSET, self.tail_pointer(slot + 1));
        self.tail = self.tail.wrapping_add(1);

        Ok(slot)
    }

    /// Reclaim every slot the DMA has finished with.
    ///
    /// Walks forward from `cur` and stops at the first slot still owned by
    /// the DMA. Returns `(pending, slot)`: frames still queued and the
    /// slot `cur` now points at. Never waits.
    pub fn update(&mut self) -> (usize, usize) {
        while self.cur != self.tail && !self.descriptors[self.cur & self.mask].is_owned() {
            self.cur = self.cur.wrapping_add(1);
        }
        (self.pending(), self.cur & self.mask)
    }

    /// Frames handed to the DMA and not yet reclaimed
    #[inline(always)]
    pub fn pending(&self) -> usize {
        self.tail.wrapping_sub(self.cur)
    }

    /// Number of active slots, zero before configuration
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether every slot is queued and unreclaimed
    pub fn is_full(&self) -> bool {
        self.pending() == self.capacity()
    }

    /// Descriptor at `slot`, for diagnostics
    pub fn descriptor(&self, slot: usize) -> Option<&TxDescriptor> {
        self.descriptors.get(slot)
    }

    /// Tail pointer value covering the first `slots` descriptors
    fn tail_pointer(&self, slots: usize) -> u32 {
        self.base
            .wrapping_add((slots * DESCRIPTOR_SIZE) as u32)
    }
}
