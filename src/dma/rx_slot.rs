//! Single-slot receive protocol
//!
//! One [`RxDescriptor`] and one buffer alternate between two states:
//! armed (OWN set, offered to the DMA) and ready (OWN clear, a frame of
//! the reported length sits in the buffer). Every received frame must be
//! followed by [`RxSlot::rearm`], otherwise reception stops for good.

use core::sync::atomic::{Ordering, fence};

use super::descriptor::{RxDescriptor, bus_addr};
use crate::driver::error::{ConfigError, ConfigResult};
use crate::internal::constants::{DESCRIPTOR_SIZE, MAX_DESCRIPTOR_LEN};
use crate::internal::register::RegisterAccess;
use crate::internal::register::dma::{
    DMACRXCR_OFFSET, DMACRXCR_RBSZ_MASK, DMACRXCR_RBSZ_SHIFT, DMACRXDLAR_OFFSET,
    DMACRXDTPR_OFFSET, DMACRXRLR_OFFSET,
};

/// Receive descriptor and its buffer
#[derive(Debug)]
pub struct RxSlot<'a> {
    desc: &'a RxDescriptor,
    buffer: &'a mut [u8],
    /// Bus address of the descriptor
    base: u32,
}

impl<'a> RxSlot<'a> {
    /// Pair a descriptor with its receive buffer.
    ///
    /// The buffer must be non-empty and fit the 14-bit length field.
    pub fn new(desc: &'a RxDescriptor, buffer: &'a mut [u8]) -> ConfigResult<Self> {
        if buffer.is_empty() || buffer.len() > MAX_DESCRIPTOR_LEN {
            return Err(ConfigError::InvalidConfig);
        }
        let base = bus_addr(desc);
        Ok(Self { desc, buffer, base })
    }

    /// Arm the descriptor and point the RX channel at it.
    ///
    /// The tail pointer is left equal to the base, so the DMA fetches
    /// nothing until [`start`](Self::start).
    pub fn init<R: RegisterAccess>(&mut self, regs: &R) {
        self.desc.set_buffer(self.buffer.as_ptr());
        self.desc.arm();
        fence(Ordering::SeqCst);

        regs.write(DMACRXDLAR_OFFSET, self.base);
        regs.write(DMACRXDTPR_OFFSET, self.base);
        regs.write(DMACRXRLR_OFFSET, 0);
        regs.replace_bits(
            DMACRXCR_OFFSET,
            (self.buffer.len() as u32) << DMACRXCR_RBSZ_SHIFT,
            DMACRXCR_RBSZ_MASK,
        );
    }

    /// Let the DMA fetch the armed descriptor.
    pub fn start<R: RegisterAccess>(&self, regs: &R) {
        regs.write(DMACRXDTPR_OFFSET, self.end_pointer());
    }

    /// Length of the received frame, or `None` while the DMA owns the slot.
    ///
    /// Lengths beyond the buffer are clamped to it.
    pub fn poll(&self) -> Option<usize> {
        if self.desc.is_owned() {
            return None;
        }
        fence(Ordering::Acquire);

        let len = self.desc.frame_len();
        if len > self.buffer.len() {
            #[cfg(feature = "log")]
            log::warn!("RX length {len} exceeds {} byte buffer", self.buffer.len());
            #[cfg(feature = "defmt")]
            defmt::warn!("RX length {} exceeds {} byte buffer", len, self.buffer.len());
            return Some(self.buffer.len());
        }
        Some(len)
    }

    /// The received frame, if the slot is ready.
    pub fn frame(&self) -> Option<&[u8]> {
        self.poll().map(|len| &self.buffer[..len])
    }

    /// Whether a frame is waiting
    #[inline(always)]
    pub fn is_ready(&self) -> bool {
        !self.desc.is_owned()
    }

    /// Offer the buffer to the DMA again.
    pub fn rearm<R: RegisterAccess>(&mut self, regs: &R) {
        self.desc.arm();
        fence(Ordering::SeqCst);
        regs.write(DMACRXDTPR_OFFSET, self.end_pointer());
    }

    /// Hand a waiting frame to `f`, then rearm.
    ///
    /// Returns `None` without calling `f` when nothing has arrived.
    pub fn receive<R, F, T>(&mut self, regs: &R, f: F) -> Option<T>
    where
        R: RegisterAccess,
        F: FnOnce(&[u8]) -> T,
    {
        let len = self.poll()?;
        let result = f(&self.buffer[..len]);
        self.rearm(regs);
        Some(result)
    }

    /// The descriptor, for diagnostics
    pub fn descriptor(&self) -> &RxDescriptor {
        self.desc
    }

    /// Receive buffer size
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    fn end_pointer(&self) -> u32 {
        self.base.wrapping_add(DESCRIPTOR_SIZE as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::constants::DEFAULT_BUFFER_SIZE;
    use crate::testing::SimRegisters;

    #[test]
    fn rejects_unusable_buffers() {
        let desc = RxDescriptor::new();
        let mut empty: [u8; 0] = [];
        assert_eq!(
            RxSlot::new(&desc, &mut empty).unwrap_err(),
            ConfigError::InvalidConfig
        );

        let mut huge = [0_u8; 0x4000];
        assert_eq!(
            RxSlot::new(&desc, &mut huge).unwrap_err(),
            ConfigError::InvalidConfig
        );
    }

    #[test]
    fn init_programs_channel() {
        let regs = SimRegisters::new();
        let desc = RxDescriptor::new();
        let mut buffer = [0_u8; DEFAULT_BUFFER_SIZE];
        let buffer_addr = bus_addr(buffer.as_ptr());
        let mut slot = RxSlot::new(&desc, &mut buffer).unwrap();
        let base = bus_addr(&desc);

        slot.init(&regs);

        assert_eq!(
            desc.raw_words(),
            [buffer_addr, 0, 0, (1 << 31) | (1 << 24)]
        );
        assert_eq!(regs.peek(DMACRXDLAR_OFFSET), base);
        assert_eq!(regs.peek(DMACRXDTPR_OFFSET), base);
        assert_eq!(regs.peek(DMACRXRLR_OFFSET), 0);
        assert_eq!(
            regs.peek(DMACRXCR_OFFSET),
            (DEFAULT_BUFFER_SIZE as u32) << 1
        );

        slot.start(&regs);
        assert_eq!(regs.peek(DMACRXDTPR_OFFSET), base.wrapping_add(16));
        assert_eq!(slot.poll(), None);
    }

    #[test]
    fn init_keeps_other_rx_control_bits() {
        let regs = SimRegisters::new();
        regs.write(DMACRXCR_OFFSET, 0x0001_0001);
        let desc = RxDescriptor::new();
        let mut buffer = [0_u8; 256];
        let mut slot = RxSlot::new(&desc, &mut buffer).unwrap();

        slot.init(&regs);
        assert_eq!(regs.peek(DMACRXCR_OFFSET), 0x0001_0001 | (256 << 1));
    }

    #[test]
    fn receive_60_byte_frame() {
        let regs = SimRegisters::new();
        let desc = RxDescriptor::new();
        let mut buffer = [0_u8; DEFAULT_BUFFER_SIZE];
        let mut slot = RxSlot::new(&desc, &mut buffer).unwrap();
        let base = bus_addr(&desc);
        slot.init(&regs);
        slot.start(&regs);

        let payload: [u8; 60] = core::array::from_fn(|i| i as u8);
        slot.buffer[..60].copy_from_slice(&payload);
        desc.complete(60);

        assert!(slot.is_ready());
        assert_eq!(slot.poll(), Some(60));
        assert_eq!(slot.frame(), Some(&payload[..]));

        regs.clear_writes();
        let len = slot.receive(&regs, |frame| frame.len());
        assert_eq!(len, Some(60));

        // Rearmed: OWN and BUF1V back, tail pointer advanced again
        assert!(desc.is_owned());
        assert!(desc.is_buffer_valid());
        assert_eq!(regs.writes(), [(DMACRXDTPR_OFFSET, base.wrapping_add(16))]);
        assert!(!slot.is_ready());
        assert_eq!(slot.poll(), None);
        assert_eq!(slot.frame(), None);
        assert_eq!(slot.receive(&regs, |_| ()), None);

        desc.complete(42);
        assert_eq!(slot.poll(), Some(42));
    }

    #[test]
    fn receive_without_frame_does_not_rearm() {
        let regs = SimRegisters::new();
        let desc = RxDescriptor::new();
        let mut buffer = [0_u8; 128];
        let mut slot = RxSlot::new(&desc, &mut buffer).unwrap();
        slot.init(&regs);
        regs.clear_writes();

        let mut called = false;
        assert_eq!(slot.receive(&regs, |_| called = true), None);
        assert!(!called);
        assert!(regs.writes().is_empty());
    }

    #[test]
    fn oversized_length_is_clamped() {
        let regs = SimRegisters::new();
        let desc = RxDescriptor::new();
        let mut buffer = [0_u8; 64];
        let mut slot = RxSlot::new(&desc, &mut buffer).unwrap();
        slot.init(&regs);

        desc.complete(1500);
        assert_eq!(slot.poll(), Some(64));
        assert_eq!(slot.frame().map(<[u8]>::len), Some(64));
    }

    #[test]
    fn rearm_after_manual_consume() {
        let regs = SimRegisters::new();
        let desc = RxDescriptor::new();
        let mut buffer = [0_u8; 128];
        let mut slot = RxSlot::new(&desc, &mut buffer).unwrap();
        slot.init(&regs);

        desc.complete(60);
        assert_eq!(slot.frame().map(<[u8]>::len), Some(60));
        slot.rearm(&regs);
        assert_eq!(desc.raw_words()[3], (1 << 31) | (1 << 24));
        assert_eq!(slot.descriptor().buffer_addr(), bus_addr(slot.buffer.as_ptr()));
        assert_eq!(slot.buffer_len(), 128);
    }
}
