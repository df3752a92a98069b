//! Reset Controller HAL
//!
//! DMA soft reset of the Ethernet peripheral. Setting DMAMR.SWR resets the
//! MAC and DMA logic; hardware clears the bit once every clock domain has
//! completed the reset. The RMII reference clock from the PHY must be
//! running, otherwise SWR never clears.

use crate::driver::error::Result;
use crate::hal::wait::{BusyWait, poll_until};
use crate::internal::register::RegisterAccess;
use crate::internal::register::dma::{DMAMR_OFFSET, DMAMR_SWR};

// =============================================================================
// Reset Controller
// =============================================================================

/// Reset controller for the Ethernet peripheral
#[derive(Debug)]
pub struct ResetController<R: RegisterAccess, W: BusyWait> {
    regs: R,
    wait: W,
}

impl<R: RegisterAccess, W: BusyWait> ResetController<R, W> {
    /// Create a new reset controller
    pub fn new(regs: R, wait: W) -> Self {
        Self { regs, wait }
    }

    /// Perform a DMA soft reset and wait for it to complete.
    ///
    /// All MAC, MTL and DMA registers return to their reset values. The wait
    /// policy bounds the wait; with [`Spin`](crate::hal::wait::Spin) a
    /// missing reference clock hangs here.
    pub fn soft_reset(&mut self) -> Result<()> {
        self.start_reset();

        let regs = &self.regs;
        let result = poll_until(&mut self.wait, || !regs.has_bits(DMAMR_OFFSET, DMAMR_SWR));

        if result.is_err() {
            #[cfg(feature = "log")]
            log::warn!("DMA soft reset did not complete");
            #[cfg(feature = "defmt")]
            defmt::warn!("DMA soft reset did not complete");
        }

        result
    }

    /// Set DMAMR.SWR without waiting
    pub fn start_reset(&mut self) {
        self.regs.set_bits(DMAMR_OFFSET, DMAMR_SWR);
    }

    /// Check if a reset is currently in progress
    pub fn is_reset_in_progress(&self) -> bool {
        self.regs.has_bits(DMAMR_OFFSET, DMAMR_SWR)
    }

    /// Release the register handle and the wait policy
    pub fn release(self) -> (R, W) {
        (self.regs, self.wait)
    }
}
