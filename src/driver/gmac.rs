//! MAC, MTL and DMA control
//!
//! [`Gmac`] owns the register handle and performs the bring-up sequence of
//! the peripheral: DMA soft reset, station address, MDC clock range, queue
//! operating modes, and finally enabling the MAC and starting the DMA once
//! the link is up. Frame movement itself lives in [`crate::dma`].

use crate::driver::config::{Duplex, EthConfig, Speed};
use crate::driver::error::Result;
use crate::hal::mdio::{MdcClockDivider, Mdio};
use crate::hal::reset::ResetController;
use crate::hal::wait::{BusyWait, Spin};
use crate::internal::constants::MAC_ADDR_LEN;
use crate::internal::register::RegisterAccess;
use crate::internal::register::dma::{
    DMACRXCR_OFFSET, DMACRXCR_SR, DMACSR_FBE, DMACSR_OFFSET, DMACSR_RBU, DMACSR_RPS,
    DMACSR_TPS, DMACTXCR_OFFSET, DMACTXCR_ST,
};
use crate::internal::register::mac::{
    MACA0HR_ADDRHI_MASK, MACA0HR_OFFSET, MACA0LR_OFFSET, MACCR_CST, MACCR_DM, MACCR_FES,
    MACCR_OFFSET, MACCR_RE, MACCR_TE,
};
use crate::internal::register::mtl::{
    MTLRXQDR_OFFSET, MTLRXQOMR_OFFSET, MTLRXQOMR_RSF, MTLTXQDR_OFFSET, MTLTXQOMR_OFFSET,
    MTLTXQOMR_TQS_2048, MTLTXQOMR_TQS_MASK, MTLTXQOMR_TQS_SHIFT, MTLTXQOMR_TSF,
    MTLTXQOMR_TXQEN_ENABLED, MTLTXQOMR_TXQEN_MASK, MTLTXQOMR_TXQEN_SHIFT,
};

// =============================================================================
// Status Snapshot
// =============================================================================

/// Raw DMA channel and MTL queue status, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EthStatus {
    /// DMACSR
    pub dma: u32,
    /// MTLRxQDR
    pub rx_queue: u32,
    /// MTLTxQDR
    pub tx_queue: u32,
}

impl EthStatus {
    /// DMA hit a fatal bus error and stopped
    pub const fn fatal_bus_error(&self) -> bool {
        self.dma & DMACSR_FBE != 0
    }

    /// RX DMA found its descriptor owned by software
    pub const fn rx_buffer_unavailable(&self) -> bool {
        self.dma & DMACSR_RBU != 0
    }

    /// RX DMA is stopped
    pub const fn rx_stopped(&self) -> bool {
        self.dma & DMACSR_RPS != 0
    }

    /// TX DMA is stopped
    pub const fn tx_stopped(&self) -> bool {
        self.dma & DMACSR_TPS != 0
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Controller for the MAC, MTL and DMA blocks of the Ethernet peripheral
#[derive(Debug)]
pub struct Gmac<R: RegisterAccess> {
    regs: R,
}

impl<R: RegisterAccess> Gmac<R> {
    /// Wrap a register handle
    pub const fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Register handle, for the descriptor rings and the MDIO engine
    pub fn regs(&self) -> &R {
        &self.regs
    }

    /// Release the register handle
    pub fn free(self) -> R {
        self.regs
    }

    /// Reset the peripheral and program it from `config`.
    ///
    /// Leaves the MAC disabled and the DMA stopped: set up the descriptor
    /// rings, wait for link, then call [`enable`](Self::enable) and
    /// [`start_dma`](Self::start_dma).
    pub fn init<W: BusyWait>(&mut self, config: &EthConfig, wait: &mut W) -> Result<()> {
        self.soft_reset(wait)?;

        self.setup_mdio(config.mdc_divider);
        self.set_mac_address(&config.mac_address);
        self.set_link(config.speed, config.duplex);
        self.set_crc_strip(config.crc_strip);
        self.configure_queues(config.tx_store_forward, config.rx_store_forward);

        #[cfg(feature = "log")]
        log::debug!(
            "GMAC init: {:?} {:?}, MDC {:?}",
            config.speed,
            config.duplex,
            config.mdc_divider
        );
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "GMAC init: {} {}, MDC {}",
            config.speed,
            config.duplex,
            config.mdc_divider
        );

        Ok(())
    }

    /// DMA soft reset through the given wait policy
    pub fn soft_reset<W: BusyWait>(&mut self, wait: &mut W) -> Result<()> {
        ResetController::new(&self.regs, wait).soft_reset()
    }

    // =========================================================================
    // MAC
    // =========================================================================

    /// Program the station address into MAC address 0
    pub fn set_mac_address(&mut self, addr: &[u8; MAC_ADDR_LEN]) {
        self.regs.replace_bits(
            MACA0HR_OFFSET,
            ((addr[5] as u32) << 8) | addr[4] as u32,
            MACA0HR_ADDRHI_MASK,
        );
        self.regs.write(
            MACA0LR_OFFSET,
            ((addr[3] as u32) << 24)
                | ((addr[2] as u32) << 16)
                | ((addr[1] as u32) << 8)
                | addr[0] as u32,
        );
    }

    /// Read back the station address
    pub fn mac_address(&self) -> [u8; MAC_ADDR_LEN] {
        let hi = self.regs.read(MACA0HR_OFFSET);
        let lo = self.regs.read(MACA0LR_OFFSET);
        [
            lo as u8,
            (lo >> 8) as u8,
            (lo >> 16) as u8,
            (lo >> 24) as u8,
            hi as u8,
            (hi >> 8) as u8,
        ]
    }

    /// Program the MDC clock range
    pub fn setup_mdio(&mut self, divider: MdcClockDivider) {
        let mut mdio = Mdio::new(&self.regs, Spin);
        mdio.setup(divider);
    }

    /// MDIO engine sharing this controller's registers
    pub fn mdio<W: BusyWait>(&self, wait: W) -> Mdio<&R, W> {
        Mdio::new(&self.regs, wait)
    }

    /// Set MACCR speed and duplex to match the negotiated link
    pub fn set_link(&mut self, speed: Speed, duplex: Duplex) {
        self.set_speed(speed);
        self.set_duplex(duplex);
    }

    /// Set MACCR.FES
    pub fn set_speed(&mut self, speed: Speed) {
        match speed {
            Speed::Mbps100 => self.regs.set_bits(MACCR_OFFSET, MACCR_FES),
            Speed::Mbps10 => self.regs.clear_bits(MACCR_OFFSET, MACCR_FES),
        }
    }

    /// Set MACCR.DM
    pub fn set_duplex(&mut self, duplex: Duplex) {
        match duplex {
            Duplex::Full => self.regs.set_bits(MACCR_OFFSET, MACCR_DM),
            Duplex::Half => self.regs.clear_bits(MACCR_OFFSET, MACCR_DM),
        }
    }

    /// Set MACCR.CST
    pub fn set_crc_strip(&mut self, enabled: bool) {
        if enabled {
            self.regs.set_bits(MACCR_OFFSET, MACCR_CST);
        } else {
            self.regs.clear_bits(MACCR_OFFSET, MACCR_CST);
        }
    }

    /// Enable the MAC transmitter and receiver. Call once the link is up.
    pub fn enable(&mut self) {
        self.regs.set_bits(MACCR_OFFSET, MACCR_RE | MACCR_TE);
    }

    /// Disable the MAC transmitter and receiver
    pub fn disable(&mut self) {
        self.regs.clear_bits(MACCR_OFFSET, MACCR_RE | MACCR_TE);
    }

    /// Whether both MAC directions are enabled
    pub fn is_enabled(&self) -> bool {
        self.regs.has_bits(MACCR_OFFSET, MACCR_RE | MACCR_TE)
    }

    // =========================================================================
    // MTL
    // =========================================================================

    /// Enable the TX queue with a 2 KiB FIFO and set both store-and-forward
    /// modes
    pub fn configure_queues(&mut self, tx_store_forward: bool, rx_store_forward: bool) {
        let mut value = (MTLTXQOMR_TXQEN_ENABLED << MTLTXQOMR_TXQEN_SHIFT)
            | (MTLTXQOMR_TQS_2048 << MTLTXQOMR_TQS_SHIFT);
        if tx_store_forward {
            value |= MTLTXQOMR_TSF;
        }
        self.regs.replace_bits(
            MTLTXQOMR_OFFSET,
            value,
            MTLTXQOMR_TSF | MTLTXQOMR_TXQEN_MASK | MTLTXQOMR_TQS_MASK,
        );

        if rx_store_forward {
            self.regs.set_bits(MTLRXQOMR_OFFSET, MTLRXQOMR_RSF);
        } else {
            self.regs.clear_bits(MTLRXQOMR_OFFSET, MTLRXQOMR_RSF);
        }
    }

    // =========================================================================
    // DMA
    // =========================================================================

    /// Start the TX and RX DMA channels
    pub fn start_dma(&mut self) {
        self.regs.set_bits(DMACTXCR_OFFSET, DMACTXCR_ST);
        self.regs.set_bits(DMACRXCR_OFFSET, DMACRXCR_SR);
    }

    /// Stop the TX and RX DMA channels
    pub fn stop_dma(&mut self) {
        self.regs.clear_bits(DMACTXCR_OFFSET, DMACTXCR_ST);
        self.regs.clear_bits(DMACRXCR_OFFSET, DMACRXCR_SR);
    }

    /// Snapshot the DMA channel and MTL queue status registers
    pub fn status(&self) -> EthStatus {
        EthStatus {
            dma: self.regs.read(DMACSR_OFFSET),
            rx_queue: self.regs.read(MTLRXQDR_OFFSET),
            tx_queue: self.regs.read(MTLTXQDR_OFFSET),
        }
    }
}
