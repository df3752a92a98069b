//! Generic PHY Driver Trait
//!
//! Common interface for Ethernet PHY drivers, the IEEE 802.3 Clause 22
//! helpers they share, and PHY address discovery.

use crate::driver::config::{Duplex, Speed};
use crate::driver::error::{ConfigError, Result};
use crate::hal::mdio::MdioBus;
use crate::internal::constants::PHY_SCAN_LAST_ADDR;
use crate::internal::phy_registers::phy_reg;

// =============================================================================
// Link Status
// =============================================================================

/// Ethernet link status information
///
/// `speed` and `duplex` are only `Some` when the link is up and
/// auto-negotiation produced a known result. An up link whose result is
/// not (yet) known is a normal transient state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link is established
    pub up: bool,
    /// Auto-negotiation completed with a known speed and duplex
    pub auto_negotiated: bool,
    /// Negotiated speed
    pub speed: Option<Speed>,
    /// Negotiated duplex mode
    pub duplex: Option<Duplex>,
}

impl LinkStatus {
    /// Link down
    pub const fn down() -> Self {
        Self {
            up: false,
            auto_negotiated: false,
            speed: None,
            duplex: None,
        }
    }

    /// Link up, negotiation not resolved
    pub const fn unresolved() -> Self {
        Self {
            up: true,
            auto_negotiated: false,
            speed: None,
            duplex: None,
        }
    }

    /// Link up with a negotiated speed and duplex
    pub const fn negotiated(speed: Speed, duplex: Duplex) -> Self {
        Self {
            up: true,
            auto_negotiated: true,
            speed: Some(speed),
            duplex: Some(duplex),
        }
    }

    /// Negotiated speed and duplex, if both are known
    pub const fn resolved(&self) -> Option<(Speed, Duplex)> {
        match (self.speed, self.duplex) {
            (Some(speed), Some(duplex)) if self.up => Some((speed, duplex)),
            _ => None,
        }
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Trait for Ethernet PHY drivers
///
/// Drivers talk to the chip exclusively through an [`MdioBus`], so they can
/// be exercised against a mock bus on the host.
pub trait PhyDriver {
    /// Get the PHY address (0-31)
    fn address(&self) -> u8;

    /// Initialize the PHY: soft reset, then auto-negotiate every mode
    fn init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Perform a soft reset and wait for BCR.RESET to self-clear
    fn soft_reset<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Check if the link is up
    fn is_link_up<M: MdioBus>(&mut self, mdio: &mut M) -> Result<bool>;

    /// Get current link status with speed/duplex
    fn link_status<M: MdioBus>(&mut self, mdio: &mut M) -> Result<LinkStatus>;

    /// Poll for link changes
    ///
    /// Returns `Some(LinkStatus)` once when a negotiated link is first
    /// seen, `None` otherwise.
    fn poll_link<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>>;

    /// Advertise all 10/100 modes and restart auto-negotiation
    fn enable_auto_negotiation<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Read the PHY identifier: `(PHYIDR1 << 16) | PHYIDR2`
    fn phy_id<M: MdioBus>(&mut self, mdio: &mut M) -> Result<u32>;
}

// =============================================================================
// Address Discovery
// =============================================================================

/// Find the first PHY that answers on the bus.
///
/// Probes addresses `0..=62` in ascending order by reading PHYIDR1. An
/// address whose read fails or returns `0xFFFF` (undriven bus) is skipped.
/// When several PHYs share the bus the lowest address wins; set the address
/// explicitly in that case.
pub fn detect<M: MdioBus>(mdio: &mut M) -> Result<u8> {
    for addr in 0..=PHY_SCAN_LAST_ADDR {
        match mdio.read(addr, phy_reg::PHYIDR1) {
            Ok(id) if id != 0xFFFF => {
                #[cfg(feature = "log")]
                log::debug!("PHY found at address {addr}, PHYIDR1 {id:#06x}");
                #[cfg(feature = "defmt")]
                defmt::debug!("PHY found at address {}, PHYIDR1 {:#x}", addr, id);
                return Ok(addr);
            }
            _ => {}
        }
    }
    Err(ConfigError::PhyNotFound.into())
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod ieee802_3 {
    use super::*;
    use crate::hal::wait::BusyWait;
    use crate::internal::phy_registers::{anar, bcr, bsr};

    /// Read BSR and check link status bit
    pub fn is_link_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bsr_val = mdio.read(phy_addr, phy_reg::BSR)?;
        Ok((bsr_val & bsr::LINK_STATUS) != 0)
    }

    /// Set BCR.RESET and poll until it self-clears.
    ///
    /// A failed read while polling counts as "not done yet". `wait` runs
    /// after every unsuccessful poll, including failed reads, so a bounded
    /// policy turns a dead bus into its error instead of hanging.
    pub fn soft_reset<M, W>(mdio: &mut M, phy_addr: u8, wait: &mut W) -> Result<()>
    where
        M: MdioBus,
        W: BusyWait + ?Sized,
    {
        mdio.write(phy_addr, phy_reg::BCR, bcr::RESET)?;

        wait.begin();
        loop {
            match mdio.read(phy_addr, phy_reg::BCR) {
                Ok(bcr_val) if bcr_val & bcr::RESET == 0 => return Ok(()),
                Ok(_) => {}
                #[cfg_attr(
                    not(any(feature = "log", feature = "defmt")),
                    allow(unused_variables)
                )]
                Err(e) => {
                    #[cfg(feature = "log")]
                    log::warn!("PHY {phy_addr}: BCR read failed during reset: {e}");
                    #[cfg(feature = "defmt")]
                    defmt::warn!("PHY {}: BCR read failed during reset: {}", phy_addr, e);
                }
            }
            wait.wait()?;
        }
    }

    /// Write the auto-negotiation advertisement
    pub fn advertise<M: MdioBus>(mdio: &mut M, phy_addr: u8, abilities: u16) -> Result<()> {
        mdio.write(phy_addr, phy_reg::ANAR, abilities)
    }

    /// Advertise every 10/100 mode
    pub fn advertise_10_100<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        advertise(mdio, phy_addr, anar::ALL_10_100)
    }

    /// Enable auto-negotiation and restart
    pub fn enable_auto_negotiation<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        let bcr_val = mdio.read(phy_addr, phy_reg::BCR)?;
        mdio.write(
            phy_addr,
            phy_reg::BCR,
            (bcr_val | bcr::AN_ENABLE | bcr::AN_RESTART) & !(bcr::ISOLATE | bcr::POWER_DOWN),
        )
    }

    /// Read PHY ID from PHYIDR1 and PHYIDR2
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
        let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
        let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
        Ok((id1 << 16) | id2)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::driver::error::{Error, IoError};
    use crate::hal::mdio::Mdio;
    use crate::hal::wait::{DelayWait, Spin, from_fn};
    use crate::internal::phy_registers::{anar, bcr};
    use crate::testing::{MockDelay, MockMdioBus, SimRegisters};

    // =========================================================================
    // Detect
    // =========================================================================

    #[test]
    fn detect_skips_absent_addresses() {
        let mut mdio = MockMdioBus::new();
        for addr in 0..5 {
            mdio.set_register(addr, phy_reg::PHYIDR1, 0xFFFF);
        }
        mdio.set_register(5, phy_reg::PHYIDR1, 0x0007);
        mdio.set_register(9, phy_reg::PHYIDR1, 0x0022);

        assert_eq!(detect(&mut mdio).unwrap(), 5);
    }

    #[test]
    fn detect_skips_read_errors() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_reads_from(0);
        mdio.set_register(0, phy_reg::PHYIDR1, 0x0007);
        mdio.set_register(1, phy_reg::PHYIDR1, 0x0007);

        assert_eq!(detect(&mut mdio).unwrap(), 1);
    }

    #[test]
    fn detect_not_found() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_reads_from(3);
        mdio.fail_reads_from(40);

        assert_eq!(
            detect(&mut mdio),
            Err(Error::Config(ConfigError::PhyNotFound))
        );
        // Every address was probed, in order
        let reads = mdio.get_reads();
        assert_eq!(reads.len(), 63);
        assert_eq!(reads.first(), Some(&(0, phy_reg::PHYIDR1)));
        assert_eq!(reads.last(), Some(&(62, phy_reg::PHYIDR1)));
    }

    #[test]
    fn detect_over_mdio_engine() {
        let sim = SimRegisters::new();
        sim.set_phy_register(5, phy_reg::PHYIDR1, 0x0007);
        let mut mdio = Mdio::new(&sim, Spin);

        assert_eq!(detect(&mut mdio).unwrap(), 5);
    }

    #[test]
    fn detect_over_empty_mdio_engine() {
        let sim = SimRegisters::new();
        let mut mdio = Mdio::new(&sim, Spin);

        // Addresses above 31 are rejected by the engine and skipped
        assert_eq!(
            detect(&mut mdio),
            Err(Error::Config(ConfigError::PhyNotFound))
        );
    }

    // =========================================================================
    // Soft Reset
    // =========================================================================

    #[test]
    fn soft_reset_polls_until_clear() {
        let mut mdio = MockMdioBus::new();
        mdio.set_register(0, phy_reg::BCR, 0);
        mdio.self_clear(0, phy_reg::BCR, bcr::RESET, 3);

        let waits = Cell::new(0u32);
        let mut wait = from_fn(|| {
            waits.set(waits.get() + 1);
            Ok(())
        });
        ieee802_3::soft_reset(&mut mdio, 0, &mut wait).unwrap();

        assert_eq!(mdio.get_writes(), [(0, phy_reg::BCR, bcr::RESET)]);
        assert_eq!(waits.get(), 3);
    }

    #[test]
    fn soft_reset_retries_transient_read_errors() {
        let mut mdio = MockMdioBus::new();
        mdio.set_register(0, phy_reg::BCR, 0);
        mdio.self_clear(0, phy_reg::BCR, bcr::RESET, 0);
        mdio.fail_next_reads(2);

        let waits = Cell::new(0u32);
        let mut wait = from_fn(|| {
            waits.set(waits.get() + 1);
            Ok(())
        });
        ieee802_3::soft_reset(&mut mdio, 0, &mut wait).unwrap();

        // One wait per failed read
        assert_eq!(waits.get(), 2);
    }

    #[test]
    fn soft_reset_dead_bus_times_out() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_reads_from(0);
        let delay = MockDelay::new();
        let mut wait = DelayWait::new(&delay, 1_000, 10_000);

        assert_eq!(
            ieee802_3::soft_reset(&mut mdio, 0, &mut wait),
            Err(Error::Io(IoError::Timeout))
        );
    }

    #[test]
    fn soft_reset_write_error_propagates() {
        let mut mdio = MockMdioBus::new();
        mdio.set_fail_writes(true);

        assert_eq!(
            ieee802_3::soft_reset(&mut mdio, 0, &mut Spin),
            Err(Error::Io(IoError::PhyError))
        );
        assert!(mdio.get_reads().is_empty());
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    #[test]
    fn enable_auto_negotiation_sets_bits() {
        let mut mdio = MockMdioBus::new();
        mdio.set_register(0, phy_reg::BCR, bcr::ISOLATE);
        ieee802_3::enable_auto_negotiation(&mut mdio, 0).unwrap();

        let value = mdio.get_register(0, phy_reg::BCR).unwrap();
        assert_ne!(value & bcr::AN_ENABLE, 0);
        assert_ne!(value & bcr::AN_RESTART, 0);
        assert_eq!(value & bcr::ISOLATE, 0);
    }

    #[test]
    fn advertise_all_modes() {
        let mut mdio = MockMdioBus::new();
        ieee802_3::advertise_10_100(&mut mdio, 2).unwrap();
        assert_eq!(mdio.get_register(2, phy_reg::ANAR), Some(anar::ALL_10_100));
    }

    #[test]
    fn read_phy_id_combines_registers() {
        let mut mdio = MockMdioBus::new();
        mdio.set_register(1, phy_reg::PHYIDR1, 0x0007);
        mdio.set_register(1, phy_reg::PHYIDR2, 0xC131);
        assert_eq!(ieee802_3::read_phy_id(&mut mdio, 1).unwrap(), 0x0007_C131);
    }

    // =========================================================================
    // LinkStatus
    // =========================================================================

    #[test]
    fn link_status_constructors() {
        assert_eq!(LinkStatus::default(), LinkStatus::down());
        assert_eq!(LinkStatus::down().resolved(), None);
        assert_eq!(LinkStatus::unresolved().resolved(), None);
        assert!(LinkStatus::unresolved().up);
        assert_eq!(
            LinkStatus::negotiated(Speed::Mbps10, Duplex::Full).resolved(),
            Some((Speed::Mbps10, Duplex::Full))
        );
    }
}
