//! Microchip LAN8742A PHY Driver
//!
//! The LAN8742A is a 10/100 RMII transceiver, the PHY fitted on STM32H7
//! Nucleo boards. Besides the standard Clause 22 registers it reports the
//! auto-negotiation result in its Special Control/Status Register (SSR,
//! register 31):
//!
//! | SSR[4:2] | Result |
//! |----------|--------|
//! | `001` | 10BASE-T half duplex |
//! | `101` | 10BASE-T full duplex |
//! | `010` | 100BASE-TX half duplex |
//! | `110` | 100BASE-TX full duplex |
//!
//! Any other code leaves the link unresolved.
//!
//! # PHY Address
//!
//! Strapped through PHYAD0; Nucleo boards use address 0. Use
//! [`Lan8742a::detect`] when the strap is unknown.
//!
//! # Example
//!
//! ```ignore
//! use ph_stm32h7_eth::phy::{Lan8742a, PhyDriver};
//! use ph_stm32h7_eth::hal::DelayWait;
//!
//! let mut phy = Lan8742a::new(0, DelayWait::for_phy_reset(delay));
//! phy.init(&mut mdio)?;
//!
//! loop {
//!     if let Some(link) = phy.poll_link(&mut mdio)? {
//!         if let Some((speed, duplex)) = link.resolved() {
//!             gmac.set_link(speed, duplex);
//!         }
//!         break;
//!     }
//! }
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::generic::{LinkStatus, PhyDriver, detect, ieee802_3};
use crate::driver::config::{Duplex, Speed};
use crate::driver::error::{ConfigError, Result};
use crate::hal::mdio::MdioBus;
use crate::hal::wait::BusyWait;
use crate::internal::phy_registers::lan8742a::{
    PHY_ID, PHY_ID_MASK, SSR, ssr,
    timing::{RESET_PULSE_US, RESET_RECOVERY_US},
};

/// Decode the SSR speed indication into speed and duplex
pub const fn decode_speed(ssr_val: u16) -> Option<(Speed, Duplex)> {
    match (ssr_val & ssr::SPEED_MASK) >> ssr::SPEED_SHIFT {
        ssr::CODE_10_HALF => Some((Speed::Mbps10, Duplex::Half)),
        ssr::CODE_10_FULL => Some((Speed::Mbps10, Duplex::Full)),
        ssr::CODE_100_HALF => Some((Speed::Mbps100, Duplex::Half)),
        ssr::CODE_100_FULL => Some((Speed::Mbps100, Duplex::Full)),
        _ => None,
    }
}

// =============================================================================
// LAN8742A Driver
// =============================================================================

/// LAN8742A PHY driver
///
/// `W` bounds the soft reset poll; pass a
/// [`DelayWait`](crate::hal::wait::DelayWait) to turn a PHY that never
/// leaves reset into [`IoError::Timeout`](crate::IoError::Timeout).
#[derive(Debug)]
pub struct Lan8742a<W: BusyWait> {
    /// PHY address (0-31)
    addr: u8,
    /// Soft reset wait policy
    wait: W,
    /// Last reported link state
    last_link_up: bool,
}

impl<W: BusyWait> Lan8742a<W> {
    /// Create a driver for the PHY at `addr`
    pub const fn new(addr: u8, wait: W) -> Self {
        Self {
            addr,
            wait,
            last_link_up: false,
        }
    }

    /// Create a driver for the first PHY that answers on the bus
    pub fn detect<M: MdioBus>(mdio: &mut M, wait: W) -> Result<Self> {
        let addr = detect(mdio)?;
        Ok(Self::new(addr, wait))
    }

    /// Change the PHY address
    pub fn set_address(&mut self, addr: u8) {
        self.addr = addr;
    }

    /// Borrow the wait policy
    pub fn wait_policy(&mut self) -> &mut W {
        &mut self.wait
    }

    /// Check the identifier registers against the LAN8742A OUI and model
    pub fn verify_id<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        let id = ieee802_3::read_phy_id(mdio, self.addr)?;
        if id & PHY_ID_MASK == PHY_ID {
            Ok(())
        } else {
            #[cfg(feature = "log")]
            log::warn!("PHY {}: unexpected id {id:#010x}", self.addr);
            #[cfg(feature = "defmt")]
            defmt::warn!("PHY {}: unexpected id {:#x}", self.addr, id);
            Err(ConfigError::UnexpectedPhyId.into())
        }
    }

    /// Silicon revision from PHYIDR2
    pub fn revision<M: MdioBus>(&mut self, mdio: &mut M) -> Result<u8> {
        let id = ieee802_3::read_phy_id(mdio, self.addr)?;
        Ok((id & 0x0F) as u8)
    }
}

impl<W: BusyWait> PhyDriver for Lan8742a<W> {
    fn address(&self) -> u8 {
        self.addr
    }

    fn init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.soft_reset(mdio)?;
        self.enable_auto_negotiation(mdio)
    }

    fn soft_reset<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.last_link_up = false;
        ieee802_3::soft_reset(mdio, self.addr, &mut self.wait)
    }

    fn is_link_up<M: MdioBus>(&mut self, mdio: &mut M) -> Result<bool> {
        ieee802_3::is_link_up(mdio, self.addr)
    }

    fn link_status<M: MdioBus>(&mut self, mdio: &mut M) -> Result<LinkStatus> {
        if !ieee802_3::is_link_up(mdio, self.addr)? {
            return Ok(LinkStatus::down());
        }

        let ssr_val = mdio.read(self.addr, SSR)?;
        if ssr_val & ssr::AUTODONE == 0 {
            return Ok(LinkStatus::unresolved());
        }

        Ok(match decode_speed(ssr_val) {
            Some((speed, duplex)) => LinkStatus::negotiated(speed, duplex),
            None => LinkStatus::unresolved(),
        })
    }

    fn poll_link<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        let status = self.link_status(mdio)?;
        let negotiated = status.resolved().is_some();

        if negotiated && !self.last_link_up {
            self.last_link_up = true;
            #[cfg(feature = "log")]
            log::info!("PHY {}: link up {:?}", self.addr, status.resolved());
            #[cfg(feature = "defmt")]
            defmt::info!("PHY {}: link up {}", self.addr, status.resolved());
            return Ok(Some(status));
        }

        if !status.up && self.last_link_up {
            self.last_link_up = false;
            #[cfg(feature = "log")]
            log::info!("PHY {}: link down", self.addr);
            #[cfg(feature = "defmt")]
            defmt::info!("PHY {}: link down", self.addr);
        }

        Ok(None)
    }

    fn enable_auto_negotiation<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::advertise_10_100(mdio, self.addr)?;
        ieee802_3::enable_auto_negotiation(mdio, self.addr)
    }

    fn phy_id<M: MdioBus>(&mut self, mdio: &mut M) -> Result<u32> {
        ieee802_3::read_phy_id(mdio, self.addr)
    }
}

// =============================================================================
// LAN8742A with Hardware Reset Pin
// =============================================================================

/// LAN8742A driver that also owns the active-low nRST line
#[derive(Debug)]
pub struct Lan8742aWithReset<RST: OutputPin, W: BusyWait> {
    /// Inner PHY driver
    inner: Lan8742a<W>,
    /// Reset pin (active low)
    reset_pin: RST,
}

impl<RST: OutputPin, W: BusyWait> Lan8742aWithReset<RST, W> {
    /// Create a driver; the reset pin is driven high (inactive).
    pub fn new(addr: u8, wait: W, mut reset_pin: RST) -> Self {
        let _ = reset_pin.set_high();
        Self {
            inner: Lan8742a::new(addr, wait),
            reset_pin,
        }
    }

    /// Pulse nRST low, then wait for the PHY to come back.
    ///
    /// Call before [`init`](PhyDriver::init) when the PHY may be in an
    /// unknown state.
    pub fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.reset_pin
            .set_low()
            .map_err(|_| ConfigError::ResetPinError)?;
        delay.delay_us(RESET_PULSE_US);

        self.reset_pin
            .set_high()
            .map_err(|_| ConfigError::ResetPinError)?;
        delay.delay_us(RESET_RECOVERY_US);

        self.inner.last_link_up = false;
        Ok(())
    }

    /// Borrow the inner driver
    pub fn inner(&mut self) -> &mut Lan8742a<W> {
        &mut self.inner
    }

    /// Release the inner driver and the reset pin
    pub fn release(self) -> (Lan8742a<W>, RST) {
        (self.inner, self.reset_pin)
    }
}

impl<RST: OutputPin, W: BusyWait> PhyDriver for Lan8742aWithReset<RST, W> {
    fn address(&self) -> u8 {
        self.inner.address()
    }

    fn init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.inner.init(mdio)
    }

    fn soft_reset<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.inner.soft_reset(mdio)
    }

    fn is_link_up<M: MdioBus>(&mut self, mdio: &mut M) -> Result<bool> {
        self.inner.is_link_up(mdio)
    }

    fn link_status<M: MdioBus>(&mut self, mdio: &mut M) -> Result<LinkStatus> {
        self.inner.link_status(mdio)
    }

    fn poll_link<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        self.inner.poll_link(mdio)
    }

    fn enable_auto_negotiation<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.inner.enable_auto_negotiation(mdio)
    }

    fn phy_id<M: MdioBus>(&mut self, mdio: &mut M) -> Result<u32> {
        self.inner.phy_id(mdio)
    }
}
