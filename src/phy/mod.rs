//! Ethernet PHY Drivers
//!
//! The PHY layer talks to the transceiver only through [`MdioBus`], so it
//! runs unchanged over the MAC's [`Mdio`] engine or a test double.
//!
//! # Supported PHY Chips
//!
//! - [`Lan8742a`]: Microchip LAN8742A (STM32H7 Nucleo boards)
//!
//! # Example
//!
//! ```ignore
//! use ph_stm32h7_eth::phy::{Lan8742a, PhyDriver};
//! use ph_stm32h7_eth::hal::{DelayWait, Spin};
//!
//! let mut mdio = gmac.mdio(Spin);
//! let mut phy = Lan8742a::detect(&mut mdio, DelayWait::for_phy_reset(delay))?;
//! phy.verify_id(&mut mdio)?;
//! phy.init(&mut mdio)?;
//! ```
//!
//! [`MdioBus`]: crate::hal::MdioBus
//! [`Mdio`]: crate::hal::Mdio

pub mod generic;
pub mod lan8742a;

pub use generic::{LinkStatus, PhyDriver, detect, ieee802_3};
pub use lan8742a::{Lan8742a, Lan8742aWithReset};

// IEEE 802.3 Clause 22 register definitions
pub use crate::internal::phy_registers::{anar, bcr, bsr, phy_reg};
