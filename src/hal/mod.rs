//! Hardware Abstraction Layer
//!
//! Higher-level abstractions over the raw registers.
//!
//! # Modules
//!
//! - [`mdio`]: MDIO bus for PHY communication
//! - [`reset`]: DMA soft reset of the Ethernet peripheral
//! - [`wait`]: Busy-wait policies shared by every polling loop
//!
//! # Register Access
//!
//! Everything here is generic over [`RegisterAccess`]. Use [`Mmio::eth`] on
//! hardware; host tests substitute a simulated register file.

pub mod mdio;
pub mod reset;
pub mod wait;

pub use crate::internal::register::{Mmio, RegisterAccess};
pub use mdio::{MdcClockDivider, Mdio, MdioBus};
pub use reset::ResetController;
pub use wait::{BusyWait, DelayWait, FnWait, Spin, from_fn};
