//! STM32H7 Ethernet Driver
//!
//! A `no_std`, `no_alloc`, polled driver for the Ethernet peripheral of the
//! STM32H7 family (Synopsys DesignWare Ethernet QoS core) together with a
//! PHY management layer.
//!
//! # Architecture
//!
//! The driver is organized into four layers:
//!
//! 1. **MAC Layer** ([`driver`]): soft reset, MAC address, link mode, MTL
//!    queues, DMA start/stop and status
//! 2. **DMA Layer** ([`dma`]): TX descriptor ring and single-slot RX
//!    reclaim protocol over caller-owned descriptor memory
//! 3. **PHY Layer** ([`phy`]): PHY discovery, reset and link decoding
//!    (LAN8742A)
//! 4. **HAL Layer** ([`hal`]): register access, MDIO engine and the wait
//!    policies every polling loop runs through
//!
//! Registers are never touched through raw pointers outside
//! [`hal::Mmio`]; everything else goes through [`hal::RegisterAccess`], so
//! the whole stack runs against a simulated register file on the host.
//!
//! # Waiting
//!
//! Every busy-poll (MDIO completion, PHY reset, DMA soft reset) calls a
//! [`hal::BusyWait`] policy between checks. [`hal::Spin`] polls forever;
//! [`hal::DelayWait`] sleeps through an `embedded-hal` delay and gives up
//! with [`IoError::Timeout`] once its budget is spent.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for public types
//! - `log`: Emit diagnostics through the `log` facade
//!
//! # Example
//!
//! ```ignore
//! use ph_stm32h7_eth::{EthConfig, Gmac, Lan8742a, PhyDriver, TxRing};
//! use ph_stm32h7_eth::hal::{DelayWait, Mmio, Spin};
//!
//! let mut gmac = Gmac::new(unsafe { Mmio::eth() });
//! let config = EthConfig::new()
//!     .with_mac_address([0x02, 0x00, 0x00, 0x12, 0x34, 0x56])
//!     .with_hclk_hz(200_000_000);
//! gmac.init(&config, &mut DelayWait::for_soft_reset(&mut delay))?;
//!
//! let mut mdio = gmac.mdio(DelayWait::for_mdio(&mut delay));
//! let mut phy = Lan8742a::new(0, Spin);
//! phy.init(&mut mdio)?;
//! let link = loop {
//!     if let Some(link) = phy.poll_link(&mut mdio)? {
//!         break link;
//!     }
//! };
//! drop(mdio);
//!
//! if let Some((speed, duplex)) = link.resolved() {
//!     gmac.set_link(speed, duplex);
//! }
//!
//! let mut tx = TxRing::new();
//! tx.set_descriptors(gmac.regs(), &TX_DESC, tx_buffers)?;
//! gmac.start_dma();
//! gmac.enable();
//! tx.put(gmac.regs(), &FRAME)?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; Cargo.toml mirrors them for workspace tooling.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod dma;
pub mod driver;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use dma::{RxDescriptor, RxSlot, TxDescriptor, TxRing};
pub use driver::config::{Duplex, EthConfig, Speed};
pub use driver::error::{
    ConfigError, ConfigResult, DmaError, DmaResult, Error, IoError, IoResult, Result,
};
pub use driver::gmac::{EthStatus, Gmac};

/// Low-level register definitions for advanced use.
///
/// These are intentionally separated from the primary facade. Most users should
/// prefer the driver APIs instead of touching registers directly.
///
/// # Safety
///
/// Direct register access bypasses driver invariants. Use only if you fully
/// understand the STM32H7 Ethernet peripheral and accept responsibility for
/// correct sequencing.
pub mod unsafe_registers {
    pub use crate::internal::register::{ETH_BASE, dma, mac, mtl};
}

// Re-export PHY types
pub use phy::{Lan8742a, Lan8742aWithReset, LinkStatus, PhyDriver};

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::internal::constants::{
        // Buffers and descriptors
        DEFAULT_BUFFER_SIZE,
        DESCRIPTOR_SIZE,
        MAX_DESCRIPTOR_LEN,
        // MAC address
        DEFAULT_MAC_ADDR,
        MAC_ADDR_LEN,
        // Clocks
        MDC_MAX_FREQ_HZ,
        // Timing (see DelayWait::for_mdio and friends)
        MDIO_TIMEOUT_US,
        PHY_RESET_TIMEOUT_US,
        POLL_INTERVAL_US,
        SOFT_RESET_TIMEOUT_US,
    };
}
