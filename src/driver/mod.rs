//! Core driver components for the STM32H7 Ethernet peripheral.
//!
//! - [`config`] - Configuration types and builder patterns
//! - [`error`] - Error types and result aliases
//! - [`gmac`] - MAC, MTL and DMA channel control
//!
//! # Example
//!
//! ```ignore
//! use ph_stm32h7_eth::driver::{EthConfig, Gmac};
//! use ph_stm32h7_eth::hal::{Mmio, Spin};
//!
//! let mut gmac = Gmac::new(unsafe { Mmio::eth() });
//! gmac.init(&EthConfig::new().with_hclk_hz(200_000_000), &mut Spin)?;
//! ```

// Submodules
pub mod config;
pub mod error;
pub mod gmac;

// Re-exports for convenience
pub use config::{Duplex, EthConfig, Speed};
pub use error::{ConfigError, ConfigResult, DmaError, DmaResult, Error, IoError, IoResult, Result};
pub use gmac::{EthStatus, Gmac};
