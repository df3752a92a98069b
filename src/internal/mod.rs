//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`register`]: Raw memory-mapped register definitions
//! - [`constants`]: Internal constants and magic numbers
//! - [`descriptor_bits`]: DMA descriptor word layouts
//! - [`phy_registers`]: IEEE 802.3 and LAN8742A PHY register definitions

pub(crate) mod constants;
pub(crate) mod descriptor_bits;
pub(crate) mod phy_registers;
pub mod register;
