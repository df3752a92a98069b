//! Centralized Constants
//!
//! Magic numbers shared across the driver. Hardware register bit definitions
//! stay in their respective `register/` modules.

// =============================================================================
// Frame and Buffer Sizes
// =============================================================================

/// Default DMA buffer size: 1500-byte MTU, 14-byte header, VLAN tag and
/// FCS, rounded up to a multiple of 4
pub const DEFAULT_BUFFER_SIZE: usize = 1524;

// =============================================================================
// Descriptors
// =============================================================================

/// Size of one DMA descriptor in bytes (4 words)
pub const DESCRIPTOR_SIZE: usize = 16;

/// Largest value the 14-bit descriptor length fields can hold
pub const MAX_DESCRIPTOR_LEN: usize = 0x3FFF;

// =============================================================================
// MAC Address
// =============================================================================

/// MAC address length
pub const MAC_ADDR_LEN: usize = 6;

/// Default MAC address (locally administered)
pub const DEFAULT_MAC_ADDR: [u8; MAC_ADDR_LEN] = [0x02, 0xD1, 0x91, 0x07, 0x02, 0x03];

// =============================================================================
// Timing
// =============================================================================

/// Poll interval used by [`DelayWait`](crate::hal::wait::DelayWait) defaults
pub const POLL_INTERVAL_US: u32 = 10;

/// MDIO transaction timeout in microseconds
pub const MDIO_TIMEOUT_US: u32 = 1_000;

/// PHY soft reset timeout in microseconds (LAN8742A completes within 500 ms)
pub const PHY_RESET_TIMEOUT_US: u32 = 500_000;

/// DMA soft reset timeout in microseconds
pub const SOFT_RESET_TIMEOUT_US: u32 = 100_000;

/// MDC must not exceed 2.5 MHz per IEEE 802.3
pub const MDC_MAX_FREQ_HZ: u32 = 2_500_000;

// =============================================================================
// PHY Addressing
// =============================================================================

/// Maximum valid PHY address (5-bit MDIO field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit MDIO field)
pub const MAX_REG_ADDR: u8 = 31;

/// Highest address probed by [`detect`](crate::phy::detect)
pub const PHY_SCAN_LAST_ADDR: u8 = 62;
