//! Configuration types for the Ethernet driver

use crate::hal::mdio::MdcClockDivider;
use crate::internal::constants::{DEFAULT_MAC_ADDR, MAC_ADDR_LEN};

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    #[default]
    Mbps100,
}

impl Speed {
    /// Speed in Mbit/s
    pub const fn mbps(self) -> u16 {
        match self {
            Speed::Mbps10 => 10,
            Speed::Mbps100 => 100,
        }
    }
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// MAC bring-up configuration
///
/// ```ignore
/// let config = EthConfig::new()
///     .with_mac_address([0x02, 0x00, 0x00, 0x12, 0x34, 0x56])
///     .with_mdc_divider(MdcClockDivider::from_hclk_hz(200_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EthConfig {
    /// Station MAC address
    pub mac_address: [u8; MAC_ADDR_LEN],
    /// MDC clock range
    pub mdc_divider: MdcClockDivider,
    /// Initial link speed, updated once the PHY has negotiated
    pub speed: Speed,
    /// Initial duplex mode, updated once the PHY has negotiated
    pub duplex: Duplex,
    /// Strip the FCS of type frames before they reach the RX buffer
    pub crc_strip: bool,
    /// TX queue store-and-forward
    pub tx_store_forward: bool,
    /// RX queue store-and-forward
    pub rx_store_forward: bool,
}

impl Default for EthConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EthConfig {
    /// Create a new configuration with defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mac_address: DEFAULT_MAC_ADDR,
            mdc_divider: MdcClockDivider::Div102,
            speed: Speed::Mbps100,
            duplex: Duplex::Full,
            crc_strip: true,
            tx_store_forward: true,
            rx_store_forward: true,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the MAC address
    #[must_use]
    pub const fn with_mac_address(mut self, addr: [u8; MAC_ADDR_LEN]) -> Self {
        self.mac_address = addr;
        self
    }

    /// Set the MDC clock range
    #[must_use]
    pub const fn with_mdc_divider(mut self, divider: MdcClockDivider) -> Self {
        self.mdc_divider = divider;
        self
    }

    /// Derive the MDC clock range from the AHB clock
    #[must_use]
    pub const fn with_hclk_hz(mut self, hclk_hz: u32) -> Self {
        self.mdc_divider = MdcClockDivider::from_hclk_hz(hclk_hz);
        self
    }

    /// Set the initial link speed
    #[must_use]
    pub const fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    /// Set the initial duplex mode
    #[must_use]
    pub const fn with_duplex(mut self, duplex: Duplex) -> Self {
        self.duplex = duplex;
        self
    }

    /// Enable or disable FCS stripping for type frames
    #[must_use]
    pub const fn with_crc_strip(mut self, enabled: bool) -> Self {
        self.crc_strip = enabled;
        self
    }

    /// Enable or disable store-and-forward on both queues
    #[must_use]
    pub const fn with_store_forward(mut self, tx: bool, rx: bool) -> Self {
        self.tx_store_forward = tx;
        self.rx_store_forward = rx;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EthConfig::default();
        assert_eq!(config.mac_address, DEFAULT_MAC_ADDR);
        assert_eq!(config.mdc_divider, MdcClockDivider::Div102);
        assert_eq!(config.speed, Speed::Mbps100);
        assert_eq!(config.duplex, Duplex::Full);
        assert!(config.crc_strip);
        assert!(config.tx_store_forward);
        assert!(config.rx_store_forward);
    }

    #[test]
    fn builder_chain() {
        let mac = [0x02, 0x00, 0x00, 0x12, 0x34, 0x56];
        let config = EthConfig::new()
            .with_mac_address(mac)
            .with_hclk_hz(64_000_000)
            .with_speed(Speed::Mbps10)
            .with_duplex(Duplex::Half)
            .with_crc_strip(false)
            .with_store_forward(false, true);

        assert_eq!(config.mac_address, mac);
        assert_eq!(config.mdc_divider, MdcClockDivider::Div42);
        assert_eq!(config.speed, Speed::Mbps10);
        assert_eq!(config.duplex, Duplex::Half);
        assert!(!config.crc_strip);
        assert!(!config.tx_store_forward);
        assert!(config.rx_store_forward);
    }

    #[test]
    fn speed_mbps() {
        assert_eq!(Speed::Mbps10.mbps(), 10);
        assert_eq!(Speed::Mbps100.mbps(), 100);
    }
}
