//! PHY Register Definitions
//!
//! IEEE 802.3 Clause 22 registers shared by every PHY, followed by the
//! LAN8742A vendor-specific registers.
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 0 | BCR | Basic Control |
//! | 1 | BSR | Basic Status |
//! | 2 | PHYIDR1 | PHY Identifier 1 |
//! | 3 | PHYIDR2 | PHY Identifier 2 |
//! | 4 | ANAR | Auto-Negotiation Advertisement |
//! | 31 | SSR | LAN8742A Special Control/Status |

#![allow(dead_code)]

// =============================================================================
// Standard PHY Register Addresses
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Control Register
    pub const BCR: u8 = 0;
    /// Basic Status Register
    pub const BSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// Auto-Negotiation Advertisement Register
    pub const ANAR: u8 = 4;
    /// Auto-Negotiation Link Partner Ability Register
    pub const ANLPAR: u8 = 5;
}

// =============================================================================
// BCR - Basic Control Register (Register 0)
// =============================================================================

/// BCR bits
pub mod bcr {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Speed select (100 Mbps if set)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate PHY from RMII
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation - self-clearing
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
}

// =============================================================================
// BSR - Basic Status Register (Register 1)
// =============================================================================

/// BSR bits
pub mod bsr {
    /// 100BASE-TX full duplex capable
    pub const TX_FD_CAPABLE: u16 = 1 << 14;
    /// 100BASE-TX half duplex capable
    pub const TX_HD_CAPABLE: u16 = 1 << 13;
    /// 10BASE-T full duplex capable
    pub const T10_FD_CAPABLE: u16 = 1 << 12;
    /// 10BASE-T half duplex capable
    pub const T10_HD_CAPABLE: u16 = 1 << 11;
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Auto-negotiation ability
    pub const AN_ABILITY: u16 = 1 << 3;
    /// Link status
    pub const LINK_STATUS: u16 = 1 << 2;
    /// Extended capabilities
    pub const EXT_CAPABLE: u16 = 1 << 0;
}

// =============================================================================
// ANAR - Auto-Negotiation Advertisement Register (Register 4)
// =============================================================================

/// ANAR bits
pub mod anar {
    /// Symmetric pause
    pub const PAUSE: u16 = 1 << 10;
    /// 100BASE-TX full duplex
    pub const TX_FD: u16 = 1 << 8;
    /// 100BASE-TX half duplex
    pub const TX_HD: u16 = 1 << 7;
    /// 10BASE-T full duplex
    pub const T10_FD: u16 = 1 << 6;
    /// 10BASE-T half duplex
    pub const T10_HD: u16 = 1 << 5;
    /// IEEE 802.3 selector value
    pub const SELECTOR_IEEE802_3: u16 = 0x0001;
    /// Every 10/100 ability plus the selector
    pub const ALL_10_100: u16 = TX_FD | TX_HD | T10_FD | T10_HD | SELECTOR_IEEE802_3;
}

// =============================================================================
// LAN8742A Vendor-Specific Registers
// =============================================================================

/// LAN8742A specific definitions
pub mod lan8742a {
    /// PHY identifier: PHYIDR1 = 0x0007, PHYIDR2 = 0xC13x (x = revision)
    pub const PHY_ID: u32 = 0x0007_C130;
    /// PHY ID mask (ignores revision bits)
    pub const PHY_ID_MASK: u32 = 0xFFFF_FFF0;

    /// Special Control/Status Register
    pub const SSR: u8 = 31;

    /// SSR bits
    pub mod ssr {
        /// Auto-negotiation done
        pub const AUTODONE: u16 = 1 << 12;
        /// Speed indication shift
        pub const SPEED_SHIFT: u16 = 2;
        /// Speed indication mask (3 bits)
        pub const SPEED_MASK: u16 = 0b111 << 2;

        /// 10BASE-T half duplex
        pub const CODE_10_HALF: u16 = 0b001;
        /// 10BASE-T full duplex
        pub const CODE_10_FULL: u16 = 0b101;
        /// 100BASE-TX half duplex
        pub const CODE_100_HALF: u16 = 0b010;
        /// 100BASE-TX full duplex
        pub const CODE_100_FULL: u16 = 0b110;
    }

    /// Hardware reset timing
    pub mod timing {
        /// nRST assertion time in microseconds (datasheet minimum 100 µs)
        pub const RESET_PULSE_US: u32 = 200;
        /// Time after nRST release before MDIO is usable
        pub const RESET_RECOVERY_US: u32 = 1_000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_codes_fit_mask() {
        for code in [
            lan8742a::ssr::CODE_10_HALF,
            lan8742a::ssr::CODE_10_FULL,
            lan8742a::ssr::CODE_100_HALF,
            lan8742a::ssr::CODE_100_FULL,
        ] {
            let field = code << lan8742a::ssr::SPEED_SHIFT;
            assert_eq!(field & !lan8742a::ssr::SPEED_MASK, 0);
        }
    }

    #[test]
    fn control_bits() {
        assert_eq!(bcr::RESET, 0x8000);
        assert_eq!(bsr::LINK_STATUS, 0x0004);
        assert_eq!(anar::ALL_10_100, 0x01E1);
    }
}
