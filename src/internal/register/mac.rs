//! MAC Core Register Definitions
//!
//! The MAC core handles frame transmission and reception according to
//! IEEE 802.3 and owns the MDIO station management interface.

// Allow unused constants - complete field definitions are kept for reference
#![allow(dead_code)]

// =============================================================================
// Register Offsets
// =============================================================================

/// MAC Configuration Register offset
pub const MACCR_OFFSET: usize = 0x0000;
/// MAC Extended Configuration Register offset
pub const MACECR_OFFSET: usize = 0x0004;
/// MAC Packet Filtering Control Register offset
pub const MACPFR_OFFSET: usize = 0x0008;
/// MAC MDIO Address Register offset
pub const MACMDIOAR_OFFSET: usize = 0x0200;
/// MAC MDIO Data Register offset
pub const MACMDIODR_OFFSET: usize = 0x0204;
/// MAC Address 0 High Register offset (upper 16 bits of MAC address)
pub const MACA0HR_OFFSET: usize = 0x0300;
/// MAC Address 0 Low Register offset (lower 32 bits of MAC address)
pub const MACA0LR_OFFSET: usize = 0x0304;

// =============================================================================
// MAC Configuration Register (MACCR) Bits
// =============================================================================

/// Receiver Enable
pub const MACCR_RE: u32 = 1 << 0;
/// Transmitter Enable
pub const MACCR_TE: u32 = 1 << 1;
/// Preamble Length shift
pub const MACCR_PRELEN_SHIFT: u32 = 2;
/// Preamble Length mask (2 bits)
pub const MACCR_PRELEN_MASK: u32 = 0x3 << 2;
/// Deferral Check (half-duplex only)
pub const MACCR_DC: u32 = 1 << 4;
/// Back-Off Limit shift
pub const MACCR_BL_SHIFT: u32 = 5;
/// Back-Off Limit mask (2 bits)
pub const MACCR_BL_MASK: u32 = 0x3 << 5;
/// Disable Retry
pub const MACCR_DR: u32 = 1 << 8;
/// Disable Carrier Sense During Transmission
pub const MACCR_DCRS: u32 = 1 << 9;
/// Disable Receive Own (half-duplex only)
pub const MACCR_DO: u32 = 1 << 10;
/// Enable Carrier Sense Before Transmission in full-duplex mode
pub const MACCR_ECRSFD: u32 = 1 << 11;
/// Loopback Mode
pub const MACCR_LM: u32 = 1 << 12;
/// Duplex Mode: 0 = half, 1 = full
pub const MACCR_DM: u32 = 1 << 13;
/// Speed: 0 = 10 Mbps, 1 = 100 Mbps
pub const MACCR_FES: u32 = 1 << 14;
/// Jumbo Packet Enable
pub const MACCR_JE: u32 = 1 << 16;
/// Jabber Disable
pub const MACCR_JD: u32 = 1 << 17;
/// Watchdog Disable
pub const MACCR_WD: u32 = 1 << 19;
/// Automatic Pad or CRC Stripping
pub const MACCR_ACS: u32 = 1 << 20;
/// CRC Stripping for Type packets
pub const MACCR_CST: u32 = 1 << 21;
/// Checksum Offload
pub const MACCR_IPC: u32 = 1 << 27;

// =============================================================================
// MAC MDIO Address Register (MACMDIOAR) Bits
// =============================================================================

/// MII Busy - set by software to start a transaction, cleared by hardware
pub const MACMDIOAR_MB: u32 = 1 << 0;
/// Clause 45 PHY Enable
pub const MACMDIOAR_C45E: u32 = 1 << 1;
/// MII Operation Command shift
pub const MACMDIOAR_GOC_SHIFT: u32 = 2;
/// MII Operation Command mask (2 bits)
pub const MACMDIOAR_GOC_MASK: u32 = 0x3 << 2;
/// MII Operation Command: write
pub const MACMDIOAR_GOC_WRITE: u32 = 0b01;
/// MII Operation Command: read
pub const MACMDIOAR_GOC_READ: u32 = 0b11;
/// Skip Address Packet
pub const MACMDIOAR_SKAP: u32 = 1 << 4;
/// CSR Clock Range shift
pub const MACMDIOAR_CR_SHIFT: u32 = 8;
/// CSR Clock Range mask (4 bits)
pub const MACMDIOAR_CR_MASK: u32 = 0xF << 8;
/// Number of Trailing Clocks shift
pub const MACMDIOAR_NTC_SHIFT: u32 = 12;
/// Number of Trailing Clocks mask (3 bits)
pub const MACMDIOAR_NTC_MASK: u32 = 0x7 << 12;
/// Register/Device Address shift
pub const MACMDIOAR_RDA_SHIFT: u32 = 16;
/// Register/Device Address mask (5 bits)
pub const MACMDIOAR_RDA_MASK: u32 = 0x1F << 16;
/// Physical Layer Address shift
pub const MACMDIOAR_PA_SHIFT: u32 = 21;
/// Physical Layer Address mask (5 bits)
pub const MACMDIOAR_PA_MASK: u32 = 0x1F << 21;
/// Back to Back transactions
pub const MACMDIOAR_BTB: u32 = 1 << 26;
/// Preamble Suppression Enable
pub const MACMDIOAR_PSE: u32 = 1 << 27;

/// Fields rewritten by every transaction (clock range is preserved)
pub const MACMDIOAR_CMD_MASK: u32 = MACMDIOAR_PA_MASK
    | MACMDIOAR_RDA_MASK
    | MACMDIOAR_GOC_MASK
    | MACMDIOAR_C45E
    | MACMDIOAR_MB;

// =============================================================================
// MAC MDIO Data Register (MACMDIODR) Bits
// =============================================================================

/// MII Data mask (16 bits)
pub const MACMDIODR_MD_MASK: u32 = 0xFFFF;

// =============================================================================
// MAC Address 0 High Register (MACA0HR) Bits
// =============================================================================

/// Address bytes 4 and 5 mask
pub const MACA0HR_ADDRHI_MASK: u32 = 0xFFFF;
/// Address Enable (always 1 for address 0)
pub const MACA0HR_AE: u32 = 1 << 31;
