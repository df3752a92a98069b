//! MTL (MAC Transaction Layer) Register Definitions
//!
//! The MTL holds the TX and RX queue FIFOs between the MAC and the DMA.

#![allow(dead_code)]

// =============================================================================
// Register Offsets
// =============================================================================

/// MTL Operation Mode Register offset
pub const MTLOMR_OFFSET: usize = 0x0C00;
/// MTL TX Queue Operating Mode Register offset
pub const MTLTXQOMR_OFFSET: usize = 0x0D00;
/// MTL TX Queue Debug Register offset (read-only)
pub const MTLTXQDR_OFFSET: usize = 0x0D08;
/// MTL RX Queue Operating Mode Register offset
pub const MTLRXQOMR_OFFSET: usize = 0x0D30;
/// MTL RX Queue Debug Register offset (read-only)
pub const MTLRXQDR_OFFSET: usize = 0x0D38;

// =============================================================================
// MTL TX Queue Operating Mode Register (MTLTXQOMR) Bits
// =============================================================================

/// Flush TX Queue
pub const MTLTXQOMR_FTQ: u32 = 1 << 0;
/// Transmit Store and Forward
pub const MTLTXQOMR_TSF: u32 = 1 << 1;
/// TX Queue Enable shift
pub const MTLTXQOMR_TXQEN_SHIFT: u32 = 2;
/// TX Queue Enable mask (2 bits)
pub const MTLTXQOMR_TXQEN_MASK: u32 = 0x3 << 2;
/// TX Queue Enable value: enabled
pub const MTLTXQOMR_TXQEN_ENABLED: u32 = 0b10;
/// Transmit Threshold Control shift
pub const MTLTXQOMR_TTC_SHIFT: u32 = 4;
/// Transmit Threshold Control mask (3 bits)
pub const MTLTXQOMR_TTC_MASK: u32 = 0x7 << 4;
/// TX Queue Size shift
pub const MTLTXQOMR_TQS_SHIFT: u32 = 16;
/// TX Queue Size mask (3 bits on this part)
pub const MTLTXQOMR_TQS_MASK: u32 = 0x7 << 16;
/// TX Queue Size value: 2048 bytes ((TQS + 1) * 256)
pub const MTLTXQOMR_TQS_2048: u32 = 0b111;

// =============================================================================
// MTL RX Queue Operating Mode Register (MTLRXQOMR) Bits
// =============================================================================

/// Forward Undersized Good Packets
pub const MTLRXQOMR_FUP: u32 = 1 << 3;
/// Forward Error Packets
pub const MTLRXQOMR_FEP: u32 = 1 << 4;
/// Receive Queue Store and Forward
pub const MTLRXQOMR_RSF: u32 = 1 << 5;
