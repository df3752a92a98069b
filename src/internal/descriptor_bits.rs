//! DMA descriptor bit definitions (normal read format)
//!
//! Both descriptor kinds are four 32-bit words. Word 0 holds the buffer
//! address, word 1 is unused, words 2 and 3 carry length and control.

#![allow(dead_code)]

// =============================================================================
// TX Descriptor
// =============================================================================

/// TDES2: buffer length
pub mod tdes2 {
    /// Buffer 1 length (bits 13:0)
    pub const B1L_MASK: u32 = 0x3FFF;
}

/// TDES3: control
pub mod tdes3 {
    /// Owned by DMA
    pub const OWN: u32 = 1 << 31;
    /// Last descriptor of the frame
    pub const LD: u32 = 1 << 29;
    /// First descriptor of the frame
    pub const FD: u32 = 1 << 28;
}

// =============================================================================
// RX Descriptor
// =============================================================================

/// RDES2: received length
pub mod rdes2 {
    /// Received length shift
    pub const LEN_SHIFT: u32 = 16;
    /// Received length (bits 29:16)
    pub const LEN_MASK: u32 = 0x3FFF << LEN_SHIFT;
}

/// RDES3: control
pub mod rdes3 {
    /// Owned by DMA
    pub const OWN: u32 = 1 << 31;
    /// Buffer 1 address valid
    pub const BUF1V: u32 = 1 << 24;
}
