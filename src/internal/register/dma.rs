//! DMA Register Definitions
//!
//! The DMA moves frames between the MTL queues and system memory through the
//! descriptor rings. Only channel 0 exists on this part.

#![allow(dead_code)]

// =============================================================================
// Register Offsets
// =============================================================================

/// DMA Mode Register offset
pub const DMAMR_OFFSET: usize = 0x1000;
/// DMA System Bus Mode Register offset
pub const DMASBMR_OFFSET: usize = 0x1004;
/// DMA Channel Control Register offset
pub const DMACCR_OFFSET: usize = 0x1100;
/// DMA Channel TX Control Register offset
pub const DMACTXCR_OFFSET: usize = 0x1104;
/// DMA Channel RX Control Register offset
pub const DMACRXCR_OFFSET: usize = 0x1108;
/// DMA Channel TX Descriptor List Address Register offset
pub const DMACTXDLAR_OFFSET: usize = 0x1114;
/// DMA Channel RX Descriptor List Address Register offset
pub const DMACRXDLAR_OFFSET: usize = 0x111C;
/// DMA Channel TX Descriptor Tail Pointer Register offset
pub const DMACTXDTPR_OFFSET: usize = 0x1120;
/// DMA Channel RX Descriptor Tail Pointer Register offset
pub const DMACRXDTPR_OFFSET: usize = 0x1128;
/// DMA Channel TX Descriptor Ring Length Register offset
pub const DMACTXRLR_OFFSET: usize = 0x112C;
/// DMA Channel RX Descriptor Ring Length Register offset
pub const DMACRXRLR_OFFSET: usize = 0x1130;
/// DMA Channel Status Register offset
pub const DMACSR_OFFSET: usize = 0x1160;

// =============================================================================
// DMA Mode Register (DMAMR) Bits
// =============================================================================

/// Software Reset - self-clearing once the MAC and DMA have been reset
pub const DMAMR_SWR: u32 = 1 << 0;

// =============================================================================
// DMA Channel TX Control Register (DMACTXCR) Bits
// =============================================================================

/// Start or Stop Transmission Command
pub const DMACTXCR_ST: u32 = 1 << 0;
/// Operate on Second Packet
pub const DMACTXCR_OSF: u32 = 1 << 4;
/// TX Programmable Burst Length shift
pub const DMACTXCR_TXPBL_SHIFT: u32 = 16;
/// TX Programmable Burst Length mask (6 bits)
pub const DMACTXCR_TXPBL_MASK: u32 = 0x3F << 16;

// =============================================================================
// DMA Channel RX Control Register (DMACRXCR) Bits
// =============================================================================

/// Start or Stop Receive
pub const DMACRXCR_SR: u32 = 1 << 0;
/// Receive Buffer Size shift
pub const DMACRXCR_RBSZ_SHIFT: u32 = 1;
/// Receive Buffer Size mask (bits 14:1)
pub const DMACRXCR_RBSZ_MASK: u32 = 0x3FFF << 1;
/// RX Programmable Burst Length shift
pub const DMACRXCR_RXPBL_SHIFT: u32 = 16;
/// RX Programmable Burst Length mask (6 bits)
pub const DMACRXCR_RXPBL_MASK: u32 = 0x3F << 16;

// =============================================================================
// DMA Channel Ring Length Registers
// =============================================================================

/// Descriptor Ring Length mask (10 bits, programmed as count - 1)
pub const DMACRLR_MASK: u32 = 0x3FF;

// =============================================================================
// DMA Channel Status Register (DMACSR) Bits
// =============================================================================

/// Transmit Interrupt
pub const DMACSR_TI: u32 = 1 << 0;
/// Transmit Process Stopped
pub const DMACSR_TPS: u32 = 1 << 1;
/// Transmit Buffer Unavailable
pub const DMACSR_TBU: u32 = 1 << 2;
/// Receive Interrupt
pub const DMACSR_RI: u32 = 1 << 6;
/// Receive Buffer Unavailable
pub const DMACSR_RBU: u32 = 1 << 7;
/// Receive Process Stopped
pub const DMACSR_RPS: u32 = 1 << 8;
/// Fatal Bus Error
pub const DMACSR_FBE: u32 = 1 << 12;
/// Abnormal Interrupt Summary
pub const DMACSR_AIS: u32 = 1 << 14;
/// Normal Interrupt Summary
pub const DMACSR_NIS: u32 = 1 << 15;
