//! DMA descriptor handling
//!
//! The DMA engine and software share descriptor memory, nothing else. This
//! module owns that handshake:
//!
//! - [`TxRing`]: power-of-two ring of transmit descriptors, each with its
//!   own buffer that frames are copied into
//! - [`RxSlot`]: single receive descriptor, armed and reclaimed per frame
//!
//! Descriptor arrays and buffers are supplied by the caller, usually as
//! statics in DMA-accessible SRAM (AXI SRAM or SRAM1-3 on the H7, not
//! DTCM). Register writes go through [`RegisterAccess`], so the same code
//! runs against [`Mmio`] on the target and a simulated register file in
//! tests.
//!
//! # Example
//!
//! ```ignore
//! use ph_stm32h7_eth::dma::{RxDescriptor, RxSlot, TxDescriptor, TxRing};
//!
//! static TX_DESC: [TxDescriptor; 4] = [const { TxDescriptor::new() }; 4];
//! // tx_buffers: &'static mut [[u8; DEFAULT_BUFFER_SIZE]; 4], DMA-accessible
//! static RX_DESC: RxDescriptor = RxDescriptor::new();
//!
//! let mut tx = TxRing::new();
//! tx.set_descriptors(gmac.regs(), &TX_DESC, tx_buffers)?;
//!
//! let mut rx = RxSlot::new(&RX_DESC, rx_buffer)?;
//! rx.init(gmac.regs());
//! gmac.start_dma();
//! rx.start(gmac.regs());
//!
//! if let Some(len) = rx.receive(gmac.regs(), |frame| frame.len()) {
//!     // ...
//! }
//! ```
//!
//! [`RegisterAccess`]: crate::hal::RegisterAccess
//! [`Mmio`]: crate::hal::Mmio

pub mod descriptor;
mod rx_slot;
mod tx_ring;

pub use descriptor::{RxDescriptor, TxDescriptor, VolatileCell};
pub use rx_slot::RxSlot;
pub use tx_ring::TxRing;
