//! MDIO (Management Data Input/Output) HAL
//!
//! The MAC's station management block runs one Clause 22 transaction at a
//! time. A transaction is started by writing the PHY address, register
//! address, operation code and the busy bit (MB) into MACMDIOAR; hardware
//! clears MB when the frame has been shifted out (and, for a read, the
//! result is latched in MACMDIODR).
//!
//! [`Mdio`] drives that state machine through a [`RegisterAccess`] handle and
//! a [`BusyWait`] policy. PHY drivers only see the [`MdioBus`] trait.

use crate::driver::error::{ConfigError, Result};
use crate::hal::wait::{BusyWait, poll_until};
use crate::internal::constants::{MAX_PHY_ADDR, MAX_REG_ADDR};
use crate::internal::register::RegisterAccess;
use crate::internal::register::mac::{
    MACMDIOAR_CMD_MASK, MACMDIOAR_CR_MASK, MACMDIOAR_CR_SHIFT, MACMDIOAR_GOC_READ,
    MACMDIOAR_GOC_SHIFT, MACMDIOAR_GOC_WRITE, MACMDIOAR_MB, MACMDIOAR_OFFSET, MACMDIOAR_PA_MASK,
    MACMDIOAR_PA_SHIFT, MACMDIOAR_RDA_MASK, MACMDIOAR_RDA_SHIFT, MACMDIODR_MD_MASK,
    MACMDIODR_OFFSET,
};

// =============================================================================
// MDC Clock Divider
// =============================================================================

/// MDC clock range (MACMDIOAR.CR) based on the AHB clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MdcClockDivider {
    /// HCLK/42 (60-100 MHz)
    Div42 = 0,
    /// HCLK/62 (100-150 MHz)
    Div62 = 1,
    /// HCLK/16 (20-35 MHz)
    Div16 = 2,
    /// HCLK/26 (35-60 MHz)
    Div26 = 3,
    /// HCLK/102 (150-250 MHz)
    #[default]
    Div102 = 4,
    /// HCLK/124 (250-300 MHz)
    Div124 = 5,
}

impl MdcClockDivider {
    /// Get the appropriate divider for a given AHB clock frequency
    ///
    /// The MDC clock must not exceed 2.5 MHz per IEEE 802.3.
    pub const fn from_hclk_hz(hclk_hz: u32) -> Self {
        if hclk_hz < 35_000_000 {
            Self::Div16
        } else if hclk_hz < 60_000_000 {
            Self::Div26
        } else if hclk_hz < 100_000_000 {
            Self::Div42
        } else if hclk_hz < 150_000_000 {
            Self::Div62
        } else if hclk_hz < 250_000_000 {
            Self::Div102
        } else {
            Self::Div124
        }
    }

    /// Get the divider value for register programming
    pub const fn to_reg_value(self) -> u32 {
        self as u32
    }

    /// Division ratio applied to HCLK
    pub const fn ratio(self) -> u32 {
        match self {
            Self::Div42 => 42,
            Self::Div62 => 62,
            Self::Div16 => 16,
            Self::Div26 => 26,
            Self::Div102 => 102,
            Self::Div124 => 124,
        }
    }
}

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// Implemented by [`Mdio`] and by test doubles, so PHY drivers work against
/// any backend.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;

    /// Check if the MDIO bus is busy
    fn is_busy(&self) -> bool;
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }

    fn is_busy(&self) -> bool {
        (**self).is_busy()
    }
}

// =============================================================================
// MDIO Engine
// =============================================================================

/// MDIO transaction engine on top of MACMDIOAR / MACMDIODR.
#[derive(Debug)]
pub struct Mdio<R: RegisterAccess, W: BusyWait> {
    regs: R,
    wait: W,
}

impl<R: RegisterAccess, W: BusyWait> Mdio<R, W> {
    /// Create an engine. The MDC clock range is left as programmed; call
    /// [`setup`](Self::setup) during bring-up.
    pub fn new(regs: R, wait: W) -> Self {
        Self { regs, wait }
    }

    /// Program the MDC clock range, keeping the command fields intact.
    pub fn setup(&mut self, divider: MdcClockDivider) {
        self.regs.replace_bits(
            MACMDIOAR_OFFSET,
            divider.to_reg_value() << MACMDIOAR_CR_SHIFT,
            MACMDIOAR_CR_MASK,
        );
    }

    /// Borrow the wait policy
    pub fn wait_policy(&mut self) -> &mut W {
        &mut self.wait
    }

    /// Release the register handle and the wait policy
    pub fn release(self) -> (R, W) {
        (self.regs, self.wait)
    }

    fn validate(phy_addr: u8, reg_addr: u8) -> Result<()> {
        if phy_addr > MAX_PHY_ADDR {
            return Err(ConfigError::InvalidPhyAddress.into());
        }
        if reg_addr > MAX_REG_ADDR {
            return Err(ConfigError::InvalidRegisterAddress.into());
        }
        Ok(())
    }

    /// Build the command fields of MACMDIOAR
    fn command(phy_addr: u8, reg_addr: u8, goc: u32) -> u32 {
        (((phy_addr as u32) << MACMDIOAR_PA_SHIFT) & MACMDIOAR_PA_MASK)
            | (((reg_addr as u32) << MACMDIOAR_RDA_SHIFT) & MACMDIOAR_RDA_MASK)
            | (goc << MACMDIOAR_GOC_SHIFT)
            | MACMDIOAR_MB
    }

    fn wait_not_busy(&mut self) -> Result<()> {
        let regs = &self.regs;
        poll_until(&mut self.wait, || {
            !regs.has_bits(MACMDIOAR_OFFSET, MACMDIOAR_MB)
        })
    }

    fn start(&mut self, phy_addr: u8, reg_addr: u8, goc: u32) -> Result<()> {
        self.regs.replace_bits(
            MACMDIOAR_OFFSET,
            Self::command(phy_addr, reg_addr, goc),
            MACMDIOAR_CMD_MASK,
        );
        self.wait_not_busy()
    }
}

impl<R: RegisterAccess, W: BusyWait> MdioBus for Mdio<R, W> {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        Self::validate(phy_addr, reg_addr)?;

        // A previous transaction may still be shifting out
        self.wait_not_busy()?;
        self.start(phy_addr, reg_addr, MACMDIOAR_GOC_READ)?;

        Ok((self.regs.read(MACMDIODR_OFFSET) & MACMDIODR_MD_MASK) as u16)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        Self::validate(phy_addr, reg_addr)?;

        self.wait_not_busy()?;

        // Data must be in place before MB is set
        self.regs.write(MACMDIODR_OFFSET, value as u32);
        self.start(phy_addr, reg_addr, MACMDIOAR_GOC_WRITE)
    }

    fn is_busy(&self) -> bool {
        self.regs.has_bits(MACMDIOAR_OFFSET, MACMDIOAR_MB)
    }
}
