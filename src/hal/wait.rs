//! Busy-wait policies
//!
//! Every operation that polls a hardware flag (MDIO busy, PHY reset, DMA
//! soft reset) is generic over a [`BusyWait`] policy. The policy is called
//! once per poll iteration and decides whether to yield, sleep, or give up.
//!
//! # Provided policies
//!
//! - [`Spin`]: never gives up
//! - [`DelayWait`]: sleeps through an `embedded_hal` delay and fails with
//!   [`IoError::Timeout`] once its budget for the current operation is spent
//! - [`FnWait`] (via [`from_fn`]): any closure returning [`Result`]
//!
//! # Example
//!
//! ```ignore
//! use ph_stm32h7_eth::hal::{DelayWait, Mdio, MdioBus};
//!
//! let wait = DelayWait::for_mdio(delay);
//! let mut mdio = Mdio::new(regs, wait);
//! let bsr = mdio.read(0, 1)?;
//! ```

use embedded_hal::delay::DelayNs;

use crate::driver::error::{IoError, Result};
use crate::internal::constants::{
    MDIO_TIMEOUT_US, PHY_RESET_TIMEOUT_US, POLL_INTERVAL_US, SOFT_RESET_TIMEOUT_US,
};

// =============================================================================
// Policy Trait
// =============================================================================

/// Polling policy consulted by every busy-wait loop in the driver.
pub trait BusyWait {
    /// Called once before the first poll of an operation.
    ///
    /// Policies with a deadline re-arm it here.
    fn begin(&mut self) {}

    /// Called after every poll that found the hardware still busy.
    ///
    /// Returning an error aborts the operation; the error is surfaced
    /// unchanged to the caller.
    fn wait(&mut self) -> Result<()>;
}

impl<T: BusyWait + ?Sized> BusyWait for &mut T {
    #[inline]
    fn begin(&mut self) {
        (**self).begin();
    }

    #[inline]
    fn wait(&mut self) -> Result<()> {
        (**self).wait()
    }
}

/// Poll `done` until it returns `true`, consulting `policy` in between.
pub(crate) fn poll_until<W, F>(policy: &mut W, mut done: F) -> Result<()>
where
    W: BusyWait + ?Sized,
    F: FnMut() -> bool,
{
    policy.begin();
    while !done() {
        policy.wait()?;
    }
    Ok(())
}

// =============================================================================
// Spin
// =============================================================================

/// Unbounded spin: polls until the hardware answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Spin;

impl BusyWait for Spin {
    #[inline]
    fn wait(&mut self) -> Result<()> {
        core::hint::spin_loop();
        Ok(())
    }
}

// =============================================================================
// Delay with deadline
// =============================================================================

/// Sleep between polls and give up after a fixed budget.
///
/// The budget is per operation: [`begin`](BusyWait::begin) resets the
/// elapsed time.
#[derive(Debug)]
pub struct DelayWait<D: DelayNs> {
    delay: D,
    interval_us: u32,
    timeout_us: u32,
    elapsed_us: u32,
}

impl<D: DelayNs> DelayWait<D> {
    /// Create a policy polling every `interval_us` for at most `timeout_us`.
    ///
    /// An `interval_us` of zero is raised to one so the budget always drains.
    pub fn new(delay: D, interval_us: u32, timeout_us: u32) -> Self {
        Self {
            delay,
            interval_us: interval_us.max(1),
            timeout_us,
            elapsed_us: 0,
        }
    }

    /// Create a policy with the default poll interval.
    pub fn with_timeout_us(delay: D, timeout_us: u32) -> Self {
        Self::new(delay, POLL_INTERVAL_US, timeout_us)
    }

    /// Policy sized for one MDIO transaction.
    pub fn for_mdio(delay: D) -> Self {
        Self::with_timeout_us(delay, MDIO_TIMEOUT_US)
    }

    /// Policy sized for a PHY soft reset (500 ms on the LAN8742A).
    ///
    /// Polls once per millisecond; BCR reads are not free.
    pub fn for_phy_reset(delay: D) -> Self {
        Self::new(delay, 1_000, PHY_RESET_TIMEOUT_US)
    }

    /// Policy sized for the DMA soft reset.
    pub fn for_soft_reset(delay: D) -> Self {
        Self::with_timeout_us(delay, SOFT_RESET_TIMEOUT_US)
    }

    /// Change the per-operation budget.
    pub fn set_timeout_us(&mut self, timeout_us: u32) {
        self.timeout_us = timeout_us;
    }

    /// Time spent waiting in the current operation.
    pub fn elapsed_us(&self) -> u32 {
        self.elapsed_us
    }

    /// Borrow the delay provider, e.g. for a reset pulse.
    pub fn delay_mut(&mut self) -> &mut D {
        &mut self.delay
    }

    /// Release the delay provider.
    pub fn into_inner(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> BusyWait for DelayWait<D> {
    fn begin(&mut self) {
        self.elapsed_us = 0;
    }

    fn wait(&mut self) -> Result<()> {
        if self.elapsed_us >= self.timeout_us {
            return Err(IoError::Timeout.into());
        }
        self.delay.delay_us(self.interval_us);
        self.elapsed_us = self.elapsed_us.saturating_add(self.interval_us);
        Ok(())
    }
}

// =============================================================================
// Closure
// =============================================================================

/// Policy backed by a closure, see [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnWait<F>(F);

/// Use a closure as a [`BusyWait`] policy.
///
/// The closure runs on every poll iteration; its error aborts the wait.
pub fn from_fn<F>(f: F) -> FnWait<F>
where
    F: FnMut() -> Result<()>,
{
    FnWait(f)
}

impl<F> BusyWait for FnWait<F>
where
    F: FnMut() -> Result<()>,
{
    #[inline]
    fn wait(&mut self) -> Result<()> {
        (self.0)()
    }
}
