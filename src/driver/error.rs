//! Error types for the STM32H7 Ethernet driver
//!
//! Errors are organized by domain:
//! - [`ConfigError`]: bring-up, addressing and PHY discovery failures
//! - [`DmaError`]: descriptor ring flow control and frame validation
//! - [`IoError`]: MDIO bus failures and bounded waits that gave up
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by operations that span more than one domain.
//!
//! Ring back-pressure ([`DmaError::RingFull`], [`DmaError::DescriptorBusy`])
//! is reported through the same enum but is not a failure: check
//! [`DmaError::is_flow_control`] and retry later.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and initialization errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid configuration parameter
    InvalidConfig,
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// Invalid PHY register address (must be 0-31)
    InvalidRegisterAddress,
    /// No PHY answered the address scan
    PhyNotFound,
    /// PHY identifier does not match the driver
    UnexpectedPhyId,
    /// PHY hardware reset pin could not be driven
    ResetPinError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidConfig => "invalid configuration",
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::InvalidRegisterAddress => "invalid PHY register address",
            ConfigError::PhyNotFound => "no PHY found",
            ConfigError::UnexpectedPhyId => "unexpected PHY identifier",
            ConfigError::ResetPinError => "PHY reset pin error",
        }
    }
}

// =============================================================================
// DMA Errors
// =============================================================================

/// Descriptor ring errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DmaError {
    /// Every slot in the ring holds an unreclaimed frame
    RingFull,
    /// Descriptor is busy (owned by DMA hardware)
    DescriptorBusy,
    /// Frame does not fit the 14-bit descriptor length field
    FrameTooLarge,
    /// Invalid frame length (zero)
    InvalidLength,
    /// Ring has not been given any descriptors
    NotConfigured,
}

impl core::fmt::Display for DmaError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DmaError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DmaError::RingFull => "descriptor ring full",
            DmaError::DescriptorBusy => "descriptor busy",
            DmaError::FrameTooLarge => "frame too large for descriptor",
            DmaError::InvalidLength => "invalid frame length",
            DmaError::NotConfigured => "descriptor ring not configured",
        }
    }

    /// Returns `true` for back-pressure conditions that clear on their own
    /// once the DMA releases descriptors.
    #[must_use]
    pub const fn is_flow_control(&self) -> bool {
        matches!(self, DmaError::RingFull | DmaError::DescriptorBusy)
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Runtime bus errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// A bounded wait policy gave up
    Timeout,
    /// PHY communication error (MDIO failure)
    PhyError,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Timeout => "operation timed out",
            IoError::PhyError => "PHY communication error",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::PhyNotFound)) => { /* ... */ }
///     Err(Error::Dma(e)) if e.is_flow_control() => { /* retry later */ }
///     Err(Error::Io(IoError::Timeout)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// DMA error
    Dma(DmaError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Dma(e) => write!(f, "dma: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DmaError> for Error {
    fn from(e: DmaError) -> Self {
        Error::Dma(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for DMA operations
pub type DmaResult<T> = core::result::Result<T, DmaError>;

/// Result type alias for I/O operations
pub type IoResult<T> = core::result::Result<T, IoError>;
