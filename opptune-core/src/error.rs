//! Table editing errors

use core::fmt;

/// `EINVAL` errno value
pub const EINVAL: i32 = 22;

/// Error category reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// The write was rejected; the table is unchanged
    InvalidInput,
}

/// Reasons an update command is rejected
///
/// Every variant is an [`ErrorKind::InvalidInput`]. A rejected update never
/// touches the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditError {
    /// Platform has no table for the domain
    TableUnavailable,
    /// Command is not two unsigned integers
    MalformedCommand,
    /// No entry matches the requested frequency
    UnknownFrequency,
    /// Voltage outside the configured limits
    VoltageOutOfRange,
    /// Voltage above the highest rounding tier
    AboveTopTier,
}

impl EditError {
    /// Error category
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }

    /// Negative errno for the host write handler
    pub fn errno(&self) -> i32 {
        match self.kind() {
            ErrorKind::InvalidInput => -EINVAL,
        }
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            EditError::TableUnavailable => "table unavailable",
            EditError::MalformedCommand => "malformed command",
            EditError::UnknownFrequency => "invalid frequency",
            EditError::VoltageOutOfRange => "voltage out of range",
            EditError::AboveTopTier => "voltage above top rounding tier",
        };
        f.write_str(msg)
    }
}
