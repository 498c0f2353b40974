//! Table attributes
//!
//! One attribute file per domain, named `<domain>_table`.

use core::fmt;

use opptune_core::config::DomainConfig;
use opptune_core::error::{EditError, EINVAL};
use opptune_core::traits::{Domain, FileMode};

/// `EACCES` errno value
pub const EACCES: i32 = 13;

/// Attribute dispatch errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttrError {
    /// Update rejected by the table editor
    Edit(EditError),
    /// No attribute with that name is published
    UnknownAttribute,
    /// Write to a read-only attribute
    ReadOnly,
}

impl AttrError {
    /// Negative errno for the host handler
    pub fn errno(&self) -> i32 {
        match self {
            AttrError::Edit(e) => e.errno(),
            AttrError::UnknownAttribute => -EINVAL,
            AttrError::ReadOnly => -EACCES,
        }
    }
}

impl From<EditError> for AttrError {
    fn from(e: EditError) -> Self {
        AttrError::Edit(e)
    }
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrError::Edit(e) => fmt::Display::fmt(e, f),
            AttrError::UnknownAttribute => f.write_str("unknown attribute"),
            AttrError::ReadOnly => f.write_str("attribute is read-only"),
        }
    }
}

/// A published `<domain>_table` file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TableAttribute {
    /// Domain whose table the file exposes
    pub domain: Domain,
    /// File permissions
    pub mode: FileMode,
}

impl TableAttribute {
    /// Attribute for a configured domain
    pub const fn new(config: &DomainConfig) -> Self {
        Self {
            domain: config.name,
            mode: config.mode(),
        }
    }

    /// File name
    pub const fn name(&self) -> &'static str {
        match self.domain {
            Domain::Cpu => "cpu_table",
            Domain::Gpu => "gpu_table",
            Domain::Ddr => "ddr_table",
        }
    }

    /// Check if writes are accepted
    pub const fn is_writable(&self) -> bool {
        self.mode.is_writable()
    }
}
