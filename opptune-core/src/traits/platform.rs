//! Table platform trait

use core::fmt;

use crate::table::OppTable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hardware domain with its own operating point table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Domain {
    /// Application processor
    Cpu,
    /// Graphics processor
    Gpu,
    /// Memory controller
    Ddr,
}

impl Domain {
    /// All domains in attribute order
    pub const ALL: [Domain; 3] = [Domain::Cpu, Domain::Gpu, Domain::Ddr];

    /// Platform lookup key
    pub const fn name(&self) -> &'static str {
        match self {
            Domain::Cpu => "cpu",
            Domain::Gpu => "gpu",
            Domain::Ddr => "ddr",
        }
    }

    /// Resolve a lookup key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Position in [`Domain::ALL`]
    pub const fn index(&self) -> usize {
        match self {
            Domain::Cpu => 0,
            Domain::Gpu => 1,
            Domain::Ddr => 2,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Owner of the live operating point tables
///
/// Implementations hand out a view of the table the frequency governor is
/// using, not a copy; writes through the view must reach the governor.
/// Tables are looked up again on every file access.
pub trait OppPlatform {
    /// Get the table for a domain, or `None` if the platform has none
    fn lookup(&self, domain: Domain) -> Option<OppTable<'_>>;
}

impl<P: OppPlatform + ?Sized> OppPlatform for &P {
    fn lookup(&self, domain: Domain) -> Option<OppTable<'_>> {
        (**self).lookup(domain)
    }
}
