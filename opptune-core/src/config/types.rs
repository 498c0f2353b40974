//! Configuration type definitions

use heapless::{String, Vec};

use crate::traits::{Domain, FileMode};
use crate::voltage::VoltageLimits;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum grouping directory name length
pub const MAX_GROUP_NAME_LEN: usize = 16;

/// Maximum configured domains
pub const MAX_DOMAINS: usize = 3;

/// Default grouping directory name
pub const DEFAULT_GROUP: &str = "dvfs";

/// Which voltage range user space may request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LimitsProfile {
    /// 600-1500 mV
    #[default]
    Canonical,
    /// 800-1450 mV, as accepted by the first CPU-only driver
    Legacy,
    /// `min_mv`/`max_mv` from the config
    Custom,
}

/// Per-domain attribute configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DomainConfig {
    /// Domain exposed by this attribute
    pub name: Domain,
    /// Accept writes (mode 0644) or expose read-only (mode 0444)
    #[cfg_attr(feature = "serde", serde(default = "default_writable"))]
    pub writable: bool,
}

#[cfg(feature = "serde")]
fn default_writable() -> bool {
    true
}

impl DomainConfig {
    /// Writable attribute for a domain
    pub const fn writable(name: Domain) -> Self {
        Self {
            name,
            writable: true,
        }
    }

    /// Read-only attribute for a domain
    pub const fn read_only(name: Domain) -> Self {
        Self {
            name,
            writable: false,
        }
    }

    /// Attribute file mode
    pub const fn mode(&self) -> FileMode {
        if self.writable {
            FileMode::READ_WRITE
        } else {
            FileMode::READ_ONLY
        }
    }
}

/// Module configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModuleConfig {
    /// Grouping directory name
    pub group: String<MAX_GROUP_NAME_LEN>,
    /// Voltage range selection
    pub limits: LimitsProfile,
    /// Lower bound for [`LimitsProfile::Custom`] (mV)
    pub min_mv: Option<u32>,
    /// Upper bound for [`LimitsProfile::Custom`] (mV)
    pub max_mv: Option<u32>,
    /// Exposed domains, in attribute order
    #[cfg_attr(feature = "serde", serde(rename = "domain"))]
    pub domains: Vec<DomainConfig, MAX_DOMAINS>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        let mut group = String::new();
        // DEFAULT_GROUP fits MAX_GROUP_NAME_LEN
        let _ = group.push_str(DEFAULT_GROUP);

        Self {
            group,
            limits: LimitsProfile::Canonical,
            min_mv: None,
            max_mv: None,
            domains: Domain::ALL.into_iter().map(DomainConfig::writable).collect(),
        }
    }
}

impl ModuleConfig {
    /// Resolve the active voltage range
    ///
    /// Returns `None` for a custom profile missing either bound.
    pub fn voltage_limits(&self) -> Option<VoltageLimits> {
        match self.limits {
            LimitsProfile::Canonical => Some(VoltageLimits::CANONICAL),
            LimitsProfile::Legacy => Some(VoltageLimits::LEGACY),
            LimitsProfile::Custom => Some(VoltageLimits::new(self.min_mv?, self.max_mv?)),
        }
    }

    /// Find the configuration for a domain
    pub fn domain(&self, domain: Domain) -> Option<&DomainConfig> {
        self.domains.iter().find(|d| d.name == domain)
    }
}
