//! Configuration parsing
//!
//! Parses a provided TOML document, falling back to the embedded default
//! when it is missing or invalid.

use opptune_core::config::ModuleConfig;
use opptune_core::traits::Domain;
use opptune_core::voltage::{LimitsError, VoltageLimits};

/// Embedded default configuration (compiled into the module)
pub const EMBEDDED_CONFIG: &str = include_str!("../../opptune.toml");

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML syntax error, unknown key value, or field too long
    Toml,
    /// `limits = "custom"` without both `min_mv` and `max_mv`
    MissingLimits,
    /// Voltage limits unusable
    InvalidLimits(LimitsError),
    /// No `[[domain]]` entries
    NoDomains,
    /// Same domain listed twice
    DuplicateDomain(Domain),
    /// Grouping directory name empty or containing `/`
    InvalidGroupName,
}

/// Parse and validate a TOML configuration
pub fn parse_config(input: &str) -> Result<ModuleConfig, ConfigError> {
    let config: ModuleConfig = toml::from_str(input).map_err(|_| ConfigError::Toml)?;
    validate(&config)?;
    Ok(config)
}

/// Validate a configuration
///
/// Returns the voltage limits the configuration selects.
pub fn validate(config: &ModuleConfig) -> Result<VoltageLimits, ConfigError> {
    if config.group.is_empty() || config.group.contains('/') {
        return Err(ConfigError::InvalidGroupName);
    }

    let limits = config
        .voltage_limits()
        .ok_or(ConfigError::MissingLimits)?;
    limits.check().map_err(ConfigError::InvalidLimits)?;

    if config.domains.is_empty() {
        return Err(ConfigError::NoDomains);
    }
    for (i, domain) in config.domains.iter().enumerate() {
        if config.domains[..i].iter().any(|d| d.name == domain.name) {
            return Err(ConfigError::DuplicateDomain(domain.name));
        }
    }

    Ok(limits)
}

/// Load configuration
///
/// Tries the provided TOML first, then the embedded default, then the
/// built-in defaults.
pub fn load_config(input: Option<&str>) -> ModuleConfig {
    if let Some(input) = input {
        match parse_config(input) {
            Ok(config) => {
                info!("Loaded provided configuration");
                log_config_summary(&config);
                return config;
            }
            Err(e) => {
                warn!("Invalid configuration: {:?}, using embedded default", e);
            }
        }
    }

    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            log_config_summary(&config);
            config
        }
        Err(e) => {
            // The build script validates EMBEDDED_CONFIG, so this is a
            // mismatch between build-time and runtime validation
            warn!("Embedded configuration rejected: {:?}", e);
            ModuleConfig::default()
        }
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &ModuleConfig) {
    debug!("  group: {}", config.group.as_str());
    debug!("  limits: {:?}", config.voltage_limits());
    for domain in config.domains.iter() {
        debug!("  {}: writable={}", domain.name, domain.writable);
    }
}
