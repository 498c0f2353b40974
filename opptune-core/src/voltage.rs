//! Voltage validation and rounding
//!
//! User-supplied voltages are range-checked against [`VoltageLimits`] and
//! then rounded up onto the regulator step grid. The grid is coarser at
//! higher voltages:
//!
//! | Requested (mV)   | Step (mV) |
//! |------------------|-----------|
//! | below 1200       | 25        |
//! | 1200 to 2399     | 50        |
//! | 2400 to 3900     | 100       |
//! | above 3900       | rejected  |

use crate::error::EditError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest voltage accepted by any rounding tier (mV)
pub const TOP_TIER_MAX_MV: u32 = 3900;

/// Lowest voltage a limit set may admit (mV)
pub const FLOOR_MV: u32 = 1;

/// One band of the rounding grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundingTier {
    /// Exclusive upper bound of the band (mV)
    pub until_mv: u32,
    /// Step size within the band (mV)
    pub step_mv: u32,
}

/// Rounding bands in ascending order
///
/// A value on a band edge belongs to the band whose upper bound is strictly
/// greater, so 1200 mV uses the 50 mV step.
pub static ROUNDING_TIERS: [RoundingTier; 3] = [
    RoundingTier {
        until_mv: 1200,
        step_mv: 25,
    },
    RoundingTier {
        until_mv: 2400,
        step_mv: 50,
    },
    RoundingTier {
        until_mv: TOP_TIER_MAX_MV + 1,
        step_mv: 100,
    },
];

/// Round `value` up to the nearest multiple of `step`
///
/// Exact multiples are returned unchanged. `step` must be non-zero.
/// Returns `None` if the rounded value does not fit in a `u32`.
pub const fn round_up_to_multiple(value: u32, step: u32) -> Option<u32> {
    let rem = value % step;
    if rem == 0 {
        Some(value)
    } else {
        value.checked_add(step - rem)
    }
}

/// Find the rounding band for a voltage
pub fn tier_for(voltage_mv: u32) -> Option<&'static RoundingTier> {
    ROUNDING_TIERS.iter().find(|tier| voltage_mv < tier.until_mv)
}

/// Round a voltage up onto its band's step grid
pub fn round_to_tier(voltage_mv: u32) -> Result<u32, EditError> {
    tier_for(voltage_mv)
        .and_then(|tier| round_up_to_multiple(voltage_mv, tier.step_mv))
        .ok_or(EditError::AboveTopTier)
}

/// Inclusive voltage range accepted from user space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VoltageLimits {
    /// Lowest accepted voltage (mV)
    pub min_mv: u32,
    /// Highest accepted voltage (mV)
    pub max_mv: u32,
}

impl Default for VoltageLimits {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Reasons a limit set is unusable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LimitsError {
    /// Minimum below [`FLOOR_MV`]
    BelowFloor,
    /// Minimum above maximum
    Inverted,
    /// Maximum above the top rounding tier
    AboveTopTier,
    /// Maximum would round up past itself
    OffGrid,
}

impl VoltageLimits {
    /// Three-domain range used by current boards
    pub const CANONICAL: Self = Self {
        min_mv: 600,
        max_mv: 1500,
    };

    /// Range from the first, CPU-only driver revision
    pub const LEGACY: Self = Self {
        min_mv: 800,
        max_mv: 1450,
    };

    /// Create a limit set
    pub const fn new(min_mv: u32, max_mv: u32) -> Self {
        Self { min_mv, max_mv }
    }

    /// Check if a voltage is within the inclusive range
    pub fn contains(&self, voltage_mv: u32) -> bool {
        (self.min_mv..=self.max_mv).contains(&voltage_mv)
    }

    /// Verify that every accepted value rounds to a value still in range
    pub fn check(&self) -> Result<(), LimitsError> {
        if self.min_mv < FLOOR_MV {
            return Err(LimitsError::BelowFloor);
        }
        if self.min_mv > self.max_mv {
            return Err(LimitsError::Inverted);
        }
        match round_to_tier(self.max_mv) {
            Ok(rounded) if rounded == self.max_mv => Ok(()),
            Ok(_) => Err(LimitsError::OffGrid),
            Err(_) => Err(LimitsError::AboveTopTier),
        }
    }

    /// Range-check and round a requested voltage
    ///
    /// Returns the rounded voltage in mV.
    pub fn validate(&self, voltage_mv: u32) -> Result<u32, EditError> {
        if !self.contains(voltage_mv) {
            return Err(EditError::VoltageOutOfRange);
        }
        round_to_tier(voltage_mv)
    }
}
