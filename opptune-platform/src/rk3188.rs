//! RK3188 operating point tables
//!
//! Stock tables for the Rockchip RK3188 (quad Cortex-A9, Mali-400 MP4,
//! LPDDR2/DDR3 controller). These are the tables the clock driver hands
//! to cpufreq/devfreq; tuning writes land here directly.

use opptune_core::table::{OperatingPoint, OppTable};
use opptune_core::traits::{Domain, OppPlatform};

/// CPU table
pub static CPU_TABLE: [OperatingPoint; 8] = [
    OperatingPoint::new(312_000, 900_000),
    OperatingPoint::new(504_000, 925_000),
    OperatingPoint::new(816_000, 1_000_000),
    OperatingPoint::new(1_008_000, 1_075_000),
    OperatingPoint::new(1_200_000, 1_150_000),
    OperatingPoint::new(1_416_000, 1_250_000),
    OperatingPoint::new(1_608_000, 1_350_000),
    OperatingPoint::end(),
];

/// GPU table
pub static GPU_TABLE: [OperatingPoint; 7] = [
    OperatingPoint::new(133_000, 975_000),
    OperatingPoint::new(200_000, 1_000_000),
    OperatingPoint::new(266_000, 1_025_000),
    OperatingPoint::new(300_000, 1_050_000),
    OperatingPoint::new(400_000, 1_100_000),
    OperatingPoint::new(600_000, 1_250_000),
    OperatingPoint::end(),
];

/// DDR table
pub static DDR_TABLE: [OperatingPoint; 5] = [
    OperatingPoint::new(200_000, 1_000_000),
    OperatingPoint::new(300_000, 1_050_000),
    OperatingPoint::new(400_000, 1_100_000),
    OperatingPoint::new(533_000, 1_150_000),
    OperatingPoint::end(),
];

/// Platform backed by the static RK3188 tables
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk3188Platform;

impl OppPlatform for Rk3188Platform {
    fn lookup(&self, domain: Domain) -> Option<OppTable<'_>> {
        let entries: &'static [OperatingPoint] = match domain {
            Domain::Cpu => &CPU_TABLE,
            Domain::Gpu => &GPU_TABLE,
            Domain::Ddr => &DDR_TABLE,
        };
        Some(OppTable::new(entries))
    }
}
