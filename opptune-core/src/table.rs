//! Operating point tables
//!
//! A table is an ordered run of (frequency, voltage) entries terminated by a
//! sentinel whose frequency is [`FREQ_TABLE_END`]. Storage belongs to the
//! platform; this module only borrows it.

use core::slice;

use portable_atomic::{AtomicU32, Ordering};

/// Frequency marker terminating a table (cpufreq `CPUFREQ_TABLE_END`)
pub const FREQ_TABLE_END: u32 = 0xFFFF_FFFE;

/// A single (frequency, voltage) performance state
///
/// The voltage lives in an atomic cell so a tuning write can land while the
/// frequency governor reads the same table. All accesses are relaxed.
#[derive(Debug)]
pub struct OperatingPoint {
    /// Frequency in kHz, used only as a lookup key
    pub frequency_khz: u32,
    voltage_uv: AtomicU32,
}

impl OperatingPoint {
    /// Create an operating point
    pub const fn new(frequency_khz: u32, voltage_uv: u32) -> Self {
        Self {
            frequency_khz,
            voltage_uv: AtomicU32::new(voltage_uv),
        }
    }

    /// Create the table terminator
    pub const fn end() -> Self {
        Self::new(FREQ_TABLE_END, 0)
    }

    /// Check if this entry is the table terminator
    pub fn is_end(&self) -> bool {
        self.frequency_khz == FREQ_TABLE_END
    }

    /// Frequency in whole MHz (truncated)
    pub fn frequency_mhz(&self) -> u32 {
        self.frequency_khz / 1000
    }

    /// Current voltage in µV
    pub fn voltage_uv(&self) -> u32 {
        self.voltage_uv.load(Ordering::Relaxed)
    }

    /// Current voltage in whole mV (truncated)
    pub fn voltage_mv(&self) -> u32 {
        self.voltage_uv() / 1000
    }

    /// Overwrite the voltage in place
    pub fn set_voltage_uv(&self, voltage_uv: u32) {
        self.voltage_uv.store(voltage_uv, Ordering::Relaxed);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OperatingPoint {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} kHz @ {} uV", self.frequency_khz, self.voltage_uv());
    }
}

/// Borrowed view of a sentinel-terminated table
///
/// Entries after the first sentinel are never visited. A slice without a
/// sentinel is treated as ending at its last element.
#[derive(Debug, Clone, Copy)]
pub struct OppTable<'a> {
    entries: &'a [OperatingPoint],
}

impl<'a> OppTable<'a> {
    /// Wrap platform-owned table storage
    pub const fn new(entries: &'a [OperatingPoint]) -> Self {
        Self { entries }
    }

    /// Iterate over real entries in table order
    pub fn iter(&self) -> Entries<'a> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    /// Number of real entries
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if the table has no real entries
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Find the first entry whose frequency, in MHz, matches
    pub fn find_mhz(&self, freq_mhz: u32) -> Option<&'a OperatingPoint> {
        self.iter().find(|point| point.frequency_mhz() == freq_mhz)
    }
}

impl<'a> IntoIterator for OppTable<'a> {
    type Item = &'a OperatingPoint;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the real entries of an [`OppTable`]
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: slice::Iter<'a, OperatingPoint>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a OperatingPoint;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next() {
            Some(point) if !point.is_end() => Some(point),
            _ => {
                // Fuse at the sentinel
                self.inner = <&'a [OperatingPoint]>::default().iter();
                None
            }
        }
    }
}
