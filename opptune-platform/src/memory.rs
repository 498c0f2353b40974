//! In-memory table provider

use heapless::Vec;

use opptune_core::table::{OperatingPoint, OppTable, FREQ_TABLE_END};
use opptune_core::traits::{Domain, OppPlatform};

/// Errors building an in-memory table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    /// More points than the table can hold next to its sentinel
    TooManyPoints,
    /// A point uses the reserved end-of-table frequency
    ReservedFrequency,
}

/// Sentinel-terminated table with room for `N` entries, sentinel included
#[derive(Debug)]
pub struct MemoryTable<const N: usize> {
    entries: Vec<OperatingPoint, N>,
}

impl<const N: usize> MemoryTable<N> {
    /// Build a table from `(kHz, µV)` pairs, in order
    pub fn from_pairs(pairs: &[(u32, u32)]) -> Result<Self, TableError> {
        if pairs.len() >= N {
            return Err(TableError::TooManyPoints);
        }

        let mut entries = Vec::new();
        for &(frequency_khz, voltage_uv) in pairs {
            if frequency_khz == FREQ_TABLE_END {
                return Err(TableError::ReservedFrequency);
            }
            entries
                .push(OperatingPoint::new(frequency_khz, voltage_uv))
                .map_err(|_| TableError::TooManyPoints)?;
        }
        entries
            .push(OperatingPoint::end())
            .map_err(|_| TableError::TooManyPoints)?;

        Ok(Self { entries })
    }

    /// Borrow the table
    pub fn table(&self) -> OppTable<'_> {
        OppTable::new(&self.entries)
    }
}

/// Platform holding one optional in-memory table per domain
#[derive(Debug)]
pub struct MemoryPlatform<const N: usize> {
    tables: [Option<MemoryTable<N>>; 3],
}

impl<const N: usize> Default for MemoryPlatform<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MemoryPlatform<N> {
    /// Create a platform with no tables
    pub fn new() -> Self {
        Self {
            tables: [None, None, None],
        }
    }

    /// Builder-style [`MemoryPlatform::insert`]
    pub fn with_table(mut self, domain: Domain, table: MemoryTable<N>) -> Self {
        self.insert(domain, table);
        self
    }

    /// Install a table for a domain, returning the one it replaces
    pub fn insert(&mut self, domain: Domain, table: MemoryTable<N>) -> Option<MemoryTable<N>> {
        self.tables[domain.index()].replace(table)
    }

    /// Withdraw a domain's table
    pub fn remove(&mut self, domain: Domain) -> Option<MemoryTable<N>> {
        self.tables[domain.index()].take()
    }
}

impl<const N: usize> OppPlatform for MemoryPlatform<N> {
    fn lookup(&self, domain: Domain) -> Option<OppTable<'_>> {
        self.tables[domain.index()].as_ref().map(MemoryTable::table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_appends_sentinel() {
        let table = MemoryTable::<4>::from_pairs(&[(1_000_000, 900_000), (1_400_000, 1_100_000)])
            .unwrap();
        assert_eq!(table.table().len(), 2);
        assert!(table.entries[2].is_end());
    }

    #[test]
    fn test_capacity_includes_sentinel() {
        assert!(MemoryTable::<3>::from_pairs(&[(1, 1), (2, 2)]).is_ok());
        assert_eq!(
            MemoryTable::<2>::from_pairs(&[(1, 1), (2, 2)]).unwrap_err(),
            TableError::TooManyPoints
        );
    }

    #[test]
    fn test_reserved_frequency_rejected() {
        assert_eq!(
            MemoryTable::<4>::from_pairs(&[(FREQ_TABLE_END, 900_000)]).unwrap_err(),
            TableError::ReservedFrequency
        );
    }

    #[test]
    fn test_lookup_per_domain() {
        let cpu = MemoryTable::<4>::from_pairs(&[(816_000, 1_000_000)]).unwrap();
        let mut platform = MemoryPlatform::new().with_table(Domain::Cpu, cpu);

        assert_eq!(platform.lookup(Domain::Cpu).map(|t| t.len()), Some(1));
        assert!(platform.lookup(Domain::Gpu).is_none());

        assert!(platform.remove(Domain::Cpu).is_some());
        assert!(platform.lookup(Domain::Cpu).is_none());
    }

    #[test]
    fn test_writes_reach_stored_table() {
        let gpu = MemoryTable::<4>::from_pairs(&[(400_000, 1_100_000)]).unwrap();
        let platform = MemoryPlatform::new().with_table(Domain::Gpu, gpu);

        if let Some(point) = platform.lookup(Domain::Gpu).and_then(|t| t.find_mhz(400)) {
            point.set_voltage_uv(1_050_000);
        }
        let point = platform.lookup(Domain::Gpu).and_then(|t| t.find_mhz(400));
        assert_eq!(point.map(|p| p.voltage_mv()), Some(1050));
    }
}
