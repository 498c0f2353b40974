//! Table entry updates
//!
//! Validation runs to completion before the table is touched, so a rejected
//! command leaves every entry as it was.

use crate::command::UpdateCommand;
use crate::error::EditError;
use crate::table::OppTable;
use crate::voltage::VoltageLimits;

/// Outcome of an accepted update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Update {
    /// Bytes of the command buffer consumed (always the whole buffer)
    pub consumed: usize,
    /// The command as parsed
    pub command: UpdateCommand,
    /// Voltage written to the table after rounding (mV)
    pub stored_mv: u32,
}

/// Parse a command buffer and apply it to a table
pub fn update(
    table: Option<OppTable<'_>>,
    limits: &VoltageLimits,
    buf: &[u8],
) -> Result<Update, EditError> {
    let table = table.ok_or(EditError::TableUnavailable)?;
    let command = UpdateCommand::parse(buf)?;
    let stored_mv = apply(table, limits, command)?;

    Ok(Update {
        consumed: buf.len(),
        command,
        stored_mv,
    })
}

/// Apply a parsed command to a table
///
/// Returns the rounded voltage that was stored (mV).
pub fn apply(
    table: OppTable<'_>,
    limits: &VoltageLimits,
    command: UpdateCommand,
) -> Result<u32, EditError> {
    let point = table
        .find_mhz(command.freq_mhz)
        .ok_or(EditError::UnknownFrequency)?;

    let rounded_mv = limits.validate(command.volt_mv)?;
    point.set_voltage_uv(rounded_mv * 1000);

    Ok(rounded_mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::render;
    use crate::listing::parse_listing;
    use crate::table::OperatingPoint;
    use heapless::{String, Vec};
    use proptest::prelude::*;

    fn two_point_table() -> [OperatingPoint; 3] {
        [
            OperatingPoint::new(1_000_000, 900_000),
            OperatingPoint::new(1_400_000, 1_100_000),
            OperatingPoint::end(),
        ]
    }

    fn voltages(entries: &[OperatingPoint]) -> Vec<u32, 8> {
        OppTable::new(entries).iter().map(|p| p.voltage_uv()).collect()
    }

    #[test]
    fn test_round_up_within_first_tier() {
        let entries = two_point_table();
        let table = OppTable::new(&entries);

        let result = update(Some(table), &VoltageLimits::CANONICAL, b"1000 905").unwrap();
        assert_eq!(result.consumed, 8);
        assert_eq!(result.stored_mv, 925);
        assert_eq!(entries[0].voltage_uv(), 925_000);
        assert_eq!(entries[1].voltage_uv(), 1_100_000);
    }

    #[test]
    fn test_update_then_render() {
        let entries = two_point_table();
        let table = OppTable::new(&entries);
        update(Some(table), &VoltageLimits::CANONICAL, b"1000 905").unwrap();

        let mut out: String<64> = String::new();
        render(Some(table), &mut out).unwrap();
        assert!(out.contains("1000 MHz: 925 mV"));
    }

    #[test]
    fn test_second_tier_keeps_exact_multiple() {
        let entries = two_point_table();
        let result = update(
            Some(OppTable::new(&entries)),
            &VoltageLimits::CANONICAL,
            b"1400 1250",
        )
        .unwrap();
        // 1250 is already on the 50 mV grid
        assert_eq!(result.stored_mv, 1250);
        assert_eq!(entries[1].voltage_uv(), 1_250_000);
    }

    #[test]
    fn test_second_tier_rounds_up() {
        let entries = two_point_table();
        let result = update(
            Some(OppTable::new(&entries)),
            &VoltageLimits::CANONICAL,
            b"1400 1260",
        )
        .unwrap();
        assert_eq!(result.stored_mv, 1300);
        assert_eq!(entries[1].voltage_uv(), 1_300_000);
    }

    #[test]
    fn test_consumed_counts_whole_buffer() {
        let entries = two_point_table();
        let buf = b"1000 950 trailing words\n";
        let result = update(Some(OppTable::new(&entries)), &VoltageLimits::CANONICAL, buf).unwrap();
        assert_eq!(result.consumed, buf.len());
    }

    #[test]
    fn test_rejections_leave_table_unchanged() {
        let entries = two_point_table();
        let before = voltages(&entries);
        let table = Some(OppTable::new(&entries));
        let limits = VoltageLimits::CANONICAL;

        assert_eq!(
            update(table, &limits, b"2000 1000"),
            Err(EditError::UnknownFrequency)
        );
        assert_eq!(
            update(table, &limits, b"1000 4000"),
            Err(EditError::VoltageOutOfRange)
        );
        assert_eq!(
            update(table, &limits, b"1000 599"),
            Err(EditError::VoltageOutOfRange)
        );
        assert_eq!(
            update(table, &limits, b"1000 1501"),
            Err(EditError::VoltageOutOfRange)
        );
        assert_eq!(
            update(table, &limits, b"1000"),
            Err(EditError::MalformedCommand)
        );
        assert_eq!(
            update(None, &limits, b"1000 900"),
            Err(EditError::TableUnavailable)
        );

        assert_eq!(voltages(&entries), before);
    }

    #[test]
    fn test_wide_limits_reach_top_tier() {
        let entries = [OperatingPoint::new(2_000_000, 3_000_000), OperatingPoint::end()];
        let limits = VoltageLimits::new(600, 3900);
        let table = Some(OppTable::new(&entries));

        assert_eq!(update(table, &limits, b"2000 3850").map(|u| u.stored_mv), Ok(3900));
        assert_eq!(update(table, &limits, b"2000 3900").map(|u| u.stored_mv), Ok(3900));
        assert_eq!(
            update(table, &limits, b"2000 3901"),
            Err(EditError::VoltageOutOfRange)
        );

        // Limits past the top tier are caught by the tier table itself
        let unchecked = VoltageLimits::new(600, 5000);
        assert_eq!(
            update(table, &unchecked, b"2000 4000"),
            Err(EditError::AboveTopTier)
        );
        assert_eq!(entries[0].voltage_uv(), 3_900_000);
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let entries = [
            OperatingPoint::new(1_000_000, 900_000),
            OperatingPoint::new(1_000_500, 950_000),
            OperatingPoint::end(),
        ];
        update(Some(OppTable::new(&entries)), &VoltageLimits::CANONICAL, b"1000 1000").unwrap();
        assert_eq!(entries[0].voltage_uv(), 1_000_000);
        assert_eq!(entries[1].voltage_uv(), 950_000);
    }

    #[test]
    fn test_entries_after_sentinel_are_unreachable() {
        let entries = [
            OperatingPoint::new(600_000, 950_000),
            OperatingPoint::end(),
            OperatingPoint::new(700_000, 975_000),
        ];
        assert_eq!(
            update(Some(OppTable::new(&entries)), &VoltageLimits::CANONICAL, b"700 1000"),
            Err(EditError::UnknownFrequency)
        );
        assert_eq!(entries[2].voltage_uv(), 975_000);
    }

    fn table_strategy() -> impl Strategy<Value = std::vec::Vec<(u32, u32)>> {
        // Distinct MHz keys, voltages already in whole mV
        proptest::collection::btree_map(1u32..4000, 600u32..1500, 1..12)
            .prop_map(|m| m.into_iter().map(|(mhz, mv)| (mhz * 1000, mv * 1000)).collect())
    }

    fn build(pairs: &[(u32, u32)]) -> std::vec::Vec<OperatingPoint> {
        let mut entries: std::vec::Vec<OperatingPoint> = pairs
            .iter()
            .map(|&(khz, uv)| OperatingPoint::new(khz, uv))
            .collect();
        entries.push(OperatingPoint::end());
        entries
    }

    proptest! {
        #[test]
        fn prop_render_parse_round_trip(pairs in table_strategy()) {
            let entries = build(&pairs);
            let mut out = std::string::String::new();
            render(Some(OppTable::new(&entries)), &mut out).unwrap();

            let parsed: std::vec::Vec<(u32, u32)> = parse_listing(&out)
                .map(|line| line.unwrap())
                .collect();
            let expected: std::vec::Vec<(u32, u32)> = pairs
                .iter()
                .map(|&(khz, uv)| (khz / 1000, uv / 1000))
                .collect();
            prop_assert_eq!(parsed, expected);
        }

        #[test]
        fn prop_update_changes_only_target_voltage(
            pairs in table_strategy(),
            pick in any::<prop::sample::Index>(),
            volt_mv in 600u32..=1500,
        ) {
            let entries = build(&pairs);
            let target = pick.index(pairs.len());
            let freq_mhz = pairs[target].0 / 1000;

            let mut cmd = std::string::String::new();
            core::fmt::write(&mut cmd, format_args!("{} {}", freq_mhz, volt_mv)).unwrap();
            let result = update(
                Some(OppTable::new(&entries)),
                &VoltageLimits::CANONICAL,
                cmd.as_bytes(),
            );
            prop_assert!(result.is_ok());

            for (i, (point, &(khz, uv))) in entries.iter().zip(pairs.iter()).enumerate() {
                prop_assert_eq!(point.frequency_khz, khz);
                if i == target {
                    prop_assert_eq!(
                        point.voltage_uv(),
                        VoltageLimits::CANONICAL.validate(volt_mv).unwrap() * 1000
                    );
                } else {
                    prop_assert_eq!(point.voltage_uv(), uv);
                }
            }
            prop_assert!(entries[pairs.len()].is_end());
        }
    }
}
