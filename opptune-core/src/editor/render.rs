//! Table rendering
//!
//! Output format, one line per real entry in table order:
//!
//! ```text
//! 312 MHz: 875 mV
//! 816 MHz: 1000 mV
//! ```

use core::fmt::{self, Write};

use crate::table::OppTable;

/// Render a table as text
///
/// A missing table or a table with no real entries renders nothing. The
/// only error source is the sink itself.
pub fn render<W: Write>(table: Option<OppTable<'_>>, out: &mut W) -> fmt::Result {
    let Some(table) = table else {
        return Ok(());
    };

    for point in table {
        writeln!(
            out,
            "{} MHz: {} mV",
            point.frequency_mhz(),
            point.voltage_mv()
        )?;
    }

    Ok(())
}
