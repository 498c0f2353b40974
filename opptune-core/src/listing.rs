//! Parser for rendered tables
//!
//! Reads the text produced by [`crate::editor::render`] back into
//! `(frequency MHz, voltage mV)` pairs. Blank lines are skipped.

/// Listing parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ListingError {
    /// Line does not match `<MHz> MHz: <mV> mV` (1-based line number)
    Malformed { line: usize },
}

/// Parse a rendered table
pub fn parse_listing(text: &str) -> impl Iterator<Item = Result<(u32, u32), ListingError>> + '_ {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line).ok_or(ListingError::Malformed { line: idx + 1 }))
}

/// Parse a single `<MHz> MHz: <mV> mV` line
pub fn parse_line(line: &str) -> Option<(u32, u32)> {
    let body = line.trim().strip_suffix(" mV")?;
    let (freq, volt) = body.split_once(" MHz: ")?;
    Some((freq.parse().ok()?, volt.parse().ok()?))
}
