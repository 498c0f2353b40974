//! Update command parsing
//!
//! A command is the text written to a `<domain>_table` file:
//!
//! ```text
//! <frequency MHz> <voltage mV>
//! ```
//!
//! Tokens are separated by ASCII whitespace. Anything after the second
//! token is ignored and never decoded, so `echo "1000 925" > cpu_table`
//! (with its trailing newline), `"1000 925 # undervolt"` and a buffer with
//! trailing non-UTF-8 garbage are all accepted.

use core::fmt;
use core::str;

use crate::error::EditError;

/// A parsed update request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UpdateCommand {
    /// Target entry frequency (MHz)
    pub freq_mhz: u32,
    /// Requested voltage before rounding (mV)
    pub volt_mv: u32,
}

impl UpdateCommand {
    /// Create a command
    pub const fn new(freq_mhz: u32, volt_mv: u32) -> Self {
        Self { freq_mhz, volt_mv }
    }

    /// Parse a raw command buffer
    pub fn parse(buf: &[u8]) -> Result<Self, EditError> {
        let mut tokens = buf
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty());

        let freq_mhz = parse_field(tokens.next())?;
        let volt_mv = parse_field(tokens.next())?;

        Ok(Self { freq_mhz, volt_mv })
    }
}

fn parse_field(token: Option<&[u8]>) -> Result<u32, EditError> {
    token
        .and_then(|t| str::from_utf8(t).ok())
        .and_then(|t| t.parse::<u32>().ok())
        .ok_or(EditError::MalformedCommand)
}

impl fmt::Display for UpdateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.freq_mhz, self.volt_mv)
    }
}
