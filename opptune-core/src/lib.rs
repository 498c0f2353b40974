//! Board-agnostic core logic for DVFS operating point tuning
//!
//! This crate contains everything that does not depend on a specific
//! host kernel or SoC:
//!
//! - Operating point table model (entries, sentinel, borrowed views)
//! - Table editor (text rendering, update command handling)
//! - Voltage policy (range limits, tiered round-up)
//! - Listing parser for rendered tables
//! - Collaborator traits (table platform, virtual-file host)
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod listing;
pub mod table;
pub mod traits;
pub mod voltage;

pub use command::UpdateCommand;
pub use editor::{render, update};
pub use error::{EditError, ErrorKind, EINVAL};
pub use table::{OperatingPoint, OppTable, FREQ_TABLE_END};
pub use voltage::VoltageLimits;
