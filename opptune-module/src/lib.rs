//! opptune - DVFS table attribute files
//!
//! Publishes one `<domain>_table` file per configured domain under a
//! grouping directory (`dvfs` by default). Reading a file lists the
//! domain's operating points; writing `"<MHz> <mV>"` retunes the voltage
//! of one point.
//!
//! ```text
//! $ cat /sys/kernel/dvfs/cpu_table
//! 312 MHz: 900 mV
//! 816 MHz: 1000 mV
//! $ echo "816 980" > /sys/kernel/dvfs/cpu_table
//! ```
//!
//! The host kernel binding owns the [`DvfsModule`] value: it calls
//! [`DvfsModule::load`] on module init, routes attribute reads and writes
//! to [`DvfsModule::show`] and [`DvfsModule::store`], and hands the value
//! back to [`DvfsModule::unload`] on exit.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod attr;
pub mod config;
pub mod module;
pub mod page;

pub use attr::{AttrError, TableAttribute};
pub use config::{load_config, parse_config, ConfigError};
pub use module::{to_status, DvfsModule, LoadError};
pub use page::{PageWriter, PAGE_SIZE};

#[cfg(test)]
mod testing;
