//! Table editor
//!
//! The two operations behind a `<domain>_table` file:
//!
//! - [`render`] - read side, formats the table as text
//! - [`update`] - write side, validates a command and overwrites one voltage
//!
//! Both are synchronous and take no locks. The only shared mutation is a
//! single relaxed store into the matched entry's voltage cell.

pub mod render;
pub mod update;

pub use render::render;
pub use update::{apply, update, Update};
