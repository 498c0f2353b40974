//! Operating point table providers
//!
//! This crate provides concrete implementations of
//! [`opptune_core::traits::OppPlatform`]:
//!
//! - [`MemoryPlatform`] - tables owned in memory, for hosts and tests
//! - [`rk3188::Rk3188Platform`] - static tables for RK3188 boards

#![no_std]
#![deny(unsafe_code)]

pub mod memory;
pub mod rk3188;

pub use memory::{MemoryPlatform, MemoryTable, TableError};
