//! hemo-cli library root.
//!
//! Config handling and command bodies live here so integration tests can
//! drive them without spawning the binary.

pub mod commands;
pub mod config;
