pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod diff;
pub mod error;
pub mod language;
pub mod output;
pub mod reader;
pub mod reconcile;
pub mod scanner;
pub mod standard;
pub mod wrap;

pub use error::{Result, SlocDeltaError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NONCOMPLIANT: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
