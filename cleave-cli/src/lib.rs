//! Cleave CLI library
//!
//! This library provides the command-line interface for breaking text into
//! words and user-perceived characters.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod progress;
pub mod timer;

pub use error::{CliError, CliResult};
