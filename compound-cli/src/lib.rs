//! Compound CLI library
//!
//! This library provides the command-line interface for finding the
//! longest compound word in a word list.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
