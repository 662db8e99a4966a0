//! Driver layer for the compound word finder
//!
//! This crate turns word lists into a [`compound_core::DictionaryIndex`] and
//! runs the longest-first search over it, sequentially or on a worker pool.
//!
//! ```rust
//! use compound_engine::{CompoundFinder, Input};
//!
//! let finder = CompoundFinder::new();
//! let output = finder.find(Input::from_text("cat\ndog\ncatdog\n")).unwrap();
//! assert_eq!(output.outcome.compound().unwrap().word, "catdog");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod processor;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor, SearchRun};
pub use input::Input;
pub use processor::{CompoundFinder, CompoundFinderBuilder, Output, SearchMetadata};

// Re-export from core for convenience
pub use compound_core::{Compound, DictionaryIndex, SearchOptions, SearchOutcome};
