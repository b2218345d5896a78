#![forbid(unsafe_code)]

//! seqwalk runtime
//!
//! Wraps the traversal kernel with a console output channel, replay,
//! drift detection, fixtures, run configuration and logging.
//!
//! No traversal logic lives here. Every walk is delegated to the kernel.

pub mod error;
pub mod console;
pub mod replay;
pub mod drift;
pub mod fixtures;
pub mod config;
pub mod logging;
pub mod cli;

pub use error::{Result, RuntimeError};
