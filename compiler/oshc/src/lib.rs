//! Driver library for `oshc`.
//!
//! The binary in `main.rs` only parses arguments; everything it runs lives
//! here so that commands can be tested against in-memory writers.

pub mod commands;
pub mod config;
mod error;
mod tracing_setup;

pub use error::CliError;
pub use tracing_setup::init_tracing;
