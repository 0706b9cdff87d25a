//! `airdesk` command-line console.
//!
//! Wires configuration, logging and the core screens into a binary.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use config::{Config, ConfigError, ScreenConfig};
pub use logging::{init_logging, Verbosity};
