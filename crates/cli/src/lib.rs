//! Shopkeep CLI - driver for the in-memory store demo.
//!
//! The binary lives in `main.rs`; this library exposes the pieces it is
//! built from so they can be exercised by the integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
pub mod config;

pub use commands::demo::{DemoError, OutputFormat};
pub use config::{CliConfig, ConfigError, LogFormat};
