//! Subcommand implementations.

pub mod demo;
