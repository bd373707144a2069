//! Sluice CLI library.
//!
//! This crate provides the `sluice` diagnostic CLI over the companion-API
//! client: one subcommand per remote operation plus a pack watcher.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
