//! `stockkeep` command-line application.

pub mod commands;
pub mod config;
pub mod demo;

pub use commands::{Cli, Command};
pub use config::Settings;
