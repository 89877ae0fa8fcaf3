//! CLI module - argument parsing and command dispatch

pub mod args;
pub mod commands;

pub use args::{CacheCommands, Cli, Commands, PriceArgs};
