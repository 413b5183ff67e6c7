//! Command-line interface for Stratum.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, RequestArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
