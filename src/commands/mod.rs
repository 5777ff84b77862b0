//! Command implementations for osgi-validator.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod prefixes;
mod validate_cmd;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Validate(args) => validate_cmd::cmd_validate(args),
        Command::Prefixes(args) => prefixes::cmd_prefixes(args),
    }
}
