//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod extract_command;
pub mod crop_command;

pub use command_traits::{Command, CommandFactory};
pub use extract_command::ExtractCommand;
pub use crop_command::CropCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::errors::{ExtractError, ExtractResult};
use crate::diagram::DiagramThresholds;

/// Factory for creating command instances based on CLI arguments
pub struct FigurekitCommandFactory;

impl FigurekitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        FigurekitCommandFactory
    }
}

impl Default for FigurekitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for FigurekitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ExtractResult<Box<dyn Command + 'a>> {
        if args.get_flag("crop") {
            Ok(Box::new(CropCommand::new(args)?))
        } else {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        }
    }
}

/// Load thresholds from `--config`, or use the defaults
pub(crate) fn thresholds_from_args(args: &ArgMatches) -> ExtractResult<DiagramThresholds> {
    match args.get_one::<String>("config") {
        Some(path) => DiagramThresholds::from_file(path),
        None => Ok(DiagramThresholds::default()),
    }
}

/// Parse an optional numeric argument
pub(crate) fn parse_arg<T: std::str::FromStr>(args: &ArgMatches, name: &str) -> ExtractResult<Option<T>> {
    match args.get_one::<String>(name) {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ExtractError::ConfigError(format!("Invalid value for --{}: {}", name, value))),
        None => Ok(None),
    }
}
