//! Exit code definitions for CLI commands.
//!
//! - 0: Success
//! - 1: General error
//! - 2: Configuration error
//! - 3: Invalid arguments
//! - 4: Record not found

use std::process::ExitCode;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::story::EventParseError;

/// Exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exit {
    /// Success
    Ok = 0,
    /// General error
    Error = 1,
    /// Configuration could not be loaded or is invalid
    Config = 2,
    /// Invalid arguments
    Args = 3,
    /// Record not found
    NotFound = 4,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

/// Maps an error to the appropriate exit code.
pub fn exit_code_for_error(err: &anyhow::Error) -> Exit {
    if err.downcast_ref::<ConfigError>().is_some() {
        return Exit::Config;
    }

    if err.downcast_ref::<EventParseError>().is_some() {
        return Exit::Args;
    }

    if let Some(catalog_err) = err.downcast_ref::<CatalogError>() {
        return match catalog_err {
            CatalogError::OutOfRange { .. } => Exit::NotFound,
            _ => Exit::Error,
        };
    }

    Exit::Error
}
