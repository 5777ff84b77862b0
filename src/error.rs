//! Error types for the osgi-validator CLI.
//!
//! Uses thiserror for derive macros. Validators never return these for
//! "found problems"; only the orchestrator turns findings into
//! `NonCompliantSource` or `ProhibitedDependency`.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for validation runs.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Invalid identifiers, config values, or skip-pattern syntax.
    #[error("{0}")]
    ConfigurationError(String),

    /// Source files were found outside every allowed package prefix.
    #[error("There exist {0} files that seem to be placed within a problematic package")]
    NonCompliantSource(usize),

    /// The manifest exports or imports packages containing a prohibited token.
    #[error("There exist {0} prohibited packages in Export-Package/Import-Package")]
    ProhibitedDependency(usize),

    /// A source root or manifest could not be read or parsed.
    #[error("I/O failure: {0}")]
    IoError(String),
}

impl ValidatorError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ValidatorError::ConfigurationError(_) => exit_codes::CONFIG_ERROR,
            ValidatorError::NonCompliantSource(_) => exit_codes::VALIDATION_FAILURE,
            ValidatorError::ProhibitedDependency(_) => exit_codes::VALIDATION_FAILURE,
            ValidatorError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for validator operations.
pub type Result<T> = std::result::Result<T, ValidatorError>;
