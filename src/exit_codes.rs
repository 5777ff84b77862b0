//! Exit code constants for the osgi-validator CLI.
//!
//! - 0: Success (including warn-only runs)
//! - 1: Configuration error (bad args, empty identifiers, malformed patterns)
//! - 2: Validation failure (non-compliant sources or prohibited packages)
//! - 3: I/O failure (unreadable source tree or manifest)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Configuration error: bad arguments, invalid config file, or malformed skip patterns.
pub const CONFIG_ERROR: i32 = 1;

/// Validation failure: files outside the allowed prefixes, or prohibited packages in the manifest.
pub const VALIDATION_FAILURE: i32 = 2;

/// I/O failure: a source root could not be walked or the manifest could not be read or parsed.
pub const IO_FAILURE: i32 = 3;
