//! Validation checks for a module's package layout.
//!
//! - Source tree validation: every source file must live under an allowed prefix
//! - Manifest validation: Export-Package/Import-Package must not contain prohibited tokens
//!
//! Both checks return their findings as data; deciding whether findings are
//! fatal is left to the `validate` command.

pub mod manifest;
pub mod sources;

pub use manifest::{ManifestValidationResult, load_manifest, validate_manifest};
pub use sources::{SourceRules, SourceValidationResult, validate_sources};
