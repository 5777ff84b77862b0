//! Manifest validation for OSGi bundles.
//!
//! Reads the `Export-Package` and `Import-Package` headers of a built
//! module's `META-INF/MANIFEST.MF` and reports every package name that
//! contains a prohibited token (by default `internal`).
//!
//! Error handling:
//! - A missing manifest file is not an error (`load_manifest` returns `None`)
//! - A present but unreadable or malformed manifest is an I/O failure
//! - Violations are data, never errors

mod parser;

#[cfg(test)]
mod tests;

use crate::error::{Result, ValidatorError};
use serde::Serialize;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Header listing packages the bundle makes available to others.
pub const EXPORT_PACKAGE: &str = "Export-Package";

/// Header listing packages the bundle consumes from others.
pub const IMPORT_PACKAGE: &str = "Import-Package";

/// The two package-list headers of a manifest; absent headers are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestHeaders {
    pub export_package: Option<String>,
    pub import_package: Option<String>,
}

impl ManifestHeaders {
    /// Headers in checking order, present ones only.
    fn present(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (EXPORT_PACKAGE, self.export_package.as_deref()),
            (IMPORT_PACKAGE, self.import_package.as_deref()),
        ]
        .into_iter()
        .filter_map(|(header, value)| value.map(|v| (header, v)))
    }
}

/// A package name in a manifest header that contains a prohibited token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestViolation {
    pub header: String,
    pub package: String,
    pub token: String,
}

/// Result of manifest validation.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestValidationResult {
    /// Whether validation passed (no prohibited packages).
    pub passed: bool,
    /// Number of package-list headers that were present and checked.
    pub checked_headers: usize,
    /// Violations in header, package, token order.
    pub violations: Vec<ManifestViolation>,
}

/// Extract the package-list headers from manifest text.
///
/// Header names are matched case-insensitively, as the JAR format requires.
pub fn parse_manifest(text: &str) -> Result<ManifestHeaders> {
    let mut headers = ManifestHeaders::default();

    for (name, value) in parser::parse_main_attributes(text)? {
        if name.eq_ignore_ascii_case(EXPORT_PACKAGE) {
            headers.export_package = Some(value);
        } else if name.eq_ignore_ascii_case(IMPORT_PACKAGE) {
            headers.import_package = Some(value);
        }
    }

    Ok(headers)
}

/// Load and parse a manifest file.
///
/// Returns `Ok(None)` if the file does not exist (e.g. the packaging type
/// emits no manifest).
pub fn load_manifest(path: &Path) -> Result<Option<ManifestHeaders>> {
    let content = {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ValidatorError::IoError(format!(
                    "failed to open manifest '{}': {}",
                    path.display(),
                    e
                )));
            }
        };

        let mut content = String::new();
        file.read_to_string(&mut content).map_err(|e| {
            ValidatorError::IoError(format!(
                "failed to read manifest '{}': {}",
                path.display(),
                e
            ))
        })?;
        content
    };

    parse_manifest(&content)
        .map(Some)
        .map_err(|e| match e {
            ValidatorError::IoError(msg) => {
                ValidatorError::IoError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
}

/// Check every exported and imported package against the prohibited tokens.
///
/// A package is a violation if it *contains* a token. Each header value is
/// split on `,`; entries are trimmed and empty entries ignored.
pub fn validate_manifest(
    headers: &ManifestHeaders,
    prohibited_tokens: &[String],
) -> ManifestValidationResult {
    let mut violations = Vec::new();
    let mut checked_headers = 0;

    for (header, value) in headers.present() {
        checked_headers += 1;

        for package in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            for token in prohibited_tokens {
                if package.contains(token.as_str()) {
                    violations.push(ManifestViolation {
                        header: header.to_string(),
                        package: package.to_string(),
                        token: token.clone(),
                    });
                }
            }
        }
    }

    ManifestValidationResult {
        passed: violations.is_empty(),
        checked_headers,
        violations,
    }
}
