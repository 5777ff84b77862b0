//! Validation report: logging of findings, fail/warn policy, JSON output.

use crate::error::{Result, ValidatorError};
use crate::validate::{ManifestValidationResult, SourceValidationResult};
use serde::Serialize;
use tracing::{error, info, warn};

/// Outcome of the manifest check.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ManifestCheck {
    /// No manifest path configured.
    Disabled,
    /// The build produced no manifest at the configured path.
    Missing { path: String },
    /// The manifest was read and its package headers checked.
    Checked {
        path: String,
        #[serde(flatten)]
        result: ManifestValidationResult,
    },
}

/// Combined findings of one validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub group_id: String,
    pub artifact_id: String,
    pub allowed_prefixes: Vec<String>,
    pub sources: SourceValidationResult,
    pub manifest: ManifestCheck,
}

impl ValidationReport {
    /// Apply the fail/warn policy.
    ///
    /// Prohibited manifest packages always fail. Misplaced sources fail only
    /// when `fail` is set. When both are present the manifest error wins;
    /// both lists have already been logged.
    pub fn outcome(&self, fail: bool) -> Result<()> {
        if let ManifestCheck::Checked { result, .. } = &self.manifest {
            if !result.passed {
                return Err(ValidatorError::ProhibitedDependency(result.violations.len()));
            }
        }

        if !self.sources.passed && fail {
            return Err(ValidatorError::NonCompliantSource(
                self.sources.problematic_files.len(),
            ));
        }

        Ok(())
    }

    /// Serialize the report for `--format json`.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ValidatorError::IoError(format!("failed to serialize validation report: {}", e))
        })
    }
}

/// Log every misplaced source file, at error level when failing, warn level otherwise.
pub fn log_source_findings(sources: &SourceValidationResult, fail: bool) {
    if sources.passed {
        info!("No problematic files found");
        return;
    }

    if fail {
        error!("Found files within a problematic package:");
        for file in &sources.problematic_files {
            error!("  {}", file);
        }
    } else {
        warn!("Found files within a problematic package:");
        for file in &sources.problematic_files {
            warn!("  {}", file);
        }
    }
}

/// Log the manifest check result; violations are always errors.
pub fn log_manifest_findings(manifest: &ManifestCheck) {
    match manifest {
        ManifestCheck::Disabled => info!("Manifest check disabled"),
        ManifestCheck::Missing { path } => {
            info!("No manifest found at '{}', skipping manifest validation", path)
        }
        ManifestCheck::Checked { path, result } => {
            if result.checked_headers == 0 {
                info!(
                    "Manifest '{}' declares neither Export-Package nor Import-Package",
                    path
                );
            } else if result.passed {
                info!("No prohibited packages found in '{}'", path);
            } else {
                error!("Found prohibited packages in '{}':", path);
                for violation in &result.violations {
                    error!(
                        "  {}: {} (contains '{}')",
                        violation.header, violation.package, violation.token
                    );
                }
            }
        }
    }
}
