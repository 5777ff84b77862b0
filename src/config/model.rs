//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one validation run.
///
/// This struct represents the contents of `osgi-validator.yaml`.
/// Unknown fields in the YAML are ignored; missing fields take defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Module coordinates
    // =========================================================================
    /// Group identifier, e.g. `com.cedarsoft.commons`.
    pub group_id: String,

    /// Artifact identifier, e.g. `history` or `osgi-maven-plugin`.
    pub artifact_id: String,

    /// Packaging type. `pom` modules are skipped entirely.
    #[serde(default = "default_packaging")]
    pub packaging: String,

    // =========================================================================
    // Source tree settings
    // =========================================================================
    /// Source roots, relative to the project directory unless absolute.
    #[serde(default = "default_source_roots")]
    pub source_roots: Vec<PathBuf>,

    /// Test source roots, only scanned when `check_test_sources` is set.
    #[serde(default = "default_test_source_roots")]
    pub test_source_roots: Vec<PathBuf>,

    #[serde(default)]
    pub check_test_sources: bool,

    /// Source file extension (no leading dot).
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Glob patterns, relative to a source root, exempt from validation.
    #[serde(default)]
    pub skipped_files: Vec<String>,

    // =========================================================================
    // Naming rules
    // =========================================================================
    #[serde(default = "default_prohibited_package_tokens")]
    pub prohibited_package_tokens: Vec<String>,

    #[serde(default = "default_package_parts_to_skip")]
    pub package_parts_to_skip: Vec<String>,

    // =========================================================================
    // Policy
    // =========================================================================
    /// Fail the run on non-compliant sources (otherwise only warn).
    /// Prohibited manifest packages always fail.
    #[serde(default = "default_true")]
    pub fail: bool,

    /// Built manifest location; `null` disables the manifest check.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_id: String::new(),
            artifact_id: String::new(),
            packaging: default_packaging(),
            source_roots: default_source_roots(),
            test_source_roots: default_test_source_roots(),
            check_test_sources: false,
            source_extension: default_source_extension(),
            skipped_files: Vec::new(),
            prohibited_package_tokens: default_prohibited_package_tokens(),
            package_parts_to_skip: default_package_parts_to_skip(),
            fail: default_true(),
            manifest_path: default_manifest_path(),
        }
    }
}
