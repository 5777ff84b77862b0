//! Config loading, validation, and path resolution.

use super::model::Config;
use super::types::POM_PACKAGING;
use crate::error::{Result, ValidatorError};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully parsed config (not yet validated)
    /// * `Err(ValidatorError::ConfigurationError)` - Read or parse failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidatorError::ConfigurationError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Identifiers are often supplied on the command line afterwards, so this
    /// does not call [`Config::validate`].
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml).map_err(|e| {
            ValidatorError::ConfigurationError(format!("failed to parse config YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `group_id` and `artifact_id` must be non-empty
    /// - `prohibited_package_tokens` and `package_parts_to_skip` entries must be non-empty
    /// - `source_extension` must be non-empty and have no leading dot
    pub fn validate(&self) -> Result<()> {
        if self.group_id.trim().is_empty() {
            return Err(config_error("group_id must not be empty"));
        }

        if self.artifact_id.trim().is_empty() {
            return Err(config_error("artifact_id must not be empty"));
        }

        if self.prohibited_package_tokens.iter().any(|t| t.is_empty()) {
            return Err(config_error(
                "prohibited_package_tokens entries must be non-empty",
            ));
        }

        if self.package_parts_to_skip.iter().any(|p| p.is_empty()) {
            return Err(config_error("package_parts_to_skip entries must be non-empty"));
        }

        if self.source_extension.is_empty() {
            return Err(config_error("source_extension must not be empty"));
        }
        if self.source_extension.starts_with('.') {
            return Err(ValidatorError::ConfigurationError(format!(
                "config validation failed: source_extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.source_extension,
                self.source_extension.trim_start_matches('.')
            )));
        }

        Ok(())
    }

    /// Whether this module's packaging type carries no sources to validate.
    pub fn is_pom_packaging(&self) -> bool {
        self.packaging == POM_PACKAGING
    }

    /// Source roots to scan, resolved against `project_dir`, in scan order.
    pub fn resolved_source_roots(&self, project_dir: &Path) -> Vec<PathBuf> {
        let test_roots: &[PathBuf] = if self.check_test_sources {
            &self.test_source_roots
        } else {
            &[]
        };

        self.source_roots
            .iter()
            .chain(test_roots)
            .map(|root| project_dir.join(root))
            .collect()
    }

    /// Manifest location resolved against `project_dir`, if the check is enabled.
    pub fn resolved_manifest_path(&self, project_dir: &Path) -> Option<PathBuf> {
        self.manifest_path.as_ref().map(|path| project_dir.join(path))
    }
}

fn config_error(msg: &str) -> ValidatorError {
    ValidatorError::ConfigurationError(format!("config validation failed: {}", msg))
}
