//! Source tree validation.
//!
//! A source file is compliant when its path relative to the source root
//! matches `<prefix>/**` for at least one allowed prefix, or matches one of
//! the operator-supplied skip patterns. The two exclusion sets are applied
//! independently (union). Everything else with the configured source
//! extension is reported as problematic.
//!
//! Absent source roots are not an error: modules frequently have no sources
//! of a given kind.

use crate::error::{Result, ValidatorError};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Compiled matching rules for one validation run.
#[derive(Debug, Clone)]
pub struct SourceRules {
    include: GlobSet,
    allowed: GlobSet,
    skipped: GlobSet,
}

impl SourceRules {
    /// Compile the include, allowed-prefix and skip globs.
    ///
    /// # Arguments
    ///
    /// * `allowed_prefixes` - Forward-slash prefixes from `create_allowed_prefixes`
    /// * `skipped_files` - Glob patterns (relative to the source root) exempt from validation
    /// * `extension` - Source file extension without leading dot (e.g. `java`)
    ///
    /// # Returns
    ///
    /// * `Err(ValidatorError::ConfigurationError)` - If a skip pattern is malformed
    pub fn new(
        allowed_prefixes: &[String],
        skipped_files: &[String],
        extension: &str,
    ) -> Result<Self> {
        let include_pattern = format!("**/*.{}", globset::escape(extension));
        let include = build_globset(std::slice::from_ref(&include_pattern), "source_extension")?;

        let allowed_patterns: Vec<String> = allowed_prefixes
            .iter()
            .map(|prefix| format!("{}/**", globset::escape(&normalize_path(prefix))))
            .collect();
        let allowed = build_globset(&allowed_patterns, "allowed prefixes")?;

        let skipped = build_globset(skipped_files, "skipped_files")?;

        Ok(Self {
            include,
            allowed,
            skipped,
        })
    }

    /// Whether a root-relative, forward-slash path is a source file outside every allowed prefix.
    pub fn is_problematic(&self, relative_path: &str) -> bool {
        self.include.is_match(relative_path)
            && !self.allowed.is_match(relative_path)
            && !self.skipped.is_match(relative_path)
    }
}

/// Result of source tree validation across all roots.
#[derive(Debug, Clone, Serialize)]
pub struct SourceValidationResult {
    /// Whether validation passed (no problematic files).
    pub passed: bool,
    /// Problematic files, relative to their source root, in scan order.
    pub problematic_files: Vec<String>,
    /// Source roots that were absent or not directories.
    pub skipped_roots: Vec<String>,
}

/// Scan a single source root.
///
/// Returns `Ok(None)` when `root` does not exist or is not a directory.
/// Otherwise returns the problematic files in file-name order, so repeated
/// runs over an unchanged tree produce identical lists.
pub fn scan_source_root(root: &Path, rules: &SourceRules) -> Result<Option<Vec<String>>> {
    if !root.is_dir() {
        return Ok(None);
    }

    let mut problematic = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            ValidatorError::IoError(format!(
                "failed to scan source root '{}': {}",
                root.display(),
                e
            ))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).map_err(|e| {
            ValidatorError::IoError(format!(
                "'{}' is not inside source root '{}': {}",
                entry.path().display(),
                root.display(),
                e
            ))
        })?;
        let relative = normalize_path(&relative.to_string_lossy());

        if rules.is_problematic(&relative) {
            debug!(file = %relative, "outside allowed prefixes");
            problematic.push(relative);
        }
    }

    Ok(Some(problematic))
}

/// Validate every source root in order, accumulating one combined problem list.
pub fn validate_sources(roots: &[PathBuf], rules: &SourceRules) -> Result<SourceValidationResult> {
    let mut problematic_files = Vec::new();
    let mut skipped_roots = Vec::new();

    for root in roots {
        match scan_source_root(root, rules)? {
            Some(files) => problematic_files.extend(files),
            None => skipped_roots.push(root.display().to_string()),
        }
    }

    Ok(SourceValidationResult {
        passed: problematic_files.is_empty(),
        problematic_files,
        skipped_roots,
    })
}

/// Build a GlobSet from a list of glob patterns.
///
/// `*` stops at `/`; only `**` crosses directories.
fn build_globset(patterns: &[String], field_name: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let normalized_pattern = normalize_path(pattern);
        let glob = GlobBuilder::new(&normalized_pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| {
                ValidatorError::ConfigurationError(format!(
                    "invalid glob pattern in {}: '{}' - {}",
                    field_name, pattern, e
                ))
            })?;
        builder.add(glob);
    }

    builder.build().map_err(|e| {
        ValidatorError::ConfigurationError(format!("failed to compile {} globs: {}", field_name, e))
    })
}

/// Normalize a path to use forward slashes.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
