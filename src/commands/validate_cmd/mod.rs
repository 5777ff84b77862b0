//! Implementation of the `osgi-validator validate` command.
//!
//! # Steps
//!
//! 1. Load `osgi-validator.yaml` (if any) and apply CLI overrides
//! 2. Skip `pom` packaging
//! 3. Derive the allowed prefixes from groupId/artifactId
//! 4. Scan every source root, log each misplaced file
//! 5. Check the manifest's Export-Package/Import-Package, log each violation
//! 6. Apply the fail/warn policy

mod report;


use crate::cli::{OutputFormat, ValidateArgs};
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::prefix::{create_allowed_prefixes, primary_prefix};
use crate::validate::{SourceRules, load_manifest, validate_manifest, validate_sources};
use std::path::Path;
use tracing::info;

pub use report::{ManifestCheck, ValidationReport};

/// Execute the `osgi-validator validate` command.
///
/// # Exit Codes
///
/// - 0: No findings, or only misplaced sources with `--no-fail`
/// - 1: Configuration error (missing identifiers, malformed skip pattern)
/// - 2: Misplaced sources (when failing) or prohibited manifest packages
/// - 3: Unreadable source tree or manifest
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    if config.is_pom_packaging() {
        info!("Skipping for packaging \"{}\"", config.packaging);
        return Ok(());
    }

    let report = run_validation(&args.project_dir, &config)?;

    if args.format == OutputFormat::Json {
        println!("{}", report.to_json()?);
    }

    report.outcome(config.fail)
}

/// Run both checks and log their findings. Never fails because of findings.
pub fn run_validation(project_dir: &Path, config: &Config) -> Result<ValidationReport> {
    info!("Validating OSGi package structure");

    let allowed_prefixes = create_allowed_prefixes(
        &config.group_id,
        &config.artifact_id,
        &config.package_parts_to_skip,
    );
    info!(
        "Sources are expected under '{}'",
        primary_prefix(&config.group_id, &config.artifact_id)
    );
    info!("Allowed prefixes: {:?}", allowed_prefixes);

    let rules = SourceRules::new(
        &allowed_prefixes,
        &config.skipped_files,
        &config.source_extension,
    )?;

    let source_roots = config.resolved_source_roots(project_dir);
    info!("Source Roots:");
    for root in &source_roots {
        info!("\t{}", root.display());
    }

    let sources = validate_sources(&source_roots, &rules)?;
    for root in &sources.skipped_roots {
        info!("Skipping source root '{}': not an existing directory", root);
    }
    report::log_source_findings(&sources, config.fail);

    let manifest = check_manifest(project_dir, config)?;
    report::log_manifest_findings(&manifest);

    Ok(ValidationReport {
        group_id: config.group_id.clone(),
        artifact_id: config.artifact_id.clone(),
        allowed_prefixes,
        sources,
        manifest,
    })
}

fn check_manifest(project_dir: &Path, config: &Config) -> Result<ManifestCheck> {
    let Some(path) = config.resolved_manifest_path(project_dir) else {
        return Ok(ManifestCheck::Disabled);
    };
    let display = path.display().to_string();

    match load_manifest(&path)? {
        None => Ok(ManifestCheck::Missing { path: display }),
        Some(headers) => Ok(ManifestCheck::Checked {
            path: display,
            result: validate_manifest(&headers, &config.prohibited_package_tokens),
        }),
    }
}

/// Build the effective config: file (explicit, default location, or built-in
/// defaults) with command line overrides applied, then validated.
fn resolve_config(args: &ValidateArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => {
            let default_path = args.project_dir.join(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                Config::load(&default_path)?
            } else {
                Config::default()
            }
        }
    };

    if let Some(group_id) = &args.group_id {
        config.group_id = group_id.clone();
    }
    if let Some(artifact_id) = &args.artifact_id {
        config.artifact_id = artifact_id.clone();
    }
    if let Some(packaging) = &args.packaging {
        config.packaging = packaging.clone();
    }
    if !args.source_roots.is_empty() {
        config.source_roots = args.source_roots.clone();
    }
    if args.test_sources {
        config.check_test_sources = true;
    }
    if !args.skipped_files.is_empty() {
        config.skipped_files = args.skipped_files.clone();
    }
    if !args.prohibited_tokens.is_empty() {
        config.prohibited_package_tokens = args.prohibited_tokens.clone();
    }
    if !args.package_parts_to_skip.is_empty() {
        config.package_parts_to_skip = args.package_parts_to_skip.clone();
    }
    if args.no_fail {
        config.fail = false;
    }
    if args.no_manifest {
        config.manifest_path = None;
    } else if let Some(manifest) = &args.manifest {
        config.manifest_path = Some(manifest.clone());
    }

    config.validate()?;
    Ok(config)
}
