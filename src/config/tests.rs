//! Tests for config functionality.

use crate::config::Config;
use crate::error::ValidatorError;
use std::path::{Path, PathBuf};

fn valid_config() -> Config {
    Config {
        group_id: "com.cedarsoft".to_string(),
        artifact_id: "test".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.group_id.is_empty());
    assert!(config.artifact_id.is_empty());
    assert_eq!(config.packaging, "jar");
    assert_eq!(config.source_roots, vec![PathBuf::from("src/main/java")]);
    assert_eq!(config.test_source_roots, vec![PathBuf::from("src/test/java")]);
    assert!(!config.check_test_sources);
    assert_eq!(config.source_extension, "java");
    assert!(config.skipped_files.is_empty());
    assert_eq!(config.prohibited_package_tokens, vec!["internal".to_string()]);
    assert_eq!(config.package_parts_to_skip, vec!["commons".to_string()]);
    assert!(config.fail);
    assert_eq!(
        config.manifest_path,
        Some(PathBuf::from("target/classes/META-INF/MANIFEST.MF"))
    );
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.packaging, "jar");
    assert!(config.fail);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
group_id: com.cedarsoft.commons
artifact_id: history
fail: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.group_id, "com.cedarsoft.commons");
    assert_eq!(config.artifact_id, "history");
    assert!(!config.fail);

    // Unspecified values use defaults
    assert_eq!(config.prohibited_package_tokens, vec!["internal".to_string()]);
    assert_eq!(config.source_roots, vec![PathBuf::from("src/main/java")]);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
group_id: org.acme
artifact_id: widgets-maven-plugin
packaging: maven-plugin
source_roots:
  - src/main/java
  - target/generated-sources
test_source_roots:
  - src/it/java
check_test_sources: true
source_extension: kt
skipped_files:
  - "legacy/**"
prohibited_package_tokens:
  - internal
  - impl
package_parts_to_skip: []
fail: false
manifest_path: build/MANIFEST.MF
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.packaging, "maven-plugin");
    assert_eq!(config.source_roots.len(), 2);
    assert!(config.check_test_sources);
    assert_eq!(config.source_extension, "kt");
    assert_eq!(config.skipped_files, vec!["legacy/**".to_string()]);
    assert_eq!(config.prohibited_package_tokens.len(), 2);
    assert!(config.package_parts_to_skip.is_empty());
    assert_eq!(config.manifest_path, Some(PathBuf::from("build/MANIFEST.MF")));
    assert!(config.validate().is_ok());
}

#[test]
fn test_null_manifest_path_disables_check() {
    let config = Config::from_yaml("manifest_path: null\n").unwrap();
    assert_eq!(config.manifest_path, None);
    assert_eq!(config.resolved_manifest_path(Path::new("/project")), None);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
group_id: com.acme
unknown_setting: 42
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.group_id, "com.acme");
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let result = Config::from_yaml("fail: [not, a, bool]");
    assert!(matches!(result, Err(ValidatorError::ConfigurationError(_))));
}

#[test]
fn test_load_missing_file_is_config_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let result = Config::load(temp.path().join("nope.yaml"));
    assert!(matches!(result, Err(ValidatorError::ConfigurationError(_))));
}

#[test]
fn test_validate_accepts_valid_config() {
    assert!(valid_config().validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_identifiers() {
    let config = Config {
        group_id: String::new(),
        ..valid_config()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("group_id"));

    let config = Config {
        artifact_id: "  ".to_string(),
        ..valid_config()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("artifact_id"));
}

#[test]
fn test_validate_rejects_empty_tokens_and_parts() {
    let config = Config {
        prohibited_package_tokens: vec![String::new()],
        ..valid_config()
    };
    assert!(config.validate().is_err());

    let config = Config {
        package_parts_to_skip: vec![String::new()],
        ..valid_config()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_leading_dot_extension() {
    let config = Config {
        source_extension: ".java".to_string(),
        ..valid_config()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Use 'java' instead"));
}

#[test]
fn test_resolved_source_roots() {
    let project = Path::new("/project");

    let config = valid_config();
    assert_eq!(
        config.resolved_source_roots(project),
        vec![PathBuf::from("/project/src/main/java")]
    );

    let config = Config {
        check_test_sources: true,
        ..valid_config()
    };
    assert_eq!(
        config.resolved_source_roots(project),
        vec![
            PathBuf::from("/project/src/main/java"),
            PathBuf::from("/project/src/test/java"),
        ]
    );
}

#[test]
fn test_pom_packaging() {
    let config = Config {
        packaging: "pom".to_string(),
        ..valid_config()
    };
    assert!(config.is_pom_packaging());
    assert!(!valid_config().is_pom_packaging());
}
