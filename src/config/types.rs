//! Configuration defaults for osgi-validator.

use std::path::PathBuf;

/// Default configuration file name, looked up in the project directory.
pub const DEFAULT_CONFIG_FILE: &str = "osgi-validator.yaml";

/// Packaging type for aggregator modules; these carry no sources and are skipped.
pub const POM_PACKAGING: &str = "pom";

pub fn default_packaging() -> String {
    "jar".to_string()
}

pub fn default_source_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("src/main/java")]
}

pub fn default_test_source_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("src/test/java")]
}

pub fn default_source_extension() -> String {
    "java".to_string()
}

/// Substrings that must not appear in exported or imported package names.
pub fn default_prohibited_package_tokens() -> Vec<String> {
    vec!["internal".to_string()]
}

/// Historical naming fragments that may be elided from the derived prefix.
pub fn default_package_parts_to_skip() -> Vec<String> {
    vec!["commons".to_string()]
}

pub fn default_manifest_path() -> Option<PathBuf> {
    Some(PathBuf::from("target/classes/META-INF/MANIFEST.MF"))
}

pub fn default_true() -> bool {
    true
}
