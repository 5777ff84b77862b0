use super::*;
use tempfile::TempDir;

fn internal() -> Vec<String> {
    vec!["internal".to_string()]
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_parse_both_headers() {
    let text = "Manifest-Version: 1.0\r\n\
                Export-Package: com.acme.api,com.acme.spi\r\n\
                Import-Package: org.slf4j\r\n\r\n";

    let headers = parse_manifest(text).unwrap();
    assert_eq!(headers.export_package.as_deref(), Some("com.acme.api,com.acme.spi"));
    assert_eq!(headers.import_package.as_deref(), Some("org.slf4j"));
}

#[test]
fn test_parse_continuation_lines() {
    let text = "Manifest-Version: 1.0\n\
                Export-Package: com.acme.api,com.ac\n \
                me.internal.util\n\
                Bundle-Name: acme\n";

    let headers = parse_manifest(text).unwrap();
    assert_eq!(
        headers.export_package.as_deref(),
        Some("com.acme.api,com.acme.internal.util")
    );
    assert_eq!(headers.import_package, None);
}

#[test]
fn test_parse_header_names_case_insensitive() {
    let headers = parse_manifest("export-package: com.acme\n").unwrap();
    assert_eq!(headers.export_package.as_deref(), Some("com.acme"));
}

#[test]
fn test_parse_stops_at_end_of_main_section() {
    let text = "Manifest-Version: 1.0\n\nName: com/acme/\nExport-Package: com.acme.internal\n";

    let headers = parse_manifest(text).unwrap();
    assert_eq!(headers, ManifestHeaders::default());
}

#[test]
fn test_parse_malformed_line_is_io_error() {
    let result = parse_manifest("Manifest-Version: 1.0\nthis is not a header\n");
    assert!(matches!(result, Err(ValidatorError::IoError(_))));

    let result = parse_manifest(" dangling continuation\n");
    assert!(matches!(result, Err(ValidatorError::IoError(_))));
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn test_load_missing_manifest_is_none() {
    let temp = TempDir::new().unwrap();
    let result = load_manifest(&temp.path().join("META-INF/MANIFEST.MF")).unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_load_manifest_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("MANIFEST.MF");
    std::fs::write(&path, "Manifest-Version: 1.0\nImport-Package: com.acme.internal\n").unwrap();

    let headers = load_manifest(&path).unwrap().unwrap();
    assert_eq!(headers.import_package.as_deref(), Some("com.acme.internal"));
}

#[test]
fn test_load_non_utf8_manifest_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("MANIFEST.MF");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

    assert!(matches!(load_manifest(&path), Err(ValidatorError::IoError(_))));
}

#[test]
fn test_load_malformed_manifest_names_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("MANIFEST.MF");
    std::fs::write(&path, "garbage\n").unwrap();

    match load_manifest(&path) {
        Err(ValidatorError::IoError(msg)) => assert!(msg.contains("MANIFEST.MF")),
        other => panic!("expected I/O error, got {:?}", other),
    }
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn test_single_internal_export_is_one_violation() {
    let headers = ManifestHeaders {
        export_package: Some("com.acme.internal.util".to_string()),
        import_package: None,
    };

    let result = validate_manifest(&headers, &internal());

    assert!(!result.passed);
    assert_eq!(result.checked_headers, 1);
    assert_eq!(
        result.violations,
        vec![ManifestViolation {
            header: EXPORT_PACKAGE.to_string(),
            package: "com.acme.internal.util".to_string(),
            token: "internal".to_string(),
        }]
    );
}

#[test]
fn test_no_headers_means_nothing_checked() {
    let result = validate_manifest(&ManifestHeaders::default(), &internal());

    assert!(result.passed);
    assert_eq!(result.checked_headers, 0);
    assert!(result.violations.is_empty());
}

#[test]
fn test_token_matches_by_containment() {
    let headers = ManifestHeaders {
        export_package: Some("com.acme.api, com.acme.internalstuff , ,com.acme.spi".to_string()),
        import_package: Some("org.other.internal,org.slf4j".to_string()),
    };

    let result = validate_manifest(&headers, &internal());

    assert_eq!(result.checked_headers, 2);
    let found: Vec<(&str, &str)> = result
        .violations
        .iter()
        .map(|v| (v.header.as_str(), v.package.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            (EXPORT_PACKAGE, "com.acme.internalstuff"),
            (IMPORT_PACKAGE, "org.other.internal"),
        ]
    );
}

#[test]
fn test_every_matching_token_is_recorded() {
    let headers = ManifestHeaders {
        export_package: Some("com.acme.internal.impl".to_string()),
        import_package: None,
    };
    let tokens = vec!["internal".to_string(), "impl".to_string()];

    let result = validate_manifest(&headers, &tokens);

    let tokens: Vec<&str> = result.violations.iter().map(|v| v.token.as_str()).collect();
    assert_eq!(tokens, vec!["internal", "impl"]);
}

#[test]
fn test_validation_is_repeatable() {
    let headers = parse_manifest("Export-Package: a.internal,b\nImport-Package: c\n").unwrap();

    let first = validate_manifest(&headers, &internal());
    let second = validate_manifest(&headers, &internal());
    assert_eq!(first.violations, second.violations);
}
