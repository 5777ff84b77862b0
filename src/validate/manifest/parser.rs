//! JAR manifest main-section parsing.

use crate::error::{Result, ValidatorError};

/// Parse the main section of a JAR manifest into `(name, value)` pairs.
///
/// Lines of the form `Name: value` start a header; a line starting with a
/// single space continues the previous header's value. The first empty line
/// terminates the main section, later (per-entry) sections are ignored.
pub(super) fn parse_main_attributes(manifest: &str) -> Result<Vec<(String, String)>> {
    let mut attributes = Vec::new();
    let mut current: Option<(String, String)> = None;

    for (index, line) in manifest.lines().enumerate() {
        let line = line.trim_end_matches('\r');

        // The first empty line terminates the main attributes section.
        if line.is_empty() {
            break;
        }

        if let Some(rest) = line.strip_prefix(' ') {
            match current.as_mut() {
                Some((_, value)) => value.push_str(rest),
                None => {
                    return Err(ValidatorError::IoError(format!(
                        "malformed manifest: continuation on line {} without a header",
                        index + 1
                    )));
                }
            }
            continue;
        }

        if let Some(attribute) = current.take() {
            attributes.push(attribute);
        }

        let Some((name, value)) = line.split_once(':') else {
            return Err(ValidatorError::IoError(format!(
                "malformed manifest: line {} is not a 'Name: value' header",
                index + 1
            )));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidatorError::IoError(format!(
                "malformed manifest: empty header name on line {}",
                index + 1
            )));
        }

        current = Some((name.to_string(), value.trim_start().to_string()));
    }

    if let Some(attribute) = current {
        attributes.push(attribute);
    }

    Ok(attributes)
}
