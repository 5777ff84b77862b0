//! Package prefix derivation from module coordinates.
//!
//! A module identified by `groupId` and `artifactId` is expected to keep its
//! sources under the directory formed by splitting both identifiers on `.` and
//! `-`. Historical naming fragments (such as `commons`), the `-maven-plugin`
//! artifact suffix and a trailing plural `s` are tolerated by generating
//! additional candidate prefixes.
//!
//! Everything here is pure: no I/O, no configuration lookups. The caller passes
//! in the skip-list explicitly.

use std::collections::HashSet;

/// Artifact naming convention for build plugins; never part of a package name.
pub const MAVEN_PLUGIN_SUFFIX: &str = "-maven-plugin";

/// Generate every acceptable spelling of a dotted/hyphenated identifier.
///
/// The returned list starts with `id` itself, followed by:
/// - `id` without the `-maven-plugin` suffix (if present)
/// - for each part in `parts_to_skip` and each of `.part`, `-part`, `part-`,
///   `id` with the **first** occurrence of that substring removed
/// - `id` without a trailing `s`
///
/// Every variant is derived from the original `id`; variants are never
/// combined with each other. Duplicates are dropped, first occurrence wins.
pub fn possible_ids(id: &str, parts_to_skip: &[String]) -> Vec<String> {
    let mut ids = vec![id.to_string()];

    if let Some(stripped) = id.strip_suffix(MAVEN_PLUGIN_SUFFIX) {
        push_unique(&mut ids, stripped.to_string());
    }

    for part in parts_to_skip.iter().filter(|p| !p.is_empty()) {
        for surrounding in [format!(".{part}"), format!("-{part}"), format!("{part}-")] {
            if let Some(variant) = remove_first(id, &surrounding) {
                push_unique(&mut ids, variant);
            }
        }
    }

    if let Some(singular) = id.strip_suffix('s') {
        push_unique(&mut ids, singular.to_string());
    }

    ids
}

/// Convert a package-like identifier into a forward-slash path.
///
/// Both `.` and `-` act as segment separators:
/// `com.cedarsoft-ear.test` becomes `com/cedarsoft/ear/test`.
pub fn convert_package_to_file(id: &str) -> String {
    id.split(['.', '-']).collect::<Vec<_>>().join("/")
}

/// Collapse repeated segments of a slash-separated prefix to their first occurrence.
///
/// Returns `None` when no segment value repeats.
pub fn collapse_repeated_segments(prefix: &str) -> Option<String> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    let mut total = 0;

    for segment in prefix.split('/') {
        total += 1;
        if seen.insert(segment) {
            kept.push(segment);
        }
    }

    if kept.len() == total {
        None
    } else {
        Some(kept.join("/"))
    }
}

/// Build the complete set of allowed root prefixes for a module.
///
/// Candidates come from [`possible_ids`] applied to `group_id.artifact_id`,
/// so removals can see across the join point. The `-maven-plugin` suffix is
/// stripped from every candidate before conversion, so skip and plural
/// variants of plugin artifacts survive without the suffix.
/// For every prefix with a repeated segment (`com/acme/ear/ear/service`) the
/// collapsed form (`com/acme/ear/service`) is appended as well.
///
/// The result is insertion-ordered and free of duplicates.
pub fn create_allowed_prefixes(
    group_id: &str,
    artifact_id: &str,
    parts_to_skip: &[String],
) -> Vec<String> {
    let combined = format!("{}.{}", group_id, artifact_id);

    let mut prefixes = Vec::new();
    for candidate in possible_ids(&combined, parts_to_skip) {
        let id = candidate
            .strip_suffix(MAVEN_PLUGIN_SUFFIX)
            .unwrap_or(candidate.as_str());
        push_unique(&mut prefixes, convert_package_to_file(id));
    }

    let collapsed: Vec<String> = prefixes
        .iter()
        .filter_map(|prefix| collapse_repeated_segments(prefix))
        .collect();
    for prefix in collapsed {
        push_unique(&mut prefixes, prefix);
    }

    prefixes
}

/// The canonical prefix for a module: both identifiers joined, plugin suffix stripped.
///
/// Used to tell the operator where sources are expected; validation itself
/// always uses the full [`create_allowed_prefixes`] set.
pub fn primary_prefix(group_id: &str, artifact_id: &str) -> String {
    let artifact_id = artifact_id
        .strip_suffix(MAVEN_PLUGIN_SUFFIX)
        .unwrap_or(artifact_id);
    convert_package_to_file(&format!("{}.{}", group_id, artifact_id))
}

fn remove_first(id: &str, needle: &str) -> Option<String> {
    let start = id.find(needle)?;
    Some(format!("{}{}", &id[..start], &id[start + needle.len()..]))
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}
