//! File-level structure: size class, file name, trailing newline, location.

use super::Document;
use crate::core::config::Config;
use crate::core::issue::Issue;
use regex::Regex;
use std::sync::LazyLock;

static KEBAB_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

pub fn check(doc: &Document<'_>, config: &Config, issues: &mut Vec<Issue>) {
    let limits = &config.limits;
    let line_count = doc.content.lines().count();

    if line_count < limits.stub_line_count {
        issues.push(Issue::warn(
            "stub_file",
            format!(
                "File is classified as stub ({} lines, threshold: {})",
                line_count, limits.stub_line_count
            ),
        ));
    } else if line_count > limits.oversized_line_count {
        issues.push(Issue::info(
            "oversized_file",
            format!(
                "File is classified as oversized ({} lines, threshold: {})",
                line_count, limits.oversized_line_count
            ),
        ));
    }

    let stem = doc
        .path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    if !KEBAB_CASE.is_match(stem) {
        issues.push(Issue::fail(
            "filename_convention",
            format!("Filename \"{}\" is not lowercase-kebab-case", stem),
        ));
    }

    if !doc.content.is_empty() && !doc.content.ends_with('\n') {
        issues.push(Issue::warn(
            "trailing_newline",
            "File does not end with a newline",
        ));
    }

    if !follows_path_convention(doc.relative_path) {
        issues.push(Issue::info(
            "path_convention",
            format!(
                "Path \"{}\" does not follow <stack>/<category>/<doc-name>.md",
                doc.relative_path
            ),
        ));
    }
}

/// `<stack>/<category>/<doc-name>.md`, relative to the docs root.
pub fn follows_path_convention(relative_path: &str) -> bool {
    let parts: Vec<&str> = relative_path.split('/').collect();
    parts.len() == 3 && parts.iter().all(|p| !p.is_empty())
}
