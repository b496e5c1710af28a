//! Terminal rendering for validation results.
//!
//! Keeps command output bounded and readable while preserving signal.

use crate::core::issue::{FileReport, Level};
use crate::core::report::{Report, top_checks};
use colored::Colorize;

const RULE_WIDTH: usize = 70;
const TOP_CHECKS: usize = 10;
const DUPLICATES_SHOWN: usize = 5;

/// Collapse newlines/extra whitespace and bound length for terminal display.
pub fn compact_line(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

fn status_label(result: &FileReport) -> String {
    if result.has_failures() {
        format!("{} FAIL", Level::Fail.icon()).bright_red().to_string()
    } else if result.has_warnings() {
        format!("{} WARN", Level::Warn.icon()).bright_yellow().to_string()
    } else {
        "✅ PASS".bright_green().to_string()
    }
}

/// Per-file listing: status line, then one line per issue.
pub fn render_file(result: &FileReport, verbose: bool) -> String {
    let mut out = format!(
        "\n{} {} ({} lines)\n",
        status_label(result),
        result.relative_path,
        result.line_count
    );
    for issue in &result.issues {
        let location = issue
            .line_number
            .map(|n| format!(" [line {}]", n))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {} {}{}: {}\n",
            issue.level.icon(),
            issue.check.bold(),
            location,
            issue.message
        ));
        if verbose && let Some(details) = &issue.details {
            out.push_str(&format!("     → {}\n", compact_line(details, 160)));
        }
    }
    out
}

pub fn render_summary(report: &Report) -> String {
    let s = &report.summary;
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n{}\n{}\n{}\n", rule, "VALIDATION SUMMARY".bold(), rule));
    out.push_str(&format!("\nFiles validated: {}\n", s.total_files));
    out.push_str(&format!(
        "  ✅ Passing:     {}\n",
        s.files_passing.to_string().bright_green()
    ));
    out.push_str(&format!(
        "  ⚠️  Warnings:    {}\n",
        s.files_with_warnings.to_string().bright_yellow()
    ));
    out.push_str(&format!(
        "  ❌ Failures:    {}\n",
        s.files_with_failures.to_string().bright_red()
    ));

    out.push_str("\nTotal issues:\n");
    out.push_str(&format!("  ❌ Failures:    {}\n", s.total_failures));
    out.push_str(&format!("  ⚠️  Warnings:    {}\n", s.total_warnings));

    for (title, counts) in [
        ("Top failure types:", &report.failures_by_check),
        ("Top warning types:", &report.warnings_by_check),
    ] {
        if counts.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}\n", title));
        for (check, count) in top_checks(counts, TOP_CHECKS) {
            out.push_str(&format!("  • {}: {}\n", check, count));
        }
    }

    let dups = &report.duplicate_basenames;
    if !dups.is_empty() {
        out.push_str(&format!(
            "\n{} Found {} duplicate basenames:\n",
            Level::Warn.icon(),
            dups.len()
        ));
        for (basename, paths) in dups.iter().take(DUPLICATES_SHOWN) {
            out.push_str(&format!("  • {}:\n", basename));
            for path in paths {
                out.push_str(&format!("    - {}\n", path));
            }
        }
        if dups.len() > DUPLICATES_SHOWN {
            out.push_str(&format!("  ... and {} more\n", dups.len() - DUPLICATES_SHOWN));
        }
    }

    out.push_str(&format!("\n{}\n", rule));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::issue::Issue;
    use std::path::Path;

    #[test]
    fn test_compact_line_bounds_length() {
        assert_eq!(compact_line("a  b\n c", 10), "a b c");
        assert_eq!(compact_line("abcdefgh", 3), "abc...");
    }

    #[test]
    fn test_render_file_shows_line_and_details() {
        colored::control::set_override(false);
        let result = FileReport {
            file_path: "/docs/a/b/c.md".to_string(),
            relative_path: "a/b/c.md".to_string(),
            line_count: 12,
            sha256: None,
            issues: vec![
                Issue::warn("heading_hierarchy", "skip")
                    .at_line(7)
                    .with_details("#### Deep"),
            ],
        };
        let out = render_file(&result, true);
        assert!(out.contains("WARN a/b/c.md (12 lines)"));
        assert!(out.contains("heading_hierarchy [line 7]: skip"));
        assert!(out.contains("→ #### Deep"));
        assert!(!render_file(&result, false).contains("→"));
    }

    #[test]
    fn test_render_summary_lists_checks() {
        colored::control::set_override(false);
        let results = vec![FileReport {
            file_path: "/docs/a.md".to_string(),
            relative_path: "a.md".to_string(),
            line_count: 1,
            sha256: None,
            issues: vec![Issue::fail("frontmatter_start", "missing")],
        }];
        let out = render_summary(&Report::build(Path::new("/docs"), &results));
        assert!(out.contains("VALIDATION SUMMARY"));
        assert!(out.contains("Files validated: 1"));
        assert!(out.contains("• frontmatter_start: 1"));
        assert!(!out.contains("Top warning types"));
    }
}
