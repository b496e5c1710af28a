use docgate::core::config::Config;
use docgate::core::issue::{FileReport, Level};
use docgate::core::validate::Validator;
use std::path::Path;

const VALID: &str = "---
title: Button Components
category: components
subcategory: buttons
tags: [react, ui]
stack: js-nextjs
priority: high
audience: frontend
complexity: intermediate
doc_type: standard
source_confidence: 85%
last_updated: 2024-03-01
---

# Button Components

## Overview

Buttons are declared as typed function components.
";

fn validate(content: &str) -> FileReport {
    validate_with(content, Config::default())
}

fn validate_with(content: &str, config: Config) -> FileReport {
    Validator::new("/docs", config).validate_content(
        Path::new("/docs/js-nextjs/components/button.md"),
        "js-nextjs/components/button.md",
        content,
    )
}

fn frontmatter_checks(report: &FileReport) -> Vec<&str> {
    report
        .issues
        .iter()
        .filter(|i| i.check.starts_with("frontmatter_"))
        .map(|i| i.check.as_str())
        .collect()
}

#[test]
fn test_valid_frontmatter_has_no_findings() {
    let report = validate(VALID);
    assert!(frontmatter_checks(&report).is_empty(), "{:?}", report.issues);
}

#[test]
fn test_missing_start_delimiter_stops_frontmatter_checks() {
    let report = validate("title: x\n\n## Overview\n\nText.\n");
    assert_eq!(frontmatter_checks(&report), vec!["frontmatter_start"]);
    let issue = &report.issues[0];
    assert_eq!(issue.level, Level::Fail);
    assert_eq!(issue.line_number, Some(1));
}

#[test]
fn test_h1_before_frontmatter() {
    let content = format!("# Button Components\n{}", VALID);
    let report = validate(&content);
    assert_eq!(frontmatter_checks(&report), vec!["frontmatter_h1_before"]);
}

#[test]
fn test_unclosed_frontmatter() {
    let report = validate("---\ntitle: x\n\n## Overview\n");
    assert_eq!(frontmatter_checks(&report), vec!["frontmatter_end"]);
}

#[test]
fn test_yaml_errors_are_parse_failures() {
    let report = validate("---\ntitle: [broken\n---\n\n## Overview\n");
    assert_eq!(frontmatter_checks(&report), vec!["frontmatter_parse"]);
    assert!(report.issues[0].message.contains("YAML parse error"));

    let report = validate("---\njust a string\n---\n\n## Overview\n");
    assert_eq!(frontmatter_checks(&report), vec!["frontmatter_parse"]);
    assert!(report.issues[0].message.contains("dictionary"));
}

#[test]
fn test_missing_fields_listed_in_order() {
    let content = VALID
        .replace("stack: js-nextjs\n", "")
        .replace("tags: [react, ui]\n", "");
    let report = validate(&content);
    let issue = report
        .issues
        .iter()
        .find(|i| i.check == "frontmatter_required_fields")
        .expect("missing fields issue");
    assert_eq!(
        issue.message,
        "Missing required frontmatter fields: tags, stack"
    );
}

#[test]
fn test_invalid_enum_values() {
    let content = VALID
        .replace("stack: js-nextjs", "stack: wordpress")
        .replace("priority: high", "priority: urgent")
        .replace("audience: frontend", "audience: designers")
        .replace("complexity: intermediate", "complexity: 3")
        .replace("doc_type: standard", "doc_type: essay");
    let report = validate(&content);
    assert_eq!(
        frontmatter_checks(&report),
        vec![
            "frontmatter_stack",
            "frontmatter_priority",
            "frontmatter_audience",
            "frontmatter_complexity",
            "frontmatter_doc_type",
        ]
    );
    assert_eq!(
        report.issues[0].message,
        "Invalid stack value: \"wordpress\". Must be one of: cross-stack, js-nextjs, php-wp, sanity"
    );
}

#[test]
fn test_configured_stacks_replace_defaults() {
    let mut config = Config::default();
    config.frontmatter.stacks.push("wordpress".to_string());
    let report = validate_with(&VALID.replace("stack: js-nextjs", "stack: wordpress"), config);
    assert!(frontmatter_checks(&report).is_empty());
}

#[test]
fn test_confidence_date_and_tags_formats() {
    let content = VALID
        .replace("source_confidence: 85%", "source_confidence: 85")
        .replace("last_updated: 2024-03-01", "last_updated: March 2024")
        .replace("tags: [react, ui]", "tags: react");
    let report = validate(&content);
    assert_eq!(
        frontmatter_checks(&report),
        vec!["frontmatter_confidence", "frontmatter_date", "frontmatter_tags"]
    );
    assert!(report.issues[2].message.ends_with("got: string"));
}

#[test]
fn test_empty_tags_list() {
    let report = validate(&VALID.replace("tags: [react, ui]", "tags: []"));
    let issue = report
        .issues
        .iter()
        .find(|i| i.check == "frontmatter_tags")
        .expect("tags issue");
    assert_eq!(issue.message, "Tags list must not be empty");
}

#[test]
fn test_datetime_last_updated_is_accepted() {
    for stamp in [
        "2024-03-01T09:30:00",
        "2024-03-01T09:30",
        "\"2024-03-01 09:30\"",
        "\"2024-03-01 09:30:00.5\"",
    ] {
        let report = validate(&VALID.replace("2024-03-01", stamp));
        assert!(
            frontmatter_checks(&report).is_empty(),
            "{}: {:?}",
            stamp,
            report.issues
        );
    }
}
