use docgate::core::config::Config;
use docgate::core::issue::{FileReport, Issue, Level};
use docgate::core::validate::Validator;
use std::path::Path;

const FRONTMATTER: &str = "---
title: Plugin Loader
category: plugins
subcategory: loading
tags: [multisite]
stack: php-wp
priority: medium
audience: backend
complexity: advanced
doc_type: guide
source_confidence: 70%
last_updated: 2024-05-20
---
";

fn doc(body: &str) -> String {
    format!("{}\n# Plugin Loader\n\n{}", FRONTMATTER, body)
}

fn validate(content: &str) -> FileReport {
    Validator::new("/docs", Config::default()).validate_content(
        Path::new("/docs/php-wp/plugins/loader.md"),
        "php-wp/plugins/loader.md",
        content,
    )
}

fn find<'a>(report: &'a FileReport, check: &str) -> Vec<&'a Issue> {
    report.issues.iter().filter(|i| i.check == check).collect()
}

fn code_block(lines: usize) -> String {
    let body = (0..lines)
        .map(|i| format!("$plugin_{} = load();", i))
        .collect::<Vec<_>>()
        .join("\n");
    format!("```php\n{}\n```\n", body)
}

#[test]
fn test_document_without_sections_warns() {
    let report = validate(&doc("Only an intro paragraph.\n"));
    let issues = find(&report, "sections_exist");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].level, Level::Warn);
    assert!(find(&report, "heading_hierarchy").is_empty());
}

#[test]
fn test_section_length_limit() {
    let long = "Loader text. ".repeat(150);
    let report = validate(&doc(&format!(
        "## Short\n\nPlugins load early.\n\n## Long\n\n{}\n",
        long
    )));
    let issues = find(&report, "section_length");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].level, Level::Fail);
    assert_eq!(issues[0].details.as_deref(), Some("## Long"));
    assert!(issues[0].message.starts_with("Section \"## Long\" exceeds 1500 characters"));
}

#[test]
fn test_section_length_uses_configured_limit() {
    let mut config = Config::default();
    config.limits.max_section_length = 20;
    let report = Validator::new("/docs", config).validate_content(
        Path::new("/docs/php-wp/plugins/loader.md"),
        "php-wp/plugins/loader.md",
        &doc("## Overview\n\nMust-use plugins load before regular plugins.\n"),
    );
    assert_eq!(find(&report, "section_length").len(), 1);
}

#[test]
fn test_pronoun_opening_fails() {
    let report = validate(&doc(
        "## Loading\n\nThis loader runs first.\n\n## Hooks\n\nThese hooks fire later.\n\n## Order\n\nThematic ordering is fine.\n",
    ));
    let issues = find(&report, "section_pronoun");
    let titles: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Section \"## Loading\" starts with pronoun",
            "Section \"## Hooks\" starts with pronoun",
        ]
    );
    assert!(
        issues[0]
            .details
            .as_deref()
            .unwrap()
            .contains("This loader runs first.")
    );
}

#[test]
fn test_long_code_block_needs_subsection() {
    let bare = format!("## Setup\n\nRegister the loader.\n\n{}", code_block(12));
    let report = validate(&doc(&bare));
    let issues = find(&report, "code_block_subsection");
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].message,
        "Code block with 13 lines should have its own ### subsection"
    );

    let nested = format!(
        "## Setup\n\nRegister the loader.\n\n### Loader file\n\nPlace the file in mu-plugins.\n\n{}",
        code_block(12)
    );
    assert!(find(&validate(&doc(&nested)), "code_block_subsection").is_empty());
}

#[test]
fn test_short_code_block_is_fine() {
    let body = format!("## Setup\n\nRegister the loader.\n\n{}", code_block(5));
    assert!(find(&validate(&doc(&body)), "code_block_subsection").is_empty());
}

#[test]
fn test_bare_code_block_after_heading() {
    let body = format!("## Setup\n\n{}\n## Usage\n\nCall it.\n", code_block(2));
    let report = validate(&doc(&body));
    let issues = find(&report, "bare_code_block");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].details.as_deref(), Some("After: \"## Setup\""));
}

#[test]
fn test_heading_hierarchy_skip() {
    let body = "## Setup\n\nSteps follow.\n\n#### Deep\n\nToo deep.\n\n### Back\n\nFine.\n";
    let report = validate(&doc(body));
    let issues = find(&report, "heading_hierarchy");
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].message,
        "Heading hierarchy skip detected: went from ## to ####"
    );
    assert_eq!(issues[0].details.as_deref(), Some("#### Deep"));
    let line = issues[0].line_number.unwrap();
    assert_eq!(
        doc(body).lines().nth(line - 1),
        Some("#### Deep")
    );
}

#[test]
fn test_comment_lines_in_code_are_not_headings() {
    let body = "## Shell\n\nRun the installer.\n\n```bash\n#### not a heading\n```\n";
    let report = validate(&doc(body));
    assert!(find(&report, "heading_hierarchy").is_empty());
}
