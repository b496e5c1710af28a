//! Front-matter schema checks.

use super::Document;
use crate::core::config::Config;
use crate::core::frontmatter::{self, display_value, get, type_name};
use crate::core::issue::Issue;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::LazyLock;

static CONFIDENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+%$").unwrap());

pub fn check(doc: &Document<'_>, config: &Config, issues: &mut Vec<Issue>) {
    let map = match frontmatter::parse(doc.content) {
        Ok(map) => map,
        Err(e) => {
            let mut issue = Issue::fail(e.check(), e.to_string());
            if let Some(line) = e.line_number() {
                issue = issue.at_line(line);
            }
            issues.push(issue);
            return;
        }
    };

    check_required(&map, config, issues);
    check_enums(&map, config, issues);
    check_confidence(&map, issues);
    check_date(&map, issues);
    check_tags(&map, issues);
}

fn check_required(map: &Mapping, config: &Config, issues: &mut Vec<Issue>) {
    let missing: Vec<&str> = config
        .frontmatter
        .required
        .iter()
        .map(String::as_str)
        .filter(|key| get(map, key).is_none())
        .collect();
    if !missing.is_empty() {
        issues.push(Issue::fail(
            "frontmatter_required_fields",
            format!("Missing required frontmatter fields: {}", missing.join(", ")),
        ));
    }
}

fn check_enums(map: &Mapping, config: &Config, issues: &mut Vec<Issue>) {
    let rules = &config.frontmatter;
    let fields: [(&str, &str, &[String]); 5] = [
        ("stack", "frontmatter_stack", &rules.stacks),
        ("priority", "frontmatter_priority", &rules.priorities),
        ("audience", "frontmatter_audience", &rules.audiences),
        ("complexity", "frontmatter_complexity", &rules.complexities),
        ("doc_type", "frontmatter_doc_type", &rules.doc_types),
    ];

    for (key, check, allowed) in fields {
        let Some(value) = get(map, key) else {
            continue;
        };
        let valid = value
            .as_str()
            .is_some_and(|s| allowed.iter().any(|a| a == s));
        if !valid {
            let mut sorted: Vec<&str> = allowed.iter().map(String::as_str).collect();
            sorted.sort_unstable();
            issues.push(Issue::fail(
                check,
                format!(
                    "Invalid {} value: \"{}\". Must be one of: {}",
                    key,
                    display_value(value),
                    sorted.join(", ")
                ),
            ));
        }
    }
}

fn check_confidence(map: &Mapping, issues: &mut Vec<Issue>) {
    let Some(value) = get(map, "source_confidence") else {
        return;
    };
    let confidence = display_value(value);
    if !CONFIDENCE.is_match(&confidence) {
        issues.push(Issue::fail(
            "frontmatter_confidence",
            format!(
                "Invalid source_confidence format: \"{}\". Must match pattern: \\d+%",
                confidence
            ),
        ));
    }
}

/// Naive datetime layouts accepted for `last_updated`, `T` or space separated.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// ISO date, or an ISO datetime with or without offset.
pub fn is_iso_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || DATETIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(s, format).is_ok())
        || DateTime::parse_from_rfc3339(s).is_ok()
}

fn check_date(map: &Mapping, issues: &mut Vec<Issue>) {
    let Some(value) = get(map, "last_updated") else {
        return;
    };
    let date = display_value(value);
    if !is_iso_date(&date) {
        issues.push(Issue::fail(
            "frontmatter_date",
            format!(
                "Invalid last_updated date: \"{}\". Must be ISO format (YYYY-MM-DD)",
                date
            ),
        ));
    }
}

fn check_tags(map: &Mapping, issues: &mut Vec<Issue>) {
    let Some(tags) = get(map, "tags") else {
        return;
    };
    match tags {
        Value::Sequence(items) if items.is_empty() => {
            issues.push(Issue::fail("frontmatter_tags", "Tags list must not be empty"));
        }
        Value::Sequence(_) => {}
        other => issues.push(Issue::fail(
            "frontmatter_tags",
            format!("Tags must be a list, got: {}", type_name(other)),
        )),
    }
}
