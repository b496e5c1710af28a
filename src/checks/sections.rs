//! Section-level checks: size, opening sentence, code placement, heading order.

use super::Document;
use crate::core::config::Config;
use crate::core::issue::Issue;
use crate::core::markdown::{self, Section};
use regex::Regex;
use std::sync::LazyLock;

static PRONOUN_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(It|This|These|They|That|We)\s").unwrap());

/// Characters of prose before a long code block searched for a `### ` heading.
const SUBSECTION_LOOKBACK_CHARS: usize = 200;

pub fn check(doc: &Document<'_>, config: &Config, issues: &mut Vec<Issue>) {
    let sections = markdown::sections(doc.content);
    if sections.is_empty() {
        issues.push(Issue::warn(
            "sections_exist",
            "No ## sections found in document",
        ));
        return;
    }

    let limit = config.limits.max_section_length;
    for section in &sections {
        let length = section.char_len();
        if length > limit {
            issues.push(
                Issue::fail(
                    "section_length",
                    format!(
                        "Section \"{}\" exceeds {} characters ({} chars)",
                        section.title, limit, length
                    ),
                )
                .at_line(section.start_line)
                .with_details(section.title.clone()),
            );
        }

        if let Some(first) = section.first_line()
            && PRONOUN_START.is_match(first)
        {
            let preview: String = first.chars().take(100).collect();
            issues.push(
                Issue::fail(
                    "section_pronoun",
                    format!("Section \"{}\" starts with pronoun", section.title),
                )
                .at_line(section.start_line)
                .with_details(format!("First sentence: \"{}...\"", preview)),
            );
        }

        check_code_blocks_in_section(section, config, issues);
    }

    check_bare_code_blocks(doc.content, issues);
    check_heading_hierarchy(doc.content, issues);
}

/// Long code blocks want their own `### ` subsection just above them.
fn check_code_blocks_in_section(section: &Section, config: &Config, issues: &mut Vec<Issue>) {
    let lines: Vec<&str> = section.text.split('\n').collect();
    for block in markdown::code_blocks(&section.text) {
        let newlines = block.newline_count();
        if newlines <= config.limits.code_block_long_threshold {
            continue;
        }

        let before = lines[..block.open_index].join("\n");
        let before = before.trim();
        let skip = before
            .chars()
            .count()
            .saturating_sub(SUBSECTION_LOOKBACK_CHARS);
        let recent: String = before.chars().skip(skip).collect();
        let has_subsection = recent
            .lines()
            .skip(1)
            .any(|line| markdown::heading_level(line) == Some(3));
        if !has_subsection {
            issues.push(
                Issue::warn(
                    "code_block_subsection",
                    format!(
                        "Code block with {} lines should have its own ### subsection",
                        newlines
                    ),
                )
                .at_line(section.start_line + block.open_index)
                .with_details(format!("In section: \"{}\"", section.title)),
            );
        }
    }
}

/// A code fence directly under an `##`..`####` heading, with no prose between.
fn check_bare_code_blocks(content: &str, issues: &mut Vec<Issue>) {
    let lines = markdown::scan(content);
    for (idx, line) in lines.iter().enumerate() {
        if line.literal {
            continue;
        }
        let Some(level) = markdown::heading_level(line.text) else {
            continue;
        };
        if !(2..=4).contains(&level) {
            continue;
        }
        let next = lines[idx + 1..]
            .iter()
            .find(|candidate| !candidate.text.trim().is_empty());
        if next.is_some_and(|n| n.fence_open) {
            issues.push(
                Issue::warn(
                    "bare_code_block",
                    "Code block immediately follows heading without prose",
                )
                .at_line(line.number)
                .with_details(format!("After: \"{}\"", line.text.trim())),
            );
        }
    }
}

fn check_heading_hierarchy(content: &str, issues: &mut Vec<Issue>) {
    let mut prev_level = 1;
    for heading in markdown::headings(content) {
        if heading.level > prev_level + 1 {
            issues.push(
                Issue::warn(
                    "heading_hierarchy",
                    format!(
                        "Heading hierarchy skip detected: went from {} to {}",
                        "#".repeat(prev_level),
                        "#".repeat(heading.level)
                    ),
                )
                .at_line(heading.line_number)
                .with_details(heading.line.clone()),
            );
        }
        prev_level = heading.level;
    }
}
