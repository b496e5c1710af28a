//! Cross-references in "Related" sections must resolve to existing files.

use super::Document;
use crate::core::config::Config;
use crate::core::issue::Issue;
use crate::core::markdown;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[[^\]]*\]\(\s*<?([^)\s>]+)>?(?:\s+"[^"]*")?\s*\)"#).unwrap());

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*:").unwrap());

/// Whether a section title marks a cross-reference list.
pub fn is_related_section(title: &str) -> bool {
    title.to_lowercase().contains("related")
}

/// Local file part of a link target, or `None` for external / anchor-only links.
pub fn local_target(target: &str) -> Option<&str> {
    if target.starts_with('#') || SCHEME.is_match(target) {
        return None;
    }
    let end = target.find(['#', '?']).unwrap_or(target.len());
    let local = &target[..end];
    (!local.is_empty()).then_some(local)
}

fn resolve(doc: &Document<'_>, local: &str) -> PathBuf {
    match local.strip_prefix('/') {
        Some(rooted) => doc.root.join(rooted),
        None => doc
            .path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(local),
    }
}

pub fn check(doc: &Document<'_>, _config: &Config, issues: &mut Vec<Issue>) {
    for section in markdown::sections(doc.content) {
        if !is_related_section(&section.title) {
            continue;
        }
        for line in markdown::scan(&section.text) {
            if line.literal {
                continue;
            }
            for caps in LINK.captures_iter(line.text) {
                let target = &caps[1];
                let Some(local) = local_target(target) else {
                    continue;
                };
                if resolve(doc, local).exists() {
                    continue;
                }
                issues.push(
                    Issue::fail(
                        "related_link_broken",
                        format!("Cross-reference target does not exist: {}", target),
                    )
                    .at_line(section.start_line + line.number - 1)
                    .with_details(format!("In section: \"{}\"", section.title)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_target() {
        assert_eq!(local_target("../hooks/use-swr.md"), Some("../hooks/use-swr.md"));
        assert_eq!(local_target("a.md#setup"), Some("a.md"));
        assert_eq!(local_target("#setup"), None);
        assert_eq!(local_target("https://nextjs.org/docs"), None);
        assert_eq!(local_target("mailto:team@example.com"), None);
    }

    #[test]
    fn test_link_regex_captures_target() {
        let caps = LINK
            .captures(r#"- [Data fetching](../data/fetching.md "title")"#)
            .unwrap();
        assert_eq!(&caps[1], "../data/fetching.md");
    }

    #[test]
    fn test_related_section_title() {
        assert!(is_related_section("## Related Patterns"));
        assert!(is_related_section("## related docs"));
        assert!(!is_related_section("## Usage"));
    }
}
