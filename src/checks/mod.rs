//! Lint checks run against every document.
//!
//! Each check family appends [`Issue`]s for one [`Document`]. Checks never
//! fail: a problem in the document is a finding, not an error.

pub mod frontmatter;
pub mod links;
pub mod sections;
pub mod structure;

use crate::core::config::Config;
use crate::core::issue::Issue;
use std::path::Path;

/// A document loaded for checking.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    /// Docs root the document was collected from.
    pub root: &'a Path,
    pub path: &'a Path,
    /// Path relative to the docs root, `/`-separated.
    pub relative_path: &'a str,
    pub content: &'a str,
}

/// Run every check family in order.
pub fn run_all(doc: &Document<'_>, config: &Config) -> Vec<Issue> {
    let mut issues = Vec::new();
    frontmatter::check(doc, config, &mut issues);
    sections::check(doc, config, &mut issues);
    structure::check(doc, config, &mut issues);
    links::check(doc, config, &mut issues);
    issues
}
