//! Lint configuration.
//!
//! Resolves built-in defaults + an optional `docgate.toml` into the limits and
//! front-matter rules every check reads from.

use crate::core::error::DocgateError;
use crate::core::frontmatter::{Audience, Complexity, DocType, Priority, Stack};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "docgate.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Limits {
    pub max_section_length: usize,
    pub stub_line_count: usize,
    pub oversized_line_count: usize,
    pub code_block_long_threshold: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_section_length: 1500,
            stub_line_count: 80,
            oversized_line_count: 600,
            code_block_long_threshold: 10,
        }
    }
}

/// Required keys and allowed enumeration values for front-matter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FrontmatterRules {
    pub required: Vec<String>,
    pub stacks: Vec<String>,
    pub priorities: Vec<String>,
    pub audiences: Vec<String>,
    pub complexities: Vec<String>,
    pub doc_types: Vec<String>,
}

fn names<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

impl Default for FrontmatterRules {
    fn default() -> Self {
        Self {
            required: names(&[
                "title",
                "category",
                "subcategory",
                "tags",
                "stack",
                "priority",
                "audience",
                "complexity",
                "doc_type",
                "source_confidence",
                "last_updated",
            ]),
            stacks: names(Stack::ALL),
            priorities: names(Priority::ALL),
            audiences: names(Audience::ALL),
            complexities: names(Complexity::ALL),
            doc_types: names(DocType::ALL),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WalkRules {
    pub exclude: Vec<String>,
}

impl Default for WalkRules {
    fn default() -> Self {
        Self {
            exclude: names(&[".git", "node_modules", "target"]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub limits: Limits,
    pub frontmatter: FrontmatterRules,
    pub walk: WalkRules,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, DocgateError> {
        toml::from_str(content).map_err(|e| DocgateError::ConfigError(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, DocgateError> {
        let content = fs::read_to_string(path).map_err(DocgateError::IoError)?;
        toml::from_str(&content)
            .map_err(|e| DocgateError::ConfigError(format!("{}: {}", path.display(), e)))
    }
}

/// Candidate config locations for a docs root, in lookup order.
fn candidate_paths(docs_root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Some(parent) = docs_root.parent() {
        out.push(parent.join(CONFIG_FILE_NAME));
    }
    out.push(docs_root.join(CONFIG_FILE_NAME));
    out
}

/// Load config from `explicit` if given, else from the first candidate next to
/// the docs root. No file = defaults (not an error). An explicit path that does
/// not exist is an error.
pub fn load_config(
    explicit: Option<&Path>,
    docs_root: &Path,
) -> Result<(Config, Option<PathBuf>), DocgateError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(DocgateError::NotFound(format!(
                "config file {}",
                path.display()
            )));
        }
        return Ok((Config::from_file(path)?, Some(path.to_path_buf())));
    }

    load_first(candidate_paths(docs_root))
}

/// Config for a single document: `explicit` if given, else the nearest
/// `docgate.toml` in the document's ancestor directories.
pub fn load_config_for_file(
    explicit: Option<&Path>,
    file: &Path,
) -> Result<(Config, Option<PathBuf>), DocgateError> {
    if explicit.is_some() {
        return load_config(explicit, file);
    }
    let file = std::path::absolute(file).map_err(DocgateError::IoError)?;
    load_first(
        file.ancestors()
            .skip(1)
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .collect(),
    )
}

fn load_first(candidates: Vec<PathBuf>) -> Result<(Config, Option<PathBuf>), DocgateError> {
    for path in candidates {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            return Ok((Config::from_file(&path)?, Some(path)));
        }
    }

    Ok((Config::default(), None))
}
