//! YAML front-matter extraction and the typed vocabulary it carries.
//!
//! A document opens with a line that is exactly `---`, followed by a YAML
//! mapping, closed by the next line that is exactly `---`. Everything after the
//! closing delimiter is the Markdown body.

use serde_yaml::{Mapping, Value};
use std::fmt;
use thiserror::Error;

/// Generates a closed string enumeration with `ALL`, `as_str` and `Display`.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:expr),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Technology ecosystem a document's conventions apply to.
    Stack {
        JsNextjs => "js-nextjs",
        Sanity => "sanity",
        PhpWp => "php-wp",
        CrossStack => "cross-stack",
    }
}

string_enum! {
    Priority {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

string_enum! {
    Audience {
        Frontend => "frontend",
        Backend => "backend",
        Fullstack => "fullstack",
    }
}

string_enum! {
    Complexity {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

string_enum! {
    DocType {
        Standard => "standard",
        Guide => "guide",
        Reference => "reference",
        Decision => "decision",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontmatterError {
    #[error("File has H1 heading before frontmatter (remove the H1 line)")]
    H1Before,
    #[error("File must start with \"---\" (frontmatter delimiter)")]
    MissingStart,
    #[error("Frontmatter not properly closed (missing second \"---\")")]
    MissingEnd,
    #[error("Frontmatter YAML parse error: {0}")]
    Parse(String),
    #[error("Frontmatter did not parse to a dictionary")]
    NotMapping,
}

impl FrontmatterError {
    /// Check name reported for this failure.
    pub fn check(&self) -> &'static str {
        match self {
            FrontmatterError::H1Before => "frontmatter_h1_before",
            FrontmatterError::MissingStart => "frontmatter_start",
            FrontmatterError::MissingEnd => "frontmatter_end",
            FrontmatterError::Parse(_) | FrontmatterError::NotMapping => "frontmatter_parse",
        }
    }

    pub fn line_number(&self) -> Option<usize> {
        match self {
            FrontmatterError::H1Before | FrontmatterError::MissingStart => Some(1),
            _ => None,
        }
    }
}

/// A document cut at its front-matter delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'a> {
    pub yaml: &'a str,
    pub body: &'a str,
    /// 1-based line number of the first body line.
    pub body_start_line: usize,
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

pub fn split(content: &str) -> Result<Split<'_>, FrontmatterError> {
    let first = content.lines().next().unwrap_or("");
    if first.starts_with("# ") {
        return Err(FrontmatterError::H1Before);
    }
    if !is_delimiter(first) {
        return Err(FrontmatterError::MissingStart);
    }

    let mut offset = 0usize;
    let mut yaml_start = None;
    for (idx, line) in content.split_inclusive('\n').enumerate() {
        let next = offset + line.len();
        match yaml_start {
            None => yaml_start = Some(next),
            Some(start) if is_delimiter(line) => {
                return Ok(Split {
                    yaml: &content[start..offset],
                    body: &content[next..],
                    body_start_line: idx + 2,
                });
            }
            Some(_) => {}
        }
        offset = next;
    }

    Err(FrontmatterError::MissingEnd)
}

/// Parse the front-matter block of `content` into a YAML mapping.
pub fn parse(content: &str) -> Result<Mapping, FrontmatterError> {
    let split = split(content)?;
    if split.yaml.trim().is_empty() {
        return Err(FrontmatterError::NotMapping);
    }
    let value: Value =
        serde_yaml::from_str(split.yaml).map_err(|e| FrontmatterError::Parse(e.to_string()))?;
    match value {
        Value::Mapping(map) => Ok(map),
        _ => Err(FrontmatterError::NotMapping),
    }
}

pub fn get<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key)
}

/// Render a scalar the way it was written, for messages and format checks.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// YAML type name used in `frontmatter_tags` messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
