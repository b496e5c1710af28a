//! Documentation validation harness.
//!
//! Collects every Markdown file under a docs root and runs the check families
//! from [`crate::checks`] against each one.
//!
//! # Guarantees
//!
//! - **Deterministic**: files are validated in sorted path order and results
//!   come back in that order, regardless of how rayon schedules the work
//! - **Total**: an unreadable file becomes a `file_read` failure, never an error
//! - **Read-only**: validation never writes to the docs tree

use crate::checks::{self, Document};
use crate::core::config::Config;
use crate::core::error::DocgateError;
use crate::core::issue::{FileReport, Issue};
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Collect `*.md` files under `root`, skipping excluded directory names. Sorted.
pub fn collect_markdown_files(
    root: &Path,
    exclude: &[String],
) -> Result<Vec<PathBuf>, DocgateError> {
    fn recurse(dir: &Path, exclude: &[String], out: &mut Vec<PathBuf>) -> Result<(), DocgateError> {
        for entry in fs::read_dir(dir).map_err(DocgateError::IoError)? {
            let entry = entry.map_err(DocgateError::IoError)?;
            let path = entry.path();
            // Symlinked directories are not followed; a link cycle would never end.
            let file_type = entry.file_type().map_err(DocgateError::IoError)?;
            if file_type.is_dir() {
                let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
                if exclude.iter().any(|e| e == name) {
                    tracing::debug!(dir = %path.display(), "skipping excluded directory");
                    continue;
                }
                recurse(&path, exclude, out)?;
            } else if file_type.is_symlink() && path.is_dir() {
                tracing::debug!(dir = %path.display(), "skipping symlinked directory");
            } else if path.is_file() && path.extension().is_some_and(|e| e == "md") {
                out.push(path);
            }
        }
        Ok(())
    }

    if !root.is_dir() {
        return Err(DocgateError::NotFound(format!(
            "Docs directory not found: {}",
            root.display()
        )));
    }

    let mut out = Vec::new();
    recurse(root, exclude, &mut out)?;
    out.sort();
    Ok(out)
}

/// `path` relative to `root`, `/`-separated.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn sha256_hex(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Validates Markdown documents under one docs root.
#[derive(Debug, Clone)]
pub struct Validator {
    root: PathBuf,
    config: Config,
}

impl Validator {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate every Markdown file under the root.
    pub fn validate_all(&self) -> Result<Vec<FileReport>, DocgateError> {
        let files = collect_markdown_files(&self.root, &self.config.walk.exclude)?;
        tracing::info!(root = %self.root.display(), files = files.len(), "validating");

        Ok(files
            .par_iter()
            .map(|path| self.validate_file(path))
            .collect())
    }

    /// Validate one file. Read failures are reported as a `file_read` issue.
    pub fn validate_file(&self, path: &Path) -> FileReport {
        let relative = relative_path(&self.root, path);
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable document");
                return FileReport {
                    file_path: path.display().to_string(),
                    relative_path: relative,
                    line_count: 0,
                    sha256: None,
                    issues: vec![Issue::fail(
                        "file_read",
                        format!("Failed to read file: {}", e),
                    )],
                };
            }
        };

        let report = self.validate_content(path, &relative, &content);
        tracing::debug!(
            path = %relative,
            failures = report.failure_count(),
            warnings = report.warning_count(),
            "validated"
        );
        report
    }

    /// Validate in-memory `content` as if it lived at `path`.
    pub fn validate_content(&self, path: &Path, relative: &str, content: &str) -> FileReport {
        let doc = Document {
            root: &self.root,
            path,
            relative_path: relative,
            content,
        };
        FileReport {
            file_path: path.display().to_string(),
            relative_path: relative.to_string(),
            line_count: content.lines().count(),
            sha256: Some(sha256_hex(content)),
            issues: checks::run_all(&doc, &self.config),
        }
    }
}
