//! Aggregated validation report.
//!
//! Built from per-file results; ordering is deterministic (sorted maps, files
//! in validation order) so two runs over the same tree differ only in
//! `run_id` and `generated_at`.

use crate::core::error::DocgateError;
use crate::core::issue::{FileReport, Issue, Level};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use ulid::Ulid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_files: usize,
    /// Files with at least one FAIL.
    pub files_with_failures: usize,
    /// Files with WARNs but no FAIL.
    pub files_with_warnings: usize,
    pub files_passing: usize,
    pub total_failures: usize,
    pub total_warnings: usize,
    pub duplicate_basenames: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub line_count: usize,
    pub sha256: Option<String>,
    pub failures: usize,
    pub warnings: usize,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub run_id: String,
    pub generated_at: String,
    pub docs_root: String,
    pub summary: Summary,
    pub failures_by_check: BTreeMap<String, usize>,
    pub warnings_by_check: BTreeMap<String, usize>,
    pub duplicate_basenames: BTreeMap<String, Vec<String>>,
    pub files: Vec<FileEntry>,
}

/// File names that occur in more than one directory, with their sorted paths.
pub fn duplicate_basenames(results: &[FileReport]) -> BTreeMap<String, Vec<String>> {
    let mut by_name: FxHashMap<String, Vec<String>> = FxHashMap::default();
    for result in results {
        let basename = Path::new(&result.file_path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| result.relative_path.clone());
        by_name
            .entry(basename)
            .or_default()
            .push(result.relative_path.clone());
    }

    by_name
        .into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .map(|(name, mut paths)| {
            paths.sort();
            (name, paths)
        })
        .collect()
}

impl Report {
    pub fn build(docs_root: &Path, results: &[FileReport]) -> Self {
        let mut summary = Summary {
            total_files: results.len(),
            ..Summary::default()
        };
        let mut failures_by_check = BTreeMap::new();
        let mut warnings_by_check = BTreeMap::new();

        for result in results {
            if result.has_failures() {
                summary.files_with_failures += 1;
            } else if result.has_warnings() {
                summary.files_with_warnings += 1;
            } else {
                summary.files_passing += 1;
            }
            summary.total_failures += result.failure_count();
            summary.total_warnings += result.warning_count();

            for issue in &result.issues {
                let bucket = match issue.level {
                    Level::Fail => &mut failures_by_check,
                    Level::Warn => &mut warnings_by_check,
                    Level::Info => continue,
                };
                *bucket.entry(issue.check.clone()).or_insert(0) += 1;
            }
        }

        let duplicate_basenames = duplicate_basenames(results);
        summary.duplicate_basenames = duplicate_basenames.len();

        let files = results
            .iter()
            .map(|r| FileEntry {
                path: r.relative_path.clone(),
                line_count: r.line_count,
                sha256: r.sha256.clone(),
                failures: r.failure_count(),
                warnings: r.warning_count(),
                issues: r.issues.clone(),
            })
            .collect();

        Report {
            run_id: Ulid::new().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            docs_root: docs_root.display().to_string(),
            summary,
            failures_by_check,
            warnings_by_check,
            duplicate_basenames,
            files,
        }
    }

    pub fn passed(&self) -> bool {
        self.summary.total_failures == 0
    }

    pub fn to_json(&self) -> Result<String, DocgateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<(), DocgateError> {
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(path, json).map_err(DocgateError::IoError)
    }
}

/// Check counts ordered by count descending, then name.
pub fn top_checks(counts: &BTreeMap<String, usize>, limit: usize) -> Vec<(&str, usize)> {
    let mut sorted: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    sorted.truncate(limit);
    sorted
}
