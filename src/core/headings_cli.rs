//! `docgate headings`: find and remove empty `## ` headings.

use crate::core::config::load_config;
use crate::core::error::DocgateError;
use crate::core::markdown;
use crate::core::validate::collect_markdown_files;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(clap::Args, Debug)]
pub struct HeadingsCli {
    /// Files or directories to scan (defaults to the docs directory)
    pub paths: Vec<PathBuf>,
    /// Report what would be removed without writing files
    #[clap(long)]
    pub dry_run: bool,
    /// Docs directory used when no paths are given
    #[clap(long, default_value = "docs")]
    pub docs_dir: PathBuf,
    /// Config file (defaults to docgate.toml next to the docs directory)
    #[clap(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingFix {
    pub file: String,
    pub empty_headings: Vec<String>,
    pub removed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadingsSummary {
    pub files_scanned: usize,
    pub fixes: Vec<HeadingFix>,
    pub dry_run: bool,
}

impl HeadingsSummary {
    pub fn total_empty(&self) -> usize {
        self.fixes.iter().map(|f| f.empty_headings.len()).sum()
    }

    pub fn total_removed(&self) -> usize {
        self.fixes.iter().map(|f| f.removed).sum()
    }

    /// Non-zero only for a dry run that found something to remove.
    pub fn exit_code(&self) -> i32 {
        if self.dry_run && self.total_empty() > 0 {
            1
        } else {
            0
        }
    }
}

/// Process one file. Returns `None` when it has no empty headings.
pub fn process_file(path: &Path, dry_run: bool) -> Result<Option<HeadingFix>, DocgateError> {
    let original = fs::read_to_string(path).map_err(DocgateError::IoError)?;
    let empty = markdown::find_empty_headings(&original);
    if empty.is_empty() {
        return Ok(None);
    }

    let (fixed, removed) = markdown::remove_empty_headings(&original);
    if !dry_run {
        fs::write(path, fixed).map_err(DocgateError::IoError)?;
        tracing::info!(path = %path.display(), removed, "removed empty headings");
    }

    Ok(Some(HeadingFix {
        file: path.display().to_string(),
        empty_headings: empty.into_iter().map(|(_, text)| text).collect(),
        removed: if dry_run { 0 } else { removed },
    }))
}

fn expand(paths: &[PathBuf], exclude: &[String]) -> Result<Vec<PathBuf>, DocgateError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(collect_markdown_files(path, exclude)?);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(DocgateError::NotFound(format!(
                "Path not found: {}",
                path.display()
            )));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Directories are walked with the same `exclude` names `validate` skips.
pub fn fix_paths(
    paths: &[PathBuf],
    exclude: &[String],
    dry_run: bool,
) -> Result<HeadingsSummary, DocgateError> {
    let files = expand(paths, exclude)?;
    let mut summary = HeadingsSummary {
        files_scanned: files.len(),
        dry_run,
        ..HeadingsSummary::default()
    };
    for file in &files {
        if let Some(fix) = process_file(file, dry_run)? {
            summary.fixes.push(fix);
        }
    }
    Ok(summary)
}

pub fn render_text(summary: &HeadingsSummary) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();
    for fix in &summary.fixes {
        out.push_str(&format!("\n{}\n", fix.file));
        out.push_str(&format!(
            "  Empty headings found: {}\n",
            fix.empty_headings.len()
        ));
        for heading in &fix.empty_headings {
            out.push_str(&format!("    - {}\n", heading));
        }
    }

    out.push_str(&format!("\n{}\nSUMMARY\n{}\n", rule, rule));
    out.push_str(&format!("Total files scanned: {}\n", summary.files_scanned));
    out.push_str(&format!("Files with empty headings: {}\n", summary.fixes.len()));
    out.push_str(&format!("Total empty headings found: {}\n", summary.total_empty()));
    if summary.dry_run {
        out.push_str(&format!(
            "Total empty headings would be removed: {}\n",
            summary.total_empty()
        ));
        out.push_str("\n⚠️  This was a DRY RUN. No files were modified.\n");
    } else {
        out.push_str(&format!(
            "Total empty headings removed: {}\n",
            summary.total_removed()
        ));
    }
    out
}

/// A dry run that finds empty headings fails so it can gate CI.
pub fn run_headings_cli(cli: HeadingsCli) -> Result<(), DocgateError> {
    let paths = if cli.paths.is_empty() {
        vec![cli.docs_dir.clone()]
    } else {
        cli.paths.clone()
    };
    println!(
        "{}Scanning for empty headings...",
        if cli.dry_run { "DRY RUN - " } else { "" }
    );
    let docs_dir = std::path::absolute(&cli.docs_dir).map_err(DocgateError::IoError)?;
    let (config, _) = load_config(cli.config.as_deref(), &docs_dir)?;
    let summary = fix_paths(&paths, &config.walk.exclude, cli.dry_run)?;
    print!("{}", render_text(&summary));
    match summary.exit_code() {
        0 => Ok(()),
        _ => Err(DocgateError::ValidationFailed(summary.total_empty())),
    }
}
