//! Lint findings.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Fail,
    Warn,
    Info,
}

impl Level {
    pub fn icon(&self) -> &'static str {
        match self {
            Level::Fail => "❌",
            Level::Warn => "⚠️ ",
            Level::Info => "ℹ️ ",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Fail => "FAIL",
            Level::Warn => "WARN",
            Level::Info => "INFO",
        })
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub level: Level,
    pub check: String,
    pub message: String,
    pub line_number: Option<usize>,
    pub details: Option<String>,
}

impl Issue {
    pub fn new(level: Level, check: &str, message: impl Into<String>) -> Self {
        Self {
            level,
            check: check.to_string(),
            message: message.into(),
            line_number: None,
            details: None,
        }
    }

    pub fn fail(check: &str, message: impl Into<String>) -> Self {
        Self::new(Level::Fail, check, message)
    }

    pub fn warn(check: &str, message: impl Into<String>) -> Self {
        Self::new(Level::Warn, check, message)
    }

    pub fn info(check: &str, message: impl Into<String>) -> Self {
        Self::new(Level::Info, check, message)
    }

    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Results for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub file_path: String,
    pub relative_path: String,
    pub line_count: usize,
    pub sha256: Option<String>,
    pub issues: Vec<Issue>,
}

impl FileReport {
    pub fn has_failures(&self) -> bool {
        self.issues.iter().any(|i| i.level == Level::Fail)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.level == Level::Warn)
    }

    pub fn failure_count(&self) -> usize {
        self.issues.iter().filter(|i| i.level == Level::Fail).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.iter().filter(|i| i.level == Level::Warn).count()
    }
}
