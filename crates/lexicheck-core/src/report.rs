//! Report schema (stable v1)
//!
//! This schema is STABLE and VERSIONED.
//! Breaking changes require a new version.

use crate::diagnostic::{Diagnostic, Severity};
use serde::{Deserialize, Serialize};

/// Report schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportVersion {
    /// Major version (breaking changes)
    pub major: u32,

    /// Minor version (backward-compatible additions)
    pub minor: u32,
}

impl ReportVersion {
    /// Current report schema version
    pub const CURRENT: ReportVersion = ReportVersion { major: 1, minor: 0 };
}

impl std::fmt::Display for ReportVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Findings for a single data file, in detection order.
///
/// An empty diagnostics list means the file is clean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path of the checked file, relative to the dataset root
    pub path: String,

    /// Diagnostics in detection order
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    /// Create an empty report for one file
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            diagnostics: Vec::new(),
        }
    }

    /// Append one diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Append many diagnostics, preserving order
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }
}

/// Summary statistics for a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total number of diagnostics
    pub total: usize,

    /// Number of errors
    pub errors: usize,

    /// Number of warnings
    pub warnings: usize,

    /// Number of info messages
    pub info: usize,

    /// Number of data files checked
    pub files_checked: usize,

    /// Number of data files with at least one finding
    pub files_flagged: usize,
}

impl ReportSummary {
    fn count(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors += 1,
            Severity::Warn => self.warnings += 1,
            Severity::Info => self.info += 1,
        }
        self.total += 1;
    }
}

/// Corpus check report (report.json v1)
///
/// This is the stable output format.
/// All fields are versioned and backward-compatible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version
    pub version: ReportVersion,

    /// Timestamp (ISO 8601)
    pub timestamp: String,

    /// Summary statistics
    pub summary: ReportSummary,

    /// Per-file findings; clean files are counted but not listed
    pub files: Vec<FileReport>,

    /// Registry-level findings (bad rows, missing or duplicated files)
    pub registry: Vec<Diagnostic>,
}

impl Report {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            version: ReportVersion::CURRENT,
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary: ReportSummary::default(),
            files: Vec::new(),
            registry: Vec::new(),
        }
    }

    /// Fold one file's findings into the report.
    ///
    /// Clean files bump `files_checked` only; flagged files are kept.
    pub fn add_file_report(&mut self, file: FileReport) {
        self.summary.files_checked += 1;
        if file.is_clean() {
            return;
        }
        self.summary.files_flagged += 1;
        for diagnostic in &file.diagnostics {
            self.summary.count(diagnostic);
        }
        self.files.push(file);
    }

    /// Add a registry-level diagnostic
    pub fn add_registry_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.summary.count(&diagnostic);
        self.registry.push(diagnostic);
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }

    /// Grand total of error-severity findings, the number the final
    /// `TOTAL ERRORS` line prints
    pub fn total_errors(&self) -> usize {
        self.summary.errors
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Save to file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let json = self
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
