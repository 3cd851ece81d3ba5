//! Diagnostic codes and error reporting
//!
//! IMPORTANT: Diagnostic codes are versioned and stable.
//! NEVER rename or remove codes - they are part of the public API.
//! Add new codes with new names only.

use serde::{Deserialize, Serialize};

/// Diagnostic code registry (v1)
///
/// These codes are STABLE and VERSIONED.
/// Do NOT rename or remove codes - only add new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    // Row-level findings
    /// The `parameter` value is not a key of the concept table
    UnknownParameter,

    /// A text value differs from its Unicode NFC rendering
    NotNormalized,

    /// A glottocode is not exactly eight characters long
    InvalidGlottocode,

    /// A row with a lexical entry carries an empty `source`
    EmptySource,

    /// A citation key does not resolve against the bibliography
    UnknownSource,

    // File-level findings
    /// A data file does not carry the `.csv` extension
    InvalidSuffix,

    /// A data file is not declared in the language registry
    UnregisteredFile,

    /// A data file could not be read or parsed as delimited text
    FileReadError,

    // Registry-level findings
    /// A registry row has no filename
    RegistryMissingFilename,

    /// A registry filename does not end in `.csv`
    RegistryInvalidSuffix,

    /// A registry glottocode is not exactly eight characters long
    RegistryInvalidGlottocode,

    /// A registry analect is neither `Free` nor `Bound`
    RegistryInvalidAnalect,

    /// A registry row has no coder
    RegistryMissingCoder,

    /// A registry coder is not in the known-coder list
    RegistryUnknownCoder,

    /// Two registry rows reduce to the same slug
    RegistryDuplicateSlug,

    /// A registered filename matched no file on disk
    FileNotOnDisk,

    /// A registered filename matched more than one file on disk
    FileMatchedTwice,
}

impl DiagnosticCode {
    /// Get the diagnostic code as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownParameter => "UNKNOWN_PARAMETER",
            Self::NotNormalized => "NOT_NORMALIZED",
            Self::InvalidGlottocode => "INVALID_GLOTTOCODE",
            Self::EmptySource => "EMPTY_SOURCE",
            Self::UnknownSource => "UNKNOWN_SOURCE",
            Self::InvalidSuffix => "INVALID_SUFFIX",
            Self::UnregisteredFile => "UNREGISTERED_FILE",
            Self::FileReadError => "FILE_READ_ERROR",
            Self::RegistryMissingFilename => "REGISTRY_MISSING_FILENAME",
            Self::RegistryInvalidSuffix => "REGISTRY_INVALID_SUFFIX",
            Self::RegistryInvalidGlottocode => "REGISTRY_INVALID_GLOTTOCODE",
            Self::RegistryInvalidAnalect => "REGISTRY_INVALID_ANALECT",
            Self::RegistryMissingCoder => "REGISTRY_MISSING_CODER",
            Self::RegistryUnknownCoder => "REGISTRY_UNKNOWN_CODER",
            Self::RegistryDuplicateSlug => "REGISTRY_DUPLICATE_SLUG",
            Self::FileNotOnDisk => "FILE_NOT_ON_DISK",
            Self::FileMatchedTwice => "FILE_MATCHED_TWICE",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message
    Info,

    /// Warning - should be reviewed but not blocking
    Warn,

    /// Error - blocking issue that should fail CI
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source location in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to the dataset root
    pub file: String,

    /// Optional row number (1-indexed, as displayed to the user)
    pub line: Option<usize>,
}

impl Location {
    /// Create a new location with just a file path
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: None,
        }
    }

    /// Create a location with file and row number
    pub fn with_line(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
        }
    }
}

/// A diagnostic message with structured metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable diagnostic code
    pub code: DiagnosticCode,

    /// Severity level
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// Source location (best-effort)
    pub location: Option<Location>,
}

impl Diagnostic {
    /// Create a new diagnostic with minimal fields
    pub fn new(code: DiagnosticCode, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            location: None,
        }
    }

    /// Create an error diagnostic - the common case in this dataset,
    /// where every finding blocks a clean run
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Error, message)
    }

    /// Set the location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_code_stability() {
        // Ensure codes are stable strings
        assert_eq!(DiagnosticCode::UnknownParameter.as_str(), "UNKNOWN_PARAMETER");
        assert_eq!(DiagnosticCode::NotNormalized.as_str(), "NOT_NORMALIZED");
        assert_eq!(DiagnosticCode::FileMatchedTwice.as_str(), "FILE_MATCHED_TWICE");
    }

    #[test]
    fn diagnostic_serialization() {
        let diag = Diagnostic::error(
            DiagnosticCode::UnknownSource,
            "unknown source 'smith-1990'",
        )
        .with_location(Location::with_line("raw/tng/kalam.csv", 12));

        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("UNKNOWN_SOURCE"));
        assert!(json.contains("error"));
        assert!(json.contains("kalam.csv"));
    }
}
