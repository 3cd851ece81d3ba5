//! Row checker
//!
//! Applies the field-level rules to one data row. Rules are evaluated
//! independently per column present in the row; findings accumulate and
//! checking never stops at the first defect.

use lexicheck_core::{vocab, Diagnostic, DiagnosticCode, Location};
use lexicheck_tables::{ConceptTable, SourceSet};
use unicode_normalization::is_nfc;

/// One lexical entry as read from a data file.
///
/// Data files carry a subset of these columns; absent columns are `None`
/// and are not checked. A column that is present but empty stays
/// `Some("")` - the empty-source rule depends on that distinction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataRow {
    pub word: Option<String>,
    pub ipa: Option<String>,
    pub parameter: Option<String>,
    pub description: Option<String>,
    pub localid: Option<String>,
    pub alternative: Option<String>,
    pub comment: Option<String>,
    pub translation: Option<String>,
    pub glottocode: Option<String>,
    pub source: Option<String>,
}

impl DataRow {
    /// Build a row from a CSV record, keyed by the file's header row
    pub fn from_record(headers: &csv::StringRecord, record: &csv::StringRecord) -> Self {
        let field = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .map(|i| record.get(i).unwrap_or_default().to_string())
        };

        Self {
            word: field("word"),
            ipa: field("ipa"),
            parameter: field("parameter"),
            description: field("description"),
            localid: field("localid"),
            alternative: field("alternative"),
            comment: field("comment"),
            translation: field("translation"),
            glottocode: field("glottocode"),
            source: field("source"),
        }
    }

    /// Whether the row records an actual lexical form.
    ///
    /// Many rows deliberately mean "no form recorded for this paradigm
    /// slot"; those carry the `#` sentinel (or nothing) in `word` and are
    /// exempt from glottocode and source bookkeeping.
    pub fn has_entry(&self) -> bool {
        match &self.word {
            Some(word) => !word.is_empty() && word != vocab::NO_ENTRY,
            None => false,
        }
    }
}

/// Check one row; `line` is the 1-indexed data row number used in messages
pub fn check_row(
    file: &str,
    line: usize,
    row: &DataRow,
    concepts: &ConceptTable,
    sources: &SourceSet,
) -> Vec<Diagnostic> {
    let mut findings = Vec::new();
    let at = || Location::with_line(file, line);

    if let Some(parameter) = &row.parameter {
        if !concepts.contains(parameter) {
            findings.push(
                Diagnostic::error(
                    DiagnosticCode::UnknownParameter,
                    format!("unknown parameter '{parameter}'"),
                )
                .with_location(at()),
            );
        }
    }

    // `description` is not checked, reserved for future use

    let text_columns = [
        ("word", &row.word),
        ("ipa", &row.ipa),
        ("comment", &row.comment),
        ("translation", &row.translation),
    ];
    for (column, value) in text_columns {
        if let Some(value) = value {
            if !is_nfc(value) {
                findings.push(
                    Diagnostic::error(
                        DiagnosticCode::NotNormalized,
                        format!(
                            "{column} '{value}' is not NFC-normalized: {}",
                            character_names(value)
                        ),
                    )
                    .with_location(at()),
                );
            }
        }
    }

    if row.has_entry() {
        if let Some(glottocode) = &row.glottocode {
            if glottocode.chars().count() != vocab::GLOTTOCODE_LEN {
                findings.push(
                    Diagnostic::error(
                        DiagnosticCode::InvalidGlottocode,
                        format!("invalid glottocode '{glottocode}'"),
                    )
                    .with_location(at()),
                );
            }
        }

        if let Some(source) = &row.source {
            if source.is_empty() {
                findings.push(
                    Diagnostic::error(DiagnosticCode::EmptySource, "entry has no source")
                        .with_location(at()),
                );
            } else {
                for key in source.split(';') {
                    if !sources.contains(key) {
                        findings.push(
                            Diagnostic::error(
                                DiagnosticCode::UnknownSource,
                                format!("unknown source '{key}'"),
                            )
                            .with_location(at()),
                        );
                    }
                }
            }
        }
    }

    findings
}

/// Unicode character names of a value, for pinpointing which codepoint
/// broke normalization
fn character_names(value: &str) -> String {
    value
        .chars()
        .map(|c| match unicode_names2::name(c) {
            Some(name) => name.to_string(),
            None => "UNKNOWN".to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
