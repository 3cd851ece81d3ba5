//! Registry checker
//!
//! Row-wise validation of the language registry, plus suggested rows for
//! data files found on disk but not yet declared.

use lexicheck_core::{vocab, Analect, Config, Diagnostic, DiagnosticCode, Location};
use lexicheck_tables::{slug, LanguageRegistry};
use std::collections::HashMap;

/// Rows in the registry file are displayed 1-indexed with the header on
/// line 1, so data row `i` (0-indexed) sits on display line `i + 2`.
const HEADER_OFFSET: usize = 2;

/// Check every row of the language registry
pub fn check_registry(registry: &LanguageRegistry, config: &Config) -> Vec<Diagnostic> {
    let mut findings = Vec::new();
    let mut slugs: HashMap<String, usize> = HashMap::new();

    for (index, entry) in registry.entries().iter().enumerate() {
        let line = index + HEADER_OFFSET;
        let at = || Location::with_line(registry.path(), line);

        if entry.filename.is_empty() {
            findings.push(
                Diagnostic::error(DiagnosticCode::RegistryMissingFilename, "row has no filename")
                    .with_location(at()),
            );
        } else if !entry
            .filename
            .ends_with(&format!(".{}", vocab::DATA_EXTENSION))
        {
            findings.push(
                Diagnostic::error(
                    DiagnosticCode::RegistryInvalidSuffix,
                    format!("'{}' should be a CSV file", entry.filename),
                )
                .with_location(at()),
            );
        }

        if entry.glottocode.chars().count() != vocab::GLOTTOCODE_LEN {
            findings.push(
                Diagnostic::error(
                    DiagnosticCode::RegistryInvalidGlottocode,
                    format!("invalid glottocode '{}'", entry.glottocode),
                )
                .with_location(at()),
            );
        }

        if entry.analect.parse::<Analect>().is_err() {
            findings.push(
                Diagnostic::error(
                    DiagnosticCode::RegistryInvalidAnalect,
                    format!("invalid analect '{}'", entry.analect),
                )
                .with_location(at()),
            );
        }

        let label = entry.slug();
        if entry.coder.is_empty() {
            findings.push(
                Diagnostic::error(
                    DiagnosticCode::RegistryMissingCoder,
                    format!("no coder for '{label}'"),
                )
                .with_location(at()),
            );
        } else if !config.is_known_coder(&entry.coder) {
            findings.push(
                Diagnostic::error(
                    DiagnosticCode::RegistryUnknownCoder,
                    format!("unknown coder '{}'", entry.coder),
                )
                .with_location(at()),
            );
        }

        match slugs.get(&label) {
            Some(first) => findings.push(
                Diagnostic::error(
                    DiagnosticCode::RegistryDuplicateSlug,
                    format!("slug '{label}' already used on line {first}"),
                )
                .with_location(at()),
            ),
            None => {
                slugs.insert(label, line);
            }
        }
    }

    findings
}

/// A registry row proposed for a data file that exists on disk but is not
/// yet declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySuggestion {
    pub id: String,
    pub local_id: u32,
    pub name: String,
    pub filename: String,
    pub glottocode: String,
}

impl RegistrySuggestion {
    /// Render the suggestion as one registry TSV row: free analect, coder
    /// not yet assigned, everything else blank
    pub fn to_tsv_row(&self) -> String {
        format!(
            "{}\t{}\t{}\t\t\t{}\t{}\t{}\t{}\t",
            self.id,
            self.local_id,
            self.name,
            self.filename,
            self.glottocode,
            Analect::Free.as_str(),
            vocab::UNASSIGNED_CODER,
        )
    }
}

/// Propose registry rows for unregistered on-disk data files.
///
/// Data filenames follow the `<name> <glottocode>.csv` convention; when a
/// stem does not, the glottocode is left blank for the curator to fill in.
pub fn suggest_unregistered(
    registry: &LanguageRegistry,
    data_files: &[String],
) -> Vec<RegistrySuggestion> {
    let mut next_id = registry.max_local_id();
    let mut suggestions = Vec::new();

    let mut unregistered: Vec<&String> = data_files
        .iter()
        .filter(|f| !registry.contains(f))
        .collect();
    unregistered.sort();

    for filename in unregistered {
        let stem = filename
            .strip_suffix(&format!(".{}", vocab::DATA_EXTENSION))
            .unwrap_or(filename);

        let (name, glottocode) = match stem.rsplit_once(' ') {
            Some((name, code)) if code.chars().count() == vocab::GLOTTOCODE_LEN => {
                (name.to_string(), code.to_string())
            }
            _ => (stem.to_string(), String::new()),
        };

        next_id += 1;
        suggestions.push(RegistrySuggestion {
            id: slug(&name),
            local_id: next_id,
            name,
            filename: filename.clone(),
            glottocode,
        });
    }

    suggestions
}
