//! File checker
//!
//! Opens one data file, runs the row checker over every row, and collects
//! the file-level findings (suffix, registration). Computation only - the
//! corpus driver owns all printing.

use crate::row_check::{check_row, DataRow};
use lexicheck_core::{vocab, Diagnostic, DiagnosticCode, FileReport, Location};
use lexicheck_tables::{ConceptTable, LanguageRegistry, SourceSet};
use std::path::Path;

/// A data file that could not be consumed as delimited text.
///
/// Recovered at the corpus level: the caller converts it into a single
/// finding and moves on to the next file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("unable to read '{0}': {1}")]
    Io(String, String),

    #[error("unable to parse '{0}': {1}")]
    Parse(String, String),
}

/// Check one comma-delimited data file.
///
/// With a registry, files whose name is not declared are flagged; the
/// seen-count bookkeeping itself stays with the corpus driver.
pub fn check_file(
    path: &Path,
    concepts: &ConceptTable,
    sources: &SourceSet,
    registry: Option<&LanguageRegistry>,
) -> Result<FileReport, FileError> {
    let display = path.display().to_string();
    let mut report = FileReport::new(display.clone());

    if path.extension().and_then(|e| e.to_str()) != Some(vocab::DATA_EXTENSION) {
        report.push(
            Diagnostic::error(
                DiagnosticCode::InvalidSuffix,
                format!("invalid suffix: expected .{}", vocab::DATA_EXTENSION),
            )
            .with_location(Location::new(&display)),
        );
    }

    if let Some(registry) = registry {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if !registry.contains(&filename) {
            report.push(
                Diagnostic::error(
                    DiagnosticCode::UnregisteredFile,
                    format!("'{filename}' is not declared in the language registry"),
                )
                .with_location(Location::new(&display)),
            );
        }
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| FileError::Io(display.clone(), e.to_string()))?;
    let headers = reader
        .headers()
        .map_err(|e| FileError::Parse(display.clone(), e.to_string()))?
        .clone();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| FileError::Parse(display.clone(), e.to_string()))?;
        let row = DataRow::from_record(&headers, &record);
        report.extend(check_row(&display, index + 1, &row, concepts, sources));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn concepts() -> ConceptTable {
        ConceptTable::from_reader(
            "ID\tEnglish\n1sg\tfirst person singular\n".as_bytes(),
            "concepts.tsv",
        )
        .unwrap()
    }

    fn sources() -> SourceSet {
        SourceSet::from_reader("@book{smith-1990,\n".as_bytes(), "sources.bib").unwrap()
    }

    fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn codes(report: &FileReport) -> Vec<DiagnosticCode> {
        report.diagnostics.iter().map(|d| d.code).collect()
    }

    #[test]
    fn clean_file_yields_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "kalam kala1397.csv",
            "word,parameter,glottocode,source\nnad,1sg,kala1397,smith-1990\n#,1sg,,\n",
        );

        let report = check_file(&path, &concepts(), &sources(), None).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn rows_are_one_indexed_in_findings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "x.csv",
            "word,glottocode,source\nnad,kala1397,smith-1990\nyad,short,smith-1990\n",
        );

        let report = check_file(&path, &concepts(), &sources(), None).unwrap();
        assert_eq!(codes(&report), vec![DiagnosticCode::InvalidGlottocode]);
        assert_eq!(report.diagnostics[0].location.as_ref().unwrap().line, Some(2));
    }

    #[test]
    fn wrong_suffix_is_flagged() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "x.txt", "word,source\n#,\n");

        let report = check_file(&path, &concepts(), &sources(), None).unwrap();
        assert_eq!(codes(&report), vec![DiagnosticCode::InvalidSuffix]);
    }

    #[test]
    fn unregistered_file_is_flagged() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "x.csv", "word,source\n#,\n");
        let registry = LanguageRegistry::from_reader(
            "ID\tLocalID\tName\tDialect\tVariant\tFilename\tGlottocode\tAnalect\tCoder\tComment\n\
             kalam\t1\tKalam\t\t\tkalam kala1397.csv\tkala1397\tFree\tSimon Greenhill\t\n"
                .as_bytes(),
            "etc/languages.tsv",
        )
        .unwrap();

        let report = check_file(&path, &concepts(), &sources(), Some(&registry)).unwrap();
        assert_eq!(codes(&report), vec![DiagnosticCode::UnregisteredFile]);
    }

    #[test]
    fn registered_file_is_not_flagged() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "kalam kala1397.csv", "word,source\n#,\n");
        let registry = LanguageRegistry::from_reader(
            "ID\tLocalID\tName\tDialect\tVariant\tFilename\tGlottocode\tAnalect\tCoder\tComment\n\
             kalam\t1\tKalam\t\t\tkalam kala1397.csv\tkala1397\tFree\tSimon Greenhill\t\n"
                .as_bytes(),
            "etc/languages.tsv",
        )
        .unwrap();

        let report = check_file(&path, &concepts(), &sources(), Some(&registry)).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn ragged_file_is_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "x.csv", "word,source\nnad,smith-1990,extra,fields\n");

        let err = check_file(&path, &concepts(), &sources(), None).unwrap_err();
        assert!(matches!(err, FileError::Parse(_, _)));
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let err = check_file(
            Path::new("does/not/exist.csv"),
            &concepts(),
            &sources(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, FileError::Io(_, _)));
    }
}
