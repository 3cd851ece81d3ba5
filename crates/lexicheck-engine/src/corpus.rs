//! Corpus driver
//!
//! Walks the `raw/<family>/<file>` tree, checks every data file, then the
//! registry itself, and reconciles the registry against what was actually
//! seen on disk. Produces the final [`Report`]; printing is the CLI's job.

use crate::file_check::check_file;
use crate::registry_check::check_registry;
use lexicheck_core::{Config, Diagnostic, DiagnosticCode, FileReport, Location, Report};
use lexicheck_tables::{ConceptTable, LanguageRegistry, SourceSet, TableError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The three controlled vocabularies, built once at startup and passed by
/// reference into every check
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub concepts: ConceptTable,
    pub sources: SourceSet,
    pub registry: LanguageRegistry,
}

impl ReferenceTables {
    /// Load all reference tables from the configured paths.
    ///
    /// Any failure here is fatal: no row is checkable without them.
    pub fn load(config: &Config) -> Result<Self, TableError> {
        Ok(Self {
            concepts: ConceptTable::from_file(&config.concepts)?,
            sources: SourceSet::from_file(&config.sources)?,
            registry: LanguageRegistry::from_file(&config.languages)?,
        })
    }
}

/// Run the full corpus check rooted at `root`
pub fn check_corpus(root: &Path, tables: &ReferenceTables, config: &Config) -> Report {
    let mut report = Report::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for path in data_paths(root, config) {
        if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
            if tables.registry.contains(filename) {
                *seen.entry(filename.to_string()).or_insert(0) += 1;
            }
        }

        match check_file(&path, &tables.concepts, &tables.sources, Some(&tables.registry)) {
            Ok(file_report) => report.add_file_report(file_report),
            Err(err) => {
                // one bad file must not abort the scan
                let mut file_report = FileReport::new(path.display().to_string());
                file_report.push(
                    Diagnostic::error(DiagnosticCode::FileReadError, err.to_string())
                        .with_location(Location::new(path.display().to_string())),
                );
                report.add_file_report(file_report);
            }
        }
    }

    for finding in check_registry(&tables.registry, config) {
        report.add_registry_diagnostic(finding);
    }

    for filename in tables.registry.filenames() {
        let count = seen.get(filename).copied().unwrap_or(0);
        let finding = match count {
            1 => continue,
            0 => Diagnostic::error(
                DiagnosticCode::FileNotOnDisk,
                format!("'{filename}' declared in the registry but matched 0 files on disk"),
            ),
            n => Diagnostic::error(
                DiagnosticCode::FileMatchedTwice,
                format!("'{filename}' matched {n} files on disk"),
            ),
        };
        report.add_registry_diagnostic(
            finding.with_location(Location::new(tables.registry.path())),
        );
    }

    report
}

/// Data file paths exactly two levels below `root`, lexicographic,
/// directories and ignored extensions skipped
fn data_paths(root: &Path, config: &Config) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            match path.extension().and_then(|e| e.to_str()) {
                Some(extension) => !config.is_ignored_extension(extension),
                None => true,
            }
        })
        .collect()
}

/// Names of the `.csv` files currently on disk under `root`, for
/// reconciliation against the registry
pub fn data_filenames(root: &Path, config: &Config) -> Vec<String> {
    data_paths(root, config)
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_skips_scripts_archives_and_shallow_files() {
        let dir = tempfile::tempdir().unwrap();
        let family = dir.path().join("tng");
        std::fs::create_dir_all(&family).unwrap();
        std::fs::write(family.join("kalam kala1397.csv"), "word,source\n").unwrap();
        std::fs::write(family.join("script.py"), "print()\n").unwrap();
        std::fs::write(family.join("archive.gz"), "").unwrap();
        std::fs::write(dir.path().join("toplevel.csv"), "word,source\n").unwrap();
        std::fs::create_dir_all(family.join("nested")).unwrap();

        let paths = data_paths(dir.path(), &Config::default());
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["kalam kala1397.csv"]);
    }

    #[test]
    fn scan_of_missing_root_is_empty() {
        let paths = data_paths(Path::new("does/not/exist"), &Config::default());
        assert!(paths.is_empty());
    }
}
