//! Bibliography source set (raw/sources.bib)
//!
//! The bibliography is BibTeX-like text. Only entry heads matter here: a
//! line starting with `@` opens an entry and carries its citation key
//! between the first `{` and the following `,`. Everything else is ignored.

use crate::error::TableError;
use lexicheck_core::vocab;
use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Set of valid citation keys, read-only for the run.
///
/// Always contains the [`vocab::UNKNOWN_SOURCE`] sentinel so rows whose
/// source is deliberately unresolved still pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSet {
    keys: HashSet<String>,
}

impl SourceSet {
    /// Load citation keys from a bibliography file
    pub fn from_file(path: &Path) -> Result<Self, TableError> {
        let origin = path.display().to_string();
        let file =
            std::fs::File::open(path).map_err(|e| TableError::Io(origin.clone(), e.to_string()))?;
        Self::from_reader(file, &origin)
    }

    /// Parse citation keys from any reader
    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self, TableError> {
        let mut keys = HashSet::new();
        keys.insert(vocab::UNKNOWN_SOURCE.to_string());

        for line in BufReader::new(reader).lines() {
            let line = line.map_err(|e| TableError::Io(origin.to_string(), e.to_string()))?;
            if let Some(key) = entry_key(&line) {
                keys.insert(key.to_string());
            }
        }

        Ok(Self { keys })
    }

    /// Whether a citation key resolves
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of keys, the sentinel included
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Extract the citation key from an entry head line, if it is one
fn entry_key(line: &str) -> Option<&str> {
    if !line.starts_with('@') {
        return None;
    }
    let (_, rest) = line.split_once('{')?;
    let key = rest.trim().trim_end_matches(',').trim();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCES_BIB: &str = "\
% comment line\n\
@book{smith-1990,\n\
  author = {Smith, A.},\n\
  year = {1990}\n\
}\n\
\n\
@article{ jones-2001 ,\n\
  title = {Pronouns}\n\
}\n\
@misc{doehler-2013\n";

    #[test]
    fn extracts_entry_keys() {
        let sources = SourceSet::from_reader(SOURCES_BIB.as_bytes(), "sources.bib").unwrap();
        assert!(sources.contains("smith-1990"));
        assert!(sources.contains("jones-2001"));
        assert!(sources.contains("doehler-2013"));
        assert!(!sources.contains("author = {Smith, A.}"));
    }

    #[test]
    fn unknown_sentinel_is_always_a_member() {
        let sources = SourceSet::from_reader("".as_bytes(), "sources.bib").unwrap();
        assert!(sources.contains("UNKNOWN"));
        assert_eq!(sources.len(), 1);
    }

    #[test]
    fn entry_key_handles_whitespace_and_commas() {
        assert_eq!(entry_key("@book{smith-1990,"), Some("smith-1990"));
        assert_eq!(entry_key("@book{ smith-1990 , "), Some("smith-1990"));
        assert_eq!(entry_key("@misc{key"), Some("key"));
        assert_eq!(entry_key("  @book{indented,"), None);
        assert_eq!(entry_key("@book"), None);
        assert_eq!(entry_key("plain text"), None);
    }
}
