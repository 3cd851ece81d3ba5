//! Concept table (etc/concepts.tsv)
//!
//! Maps parameter codes used in the data files to their English glosses.

use crate::error::TableError;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Parameter code -> English gloss, loaded once and read-only for the run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConceptTable {
    glosses: HashMap<String, String>,
}

impl ConceptTable {
    /// Load the concept table from a tab-delimited file
    pub fn from_file(path: &Path) -> Result<Self, TableError> {
        let origin = path.display().to_string();
        let file =
            std::fs::File::open(path).map_err(|e| TableError::Io(origin.clone(), e.to_string()))?;
        Self::from_reader(file, &origin)
    }

    /// Parse the concept table from any reader; `origin` names the source
    /// in error messages
    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self, TableError> {
        let mut table = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(reader);

        let headers = table
            .headers()
            .map_err(|e| TableError::Parse(origin.to_string(), e.to_string()))?;
        let id_col = column_index(headers, "ID")
            .ok_or_else(|| TableError::MissingColumn(origin.to_string(), "ID".to_string()))?;
        let gloss_col = column_index(headers, "English")
            .ok_or_else(|| TableError::MissingColumn(origin.to_string(), "English".to_string()))?;

        let mut glosses = HashMap::new();
        for record in table.records() {
            let record =
                record.map_err(|e| TableError::Parse(origin.to_string(), e.to_string()))?;
            let id = record.get(id_col).unwrap_or_default();
            let gloss = record.get(gloss_col).unwrap_or_default();
            glosses.insert(id.to_string(), gloss.to_string());
        }

        Ok(Self { glosses })
    }

    /// Whether a parameter code is valid
    pub fn contains(&self, parameter: &str) -> bool {
        self.glosses.contains_key(parameter)
    }

    /// English gloss for a parameter code
    pub fn gloss(&self, parameter: &str) -> Option<&str> {
        self.glosses.get(parameter).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.glosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glosses.is_empty()
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONCEPTS_TSV: &str = "ID\tEnglish\tNotes\n\
        1sg\tfirst person singular\t\n\
        2sg\tsecond person singular\t\n\
        12pl\tfirst person inclusive plural\tinclusive\n";

    #[test]
    fn loads_codes_and_glosses() {
        let table = ConceptTable::from_reader(CONCEPTS_TSV.as_bytes(), "concepts.tsv").unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.contains("1sg"));
        assert_eq!(table.gloss("12pl"), Some("first person inclusive plural"));
        assert!(!table.contains("99du"));
    }

    #[test]
    fn missing_id_column_is_fatal() {
        let err = ConceptTable::from_reader("Code\tEnglish\n1sg\tx\n".as_bytes(), "concepts.tsv")
            .unwrap_err();
        assert!(matches!(err, TableError::MissingColumn(_, col) if col == "ID"));
    }

    #[test]
    fn missing_gloss_column_is_fatal() {
        let err = ConceptTable::from_reader("ID\tGloss\n1sg\tx\n".as_bytes(), "concepts.tsv")
            .unwrap_err();
        assert!(matches!(err, TableError::MissingColumn(_, col) if col == "English"));
    }

    #[test]
    fn unreadable_file_is_io_error() {
        let err = ConceptTable::from_file(Path::new("does/not/exist.tsv")).unwrap_err();
        assert!(matches!(err, TableError::Io(_, _)));
    }
}
