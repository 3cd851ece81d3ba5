//! Language registry (etc/languages.tsv)
//!
//! One row per paradigm file: which on-disk file holds it, which language
//! it belongs to, and who coded it. The registry is the authority for
//! which data files may exist.

use crate::error::TableError;
use lexicheck_core::Analect;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

const REQUIRED_COLUMNS: [&str; 10] = [
    "ID",
    "LocalID",
    "Name",
    "Dialect",
    "Variant",
    "Filename",
    "Glottocode",
    "Analect",
    "Coder",
    "Comment",
];

/// One row of the language registry, fields as they appear in the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryEntry {
    pub id: String,
    pub local_id: String,
    pub name: String,
    pub dialect: String,
    pub variant: String,
    pub filename: String,
    pub glottocode: String,
    pub analect: String,
    pub coder: String,
    pub comment: String,
}

impl RegistryEntry {
    /// Slug identifying the paradigm: slugged name, then dialect, a `_b`
    /// marker for bound paradigms, then variant. Two rows reducing to the
    /// same slug describe the same paradigm twice.
    pub fn slug(&self) -> String {
        let mut label = slug(&self.name);
        if !self.dialect.is_empty() {
            label = format!("{}_{}", label, slug(&self.dialect));
        }
        if self.analect == Analect::Bound.as_str() {
            label = format!("{}_b", label);
        }
        if !self.variant.is_empty() {
            label = format!("{}_{}", label, slug(&self.variant));
        }
        label
    }
}

/// ASCII slug of a label: decomposed, diacritics and punctuation dropped,
/// lowercased
pub fn slug(text: &str) -> String {
    text.nfd()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// The language registry, rows in file order plus a filename index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageRegistry {
    path: String,
    entries: Vec<RegistryEntry>,
    by_filename: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Load the registry from a tab-delimited file
    pub fn from_file(path: &Path) -> Result<Self, TableError> {
        let origin = path.display().to_string();
        let file =
            std::fs::File::open(path).map_err(|e| TableError::Io(origin.clone(), e.to_string()))?;
        Self::from_reader(file, &origin)
    }

    /// Parse the registry from any reader; `origin` names the source in
    /// error messages and diagnostic locations
    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self, TableError> {
        let mut table = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(reader);

        let headers = table
            .headers()
            .map_err(|e| TableError::Parse(origin.to_string(), e.to_string()))?
            .clone();

        let mut columns = HashMap::new();
        for name in REQUIRED_COLUMNS {
            let index = headers.iter().position(|h| h == name).ok_or_else(|| {
                TableError::MissingColumn(origin.to_string(), name.to_string())
            })?;
            columns.insert(name, index);
        }

        let mut entries = Vec::new();
        let mut by_filename = HashMap::new();
        for record in table.records() {
            let record =
                record.map_err(|e| TableError::Parse(origin.to_string(), e.to_string()))?;
            let field = |name: &str| {
                record
                    .get(columns[name])
                    .unwrap_or_default()
                    .to_string()
            };

            let entry = RegistryEntry {
                id: field("ID"),
                local_id: field("LocalID"),
                name: field("Name"),
                dialect: field("Dialect"),
                variant: field("Variant"),
                filename: field("Filename"),
                glottocode: field("Glottocode"),
                analect: field("Analect"),
                coder: field("Coder"),
                comment: field("Comment"),
            };

            // first occurrence wins; duplicates surface via the slug check
            by_filename
                .entry(entry.filename.clone())
                .or_insert(entries.len());
            entries.push(entry);
        }

        Ok(Self {
            path: origin.to_string(),
            entries,
            by_filename,
        })
    }

    /// Path the registry was loaded from, for diagnostic locations
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Rows in file order
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Look up a registry row by its declared filename
    pub fn get(&self, filename: &str) -> Option<&RegistryEntry> {
        self.by_filename.get(filename).map(|&i| &self.entries[i])
    }

    /// Whether a data filename is registered
    pub fn contains(&self, filename: &str) -> bool {
        self.by_filename.contains_key(filename)
    }

    /// Declared filenames in file order
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.filename.as_str())
    }

    /// Largest numeric LocalID in the registry, for suggesting new rows
    pub fn max_local_id(&self) -> u32 {
        self.entries
            .iter()
            .filter_map(|e| e.local_id.parse().ok())
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
