//! lexicheck engine - Core validation logic
//!
//! This crate implements the checks themselves:
//! - Row checker (controlled vocabularies, NFC normalization, cross-references)
//! - File checker (suffix, registration, per-row findings)
//! - Registry checker (row rules, duplicate slugs, suggested additions)
//! - Corpus driver (directory scan, seen-count reconciliation, report assembly)

pub mod corpus;
pub mod file_check;
pub mod registry_check;
pub mod row_check;

pub use corpus::{check_corpus, data_filenames, ReferenceTables};
pub use file_check::{check_file, FileError};
pub use registry_check::{check_registry, suggest_unregistered, RegistrySuggestion};
pub use row_check::{check_row, DataRow};
