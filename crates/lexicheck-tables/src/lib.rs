//! lexicheck reference tables
//!
//! Loaders for the three controlled vocabularies every check depends on:
//! the concept table, the bibliography, and the language registry.
//! A load failure here is fatal for the whole run - nothing downstream is
//! checkable without these tables.

pub mod concepts;
pub mod error;
pub mod registry;
pub mod sources;

pub use concepts::ConceptTable;
pub use error::TableError;
pub use registry::{slug, LanguageRegistry, RegistryEntry};
pub use sources::SourceSet;
