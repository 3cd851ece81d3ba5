//! Reference-table load errors

/// Errors raised while loading a reference table.
///
/// All variants are fatal at load time: the checker cannot run without its
/// reference tables, so these are never folded into a report.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("unable to read '{0}': {1}")]
    Io(String, String),

    #[error("malformed table '{0}': {1}")]
    Parse(String, String),

    #[error("malformed table '{0}': missing required column '{1}'")]
    MissingColumn(String, String),
}
