//! lexicheck core
//!
//! Core domain model with stable, versioned types.
//! Never rename diagnostic codes - they are part of the public API.

pub mod config;
pub mod diagnostic;
pub mod report;
pub mod vocab;

pub use config::{CoderPolicy, Config, ConfigError};
pub use diagnostic::{Diagnostic, DiagnosticCode, Location, Severity};
pub use report::{FileReport, Report, ReportVersion};
pub use vocab::Analect;
