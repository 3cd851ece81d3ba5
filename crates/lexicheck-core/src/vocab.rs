//! Sentinel values and controlled vocabulary shared by the dataset
//!
//! The raw data files use a handful of magic strings with fixed meaning.
//! They are collected here so no comparison in the engine hard-codes them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Placeholder in the `word` column meaning "no lexical form recorded
/// for this paradigm slot". Rows carrying it are exempt from glottocode
/// and source bookkeeping.
pub const NO_ENTRY: &str = "#";

/// Citation key accepted for rows whose source is deliberately unresolved.
pub const UNKNOWN_SOURCE: &str = "UNKNOWN";

/// Registry coder value meaning "coder not yet assigned".
pub const UNASSIGNED_CODER: &str = "?";

/// Glottolog language identifiers are exactly eight characters.
pub const GLOTTOCODE_LEN: usize = 8;

/// Required extension for data files and registry filenames.
pub const DATA_EXTENSION: &str = "csv";

/// Whether a paradigm records free-standing or bound pronoun forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Analect {
    Free,
    Bound,
}

impl Analect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Bound => "Bound",
        }
    }
}

impl FromStr for Analect {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Free" => Ok(Self::Free),
            "Bound" => Ok(Self::Bound),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Analect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analect_roundtrip() {
        assert_eq!("Free".parse::<Analect>(), Ok(Analect::Free));
        assert_eq!("Bound".parse::<Analect>(), Ok(Analect::Bound));
        assert_eq!(Analect::Bound.as_str(), "Bound");
    }

    #[test]
    fn analect_rejects_other_spellings() {
        assert!("free".parse::<Analect>().is_err());
        assert!("BOUND".parse::<Analect>().is_err());
        assert!("".parse::<Analect>().is_err());
    }
}
