//! Configuration schema (lexicheck.toml)
//!
//! Defaults reproduce the fixed repository layout the dataset uses, so the
//! tool runs without a config file when invoked from the dataset root.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How registry coder names are policed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoderPolicy {
    /// The `?` placeholder is accepted as "coder not yet assigned";
    /// any other name must be in the known-coder list
    Lenient,

    /// Every row must name a known coder; `?` is rejected
    Strict,
}

impl Default for CoderPolicy {
    fn default() -> Self {
        Self::Lenient
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root of the per-family data file tree
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Tab-delimited concept table (columns `ID`, `English`)
    #[serde(default = "default_concepts")]
    pub concepts: PathBuf,

    /// Tab-delimited language registry
    #[serde(default = "default_languages")]
    pub languages: PathBuf,

    /// BibTeX bibliography
    #[serde(default = "default_sources")]
    pub sources: PathBuf,

    /// Extensions skipped during the corpus scan (scripts, archives)
    #[serde(default = "default_ignore_extensions")]
    pub ignore_extensions: Vec<String>,

    /// Names accepted in the registry `Coder` column
    #[serde(default = "default_coders")]
    pub coders: Vec<String>,

    /// Coder policing mode
    #[serde(default)]
    pub coder_policy: CoderPolicy,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("raw")
}

fn default_concepts() -> PathBuf {
    PathBuf::from("etc/concepts.tsv")
}

fn default_languages() -> PathBuf {
    PathBuf::from("etc/languages.tsv")
}

fn default_sources() -> PathBuf {
    PathBuf::from("raw/sources.bib")
}

fn default_ignore_extensions() -> Vec<String> {
    vec!["py".to_string(), "gz".to_string(), "zip".to_string()]
}

fn default_coders() -> Vec<String> {
    [
        "Amos Teo",
        "Charlotte van Tongeren",
        "James Bednall",
        "Keira Mullan",
        "Kyla Quinn",
        "Louise Baird",
        "Luis Miguel Berscia",
        "Marie-France Duhamel",
        "Matt Carroll",
        "Naomi Peck",
        "Nick Evans",
        "Oscar McLoughlin-Ning",
        "Owen Edwards",
        "Roberto Herrera",
        "Simon Greenhill",
        "Stef Spronck",
        "Susan Ford",
        "Thiago Chaçon",
        "Wolfgang Barth",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            concepts: default_concepts(),
            languages: default_languages(),
            sources: default_sources(),
            ignore_extensions: default_ignore_extensions(),
            coders: default_coders(),
            coder_policy: CoderPolicy::default(),
        }
    }
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml(&contents)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Check whether a path extension is on the ignore list
    pub fn is_ignored_extension(&self, extension: &str) -> bool {
        self.ignore_extensions.iter().any(|e| e == extension)
    }

    /// Check whether a coder name is acceptable under the active policy.
    ///
    /// Empty names are never acceptable; the caller reports those separately.
    pub fn is_known_coder(&self, name: &str) -> bool {
        if name == crate::vocab::UNASSIGNED_CODER {
            return self.coder_policy == CoderPolicy::Lenient;
        }
        self.coders.iter().any(|c| c == name)
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_dataset_layout() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("raw"));
        assert_eq!(config.concepts, PathBuf::from("etc/concepts.tsv"));
        assert_eq!(config.languages, PathBuf::from("etc/languages.tsv"));
        assert_eq!(config.sources, PathBuf::from("raw/sources.bib"));
        assert!(config.is_ignored_extension("py"));
        assert!(config.is_ignored_extension("gz"));
        assert!(!config.is_ignored_extension("csv"));
    }

    #[test]
    fn coder_policy_gates_the_placeholder() {
        let mut config = Config::default();
        assert!(config.is_known_coder("Simon Greenhill"));
        assert!(config.is_known_coder("?"));
        assert!(!config.is_known_coder("Nobody Inparticular"));

        config.coder_policy = CoderPolicy::Strict;
        assert!(config.is_known_coder("Simon Greenhill"));
        assert!(!config.is_known_coder("?"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = Config::from_toml("data_dir = \"data\"\ncoder_policy = \"strict\"").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.coder_policy, CoderPolicy::Strict);
        assert_eq!(config.concepts, PathBuf::from("etc/concepts.tsv"));
    }
}
