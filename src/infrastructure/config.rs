//! Project manifest (vocabgen.toml)

use crate::domain::OutputFormat;
use crate::error::{Result, VocabError};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// File name of the project manifest
pub const MANIFEST_FILE: &str = "vocabgen.toml";

/// Language codes double as Go package names
fn language_code_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap())
}

/// Generation settings of one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub code: String,
    /// Dictionary files or directories, merged in order
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl LanguageConfig {
    pub fn validate(&self) -> Result<()> {
        if !language_code_regex().is_match(&self.code) {
            return Err(VocabError::Config(format!(
                "Invalid language code: '{}'",
                self.code
            )));
        }
        if self.inputs.is_empty() {
            return Err(VocabError::Config(format!(
                "Language '{}' has no inputs",
                self.code
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(rename = "language", default)]
    pub languages: Vec<LanguageConfig>,
}

impl Manifest {
    /// Manifest used when no vocabgen.toml exists: the Spanish dictionaries
    /// under data/es rendered to es/dictionary.rs
    pub fn builtin() -> Self {
        let inputs = ["adj", "adv", "int", "nom", "tanc", "vaux", "verb"]
            .iter()
            .map(|ext| PathBuf::from(format!("data/es/MM.{}", ext)))
            .collect();

        Manifest {
            created: Utc::now(),
            languages: vec![LanguageConfig {
                code: "es".to_string(),
                inputs,
                output: PathBuf::from("es/dictionary.rs"),
                format: OutputFormat::Rust,
                template: None,
            }],
        }
    }

    /// Load and validate a manifest file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VocabError::ManifestNotFound(path.to_path_buf())
            } else {
                VocabError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let manifest: Manifest = toml::from_str(&contents).map_err(|e| {
            VocabError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        manifest.validate()?;

        Ok(manifest)
    }

    /// Load vocabgen.toml from the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        Self::load_from_file(&path.join(MANIFEST_FILE))
    }

    /// Save manifest to vocabgen.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        let manifest_path = path.join(MANIFEST_FILE);

        fs::write(&manifest_path, contents).map_err(|e| VocabError::Write {
            path: manifest_path,
            source: e,
        })
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for language in &self.languages {
            language.validate()?;
            if !seen.insert(language.code.as_str()) {
                return Err(VocabError::Config(format!(
                    "Duplicate language code: '{}'",
                    language.code
                )));
            }
        }
        Ok(())
    }

    /// Get the settings of a language by code
    pub fn language(&self, code: &str) -> Result<&LanguageConfig> {
        self.languages
            .iter()
            .find(|l| l.code == code)
            .ok_or_else(|| VocabError::UnknownLanguage(code.to_string()))
    }
}
