//! Error types for vocabgen

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vocabgen
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid entry at {path}:{line}: '{entry}' (expected 3 fields, found {fields})")]
    MalformedEntry {
        path: PathBuf,
        line: usize,
        entry: String,
        fields: usize,
    },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl VocabError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            VocabError::Read { .. } | VocabError::ManifestNotFound(_) => 2,
            VocabError::MalformedEntry { .. } => 3,
            VocabError::UnknownLanguage(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            VocabError::MalformedEntry {
                path, line, entry, ..
            } => {
                format!(
                    "Invalid entry at {}:{}: '{}'\n\n\
                    Each line must hold exactly three whitespace-separated fields:\n\
                    • <form> <lemma> <tag>\n\
                    • Example: canciones canción NCFP000",
                    path.display(),
                    line,
                    entry
                )
            }
            VocabError::ManifestNotFound(path) => {
                format!(
                    "Manifest not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'vocabgen init' to create a vocabgen.toml\n\
                    • Pass an existing manifest with --config <path>\n\
                    • Unset VOCABGEN_CONFIG if it points to a stale file",
                    path.display()
                )
            }
            VocabError::UnknownLanguage(code) => {
                format!(
                    "Unknown language: '{}'\n\n\
                    Suggestions:\n\
                    • Check the [[language]] entries in vocabgen.toml\n\
                    • Language codes are lowercase (e.g., es)",
                    code
                )
            }
            VocabError::Config(msg) => {
                if msg.contains("Invalid format") {
                    format!(
                        "{}\n\n\
                        Valid formats: rust, go\n\
                        Example: vocabgen build --format go --language es --output es/dictionary.go data/es",
                        msg
                    )
                } else if msg.contains("language code") {
                    format!(
                        "{}\n\n\
                        Language codes start with a lowercase letter followed by lowercase letters, digits or '_'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using VocabError
pub type Result<T> = std::result::Result<T, VocabError>;
