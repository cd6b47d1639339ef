//! Dictionary generation use case
//!
//! Orchestrates the full workflow: expand inputs, merge dictionaries, render
//! the language template and write the generated source.

use crate::application::load::load_dictionaries;
use crate::domain::template::load_template;
use crate::domain::{LoadStats, PartOfSpeech};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, LanguageConfig, ProjectRepository};
use std::path::PathBuf;

/// Options for generation
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Languages to generate (empty = every language of the manifest)
    pub languages: Vec<String>,
}

/// Outcome of generating one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub language: String,
    pub output: PathBuf,
    pub files: usize,
    pub stats: LoadStats,
    /// Number of forms per part of speech, in key order
    pub categories: Vec<(PartOfSpeech, usize)>,
}

impl GenerationReport {
    pub fn total_forms(&self) -> usize {
        self.categories.iter().map(|(_, count)| count).sum()
    }
}

/// Service for generating dictionary sources
pub struct GenerateService {
    repository: FileSystemRepository,
}

impl GenerateService {
    /// Create new generate service
    pub fn new(repository: FileSystemRepository) -> Self {
        GenerateService { repository }
    }

    /// Generate the selected languages of the manifest
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The manifest is invalid
    /// - A selected language is not in the manifest
    /// - A source file cannot be read or holds a malformed line
    /// - The output cannot be written
    pub fn execute(&self, options: GenerateOptions) -> Result<Vec<GenerationReport>> {
        let manifest = self.repository.load_manifest()?;

        let selected: Vec<&LanguageConfig> = if options.languages.is_empty() {
            manifest.languages.iter().collect()
        } else {
            options
                .languages
                .iter()
                .map(|code| manifest.language(code))
                .collect::<Result<_>>()?
        };

        if selected.is_empty() {
            log::warn!("Manifest declares no languages; nothing to generate");
        }

        selected
            .into_iter()
            .map(|language| self.generate_language(language))
            .collect()
    }

    /// Generate a single language
    pub fn generate_language(&self, language: &LanguageConfig) -> Result<GenerationReport> {
        language.validate()?;
        log::info!("Generating dictionary for '{}'", language.code);

        let files = self.repository.expand_inputs(&language.inputs)?;
        let (dictionaries, stats) = load_dictionaries(&self.repository, &files)?;

        if dictionaries.is_empty() {
            log::warn!(
                "No entries with known tags for '{}'; generating an empty dictionary",
                language.code
            );
        }

        let template = load_template(
            self.repository.root(),
            language.template.as_deref(),
            language.format,
        )?;
        let source = template.render(&language.code, &dictionaries);

        self.repository.write_output(&language.output, &source)?;
        let output = self.repository.resolve(&language.output);
        log::info!("Wrote {}", output.display());

        Ok(GenerationReport {
            language: language.code.clone(),
            output,
            files: files.len(),
            stats,
            categories: dictionaries
                .iter()
                .map(|(pos, dict)| (pos, dict.len()))
                .collect(),
        })
    }
}
