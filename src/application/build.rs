//! Ad-hoc generation without a manifest

use crate::application::generate::{GenerateService, GenerationReport};
use crate::domain::OutputFormat;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, LanguageConfig};
use std::path::PathBuf;

/// Options for a one-off build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub language: String,
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub template: Option<PathBuf>,
}

pub struct BuildService {
    generator: GenerateService,
}

impl BuildService {
    /// Paths in the options resolve against `root`
    pub fn new(root: PathBuf) -> Self {
        BuildService {
            generator: GenerateService::new(FileSystemRepository::new(root)),
        }
    }

    pub fn execute(&self, options: BuildOptions) -> Result<GenerationReport> {
        let language = LanguageConfig {
            code: options.language,
            inputs: options.inputs,
            output: options.output,
            format: options.format,
            template: options.template,
        };

        self.generator.generate_language(&language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_with_custom_template() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("words.txt"), "él él PP3MS000\n").unwrap();
        fs::write(
            temp.path().join("lemmas.tpl"),
            "// {LANGUAGE}: {ENTRY_COUNT}\n{ENTRIES}",
        )
        .unwrap();

        let service = BuildService::new(temp.path().to_path_buf());
        let report = service
            .execute(BuildOptions {
                language: "es".to_string(),
                inputs: vec![PathBuf::from("words.txt")],
                output: PathBuf::from("out/lemmas.go"),
                format: OutputFormat::Go,
                template: Some(PathBuf::from("lemmas.tpl")),
            })
            .unwrap();

        assert_eq!(report.total_forms(), 2);
        let content = fs::read_to_string(temp.path().join("out/lemmas.go")).unwrap();
        assert_eq!(
            content,
            "// es: 2\n\t\"PRON\": {\n\t\t\"el\": \"él\",\n\t\t\"él\": \"él\",\n\t},\n"
        );
    }

    #[test]
    fn test_build_rejects_invalid_language_code() {
        let temp = TempDir::new().unwrap();
        let service = BuildService::new(temp.path().to_path_buf());

        let err = service
            .execute(BuildOptions {
                language: "Spanish".to_string(),
                inputs: vec![PathBuf::from("words.txt")],
                output: PathBuf::from("out.rs"),
                format: OutputFormat::Rust,
                template: None,
            })
            .unwrap_err();
        assert!(err.to_string().contains("Invalid language code"));
    }
}
