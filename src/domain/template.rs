//! Template system for generated dictionary sources

use crate::domain::{Dictionaries, OutputFormat};
use crate::error::{Result, VocabError};
use std::fs;
use std::path::Path;

/// Name written into the "Code generated by" header
pub const GENERATOR: &str = "vocabgen";

// Built-in template constants
const RUST_TEMPLATE: &str = r#"// Code generated by {GENERATOR}; DO NOT EDIT.

// Form to lemma dictionary for `{LANGUAGE}` ({ENTRY_COUNT} forms).

/// Map of part of speech to (form, lemma) pairs, both levels sorted by key.
pub static DICTIONARY: &[(&str, &[(&str, &str)])] = &[
{ENTRIES}];

/// Look up the lemma of `form` within the `pos` dictionary.
pub fn lemma(pos: &str, form: &str) -> Option<&'static str> {
    let (_, forms) = DICTIONARY.iter().find(|(p, _)| *p == pos)?;
    forms
        .binary_search_by_key(&form, |&(f, _)| f)
        .ok()
        .map(|idx| forms[idx].1)
}
"#;

const GO_TEMPLATE: &str = r#"// Code generated by {GENERATOR}; DO NOT EDIT.

package {LANGUAGE}

// map of PoS to (map of Form to Lemma)
var Dictionary = map[string]map[string]string{
{ENTRIES}}
"#;

/// Template for dictionary source generation
#[derive(Debug)]
pub struct Template {
    content: String,
    format: OutputFormat,
}

impl Template {
    /// Create template from the built-in one of a format
    pub fn from_builtin(format: OutputFormat) -> Self {
        let content = match format {
            OutputFormat::Rust => RUST_TEMPLATE,
            OutputFormat::Go => GO_TEMPLATE,
        };

        Template {
            content: content.to_string(),
            format,
        }
    }

    /// Create template from custom template file
    pub fn from_file(path: &Path, format: OutputFormat) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            VocabError::Template(format!(
                "Failed to read template file {}: {}",
                path.display(),
                e
            ))
        })?;

        if !content.contains("{ENTRIES}") {
            return Err(VocabError::Template(format!(
                "Template {} has no {{ENTRIES}} placeholder",
                path.display()
            )));
        }

        Ok(Template { content, format })
    }

    /// Render template with the dictionaries of a language
    pub fn render(&self, language: &str, dictionaries: &Dictionaries) -> String {
        let entries = match self.format {
            OutputFormat::Rust => self.rust_entries(dictionaries),
            OutputFormat::Go => self.go_entries(dictionaries),
        };

        self.content
            .replace("{GENERATOR}", GENERATOR)
            .replace("{LANGUAGE}", language)
            .replace("{ENTRY_COUNT}", &dictionaries.len().to_string())
            .replace("{ENTRIES}", &entries)
    }

    fn rust_entries(&self, dictionaries: &Dictionaries) -> String {
        let mut out = String::new();
        for (pos, dict) in dictionaries.iter() {
            out.push_str(&format!("    ({}, &[\n", self.format.quote(pos.as_str())));
            for (form, lemma) in dict.iter() {
                out.push_str(&format!(
                    "        ({}, {}),\n",
                    self.format.quote(form),
                    self.format.quote(lemma)
                ));
            }
            out.push_str("    ]),\n");
        }
        out
    }

    fn go_entries(&self, dictionaries: &Dictionaries) -> String {
        let mut out = String::new();
        for (pos, dict) in dictionaries.iter() {
            out.push_str(&format!("\t{}: {{\n", self.format.quote(pos.as_str())));
            for (form, lemma) in dict.iter() {
                out.push_str(&format!(
                    "\t\t{}: {},\n",
                    self.format.quote(form),
                    self.format.quote(lemma)
                ));
            }
            out.push_str("\t},\n");
        }
        out
    }
}

/// Load the template of a language.
///
/// An explicitly configured template must exist. Otherwise
/// `<root>/templates/<format template name>` is used when present, falling
/// back to the built-in template.
pub fn load_template(root: &Path, custom: Option<&Path>, format: OutputFormat) -> Result<Template> {
    if let Some(custom) = custom {
        return Template::from_file(&root.join(custom), format);
    }

    let conventional = root.join("templates").join(format.template_name());
    if conventional.exists() {
        Template::from_file(&conventional, format)
    } else {
        Ok(Template::from_builtin(format))
    }
}
