//! Output formats of the generated dictionary source

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Target language of the generated source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rust module with a sorted static slice and a lookup function
    #[default]
    Rust,
    /// Go package with a nested map literal
    Go,
}

impl OutputFormat {
    /// Get the built-in template name for this format
    pub fn template_name(&self) -> &'static str {
        match self {
            OutputFormat::Rust => "dictionary.rs",
            OutputFormat::Go => "dictionary.go",
        }
    }

    /// Quote a string as a literal of the target language
    pub fn quote(&self, value: &str) -> String {
        match self {
            // Debug formatting escapes quotes, backslashes and control characters
            // while leaving printable non-ASCII characters intact.
            OutputFormat::Rust => format!("{:?}", value),
            OutputFormat::Go => go_quote(value),
        }
    }
}

fn go_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFFFF {
                    quoted.push_str(&format!("\\u{:04x}", code));
                } else {
                    quoted.push_str(&format!("\\U{:08x}", code));
                }
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rust" | "rs" => Ok(OutputFormat::Rust),
            "go" => Ok(OutputFormat::Go),
            _ => Err(format!(
                "Invalid format: '{}'. Valid formats are: rust, go",
                s
            )),
        }
    }
}
