//! vocabgen - Morphological dictionary code generator
//!
//! Reads `form lemma tag` dictionary files, merges them into per-part-of-speech
//! form to lemma tables (first occurrence wins, accent-stripped spellings added
//! as fallbacks) and renders the result as generated Rust or Go source.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::VocabError;
