//! Domain layer - Dictionary model, merge rules and code rendering

pub mod accents;
pub mod dictionary;
pub mod entry;
pub mod format;
pub mod pos;
pub mod template;

pub use dictionary::{Dictionaries, Dictionary, Insertion, LoadStats};
pub use entry::Entry;
pub use format::OutputFormat;
pub use pos::PartOfSpeech;
pub use template::Template;
