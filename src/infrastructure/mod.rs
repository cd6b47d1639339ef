//! Infrastructure layer - External I/O, manifest and logging

pub mod config;
pub mod logging;
pub mod repository;

pub use config::{LanguageConfig, Manifest, MANIFEST_FILE};
pub use logging::setup_logger;
pub use repository::{FileSystemRepository, ProjectRepository};
