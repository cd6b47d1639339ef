//! Initialize project use case

use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, Manifest, ProjectRepository, MANIFEST_FILE};
use std::fs;
use std::path::{Path, PathBuf};

pub struct InitService;

impl InitService {
    /// Write the built-in manifest to `<path>/vocabgen.toml`.
    /// Returns the path of the new manifest.
    pub fn execute(path: &Path) -> Result<PathBuf> {
        // Create the directory if it doesn't exist
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize(&Manifest::builtin())?;

        Ok(path.join(MANIFEST_FILE))
    }
}
