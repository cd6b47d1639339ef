//! Validate dictionary sources without generating anything

use crate::application::load::load_dictionaries;
use crate::domain::{Dictionaries, LoadStats};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use std::path::PathBuf;

/// Result of a check run
#[derive(Debug)]
pub struct CheckReport {
    pub files: Vec<PathBuf>,
    pub stats: LoadStats,
    pub dictionaries: Dictionaries,
}

pub struct CheckService {
    repository: FileSystemRepository,
}

impl CheckService {
    pub fn new(repository: FileSystemRepository) -> Self {
        CheckService { repository }
    }

    /// Parse and merge `inputs` exactly as generation would
    pub fn execute(&self, inputs: &[PathBuf]) -> Result<CheckReport> {
        let files = self.repository.expand_inputs(inputs)?;
        let (dictionaries, stats) = load_dictionaries(&self.repository, &files)?;

        Ok(CheckReport {
            files,
            stats,
            dictionaries,
        })
    }
}
