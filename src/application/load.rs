//! Loading dictionary sources into merged dictionaries

use crate::domain::{Dictionaries, LoadStats};
use crate::error::Result;
use crate::infrastructure::ProjectRepository;
use std::path::PathBuf;

/// Read and merge `files` in order. Earlier files win on duplicate forms.
pub fn load_dictionaries<R: ProjectRepository>(
    repository: &R,
    files: &[PathBuf],
) -> Result<(Dictionaries, LoadStats)> {
    let mut dictionaries = Dictionaries::new();
    let mut total = LoadStats::default();

    for file in files {
        let content = repository.read_source(file)?;
        let stats = dictionaries.load_str(&content, file)?;
        log::info!(
            "Loaded {}: {} entries, {} new forms, {} accent variants",
            file.display(),
            stats.lines,
            stats.inserted,
            stats.accent_variants
        );
        log::debug!(
            "{}: {} duplicates ignored, {} entries with unknown tags skipped",
            file.display(),
            stats.duplicates,
            stats.skipped
        );
        total += stats;
    }

    Ok((dictionaries, total))
}
