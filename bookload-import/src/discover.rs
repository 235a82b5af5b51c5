//! Resolve the list of CSV sources for a run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ImportError;

/// File extension (compared case-insensitively) picked up from folders.
pub const SOURCE_EXTENSION: &str = "csv";

/// Explicit files first, as given, followed by the CSV files in `folder`.
///
/// Explicit files are not checked here; a missing one fails on its own when
/// imported. A missing folder aborts the whole run.
pub fn collect_sources(
    files: &[PathBuf],
    folder: Option<&Path>,
) -> Result<Vec<PathBuf>, ImportError> {
    let mut sources = files.to_vec();

    if let Some(folder) = folder {
        sources.extend(scan_folder(folder)?);
    }

    if sources.is_empty() {
        return Err(ImportError::NoSources);
    }
    Ok(sources)
}

/// List the CSV files directly inside `folder`, sorted by file name.
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>, ImportError> {
    if !folder.is_dir() {
        return Err(ImportError::FolderNotFound(folder.to_path_buf()));
    }

    let mut found = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && has_source_extension(&path) {
            found.push(path);
        }
    }
    found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    log::debug!("Found {} CSV file(s) in {}", found.len(), folder.display());
    Ok(found)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(SOURCE_EXTENSION))
        .unwrap_or(false)
}
