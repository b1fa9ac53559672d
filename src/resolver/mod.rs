
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Format of the optional date folder segment
pub const DATE_SEGMENT_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Source path has no file name: {0}")]
    NoFileName(PathBuf),

    #[error("Failed to create destination directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render the run date as a folder name ("2024-03-05")
pub fn date_segment(date: NaiveDate) -> String {
    date.format(DATE_SEGMENT_FORMAT).to_string()
}

/// File name of `path` without its final extension
pub fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}

/// Compute the destination directory for one source file without touching
/// the filesystem.
///
/// `root / (folder_override | stem of source) [/ date_segment]`
pub fn destination_for(
    root: &Path,
    folder_override: Option<&Path>,
    date_segment: Option<&str>,
    source: &Path,
) -> Result<PathBuf, ResolveError> {
    let mut dir = match folder_override {
        Some(folder) if !folder.as_os_str().is_empty() => root.join(folder),
        _ => {
            let stem =
                file_stem(source).ok_or_else(|| ResolveError::NoFileName(source.to_path_buf()))?;
            root.join(stem)
        }
    };

    if let Some(date) = date_segment.filter(|d| !d.is_empty()) {
        dir.push(date);
    }

    Ok(dir)
}

/// Compute the destination directory for `source` and make sure it exists.
///
/// Existing directories are fine; any other creation failure is returned so
/// the caller can skip this one file.
pub fn resolve_destination(
    root: &Path,
    folder_override: Option<&Path>,
    date_segment: Option<&str>,
    source: &Path,
) -> Result<PathBuf, ResolveError> {
    let dir = destination_for(root, folder_override, date_segment, source)?;

    fs::create_dir_all(&dir).map_err(|e| ResolveError::CreateDir {
        path: dir.clone(),
        source: e,
    })?;

    debug!(destination = %dir.display(), source = %source.display(), "Destination ready");
    Ok(dir)
}
