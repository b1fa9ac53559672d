use crate::archiver::ArchiveError;
use crate::resolver::ResolveError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single source file could not be archived
#[derive(Error, Debug)]
pub enum FileError {
    #[error(transparent)]
    Destination(#[from] ResolveError),

    #[error("Failed to open source file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("{name}_part_*.zip in {dir} already written for {first} this run")]
    Collision {
        dir: PathBuf,
        name: String,
        first: PathBuf,
    },
}
