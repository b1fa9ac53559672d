use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("chunk_size must be greater than zero")]
    ZeroChunkSize,

    #[error("Failed to read chunk {index} from source: {source}")]
    Read {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create archive {path}: {source}")]
    Create {
        index: usize,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write archive {path}: {source}")]
    Write {
        index: usize,
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl ArchiveError {
    /// How many archive files of this source exist on disk after the error.
    ///
    /// A failed write leaves its own (incomplete) file behind; a failed read
    /// or create does not.
    pub fn units_on_disk(&self) -> usize {
        match self {
            ArchiveError::ZeroChunkSize => 0,
            ArchiveError::Read { index, .. } | ArchiveError::Create { index, .. } => index.saturating_sub(1),
            ArchiveError::Write { index, .. } => *index,
        }
    }
}
