use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Source directory not specified in config")]
    MissingSourceDir,

    #[error("Source directory '{0}' does not exist")]
    SourceDirNotFound(PathBuf),

    #[error("chunk_size must be a positive integer, got {0}")]
    InvalidChunkSize(i64),

    #[error("Invalid {key} '{value}': {reason}")]
    UnsafeName {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}
