mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use crate::security::PathSanitizer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Default maximum bytes per chunk (10 MiB)
pub const DEFAULT_CHUNK_SIZE: usize = 10 * 1024 * 1024;

/// Configuration document exactly as it appears on disk.
///
/// Every key is optional at this stage; [`BackupConfig::from_raw`] applies the
/// required-key and range checks.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RawConfig {
    pub source_dir_backup: Option<String>,
    pub allowed_extensions: Vec<String>,
    pub chunk_size: i64,
    pub filename_prefix: String,
    pub folder_name: String,
    pub use_current_date_as_folder: bool,
    pub destination_dir_backup: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            source_dir_backup: None,
            allowed_extensions: Vec::new(),
            chunk_size: DEFAULT_CHUNK_SIZE as i64,
            filename_prefix: String::new(),
            folder_name: String::new(),
            use_current_date_as_folder: false,
            destination_dir_backup: ".".to_string(),
        }
    }
}

/// Validated, immutable configuration for one backup run
#[derive(Debug, Clone, Serialize)]
pub struct BackupConfig {
    /// Root directory to scan
    pub source_dir: PathBuf,
    /// Extensions (with leading dot) to include; empty means all files
    pub allowed_extensions: Vec<String>,
    /// Maximum bytes per chunk, always > 0
    pub chunk_size: usize,
    /// Replaces the per-file base name in archive names when set
    pub filename_prefix: Option<String>,
    /// Replaces the per-file destination folder when set
    pub folder_name: Option<PathBuf>,
    /// Append a YYYY-MM-DD segment to every destination
    pub use_date_folder: bool,
    /// Root for all output
    pub destination_dir: PathBuf,
}

impl BackupConfig {
    /// Validate a raw document. Empty strings count as "not configured".
    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let source_dir = match raw.source_dir_backup.as_deref() {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => return Err(ConfigError::MissingSourceDir),
        };

        if !source_dir.exists() {
            return Err(ConfigError::SourceDirNotFound(source_dir));
        }

        if raw.chunk_size <= 0 {
            return Err(ConfigError::InvalidChunkSize(raw.chunk_size));
        }
        let chunk_size = usize::try_from(raw.chunk_size)
            .map_err(|_| ConfigError::InvalidChunkSize(raw.chunk_size))?;

        let filename_prefix = if raw.filename_prefix.is_empty() {
            None
        } else {
            Some(PathSanitizer::sanitize_prefix(&raw.filename_prefix)?)
        };

        let folder_name = if raw.folder_name.is_empty() {
            None
        } else {
            Some(PathSanitizer::sanitize_folder(&raw.folder_name)?)
        };

        let destination_dir = if raw.destination_dir_backup.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(raw.destination_dir_backup)
        };

        Ok(Self {
            source_dir,
            allowed_extensions: raw.allowed_extensions,
            chunk_size,
            filename_prefix,
            folder_name,
            use_date_folder: raw.use_current_date_as_folder,
            destination_dir,
        })
    }

    pub fn trace_loaded(&self) {
        info!(
            source_dir = %self.source_dir.display(),
            destination_dir = %self.destination_dir.display(),
            chunk_size = self.chunk_size,
            extensions = self.allowed_extensions.len(),
            "Loaded backup config"
        );
        debug!(?self, "Backup config (full debug)");
    }
}

/// Read, parse and validate a JSON configuration document.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BackupConfig, ConfigError> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let contents = fs::read_to_string(path_ref).map_err(|e| {
        error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
        ConfigError::Read {
            path: path_ref.to_path_buf(),
            source: e,
        }
    })?;

    let raw: RawConfig = serde_json::from_str(&contents).map_err(|e| {
        error!(error = %e, config_path = ?path_ref, "Failed to parse config JSON");
        ConfigError::Parse {
            path: path_ref.to_path_buf(),
            source: e,
        }
    })?;

    let config = BackupConfig::from_raw(raw)?;
    config.trace_loaded();
    Ok(config)
}
