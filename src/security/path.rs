use crate::config::ConfigError;
use std::path::{Component, Path, PathBuf};

pub struct PathSanitizer;

impl PathSanitizer {
    /// Validate a configured folder override so the output stays under the
    /// destination root:
    /// - No absolute paths (/var/backups)
    /// - No parent directory traversal (../elsewhere)
    ///
    /// Nested relative folders ("nightly/db") are allowed.
    /// Returns the normalized relative path or an error.
    pub fn sanitize_folder(raw: &str) -> Result<PathBuf, ConfigError> {
        let path = Path::new(raw);
        let mut normalized = PathBuf::new();

        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    return Err(ConfigError::UnsafeName {
                        key: "folder_name",
                        value: raw.to_string(),
                        reason: "absolute paths are not allowed",
                    });
                }
                Component::ParentDir => {
                    return Err(ConfigError::UnsafeName {
                        key: "folder_name",
                        value: raw.to_string(),
                        reason: "parent directory traversal is not allowed",
                    });
                }
                Component::CurDir => continue,
                Component::Normal(part) => normalized.push(part),
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(ConfigError::UnsafeName {
                key: "folder_name",
                value: raw.to_string(),
                reason: "no usable path components",
            });
        }

        Ok(normalized)
    }

    /// Validate a configured filename prefix. It becomes part of every archive
    /// file name, so it has to be exactly one normal path component.
    pub fn sanitize_prefix(raw: &str) -> Result<String, ConfigError> {
        let mut components = Path::new(raw).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) if part == raw => Ok(raw.to_string()),
            _ => Err(ConfigError::UnsafeName {
                key: "filename_prefix",
                value: raw.to_string(),
                reason: "must be a single file name without separators",
            }),
        }
    }
}
