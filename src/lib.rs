// Public API exports
pub mod archiver;
pub mod backup;
pub mod cli;
pub mod config;
pub mod filter;
pub mod resolver;
pub mod security;

// Re-export main types for convenience
pub use archiver::{ArchiveError, ChunkedArchiver, UnitWriter, effective_name, unit_name};
pub use backup::{BackupReport, BackupRun, FileError, FileOutcome, FileStatus, run_backup};
pub use config::{BackupConfig, ConfigError, DEFAULT_CHUNK_SIZE, RawConfig, load_config};
pub use filter::ExtensionFilter;
pub use resolver::{ResolveError, date_segment, resolve_destination};
pub use security::PathSanitizer;
