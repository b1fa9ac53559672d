mod error;
mod report;


pub use error::FileError;
pub use report::{BackupReport, FileOutcome, FileStatus};

use crate::archiver::{effective_name, ArchiveError, ChunkedArchiver};
use crate::config::BackupConfig;
use crate::filter::ExtensionFilter;
use crate::resolver::{self, ResolveError};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use walkdir::WalkDir;

/// One pass over the source tree.
///
/// Holds the per-run state: the date segment fixed at start and the archive
/// names already claimed, so two sources never write into the same units.
pub struct BackupRun<'a> {
    config: &'a BackupConfig,
    filter: ExtensionFilter,
    archiver: ChunkedArchiver,
    date_segment: Option<String>,
    /// (destination dir, effective name) -> first source that wrote units there
    claimed: HashMap<(PathBuf, String), PathBuf>,
}

impl<'a> BackupRun<'a> {
    /// `started` fixes both the date folder and the archive entry timestamps
    pub fn new(config: &'a BackupConfig, started: NaiveDateTime) -> Result<Self, ArchiveError> {
        let date_segment = config
            .use_date_folder
            .then(|| resolver::date_segment(started.date()));

        Ok(Self {
            config,
            filter: ExtensionFilter::new(config.allowed_extensions.iter().cloned()),
            archiver: ChunkedArchiver::new(config.chunk_size, started)?,
            date_segment,
            claimed: HashMap::new(),
        })
    }

    pub fn date_segment(&self) -> Option<&str> {
        self.date_segment.as_deref()
    }

    /// Walk the source tree and collect every file that passes the filter.
    ///
    /// Discovery finishes before anything is written, so archives landing
    /// under the source tree are never picked up by the same run.
    pub fn discover(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.config.source_dir)
            .min_depth(1)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    None
                }
            })
            .filter(|entry| !entry.file_type().is_dir() && entry.path().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.filter.matches(path))
            .collect()
    }

    /// Open `source` from disk and archive it
    pub fn process_file(&mut self, source: &Path) -> FileOutcome {
        self.process_with(source, |path| {
            File::open(path)
                .map(BufReader::new)
                .map_err(|e| FileError::Open {
                    path: path.to_path_buf(),
                    source: e,
                })
        })
    }

    /// Archive an already-open stream as if it were the contents of `source`
    pub fn process_stream<R: Read>(&mut self, source: &Path, reader: R) -> FileOutcome {
        self.process_with(source, |_| Ok(reader))
    }

    fn process_with<R, F>(&mut self, source: &Path, open: F) -> FileOutcome
    where
        R: Read,
        F: FnOnce(&Path) -> Result<R, FileError>,
    {
        info!(source = %source.display(), "Starting to process and compress");

        let mut destination = None;
        let status = match self.archive_one(source, open, &mut destination) {
            Ok(chunks) => {
                info!(source = %source.display(), chunks, "Finished file");
                FileStatus::Archived { chunks }
            }
            Err(e) => {
                error!(source = %source.display(), error = %e, "An error occurred while processing file");
                FileStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };

        FileOutcome {
            source: source.to_path_buf(),
            destination,
            status,
        }
    }

    fn archive_one<R, F>(
        &mut self,
        source: &Path,
        open: F,
        destination: &mut Option<PathBuf>,
    ) -> Result<usize, FileError>
    where
        R: Read,
        F: FnOnce(&Path) -> Result<R, FileError>,
    {
        let config = self.config;
        let base_name = resolver::file_stem(source)
            .ok_or_else(|| ResolveError::NoFileName(source.to_path_buf()))?;

        let dir = resolver::resolve_destination(
            &config.destination_dir,
            config.folder_name.as_deref(),
            self.date_segment.as_deref(),
            source,
        )?;
        *destination = Some(dir.clone());

        let prefix = config.filename_prefix.as_deref();
        let key = (dir.clone(), effective_name(&base_name, prefix).to_string());
        if let Some(first) = self.claimed.get(&key) {
            return Err(FileError::Collision {
                dir: key.0,
                name: key.1,
                first: first.clone(),
            });
        }

        let reader = open(source)?;
        let result = self.archiver.archive(reader, &dir, &base_name, prefix);

        // Only a source that left units on disk owns the name
        let units = match &result {
            Ok(chunks) => *chunks,
            Err(e) => e.units_on_disk(),
        };
        if units > 0 {
            self.claimed.insert(key, source.to_path_buf());
        }

        result.map_err(FileError::from)
    }

    /// Discover and process every matching file, one at a time
    pub fn run(mut self) -> BackupReport {
        let sources = self.discover();

        if sources.is_empty() {
            if self.filter.allows_all() {
                info!(source_dir = %self.config.source_dir.display(), "No files were found");
            } else {
                info!(
                    extensions = ?self.config.allowed_extensions,
                    "No files with the allowed extensions were found"
                );
            }
        }

        let files = sources
            .iter()
            .map(|source| self.process_file(source))
            .collect();

        let report = BackupReport {
            date_segment: self.date_segment,
            files,
        };

        info!(
            matched = report.matched(),
            succeeded = report.succeeded(),
            failed = report.failed(),
            chunks = report.total_chunks(),
            "Process completed"
        );

        report
    }
}

/// Run a complete backup for `config`, started at `started`
pub fn run_backup(
    config: &BackupConfig,
    started: NaiveDateTime,
) -> Result<BackupReport, ArchiveError> {
    Ok(BackupRun::new(config, started)?.run())
}
