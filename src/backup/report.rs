use serde::Serialize;
use std::path::PathBuf;

/// Result of processing one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Archived { chunks: usize },
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub source: PathBuf,
    /// Destination directory, when resolution got that far
    pub destination: Option<PathBuf>,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Archived { .. })
    }

    pub fn chunks(&self) -> usize {
        match self.status {
            FileStatus::Archived { chunks } => chunks,
            FileStatus::Failed { .. } => 0,
        }
    }
}

/// Everything one run did, in processing order
#[derive(Debug, Clone, Default, Serialize)]
pub struct BackupReport {
    /// Date folder used for this run, if date segmentation was on
    pub date_segment: Option<String>,
    pub files: Vec<FileOutcome>,
}

impl BackupReport {
    /// Files that passed the extension filter
    pub fn matched(&self) -> usize {
        self.files.len()
    }

    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.matched() - self.succeeded()
    }

    pub fn total_chunks(&self) -> usize {
        self.files.iter().map(FileOutcome::chunks).sum()
    }

    pub fn outcome_for(&self, source: &std::path::Path) -> Option<&FileOutcome> {
        self.files.iter().find(|f| f.source == source)
    }
}
