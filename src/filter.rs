use std::path::Path;

/// Selects source files by extension.
///
/// Extensions are compared verbatim, leading dot included (".log"), and the
/// comparison is case-sensitive. An empty allow-list selects every file.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    allowed: Vec<String>,
}

impl ExtensionFilter {
    pub fn new(allowed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `path` passes the filter
    pub fn matches(&self, path: &Path) -> bool {
        if self.allowed.is_empty() {
            return true;
        }

        let ext = dotted_extension(path);
        self.allowed.iter().any(|allowed| *allowed == ext)
    }

    /// True when no filtering is applied
    pub fn allows_all(&self) -> bool {
        self.allowed.is_empty()
    }
}

/// Extension including its leading dot, or "" when the file has none.
///
/// "archive.tar.gz" -> ".gz", "notes" -> "", ".bashrc" -> "", "draft." -> "."
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
