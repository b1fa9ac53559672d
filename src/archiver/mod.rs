mod error;
mod writer;


pub use error::ArchiveError;
pub use writer::UnitWriter;

use chrono::NaiveDateTime;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Name shared by every archive unit of one source file: the prefix when one
/// is configured, otherwise the source's base name.
pub fn effective_name<'a>(base_name: &'a str, prefix: Option<&'a str>) -> &'a str {
    match prefix {
        Some(prefix) if !prefix.is_empty() => prefix,
        _ => base_name,
    }
}

/// Entry name of archive unit `index` ("report_part_3"). The archive file is
/// the same name with ".zip" appended.
pub fn unit_name(effective_name: &str, index: usize) -> String {
    format!("{effective_name}_part_{index}")
}

/// Splits a byte stream into `chunk_size` pieces, one zip archive per piece
#[derive(Debug, Clone)]
pub struct ChunkedArchiver {
    chunk_size: usize,
    writer: UnitWriter,
}

impl ChunkedArchiver {
    /// `stamp` becomes the modification time of every archived entry
    pub fn new(chunk_size: usize, stamp: NaiveDateTime) -> Result<Self, ArchiveError> {
        if chunk_size == 0 {
            return Err(ArchiveError::ZeroChunkSize);
        }

        Ok(Self {
            chunk_size,
            writer: UnitWriter::new(stamp),
        })
    }

    /// Archive `reader` into `dest_dir` and return the number of units written.
    ///
    /// Each pass reads until `chunk_size` bytes are gathered or the stream
    /// ends; the first empty read stops the loop, so an empty stream writes
    /// nothing. Units are numbered from 1. On error, units already written
    /// stay on disk.
    pub fn archive<R: Read>(
        &self,
        mut reader: R,
        dest_dir: &Path,
        base_name: &str,
        prefix: Option<&str>,
    ) -> Result<usize, ArchiveError> {
        let name = effective_name(base_name, prefix);
        let limit = self.chunk_size as u64;
        let mut chunk = Vec::new();
        let mut index = 0;

        loop {
            chunk.clear();
            let read = reader
                .by_ref()
                .take(limit)
                .read_to_end(&mut chunk)
                .map_err(|e| ArchiveError::Read {
                    index: index + 1,
                    source: e,
                })?;

            if read == 0 {
                break;
            }

            index += 1;
            let path = self.writer.write_unit(dest_dir, name, index, &chunk)?;
            info!(chunk = index, bytes = read, archive = %path.display(), "Processed and compressed chunk");
        }

        Ok(index)
    }
}
