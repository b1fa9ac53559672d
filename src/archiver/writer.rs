use super::{unit_name, ArchiveError};
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::result::ZipResult;
use zip::{CompressionMethod, ZipWriter};

/// Writes single-entry zip files with a fixed set of entry options
#[derive(Debug, Clone)]
pub struct UnitWriter {
    options: FileOptions<'static, ()>,
}

impl UnitWriter {
    /// Every entry written by this writer carries `stamp` as its modification time
    pub fn new(stamp: NaiveDateTime) -> Self {
        let options: FileOptions<'static, ()> = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644)
            .last_modified_time(entry_timestamp(stamp));

        Self { options }
    }

    /// Write unit `index` of `name`: `{dir}/{name}_part_{index}.zip` holding
    /// one entry `{name}_part_{index}` with `data`.
    ///
    /// An existing file at that path is replaced.
    pub fn write_unit(
        &self,
        dir: &Path,
        name: &str,
        index: usize,
        data: &[u8],
    ) -> Result<PathBuf, ArchiveError> {
        let entry_name = unit_name(name, index);
        let path = dir.join(format!("{entry_name}.zip"));

        let file = File::create(&path).map_err(|e| ArchiveError::Create {
            index,
            path: path.clone(),
            source: e,
        })?;

        write_single_entry(file, &entry_name, self.options, data).map_err(|e| {
            ArchiveError::Write {
                index,
                path: path.clone(),
                source: e,
            }
        })?;

        Ok(path)
    }
}

/// Zip timestamp for `stamp`, or the zip epoch (1980-01-01) when the date
/// does not fit the DOS format.
pub(crate) fn entry_timestamp(stamp: NaiveDateTime) -> zip::DateTime {
    u16::try_from(stamp.year())
        .ok()
        .and_then(|year| {
            zip::DateTime::from_date_and_time(
                year,
                stamp.month() as u8,
                stamp.day() as u8,
                stamp.hour() as u8,
                stamp.minute() as u8,
                stamp.second() as u8,
            )
            .ok()
        })
        .unwrap_or_default()
}

fn write_single_entry(
    file: File,
    entry_name: &str,
    options: FileOptions<'static, ()>,
    data: &[u8],
) -> ZipResult<()> {
    let mut zip = ZipWriter::new(file);
    zip.start_file(entry_name, options)?;
    zip.write_all(data)?;
    zip.finish()?;
    Ok(())
}
