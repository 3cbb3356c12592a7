//! CSV table writer

use crate::error::{Error, Result};
use crate::types::{JsonValue, Row};
use csv::Writer;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Streams rows into a CSV file with a fixed column header.
///
/// The header row is written on creation. Fields are quoted only when they
/// contain a delimiter, quote, or line break. Call [`CsvTableWriter::close`]
/// to flush and sync; a writer dropped without closing may lose buffered
/// rows.
pub struct CsvTableWriter {
    writer: Writer<BufWriter<File>>,
    path: PathBuf,
    columns: Vec<String>,
    rows_written: u64,
}

impl CsvTableWriter {
    /// Create the file (truncating any previous one), create missing parent
    /// directories, and write the header row.
    pub fn create<I, S>(path: impl Into<PathBuf>, columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path = path.into();
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::output(parent, format!("failed to create directory: {e}")))?;
        }

        let file = File::create(&path)
            .map_err(|e| Error::output(&path, format!("failed to create file: {e}")))?;
        let mut writer = Writer::from_writer(BufWriter::new(file));

        writer
            .write_record(&columns)
            .map_err(|e| Error::output(&path, format!("failed to write header: {e}")))?;

        debug!(path = %path.display(), columns = columns.len(), "opened output table");
        Ok(Self {
            writer,
            path,
            columns,
            rows_written: 0,
        })
    }

    /// Write one row, projecting it onto the header columns in order.
    ///
    /// Fields absent from the row are written as empty strings; fields not in
    /// the header are ignored.
    pub fn write_row(&mut self, row: &Row) -> Result<()> {
        let record = self
            .columns
            .iter()
            .map(|column| row.get(column).map(scalar_to_string).unwrap_or_default());
        self.writer
            .write_record(record)
            .map_err(|e| Error::output(&self.path, format!("failed to write row: {e}")))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of data rows written so far (the header is not counted)
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// The file being written
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered rows and sync the file to disk
    pub fn close(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::output(&self.path, format!("failed to flush: {e}")))?;
        let buf = self
            .writer
            .into_inner()
            .map_err(|e| Error::output(&self.path, format!("failed to finish writer: {e}")))?;
        let file = buf
            .into_inner()
            .map_err(|e| Error::output(&self.path, format!("failed to flush buffer: {e}")))?;
        file.sync_all()
            .map_err(|e| Error::output(&self.path, format!("failed to sync: {e}")))?;

        debug!(path = %self.path.display(), rows = self.rows_written, "closed output table");
        Ok(())
    }
}

impl std::fmt::Debug for CsvTableWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvTableWriter")
            .field("path", &self.path)
            .field("rows_written", &self.rows_written)
            .finish_non_exhaustive()
    }
}

/// Render a JSON scalar as a CSV field. Null becomes an empty string;
/// non-string scalars use their JSON rendering.
fn scalar_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
