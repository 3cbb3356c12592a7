//! Output table manifests
//!
//! Every output table gets a JSON sidecar describing how downstream storage
//! should load it. [`OutTableManifestOptions`] holds the metadata and only
//! serializes fields that were explicitly set; [`ManifestManager`] knows
//! where manifests live relative to the data directory.

mod options;


pub use options::OutTableManifestOptions;

use crate::datadir::DataDir;
use crate::error::{Error, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Writes table manifests into the data directory's output layout
#[derive(Debug, Clone)]
pub struct ManifestManager {
    data_dir: DataDir,
}

impl ManifestManager {
    /// Create a manager for the given data directory
    pub fn new(data_dir: DataDir) -> Self {
        Self { data_dir }
    }

    /// Manifest file name for a table file: the table name with `.manifest`
    /// appended, unless it already ends with it.
    pub fn manifest_filename(table_file: &str) -> String {
        if table_file.ends_with(".manifest") {
            table_file.to_string()
        } else {
            format!("{table_file}.manifest")
        }
    }

    /// Path the manifest for a table file will be written to
    pub fn manifest_path(&self, table_file: &str) -> PathBuf {
        self.data_dir
            .out_tables_dir()
            .join(Self::manifest_filename(table_file))
    }

    /// Write (or overwrite) the manifest for a table file, creating missing
    /// parent directories.
    pub fn write_table_manifest(
        &self,
        table_file: &str,
        options: &OutTableManifestOptions,
    ) -> Result<PathBuf> {
        let path = self.manifest_path(table_file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::output(parent, format!("failed to create directory: {e}")))?;
        }

        let json = serde_json::to_string_pretty(options)?;
        fs::write(&path, json)
            .map_err(|e| Error::output(&path, format!("failed to write manifest: {e}")))?;

        debug!(path = %path.display(), "wrote table manifest");
        Ok(path)
    }
}
