//! Data directory layout and resolution
//!
//! The job runner mounts a data directory containing `config.json` and
//! expects outputs under `out/tables/`. The root is resolved from an explicit
//! override, the `KBC_DATADIR` environment variable, or `/data`.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory root
pub const DATADIR_ENV: &str = "KBC_DATADIR";

const DEFAULT_DATA_DIR: &str = "/data";

/// Resolved data directory root with path accessors for the fixed layout
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Create a data dir rooted at the given path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the root: explicit override, then `KBC_DATADIR`, then `/data`
    pub fn resolve(override_path: Option<&Path>) -> Self {
        if let Some(path) = override_path {
            return Self::new(path);
        }
        match std::env::var(DATADIR_ENV) {
            Ok(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(DEFAULT_DATA_DIR),
        }
    }

    /// The data directory root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the input configuration file
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Directory for output tables
    pub fn out_tables_dir(&self) -> PathBuf {
        self.root.join("out").join("tables")
    }

    /// Path of an output table file
    pub fn table_path(&self, file_name: &str) -> PathBuf {
        self.out_tables_dir().join(file_name)
    }

    /// Create the output tables directory if it does not exist yet
    pub fn ensure_out_tables(&self) -> Result<PathBuf> {
        let dir = self.out_tables_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| Error::output(&dir, format!("failed to create directory: {e}")))?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let dir = DataDir::new("/data");
        assert_eq!(dir.config_path(), PathBuf::from("/data/config.json"));
        assert_eq!(dir.out_tables_dir(), PathBuf::from("/data/out/tables"));
        assert_eq!(
            dir.table_path("data.csv"),
            PathBuf::from("/data/out/tables/data.csv")
        );
    }

    #[test]
    fn test_resolve_explicit_override_wins() {
        let dir = DataDir::resolve(Some(Path::new("/tmp/job")));
        assert_eq!(dir.root(), Path::new("/tmp/job"));
    }

    #[test]
    fn test_ensure_out_tables_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = DataDir::new(tmp.path());
        let created = dir.ensure_out_tables().unwrap();
        assert!(created.is_dir());
        // idempotent
        dir.ensure_out_tables().unwrap();
    }
}
