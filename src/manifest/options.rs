//! Manifest option types

use serde::{Deserialize, Serialize};

/// Metadata for an output table manifest.
///
/// All fields are optional and only set fields appear in the serialized
/// JSON, so an empty options value produces `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutTableManifestOptions {
    /// Destination table in downstream storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Primary key column names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<Vec<String>>,

    /// CSV field delimiter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,

    /// CSV field enclosure character
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosure: Option<String>,

    /// Column names, for headerless tables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,

    /// Whether the table loads incrementally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental: Option<bool>,
}

impl OutTableManifestOptions {
    /// Empty options; serializes to `{}`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination table
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Set the primary key columns
    #[must_use]
    pub fn with_primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Set the CSV delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Set the CSV enclosure
    #[must_use]
    pub fn with_enclosure(mut self, enclosure: impl Into<String>) -> Self {
        self.enclosure = Some(enclosure.into());
        self
    }

    /// Set the column names
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Set the incremental load flag
    #[must_use]
    pub fn with_incremental(mut self, incremental: bool) -> Self {
        self.incremental = Some(incremental);
        self
    }
}
