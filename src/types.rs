//! Common types used throughout the connector

use std::collections::HashMap;

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One fetched record: column name to scalar value, in column order.
///
/// Rows carry no identity beyond their position in the output sequence;
/// duplicates are preserved.
pub type Row = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;
