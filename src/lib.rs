//! # pap-extractor
//!
//! A single-shot ETL connector for Post Affiliate Pro style RPC APIs.
//!
//! One invocation reads a JSON configuration from a data directory, opens an
//! authenticated API session, pages through the affiliates and transactions
//! grids, and writes `out/tables/data.csv` plus a sidecar manifest describing
//! the destination table for the downstream platform.
//!
//! ## Architecture
//!
//! ```text
//! config.json ──► Config ──► Component::execute()
//!                               │
//!                ┌──────────────┼───────────────┐
//!                │              │               │
//!             Session       GridClient      CsvTableWriter
//!             (login)     (fetch_all over   + ManifestManager
//!                          offset pages)     (out/tables/)
//! ```
//!
//! The remote RPC object model stays behind the `api` adapter; everything
//! above it only sees pages of rows and a total count.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types for the connector
pub mod error;

/// Common types and type aliases
pub mod types;

/// Configuration loading and validation
pub mod config;

/// Data directory layout and resolution
pub mod datadir;

/// HTTP client wrapper
pub mod http;

/// RPC API adapter: session, grids, pagination
pub mod api;

/// CSV table output
pub mod output;

/// Output table manifests
pub mod manifest;

/// Run orchestration and sync actions
pub mod component;

/// Command-line interface
pub mod cli;

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
