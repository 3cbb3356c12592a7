//! Component orchestration
//!
//! [`Component`] ties the pieces together: it logs in with the configured
//! credentials, pulls the affiliates and transactions grids page by page,
//! writes the transactions CSV plus its manifest into the data directory,
//! and closes the session. [`Component::execute`] dispatches on the
//! configured action.

mod actions;


pub use actions::SyncAction;

use crate::api::{fetch_all, Entity, Filter, GridClient, GridQuery, Session};
use crate::config::Config;
use crate::datadir::DataDir;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::manifest::{ManifestManager, OutTableManifestOptions};
use crate::output::CsvTableWriter;
use crate::types::{JsonValue, Row};
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info};

/// Output table file name
pub const OUTPUT_TABLE: &str = "data.csv";

/// Destination table in downstream storage
pub const DESTINATION_TABLE: &str = "out.report";

/// Rows requested per grid page
pub const PAGE_SIZE: u64 = 100;

/// Columns requested from the transactions grid
pub const GRID_COLUMNS: [&str; 4] = ["id", "orderid", "commission", "dateinserted"];

/// Header of the output CSV
pub const CSV_HEADER: [&str; 4] = ["order_id", "commission", "id", "date_inserted"];

/// What a successful run produced
#[derive(Debug)]
pub struct RunSummary {
    /// Affiliates fetched (not written anywhere, but the fetch must succeed)
    pub affiliates: usize,
    /// Transaction rows written to the output table
    pub transactions: usize,
    /// Path of the output CSV
    pub table_path: PathBuf,
    /// Path of its manifest
    pub manifest_path: PathBuf,
}

/// The connector component
#[derive(Debug)]
pub struct Component {
    config: Config,
    data_dir: DataDir,
    http: HttpClientConfig,
}

impl Component {
    /// Create a component from a validated config and data directory
    pub fn new(config: Config, data_dir: DataDir) -> Self {
        Self {
            config,
            data_dir,
            http: HttpClientConfig::default(),
        }
    }

    /// Override the HTTP client configuration (timeout, headers)
    #[must_use]
    pub fn with_http_config(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }

    /// Execute the configured action
    pub async fn execute(&self) -> Result<()> {
        match self.config.action.parse::<SyncAction>()? {
            SyncAction::Run => {
                self.run().await?;
                Ok(())
            }
            SyncAction::TestConnection => {
                let result = self.test_connection().await?;
                println!("{result}");
                Ok(())
            }
        }
    }

    /// Full extraction run
    pub async fn run(&self) -> Result<RunSummary> {
        info!(version = crate::VERSION, "Component starting");
        let filter = self.config.parameters.date_filter()?;

        let session = self.login().await?;
        let grid = GridClient::new(&session);

        let affiliates = fetch_all(&grid, &GridQuery::new(Entity::Affiliates), PAGE_SIZE).await?;
        info!(count = affiliates.len(), "fetched affiliates");

        let query = GridQuery::new(Entity::Transactions)
            .with_columns(GRID_COLUMNS)
            .with_filter(Filter::date_range("dateinserted", filter));
        let transactions = fetch_all(&grid, &query, PAGE_SIZE).await?;
        info!(count = transactions.len(), %filter, "fetched transactions");

        self.data_dir.ensure_out_tables()?;
        let table_path = self.data_dir.table_path(OUTPUT_TABLE);
        let mut writer = CsvTableWriter::create(&table_path, CSV_HEADER)?;
        for row in &transactions {
            writer.write_row(&project_transaction(row))?;
        }
        writer.close()?;

        let manifests = ManifestManager::new(self.data_dir.clone());
        let manifest_path = manifests.write_table_manifest(
            OUTPUT_TABLE,
            &OutTableManifestOptions::new()
                .with_destination(DESTINATION_TABLE)
                .with_primary_key(["id"]),
        )?;

        if let Err(e) = session.logout().await {
            debug!("logout failed: {e}");
        }

        let summary = RunSummary {
            affiliates: affiliates.len(),
            transactions: transactions.len(),
            table_path,
            manifest_path,
        };
        info!(
            transactions = summary.transactions,
            table = %summary.table_path.display(),
            "Component finished"
        );
        Ok(summary)
    }

    /// Credential check: log in and report success without touching any grid
    pub async fn test_connection(&self) -> Result<JsonValue> {
        let session = self.login().await?;
        if let Err(e) = session.logout().await {
            debug!("logout failed: {e}");
        }
        Ok(json!({ "status": "success" }))
    }

    async fn login(&self) -> Result<Session> {
        let p = &self.config.parameters;
        let http = HttpClientConfig {
            base_url: Some(p.api_url.clone()),
            ..self.http.clone()
        };
        info!(
            api_url = %p.api_url,
            username = %p.username,
            data_filter = %p.data_filter,
            "logging in"
        );
        Session::login(HttpClient::with_config(http), &p.username, &p.password).await
    }
}

/// Rename grid fields to the output CSV's column names.
///
/// Fields outside the mapping are dropped; missing fields stay missing and
/// surface as empty CSV cells.
pub(crate) fn project_transaction(row: &Row) -> Row {
    const MAPPING: [(&str, &str); 4] = [
        ("orderid", "order_id"),
        ("commission", "commission"),
        ("id", "id"),
        ("dateinserted", "date_inserted"),
    ];

    let mut projected = Row::new();
    for (source, target) in MAPPING {
        if let Some(value) = row.get(source) {
            projected.insert(target.to_string(), value.clone());
        }
    }
    projected
}
