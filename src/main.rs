//! Connector entry point
//!
//! Exit codes: 0 on success, 1 for user-actionable errors (bad config,
//! rejected credentials, in-band API errors), 2 for everything else.

use clap::Parser;
use pap_extractor::cli::Cli;
use pap_extractor::component::Component;
use pap_extractor::config::Config;
use pap_extractor::datadir::DataDir;
use pap_extractor::http::HttpClientConfig;
use pap_extractor::Error;
use std::time::Duration;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute(&cli).await {
        report(&e);
        std::process::exit(e.exit_code());
    }
}

async fn execute(cli: &Cli) -> Result<(), Error> {
    let data_dir = DataDir::resolve(cli.data_dir.as_deref());
    debug!(data_dir = %data_dir.root().display(), "resolved data directory");

    let config = Config::load(&data_dir)?;
    let http = HttpClientConfig::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build();

    Component::new(config, data_dir)
        .with_http_config(http)
        .execute()
        .await
}

/// Log the error and its cause chain. User errors get a single line;
/// unexpected ones get full diagnostic context.
fn report(e: &Error) {
    if e.is_user_error() {
        error!("{e}");
    } else {
        error!("Unexpected error: {e}");
        let mut source = std::error::Error::source(e);
        while let Some(cause) = source {
            error!("caused by: {cause}");
            source = cause.source();
        }
    }
    eprintln!("Error: {e}");
}
