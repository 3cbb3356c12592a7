//! Configuration loading and validation
//!
//! The job runner supplies a JSON document at `<data-dir>/config.json`:
//!
//! ```json
//! {
//!   "action": "run",
//!   "parameters": {
//!     "api_url": "https://example.postaffiliatepro.com/scripts/server.php",
//!     "username": "merchant@example.com",
//!     "#password": "secret",
//!     "data_filter": "thisyear"
//!   }
//! }
//! ```
//!
//! All parameter fields are required and must be non-empty; validation fails
//! with a message naming the offending field before any network call is made.
//! The password is a secret and is never logged verbatim.

use crate::datadir::DataDir;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// Config
// ============================================================================

/// Validated run configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Connector parameters
    #[serde(default)]
    pub parameters: Parameters,

    /// Requested action ("run" or a sync action name)
    #[serde(default = "default_action")]
    pub action: String,
}

fn default_action() -> String {
    "run".to_string()
}

/// Connector parameters from the `parameters` config node
#[derive(Clone, Default, Deserialize)]
pub struct Parameters {
    /// Full URL of the remote RPC endpoint
    #[serde(default)]
    pub api_url: String,

    /// Merchant account username
    #[serde(default)]
    pub username: String,

    /// Merchant account password (secret, `#`-prefixed in the platform config)
    #[serde(default, rename = "#password")]
    pub password: String,

    /// Symbolic date-range filter applied to transactions
    #[serde(default)]
    pub data_filter: String,
}

impl fmt::Debug for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameters")
            .field("api_url", &self.api_url)
            .field("username", &self.username)
            .field(
                "password",
                &if self.password.is_empty() {
                    "<missing>"
                } else {
                    "<defined>"
                },
            )
            .field("data_filter", &self.data_filter)
            .finish()
    }
}

impl Config {
    /// Load and validate the configuration from a data directory
    pub fn load(data_dir: &DataDir) -> Result<Self> {
        Self::from_file(&data_dir.config_path())
    }

    /// Load and validate the configuration from an explicit file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("Invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every required parameter is present and well-formed.
    ///
    /// Runs before any network call; the error message names the first
    /// missing field.
    pub fn validate(&self) -> Result<()> {
        let p = &self.parameters;
        for (field, value) in [
            ("api_url", &p.api_url),
            ("username", &p.username),
            ("#password", &p.password),
            ("data_filter", &p.data_filter),
        ] {
            if value.trim().is_empty() {
                return Err(Error::missing_field(field));
            }
        }
        url::Url::parse(&p.api_url)
            .map_err(|e| Error::invalid_value("api_url", e.to_string()))?;
        p.date_filter()?;
        Ok(())
    }
}

impl Parameters {
    /// Parse `data_filter` into its typed date-range constant
    pub fn date_filter(&self) -> Result<DateRangeFilter> {
        self.data_filter.parse()
    }
}

// ============================================================================
// Date Range Filter
// ============================================================================

/// Closed set of symbolic date ranges the remote API resolves server-side.
///
/// The config names one of these; only the symbolic code travels over the
/// wire, no date arithmetic happens in this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeFilter {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
}

impl DateRangeFilter {
    /// All accepted wire codes, for error messages
    pub const ACCEPTED: [&'static str; 8] = [
        "today",
        "yesterday",
        "thisweek",
        "lastweek",
        "thismonth",
        "lastmonth",
        "thisyear",
        "lastyear",
    ];

    /// The code sent to the remote API in the grid filter
    pub fn wire_code(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::ThisWeek => "thisweek",
            Self::LastWeek => "lastweek",
            Self::ThisMonth => "thismonth",
            Self::LastMonth => "lastmonth",
            Self::ThisYear => "thisyear",
            Self::LastYear => "lastyear",
        }
    }
}

impl fmt::Display for DateRangeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_code())
    }
}

impl FromStr for DateRangeFilter {
    type Err = Error;

    /// Case-insensitive; spaces, dashes and underscores are ignored, so
    /// "this year", "THIS_YEAR" and "thisyear" all parse.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "today" => Ok(Self::Today),
            "yesterday" => Ok(Self::Yesterday),
            "thisweek" => Ok(Self::ThisWeek),
            "lastweek" => Ok(Self::LastWeek),
            "thismonth" => Ok(Self::ThisMonth),
            "lastmonth" => Ok(Self::LastMonth),
            "thisyear" => Ok(Self::ThisYear),
            "lastyear" => Ok(Self::LastYear),
            _ => Err(Error::invalid_value(
                "data_filter",
                format!(
                    "unknown date range '{s}', expected one of: {}",
                    Self::ACCEPTED.join(", ")
                ),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(json: &str) -> (tempfile::TempDir, Config) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, json).unwrap();
        let config = Config::from_file(&path).unwrap();
        (tmp, config)
    }

    #[test]
    fn test_parse_full_config() {
        let (_tmp, config) = write_config(
            r##"{
                "parameters": {
                    "api_url": "https://example.com/scripts/server.php",
                    "username": "merchant@example.com",
                    "#password": "secret",
                    "data_filter": "thisyear"
                }
            }"##,
        );
        assert_eq!(config.action, "run");
        assert_eq!(config.parameters.username, "merchant@example.com");
        assert_eq!(config.parameters.password, "secret");
        assert_eq!(
            config.parameters.date_filter().unwrap(),
            DateRangeFilter::ThisYear
        );
    }

    #[test]
    fn test_missing_username_names_field() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(
            &path,
            r##"{
                "parameters": {
                    "api_url": "https://example.com/scripts/server.php",
                    "#password": "secret",
                    "data_filter": "thisyear"
                }
            }"##,
        )
        .unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("username"), "got: {err}");
    }

    #[test]
    fn test_empty_password_is_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(
            &path,
            r##"{
                "parameters": {
                    "api_url": "https://example.com/scripts/server.php",
                    "username": "merchant@example.com",
                    "#password": "",
                    "data_filter": "thisyear"
                }
            }"##,
        )
        .unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("#password"), "got: {err}");
    }

    #[test]
    fn test_invalid_api_url_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(
            &path,
            r##"{
                "parameters": {
                    "api_url": "not a url",
                    "username": "merchant@example.com",
                    "#password": "secret",
                    "data_filter": "thisyear"
                }
            }"##,
        )
        .unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("api_url"), "got: {err}");
    }

    #[test]
    fn test_date_filter_parsing_variants() {
        assert_eq!(
            "thisyear".parse::<DateRangeFilter>().unwrap(),
            DateRangeFilter::ThisYear
        );
        assert_eq!(
            "THIS_YEAR".parse::<DateRangeFilter>().unwrap(),
            DateRangeFilter::ThisYear
        );
        assert_eq!(
            "this year".parse::<DateRangeFilter>().unwrap(),
            DateRangeFilter::ThisYear
        );
        assert_eq!(
            "last-month".parse::<DateRangeFilter>().unwrap(),
            DateRangeFilter::LastMonth
        );
    }

    #[test]
    fn test_unknown_date_filter_lists_accepted_values() {
        let err = "fortnight".parse::<DateRangeFilter>().unwrap_err();
        assert_eq!(err.exit_code(), 1);
        let message = err.to_string();
        assert!(message.contains("fortnight"), "got: {message}");
        assert!(message.contains("thisyear"), "got: {message}");
    }

    #[test]
    fn test_debug_redacts_password() {
        let params = Parameters {
            api_url: "https://example.com".to_string(),
            username: "merchant".to_string(),
            password: "hunter2".to_string(),
            data_filter: "thisyear".to_string(),
        };
        let debug = format!("{params:?}");
        assert!(!debug.contains("hunter2"), "got: {debug}");
        assert!(debug.contains("<defined>"), "got: {debug}");
    }
}
