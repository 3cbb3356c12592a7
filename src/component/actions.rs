//! Action dispatch

use crate::error::{Error, Result};
use std::str::FromStr;

/// Actions the connector can execute.
///
/// The default action is [`SyncAction::Run`]; sync actions are short
/// request/response checks invoked by the platform UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Full extraction run
    Run,
    /// Credential check: log in, report success, log out
    TestConnection,
}

impl FromStr for SyncAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "run" => Ok(Self::Run),
            "testConnection" | "test_connection" => Ok(Self::TestConnection),
            _ => Err(Error::invalid_value(
                "action",
                format!("unknown action '{s}', expected 'run' or 'testConnection'"),
            )),
        }
    }
}
