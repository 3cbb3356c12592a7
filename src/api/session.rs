//! Session and authentication
//!
//! One login round trip per run. A rejected login is fatal and carries the
//! server's message verbatim; there is no retry and no credential caching.

use super::types::{LoginResponse, RpcRequest};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, info};

const AUTH_CLASS: &str = "Gpf_Api_AuthService";

/// An authenticated API session.
///
/// Valid until process exit or [`Session::logout`]; never persisted.
pub struct Session {
    client: HttpClient,
    session_id: String,
}

impl Session {
    /// Log in as a merchant and open a session.
    ///
    /// Exactly one network round trip. A rejection surfaces as
    /// `Error::Auth` with whatever message the server returned.
    pub async fn login(client: HttpClient, username: &str, password: &str) -> Result<Self> {
        let request = RpcRequest {
            class: AUTH_CLASS,
            method: "authenticate",
            session_id: None,
            params: json!({ "username": username, "password": password }),
        };

        let response: LoginResponse = client.post_json("", &request).await?;
        if !response.success {
            return Err(Error::auth(
                response
                    .message
                    .unwrap_or_else(|| "login rejected by server".to_string()),
            ));
        }

        let session_id = response
            .session_id
            .ok_or_else(|| Error::api("login response missing session id"))?;

        info!("API session opened");
        Ok(Self { client, session_id })
    }

    /// The opaque session identifier
    pub fn id(&self) -> &str {
        &self.session_id
    }

    /// Issue one RPC call within this session
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        class: &str,
        method: &str,
        params: JsonValue,
    ) -> Result<T> {
        let request = RpcRequest {
            class,
            method,
            session_id: Some(&self.session_id),
            params,
        };
        self.client.post_json("", &request).await
    }

    /// Close the session. Best effort; the session dies with the process
    /// anyway, so failures are only logged by the caller.
    pub async fn logout(self) -> Result<()> {
        let _: JsonValue = self
            .call(AUTH_CLASS, "logout", JsonValue::Null)
            .await?;
        debug!("API session closed");
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
